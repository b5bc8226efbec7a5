//! Template rendering: configuration document in, HTML page out.
//!
//! The renderer is pure: identical document and derived values always
//! produce byte-identical output, and nothing here reads files or
//! environment state. A render either fully succeeds or fails with the
//! path of the first bad field dereference.

mod derived;
mod error;
mod page;
mod view;

pub use derived::{Derived, distinct_project_categories, total_tech_count};
pub use error::{FieldPath, TemplateFieldError};
pub use page::render_page;

use serde_json::Value;

/// Render the document with freshly computed derived values and a verbatim
/// JSON copy of itself for client-side use.
pub fn render_document(doc: &Value) -> Result<String, TemplateFieldError> {
    let derived = Derived::compute(doc);
    // Serializing a Value back to JSON cannot fail in practice
    let json_data = serde_json::to_string(doc).unwrap_or_default();
    render_page(doc, &derived, &json_data)
}
