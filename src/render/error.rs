//! Render-time errors for template field access.

use std::fmt;
use thiserror::Error;

/// Dotted/indexed path into the configuration document,
/// e.g. `personal.name` or `projects[2].title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of a key below this one.
    pub fn child(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(key.to_string())
        } else {
            Self(format!("{}.{key}", self.0))
        }
    }

    /// Path of a list element below this one.
    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{i}]", self.0))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A template dereference failed against the loaded document.
///
/// Rendering is all-or-nothing: the first missing or mistyped field aborts
/// the render with the offending path. No partial output is produced.
#[derive(Debug, Error)]
pub enum TemplateFieldError {
    #[error("template field `{0}` is missing from the configuration")]
    Missing(FieldPath),

    #[error("template field `{path}` is not {expected}")]
    WrongType {
        path: FieldPath,
        expected: &'static str,
    },
}

impl TemplateFieldError {
    /// The document location that failed to dereference.
    pub fn path(&self) -> &FieldPath {
        match self {
            Self::Missing(path) => path,
            Self::WrongType { path, .. } => path,
        }
    }
}
