//! Values computed from the document that the template cannot express
//! inline. Both functions are pure and total: any document with list-typed
//! or absent `skills`/`projects` fields produces a value, never an error.

use serde_json::Value;

/// Derived values handed to the renderer alongside the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derived {
    /// Total count of skill items across all skill groups
    pub total_tech: usize,
    /// Distinct project categories, first-occurrence order
    pub categories: Vec<String>,
}

impl Derived {
    pub fn compute(doc: &Value) -> Self {
        Self {
            total_tech: total_tech_count(doc),
            categories: distinct_project_categories(doc),
        }
    }
}

/// Sum of `items` lengths over every skill group. 0 when `skills` is
/// absent or empty.
pub fn total_tech_count(doc: &Value) -> usize {
    doc.get("skills")
        .and_then(Value::as_array)
        .map_or(0, |groups| {
            groups
                .iter()
                .filter_map(|g| g.get("items").and_then(Value::as_array))
                .map(Vec::len)
                .sum()
        })
}

/// `category` of each project in order, duplicates suppressed after their
/// first occurrence. Empty when `projects` is absent or empty.
pub fn distinct_project_categories(doc: &Value) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    if let Some(projects) = doc.get("projects").and_then(Value::as_array) {
        for project in projects {
            if let Some(cat) = project.get("category").and_then(Value::as_str)
                && !seen.iter().any(|s| s == cat)
            {
                seen.push(cat.to_string());
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_total_tech_absent_skills() {
        assert_eq!(total_tech_count(&json!({})), 0);
    }

    #[test]
    fn test_total_tech_empty_skills() {
        assert_eq!(total_tech_count(&json!({"skills": []})), 0);
    }

    #[test]
    fn test_total_tech_sums_across_groups() {
        let doc = json!({"skills": [
            {"category": "Backend", "items": [{}, {}, {}, {}, {}]},
            {"category": "Frontend", "items": [{}, {}, {}]}
        ]});
        assert_eq!(total_tech_count(&doc), 8);
    }

    #[test]
    fn test_total_tech_skips_groups_without_items() {
        let doc = json!({"skills": [
            {"category": "Backend"},
            {"category": "Frontend", "items": [{}, {}]}
        ]});
        assert_eq!(total_tech_count(&doc), 2);
    }

    #[test]
    fn test_categories_first_occurrence_order() {
        let doc = json!({"projects": [
            {"category": "Web"},
            {"category": "API"},
            {"category": "Web"},
            {"category": "CLI"}
        ]});
        assert_eq!(distinct_project_categories(&doc), ["Web", "API", "CLI"]);
    }

    #[test]
    fn test_categories_absent_projects() {
        assert!(distinct_project_categories(&json!({})).is_empty());
        assert!(distinct_project_categories(&json!({"projects": []})).is_empty());
    }

    #[test]
    fn test_derived_compute() {
        let doc = json!({
            "skills": [{"items": [{}, {}]}],
            "projects": [{"category": "Web"}]
        });
        let derived = Derived::compute(&doc);
        assert_eq!(derived.total_tech, 2);
        assert_eq!(derived.categories, ["Web"]);
    }
}
