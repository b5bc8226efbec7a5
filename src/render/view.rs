//! Path-tracking view over the untyped configuration document.
//!
//! The template dereferences fields duck-typed, exactly as the document is
//! written. A `Node` is a cursor that remembers where in the document it
//! points, so a failed dereference reports the offending path instead of a
//! bare "key not found".

use super::error::{FieldPath, TemplateFieldError};
use serde_json::Value;

/// Cursor into the configuration document.
#[derive(Clone, Debug)]
pub struct Node<'a> {
    value: &'a Value,
    path: FieldPath,
}

impl<'a> Node<'a> {
    /// View of the whole document.
    pub fn root(doc: &'a Value) -> Self {
        Self {
            value: doc,
            path: FieldPath::new(""),
        }
    }

    /// Optional field access. Absent keys and explicit nulls both read as
    /// "not present", mirroring how the template guards optional blocks.
    pub fn get(&self, key: &str) -> Option<Node<'a>> {
        match self.value.get(key) {
            None | Some(Value::Null) => None,
            Some(v) => Some(Node {
                value: v,
                path: self.path.child(key),
            }),
        }
    }

    /// Required field access.
    pub fn require(&self, key: &str) -> Result<Node<'a>, TemplateFieldError> {
        self.get(key)
            .ok_or_else(|| TemplateFieldError::Missing(self.path.child(key)))
    }

    /// The node as display text: strings verbatim, numbers and booleans
    /// via their canonical form. Objects and lists are not scalar.
    pub fn scalar(&self) -> Result<String, TemplateFieldError> {
        match self.value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err(TemplateFieldError::WrongType {
                path: self.path.clone(),
                expected: "a scalar",
            }),
        }
    }

    /// List elements with indexed paths.
    pub fn items(&self) -> Result<Vec<Node<'a>>, TemplateFieldError> {
        match self.value {
            Value::Array(list) => Ok(list
                .iter()
                .enumerate()
                .map(|(i, v)| Node {
                    value: v,
                    path: self.path.index(i),
                })
                .collect()),
            _ => Err(TemplateFieldError::WrongType {
                path: self.path.clone(),
                expected: "a list",
            }),
        }
    }

    /// A top-level list section: absent reads as empty, a non-list is an
    /// error.
    pub fn list(&self, key: &str) -> Result<Vec<Node<'a>>, TemplateFieldError> {
        match self.get(key) {
            Some(node) => node.items(),
            None => Ok(Vec::new()),
        }
    }

    /// Length of a list field, 0 when absent.
    pub fn len_of(&self, key: &str) -> usize {
        self.value
            .get(key)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// Truthiness as the template understands it: absent, null, false,
    /// zero, empty string/list/object are all falsy.
    pub fn truthy(&self) -> bool {
        match self.value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(a) => !a.is_empty(),
            Value::Object(o) => !o.is_empty(),
        }
    }

    /// `require(key)` then `scalar()`, the most common dereference.
    pub fn require_scalar(&self, key: &str) -> Result<String, TemplateFieldError> {
        self.require(key)?.scalar()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_missing_names_full_path() {
        let doc = json!({"personal": {"name": "Ada"}});
        let root = Node::root(&doc);
        let personal = root.require("personal").unwrap();

        let err = personal.require("email").unwrap_err();
        assert_eq!(err.path().as_str(), "personal.email");
    }

    #[test]
    fn test_null_reads_as_absent() {
        let doc = json!({"personal": {"phone": null}});
        let personal = Node::root(&doc).require("personal").unwrap();
        assert!(personal.get("phone").is_none());
        assert!(personal.require("phone").is_err());
    }

    #[test]
    fn test_indexed_paths_through_lists() {
        let doc = json!({"projects": [{"title": "One"}, {}]});
        let root = Node::root(&doc);
        let projects = root.list("projects").unwrap();

        assert_eq!(projects[0].require_scalar("title").unwrap(), "One");
        let err = projects[1].require("title").unwrap_err();
        assert_eq!(err.path().as_str(), "projects[1].title");
    }

    #[test]
    fn test_scalar_accepts_numbers() {
        let doc = json!({"level": 95});
        let node = Node::root(&doc).require("level").unwrap();
        assert_eq!(node.scalar().unwrap(), "95");
    }

    #[test]
    fn test_scalar_rejects_objects() {
        let doc = json!({"meta": {}});
        let node = Node::root(&doc).require("meta").unwrap();
        assert!(matches!(
            node.scalar(),
            Err(TemplateFieldError::WrongType { .. })
        ));
    }

    #[test]
    fn test_absent_list_is_empty() {
        let doc = json!({});
        assert!(Node::root(&doc).list("skills").unwrap().is_empty());
        assert_eq!(Node::root(&doc).len_of("projects"), 0);
    }

    #[test]
    fn test_truthiness() {
        let doc = json!({
            "yes": true, "no": false, "empty": "", "text": "hi",
            "zero": 0, "one": 1, "none": [], "some": [1]
        });
        let root = Node::root(&doc);
        let truthy = |key: &str| root.require(key).unwrap().truthy();

        assert!(truthy("yes"));
        assert!(!truthy("no"));
        assert!(!truthy("empty"));
        assert!(truthy("text"));
        assert!(!truthy("zero"));
        assert!(truthy("one"));
        assert!(!truthy("none"));
        assert!(truthy("some"));
    }
}
