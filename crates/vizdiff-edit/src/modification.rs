//! Modification records
//!
//! A [`Modification`] describes one atomic edit required to transform a
//! source spec toward a target spec. Records are self-describing: appliers
//! need nothing beyond the record and the current spec.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Spec region an edit belongs to
///
/// The diff delegate keys its output by category name. Unrecognized names
/// are carried through as [`EditCategory::Other`] so new delegate categories
/// degrade gracefully instead of faulting the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EditCategory {
    /// Mark style edits
    Mark,
    /// Encoding channel edits
    Encoding,
    /// Data transformation edits (structurally possible, no built-in rules)
    Transformation,
    /// Forward-compatible catch-all for unknown delegate categories
    Other(String),
}

impl EditCategory {
    /// Category name as the delegate spells it
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mark => "mark",
            Self::Encoding => "encoding",
            Self::Transformation => "transformation",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for EditCategory {
    fn from(name: &str) -> Self {
        match name {
            "mark" => Self::Mark,
            "encoding" => Self::Encoding,
            "transformation" => Self::Transformation,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for EditCategory {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<EditCategory> for String {
    fn from(category: EditCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for EditCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One atomic edit
///
/// # Invariants
/// - `category` and `name` identify the edit; `detail` carries the
///   edit-specific payload (`{before, after}` for mark edits, `{what,
///   after}` for channel sub-field edits).
/// - `readable_name` is derived by the diff adapter, `None` when no naming
///   rule matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modification {
    /// Spec region this edit touches
    pub category: EditCategory,

    /// Operation identifier within the category (e.g. `ADD_Y`, `MODIFY_X`)
    pub name: String,

    /// Edit-specific payload
    #[serde(default)]
    pub detail: Value,

    /// Human-facing label, attached by the diff adapter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readable_name: Option<String>,
}

impl Modification {
    /// Create an unnamed modification
    #[must_use]
    pub fn new(category: EditCategory, name: &str, detail: Value) -> Self {
        Self {
            category,
            name: name.to_string(),
            detail,
            readable_name: None,
        }
    }

    /// Attach a readable name
    #[must_use]
    pub fn with_readable_name(mut self, readable_name: Option<String>) -> Self {
        self.readable_name = readable_name;
        self
    }

    /// String sub-field of the detail payload
    #[must_use]
    pub fn detail_str(&self, key: &str) -> Option<&str> {
        self.detail.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_round_trips_through_strings() {
        assert_eq!(EditCategory::from("mark"), EditCategory::Mark);
        assert_eq!(EditCategory::from("encoding").as_str(), "encoding");
        assert_eq!(
            EditCategory::from("annotation"),
            EditCategory::Other("annotation".to_string())
        );
        assert_eq!(EditCategory::from("annotation").as_str(), "annotation");
    }

    #[test]
    fn detail_str_reads_string_fields() {
        let m = Modification::new(
            EditCategory::Encoding,
            "MODIFY_X",
            json!({"what": "field", "after": "a"}),
        );
        assert_eq!(m.detail_str("what"), Some("field"));
        assert_eq!(m.detail_str("missing"), None);
    }

    #[test]
    fn serde_uses_camel_case_readable_name() {
        let m = Modification::new(EditCategory::Mark, "MODIFY_MARK", json!({"after": "bar"}))
            .with_readable_name(Some("Mark style: Bar".to_string()));

        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["category"], "mark");
        assert_eq!(value["readableName"], "Mark style: Bar");
    }

    #[test]
    fn serde_defaults_missing_detail() {
        let m: Modification =
            serde_json::from_value(json!({"category": "encoding", "name": "ADD_Y"})).unwrap();
        assert!(m.detail.is_null());
        assert!(m.readable_name.is_none());
    }
}
