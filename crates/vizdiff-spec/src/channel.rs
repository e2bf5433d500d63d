//! Typed view of an encoding channel definition

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One encoding channel definition
///
/// The pipeline only interprets `field` and `type`; any other keys in the
/// channel object are preserved through edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelDef {
    /// Bound data field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Measurement type (quantitative, ordinal, nominal, temporal)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,

    /// Uninterpreted keys, carried through verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChannelDef {
    /// Create a definition with a field and type
    #[inline]
    #[must_use]
    pub fn new(field: &str, ty: &str) -> Self {
        Self {
            field: Some(field.to_string()),
            ty: Some(ty.to_string()),
            extra: Map::new(),
        }
    }

    /// Parse from a raw channel value
    ///
    /// Returns `None` if the value is not an object.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        value
            .as_object()
            .and_then(|_| serde_json::from_value(value.clone()).ok())
    }

    /// Convert into a raw channel value
    #[must_use]
    pub fn into_value(self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_sets_field_and_type() {
        let def = ChannelDef::new("b", "quantitative");
        assert_eq!(def.into_value(), json!({"field": "b", "type": "quantitative"}));
    }

    #[test]
    fn from_value_preserves_extra_keys() {
        let value = json!({"field": "a", "type": "ordinal", "axis": {"title": "A"}});
        let def = ChannelDef::from_value(&value).unwrap();

        assert_eq!(def.field.as_deref(), Some("a"));
        assert_eq!(def.extra.get("axis"), Some(&json!({"title": "A"})));
        assert_eq!(def.into_value(), value);
    }

    #[test]
    fn from_value_rejects_non_object() {
        assert!(ChannelDef::from_value(&json!("x")).is_none());
    }
}
