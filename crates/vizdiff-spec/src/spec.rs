//! Chart specification document
//!
//! Wraps a JSON object and exposes the three regions the edit pipeline
//! reads and writes: `mark`, `encoding`, and `data`. Everything else in the
//! document is carried through untouched.

use crate::channel::ChannelDef;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A declarative chart specification
///
/// Backed by a JSON object. `Clone` is a deep copy, which is what the edit
/// pipeline relies on for its never-mutate-the-input contract.
///
/// # Invariants
/// - The root value is always a JSON object.
/// - `data` is opaque: it is stored and serialized but never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct ChartSpec {
    root: Map<String, Value>,
}

impl ChartSpec {
    /// Create an empty spec
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { root: Map::new() }
    }

    /// Create from a JSON value
    ///
    /// # Errors
    /// Returns [`SpecError::NotAnObject`] if the value is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self, SpecError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(SpecError::NotAnObject {
                found: type_name(&other),
            }),
        }
    }

    /// Parse from a JSON string
    ///
    /// # Errors
    /// Returns [`SpecError::Syntax`] on malformed JSON and
    /// [`SpecError::NotAnObject`] if the document is not an object.
    pub fn parse(input: &str) -> Result<Self, SpecError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    /// View as a JSON value
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    /// Mark style identifier, if present
    #[must_use]
    pub fn mark(&self) -> Option<&str> {
        self.root.get("mark").and_then(Value::as_str)
    }

    /// Set the mark style
    pub fn set_mark(&mut self, style: &str) {
        self.root
            .insert("mark".to_string(), Value::String(style.to_string()));
    }

    /// Builder-style mark setter
    #[must_use]
    pub fn with_mark(mut self, style: &str) -> Self {
        self.set_mark(style);
        self
    }

    /// Opaque data descriptor, if present
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.root.get("data")
    }

    /// Set the data descriptor
    pub fn set_data(&mut self, data: Value) {
        self.root.insert("data".to_string(), data);
    }

    /// Builder-style data setter
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.set_data(data);
        self
    }

    /// The encoding region, if present
    #[must_use]
    pub fn encoding(&self) -> Option<&Map<String, Value>> {
        self.root.get("encoding").and_then(Value::as_object)
    }

    /// Names of encoding channels, in document order
    #[must_use]
    pub fn channel_names(&self) -> Vec<&str> {
        self.encoding()
            .map(|enc| enc.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Raw definition of one encoding channel
    #[must_use]
    pub fn channel(&self, name: &str) -> Option<&Value> {
        self.encoding().and_then(|enc| enc.get(name))
    }

    /// Typed view of one encoding channel
    ///
    /// Returns `None` if the channel is absent or not an object.
    #[must_use]
    pub fn channel_def(&self, name: &str) -> Option<ChannelDef> {
        self.channel(name).and_then(ChannelDef::from_value)
    }

    /// Mutable raw definition of one encoding channel
    ///
    /// Returns `None` if the channel is absent. Used by appliers that edit a
    /// sub-field of an existing channel on an owned copy.
    pub fn channel_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.root
            .get_mut("encoding")
            .and_then(Value::as_object_mut)
            .and_then(|enc| enc.get_mut(name))
    }

    /// Set one encoding channel, creating the encoding region if needed
    ///
    /// Overwrites any existing definition for the channel.
    pub fn set_channel(&mut self, name: &str, def: ChannelDef) {
        let encoding = self
            .root
            .entry("encoding".to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !encoding.is_object() {
            *encoding = Value::Object(Map::new());
        }
        if let Some(enc) = encoding.as_object_mut() {
            enc.insert(name.to_string(), def.into_value());
        }
    }

    /// Builder-style channel setter
    #[must_use]
    pub fn with_channel(mut self, name: &str, def: ChannelDef) -> Self {
        self.set_channel(name, def);
        self
    }
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Value> for ChartSpec {
    type Error = SpecError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<ChartSpec> for Value {
    fn from(spec: ChartSpec) -> Self {
        Value::Object(spec.root)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Errors when constructing chart specifications
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// Document root was not a JSON object
    #[error("chart spec must be a JSON object, found {found}")]
    NotAnObject {
        /// JSON type of the rejected root value
        found: &'static str,
    },

    /// Malformed JSON input
    #[error("invalid spec JSON: {0}")]
    Syntax(#[from] serde_json::Error),
}
