//! Edit rule trait and errors

use crate::modification::Modification;
use std::fmt::Debug;
use vizdiff_spec::ChartSpec;

/// One kind of edit: how to label it and how to apply it
///
/// Implement this and register it in a
/// [`RuleRegistry`](crate::RuleRegistry) to support a new modification type.
///
/// # Contract
/// - `describe` is pure and must not mutate the modification; it returns
///   `None` when the record's detail shape is not one this rule can label.
/// - `apply` must never mutate the input spec; it returns a new spec with
///   exactly this one edit applied.
pub trait EditRule: Send + Sync + Debug {
    /// Human-readable menu label for the modification
    fn describe(&self, modification: &Modification) -> Option<String>;

    /// Apply the modification to a spec, producing a new spec
    ///
    /// # Errors
    /// Returns [`EditError`] when the record's detail is malformed or the
    /// spec lacks a region the rule requires.
    fn apply(&self, spec: &ChartSpec, modification: &Modification)
        -> Result<ChartSpec, EditError>;
}

/// Errors during modification application
///
/// Malformed records fail uniformly with these errors; the silent no-op is
/// reserved for the unmatched-rule case, which is not an error anywhere in
/// the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    /// Detail payload is missing a key the rule requires
    #[error("malformed detail for {name}: missing '{missing}'")]
    MalformedDetail {
        /// Operation identifier of the offending record
        name: String,
        /// Detail key that was absent or of the wrong type
        missing: &'static str,
    },

    /// Spec has no such encoding channel to modify
    #[error("spec has no encoding.{channel} to modify")]
    MissingChannel {
        /// Channel the rule needed
        channel: &'static str,
    },

    /// Encoding channel exists but is not an object
    #[error("encoding.{channel} is not an object")]
    InvalidChannel {
        /// Channel the rule needed
        channel: &'static str,
    },
}
