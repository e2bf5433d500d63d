//! Delegate seam for the external diff capability

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt::Debug;
use vizdiff_spec::ChartSpec;

/// Ordered delegate output: category name → raw entries
///
/// Array values hold raw edit entries (`{name, detail}` objects); non-array
/// values are auxiliary metadata for the adapter to skip. Iteration order is
/// the delegate's category order and is preserved through flattening.
pub type TransitionMap = IndexMap<String, Value>;

/// External spec-diffing capability
///
/// Takes both specs by value: a delegate is free to work destructively on
/// them, which is exactly why the adapter hands it copies.
pub trait TransitionDelegate: Send + Sync + Debug {
    /// Compute the categorized edits transforming `source` toward `target`
    ///
    /// # Errors
    /// Returns [`TransitionError`] when the delegate itself fails; an empty
    /// map is the correct result for identical specs.
    fn transition(
        &self,
        source: ChartSpec,
        target: ChartSpec,
    ) -> Result<TransitionMap, TransitionError>;

    /// Delegate name (for debugging/log lines)
    fn name(&self) -> &'static str;
}

/// Errors from the diff adapter layer
#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    /// The delegate reported a failure
    #[error("diff delegate '{delegate}' failed: {message}")]
    DelegateFailed {
        /// Which delegate failed
        delegate: &'static str,
        /// Delegate-reported reason
        message: String,
    },
}
