//! Adding a y channel

use crate::modification::Modification;
use crate::rule::{EditError, EditRule};
use vizdiff_spec::{ChannelDef, ChartSpec};

/// Rule for `encoding` / `ADD_Y` edits
///
/// Labeled `"y variable"`. Application sets `encoding.y` to a fixed default
/// definition, overwriting any existing y channel.
///
/// Known limitation: the default binds field `"b"` with a quantitative type
/// rather than deriving a definition from the modification detail, so the
/// rule is only useful where `"b"` is a valid field. Generalizing the
/// default is required before this rule works on arbitrary data sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddYRule;

impl AddYRule {
    /// Create the rule
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The fixed default definition the rule installs
    #[must_use]
    pub fn default_channel() -> ChannelDef {
        ChannelDef::new("b", "quantitative")
    }
}

impl EditRule for AddYRule {
    fn describe(&self, _modification: &Modification) -> Option<String> {
        Some("y variable".to_string())
    }

    fn apply(
        &self,
        spec: &ChartSpec,
        _modification: &Modification,
    ) -> Result<ChartSpec, EditError> {
        let mut next = spec.clone();
        next.set_channel("y", Self::default_channel());
        Ok(next)
    }
}
