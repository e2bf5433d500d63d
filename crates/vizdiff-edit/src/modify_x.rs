//! Modifying the x channel

use crate::modification::Modification;
use crate::rule::{EditError, EditRule};
use vizdiff_spec::ChartSpec;

/// Rule for `encoding` / `MODIFY_X` edits
///
/// The detail names which sub-field of the x channel changes (`what`) and
/// its new value (`after`). Only that sub-field is touched; siblings are
/// preserved. Labeled `"x field name"` when the edit targets `field`;
/// other sub-field edits apply fine but carry no label yet.
///
/// A spec without an existing `encoding.x` fails with
/// [`EditError::MissingChannel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifyXRule;

impl ModifyXRule {
    /// Create the rule
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditRule for ModifyXRule {
    fn describe(&self, modification: &Modification) -> Option<String> {
        match modification.detail_str("what") {
            Some("field") => Some("x field name".to_string()),
            _ => None,
        }
    }

    fn apply(
        &self,
        spec: &ChartSpec,
        modification: &Modification,
    ) -> Result<ChartSpec, EditError> {
        let what = modification
            .detail_str("what")
            .ok_or(EditError::MalformedDetail {
                name: modification.name.clone(),
                missing: "what",
            })?
            .to_string();
        let after = modification
            .detail
            .get("after")
            .cloned()
            .ok_or(EditError::MalformedDetail {
                name: modification.name.clone(),
                missing: "after",
            })?;

        let mut next = spec.clone();
        let channel = next
            .channel_mut("x")
            .ok_or(EditError::MissingChannel { channel: "x" })?;
        let fields = channel
            .as_object_mut()
            .ok_or(EditError::InvalidChannel { channel: "x" })?;
        fields.insert(what, after);
        Ok(next)
    }
}
