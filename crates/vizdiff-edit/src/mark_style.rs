//! Mark style edits

use crate::modification::Modification;
use crate::rule::{EditError, EditRule};
use vizdiff_spec::ChartSpec;

/// Rule for mark style changes
///
/// Matches every edit in the `mark` category regardless of operation name.
/// The label capitalizes the target style (`"BAR"` → `"Mark style: Bar"`);
/// application lowercases it, since mark identifiers are lowercase in the
/// spec format.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkStyleRule;

impl MarkStyleRule {
    /// Create the rule
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditRule for MarkStyleRule {
    fn describe(&self, modification: &Modification) -> Option<String> {
        let after = modification.detail_str("after")?;
        Some(format!("Mark style: {}", capitalize(after)))
    }

    fn apply(
        &self,
        spec: &ChartSpec,
        modification: &Modification,
    ) -> Result<ChartSpec, EditError> {
        let after = modification
            .detail_str("after")
            .ok_or(EditError::MalformedDetail {
                name: modification.name.clone(),
                missing: "after",
            })?;

        let mut next = spec.clone();
        next.set_mark(&after.to_lowercase());
        Ok(next)
    }
}

/// First character upper, remainder lower
fn capitalize(style: &str) -> String {
    let mut chars = style.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
