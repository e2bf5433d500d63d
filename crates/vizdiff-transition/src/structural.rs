//! Built-in structural diff delegate

use crate::delegate::{TransitionDelegate, TransitionError, TransitionMap};
use serde_json::{json, Value};
use vizdiff_spec::ChartSpec;

/// Structural spec differ
///
/// Compares `mark` and the `encoding` channels of two specs and emits the
/// raw edit entries transforming the source toward the target. `data` is
/// opaque to the pipeline and is never compared. Output categories are
/// always `mark`, `transformation`, `encoding` (in that order, possibly
/// holding empty arrays), plus a non-array `cost` metadata entry carrying
/// the edit count.
///
/// Entry naming follows the `<OP>_<CHANNEL>` convention: a channel present
/// only in the target yields `ADD_Y`-style entries, one present only in the
/// source yields `REMOVE_Y`, and a channel present in both yields one
/// `MODIFY_X`-style entry per differing sub-field with a `{what, before,
/// after}` detail.
///
/// Marks are compared asymmetrically: a target without a mark yields no
/// mark entries, so the source's mark survives a replay. Every mark entry
/// names a target style in `detail.after` — a removal record would carry
/// none and no rule could apply it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralTransition;

impl StructuralTransition {
    /// Create the delegate
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn mark_edits(source: &ChartSpec, target: &ChartSpec) -> Vec<Value> {
        match (source.mark(), target.mark()) {
            (before, Some(after)) if before != Some(after) => vec![json!({
                "name": "MODIFY_MARK",
                "detail": {"before": before, "after": after}
            })],
            _ => Vec::new(),
        }
    }

    fn encoding_edits(source: &ChartSpec, target: &ChartSpec) -> Vec<Value> {
        let mut edits = Vec::new();

        for name in target.channel_names() {
            let suffix = name.to_uppercase();
            match source.channel(name) {
                None => edits.push(json!({
                    "name": format!("ADD_{suffix}"),
                    "detail": target.channel(name)
                })),
                Some(src) => {
                    let tgt = target.channel(name).unwrap_or(&Value::Null);
                    edits.extend(Self::sub_field_edits(&suffix, src, tgt));
                }
            }
        }

        for name in source.channel_names() {
            if target.channel(name).is_none() {
                edits.push(json!({
                    "name": format!("REMOVE_{}", name.to_uppercase()),
                    "detail": {"before": source.channel(name)}
                }));
            }
        }

        edits
    }

    /// One `MODIFY_<CHANNEL>` entry per sub-field whose target value differs
    fn sub_field_edits(suffix: &str, src: &Value, tgt: &Value) -> Vec<Value> {
        let (Some(src), Some(tgt)) = (src.as_object(), tgt.as_object()) else {
            // Non-object channel definitions get replaced wholesale.
            if src == tgt {
                return Vec::new();
            }
            return vec![json!({
                "name": format!("MODIFY_{suffix}"),
                "detail": {"what": "definition", "before": src, "after": tgt}
            })];
        };

        tgt.iter()
            .filter(|(key, after)| src.get(key.as_str()) != Some(*after))
            .map(|(key, after)| {
                json!({
                    "name": format!("MODIFY_{suffix}"),
                    "detail": {"what": key, "before": src.get(key), "after": after}
                })
            })
            .collect()
    }
}

impl TransitionDelegate for StructuralTransition {
    fn transition(
        &self,
        source: ChartSpec,
        target: ChartSpec,
    ) -> Result<TransitionMap, TransitionError> {
        let marks = Self::mark_edits(&source, &target);
        let encodings = Self::encoding_edits(&source, &target);
        let cost = marks.len() + encodings.len();

        let mut map = TransitionMap::new();
        map.insert("mark".to_string(), Value::Array(marks));
        map.insert("transformation".to_string(), json!([]));
        map.insert("encoding".to_string(), Value::Array(encodings));
        map.insert("cost".to_string(), json!(cost));
        Ok(map)
    }

    fn name(&self) -> &'static str {
        "structural"
    }
}
