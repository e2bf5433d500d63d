//! Flattening adapter over a diff delegate

use crate::delegate::{TransitionDelegate, TransitionError};
use serde_json::Value;
use vizdiff_edit::{EditCategory, Modification, RuleRegistry};
use vizdiff_spec::ChartSpec;

/// Diff two specs into an ordered, annotated modification list
///
/// Uses the built-in rule set for naming. See [`diff_specs_with`].
///
/// # Errors
/// Propagates delegate failures as [`TransitionError`].
pub fn diff_specs<D>(
    delegate: &D,
    source: &ChartSpec,
    target: &ChartSpec,
) -> Result<Vec<Modification>, TransitionError>
where
    D: TransitionDelegate + ?Sized,
{
    diff_specs_with(delegate, &RuleRegistry::with_defaults(), source, target)
}

/// Diff two specs, naming modifications with a caller-supplied registry
///
/// The caller's specs are never mutated: the delegate receives copies, since
/// delegates are allowed to work destructively on their inputs. The
/// delegate's categorized output is flattened into a single list preserving
/// category iteration order and in-category entry order; each record is
/// stamped with its originating category and annotated with a readable name
/// when a naming rule matches. Non-array category values are metadata and
/// are skipped. Unrecognized categories or names are not errors — those
/// records simply stay unnamed, which keeps the pipeline open to edit types
/// it cannot label yet.
///
/// # Errors
/// Propagates delegate failures as [`TransitionError`].
pub fn diff_specs_with<D>(
    delegate: &D,
    registry: &RuleRegistry,
    source: &ChartSpec,
    target: &ChartSpec,
) -> Result<Vec<Modification>, TransitionError>
where
    D: TransitionDelegate + ?Sized,
{
    let transition = delegate.transition(source.clone(), target.clone())?;

    let mut modifications = Vec::new();
    for (category, value) in &transition {
        let Some(entries) = value.as_array() else {
            tracing::debug!(
                delegate = delegate.name(),
                category = %category,
                "skipping non-array transition entry"
            );
            continue;
        };

        for entry in entries {
            let modification = annotate(registry, EditCategory::from(category.as_str()), entry);
            modifications.push(modification);
        }
    }

    tracing::debug!(
        delegate = delegate.name(),
        count = modifications.len(),
        "flattened transition into modification list"
    );
    Ok(modifications)
}

/// Build a categorized, named modification from one raw delegate entry
fn annotate(registry: &RuleRegistry, category: EditCategory, entry: &Value) -> Modification {
    let name = entry.get("name").and_then(Value::as_str).unwrap_or_default();
    let detail = entry.get("detail").cloned().unwrap_or(Value::Null);

    let modification = Modification::new(category, name, detail);
    let readable = registry.readable_name(&modification);
    modification.with_readable_name(readable)
}
