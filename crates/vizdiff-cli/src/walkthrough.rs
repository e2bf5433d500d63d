//! Step-by-step diff walkthrough
//!
//! Diffs two specs, then replays each modification against an accumulating
//! current spec, recording every intermediate state. This is the sanity
//! harness that keeps the naming rules and the application rules honest
//! with each other.

use vizdiff_edit::{EditError, Modification, RuleRegistry};
use vizdiff_spec::ChartSpec;
use vizdiff_transition::{diff_specs_with, TransitionDelegate, TransitionError};

/// The spec a user is working on in the bundled example
///
/// Delegates to the shared fixture so the binary and the test suites use
/// one definition of the pair.
#[must_use]
pub fn example_source() -> ChartSpec {
    vizdiff_test_utils::source_spec()
}

/// The spec the bundled example borrows from
#[must_use]
pub fn example_borrowee() -> ChartSpec {
    vizdiff_test_utils::borrowee_spec()
}

/// One replayed modification and the spec state after it
#[derive(Debug, Clone, PartialEq)]
pub struct WalkthroughStep {
    /// The modification, category-stamped and named where a rule matched
    pub modification: Modification,
    /// Accumulated spec state after applying it
    pub spec_after: ChartSpec,
}

/// A complete walkthrough trace
#[derive(Debug, Clone, PartialEq)]
pub struct Walkthrough {
    /// Spec state before any modification
    pub before: ChartSpec,
    /// Replayed steps, in modification-list order
    pub steps: Vec<WalkthroughStep>,
}

impl Walkthrough {
    /// Final spec state (the input spec when the diff was empty)
    #[must_use]
    pub fn after(&self) -> &ChartSpec {
        self.steps.last().map_or(&self.before, |s| &s.spec_after)
    }

    /// Render the human-readable trace the binary prints
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Before:\n{}\n", pretty(&self.before)));

        for step in &self.steps {
            let label = step
                .modification
                .readable_name
                .as_deref()
                .unwrap_or("(unnamed)");
            let record =
                serde_json::to_string_pretty(&step.modification).unwrap_or_default();
            out.push_str(&format!("\nModification: \"{label}\"\n{record}\n"));
            out.push_str(&format!("\nNew spec:\n{}\n", pretty(&step.spec_after)));
        }
        out
    }
}

fn pretty(spec: &ChartSpec) -> String {
    serde_json::to_string_pretty(&spec.to_value()).unwrap_or_default()
}

/// Errors while running a walkthrough
#[derive(Debug, thiserror::Error)]
pub enum WalkthroughError {
    /// Diffing the specs failed
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// Replaying a modification failed
    #[error("replay failed at step {step}: {source}")]
    Replay {
        /// Zero-based index of the failing modification
        step: usize,
        /// The underlying edit error
        source: EditError,
    },
}

/// Diff `source` toward `target` and replay every modification in order
///
/// Each step applies to the output of the previous one, starting from
/// `source`. Neither input spec is mutated.
///
/// # Errors
/// Returns [`WalkthroughError`] when the delegate fails or a matched rule
/// rejects a malformed record mid-replay.
pub fn run<D>(
    delegate: &D,
    registry: &RuleRegistry,
    source: &ChartSpec,
    target: &ChartSpec,
) -> Result<Walkthrough, WalkthroughError>
where
    D: TransitionDelegate + ?Sized,
{
    let modifications = diff_specs_with(delegate, registry, source, target)?;
    tracing::info!(count = modifications.len(), "replaying modifications");

    let mut current = source.clone();
    let mut steps = Vec::with_capacity(modifications.len());

    for (step, modification) in modifications.into_iter().enumerate() {
        current = registry
            .apply(&current, &modification)
            .map_err(|source| WalkthroughError::Replay { step, source })?;
        steps.push(WalkthroughStep {
            modification,
            spec_after: current.clone(),
        });
    }

    Ok(Walkthrough {
        before: source.clone(),
        steps,
    })
}
