//! Two-tier triplet resolution

use crate::answer::{AnswerError, HumanAnswer};
use crate::triplet::{Triplet, TripletStore};

/// Primary-then-secondary triplet lookup
///
/// Tries the primary store first and falls back to the secondary only on a
/// primary miss. A triplet found in neither store resolves to `None` —
/// enumerating answers with partially-missing triplet data must keep
/// working.
#[derive(Debug)]
pub struct TripletResolver {
    primary: Box<dyn TripletStore>,
    secondary: Box<dyn TripletStore>,
}

impl TripletResolver {
    /// Create a resolver over a primary and a secondary store
    #[must_use]
    pub fn new(primary: Box<dyn TripletStore>, secondary: Box<dyn TripletStore>) -> Self {
        Self { primary, secondary }
    }

    /// Resolve a triplet by id
    ///
    /// # Errors
    /// Returns [`AnswerError`] only when a store itself fails; a double miss
    /// is `Ok(None)`.
    pub fn resolve(&self, id: u64) -> Result<Option<Triplet>, AnswerError> {
        if let Some(triplet) = self.primary.find(id)? {
            return Ok(Some(triplet));
        }

        tracing::debug!(
            id,
            primary = self.primary.name(),
            secondary = self.secondary.name(),
            "primary store miss, trying secondary"
        );
        self.secondary.find(id)
    }
}

/// Backfill triplet associations for a batch of answers
///
/// Preserves order. Answers that already carry a triplet are left alone;
/// the rest are resolved through the two-tier lookup, staying unresolved
/// when both stores miss.
///
/// # Errors
/// Returns [`AnswerError`] when a store itself fails mid-batch.
pub fn with_resolved_triplets(
    answers: Vec<HumanAnswer>,
    resolver: &TripletResolver,
) -> Result<Vec<HumanAnswer>, AnswerError> {
    answers
        .into_iter()
        .map(|mut answer| {
            if answer.triplet.is_none() {
                answer.triplet = resolver.resolve(answer.triplet_id)?;
            }
            Ok(answer)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::Side;
    use crate::triplet::InMemoryTripletStore;
    use pretty_assertions::assert_eq;

    fn resolver(primary: Vec<Triplet>, secondary: Vec<Triplet>) -> TripletResolver {
        TripletResolver::new(
            Box::new(primary.into_iter().collect::<InMemoryTripletStore>()),
            Box::new(secondary.into_iter().collect::<InMemoryTripletStore>()),
        )
    }

    #[test]
    fn primary_hit_skips_secondary() {
        let r = resolver(vec![Triplet::new(1, 1)], vec![Triplet::new(1, -1)]);
        assert_eq!(r.resolve(1).unwrap(), Some(Triplet::new(1, 1)));
    }

    #[test]
    fn primary_miss_falls_back() {
        let r = resolver(vec![], vec![Triplet::new(2, -1)]);
        assert_eq!(r.resolve(2).unwrap(), Some(Triplet::new(2, -1)));
    }

    #[test]
    fn double_miss_is_absent_not_an_error() {
        let r = resolver(vec![], vec![]);
        assert_eq!(r.resolve(99).unwrap(), None);
    }

    #[test]
    fn backfill_preserves_order_and_partial_misses() {
        let r = resolver(vec![Triplet::new(100, 1)], vec![Triplet::new(101, -1)]);
        let answers = vec![
            HumanAnswer::new(1, 10, 100, Side::Left),
            HumanAnswer::new(2, 10, 101, Side::Right),
            HumanAnswer::new(3, 10, 102, Side::Left),
        ];

        let resolved = with_resolved_triplets(answers, &r).unwrap();
        assert_eq!(resolved[0].triplet, Some(Triplet::new(100, 1)));
        assert_eq!(resolved[1].triplet, Some(Triplet::new(101, -1)));
        assert_eq!(resolved[2].triplet, None);

        assert!(resolved[0].is_wrong()); // left vs right-preferred
        assert!(resolved[1].is_wrong()); // right vs left-preferred
        assert!(!resolved[2].is_wrong()); // unresolved never counts as wrong
    }

    #[test]
    fn backfill_leaves_preresolved_answers_alone() {
        let r = resolver(vec![Triplet::new(100, 1)], vec![]);
        let answers = vec![
            HumanAnswer::new(1, 10, 100, Side::Left).with_triplet(Some(Triplet::new(100, -1))),
        ];

        let resolved = with_resolved_triplets(answers, &r).unwrap();
        assert_eq!(resolved[0].triplet, Some(Triplet::new(100, -1)));
    }
}
