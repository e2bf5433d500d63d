//! Triplets and the store seam

use crate::answer::AnswerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;

/// One paired-comparison unit
///
/// `compared_result` is the sign of the ground-truth preferred side: `1`
/// means the right chart is truly preferred, `-1` the left. `None` means no
/// ground truth was recorded for this pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triplet {
    /// Stable identifier
    pub id: u64,

    /// Sign of the ground-truth preferred side
    #[serde(default)]
    pub compared_result: Option<i8>,
}

impl Triplet {
    /// Create a triplet with a known ground truth
    #[inline]
    #[must_use]
    pub fn new(id: u64, compared_result: i8) -> Self {
        Self {
            id,
            compared_result: Some(compared_result),
        }
    }

    /// Create a triplet without a recorded ground truth
    #[inline]
    #[must_use]
    pub fn unscored(id: u64) -> Self {
        Self {
            id,
            compared_result: None,
        }
    }
}

/// Anything that can look a triplet up by id
///
/// A plain miss is `Ok(None)`; errors are reserved for the store itself
/// failing (unreadable backing file, for instance).
pub trait TripletStore: Send + Sync + Debug {
    /// Find a triplet by id
    ///
    /// # Errors
    /// Returns [`AnswerError`] when the store cannot be read at all.
    fn find(&self, id: u64) -> Result<Option<Triplet>, AnswerError>;

    /// Store name (for debugging/log lines)
    fn name(&self) -> &'static str;
}

/// In-memory primary store
#[derive(Debug, Default, Clone)]
pub struct InMemoryTripletStore {
    triplets: HashMap<u64, Triplet>,
}

impl InMemoryTripletStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            triplets: HashMap::new(),
        }
    }

    /// Insert a triplet, replacing any existing record with the same id
    pub fn insert(&mut self, triplet: Triplet) {
        self.triplets.insert(triplet.id, triplet);
    }

    /// Number of stored triplets
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.triplets.len()
    }

    /// Check if the store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triplets.is_empty()
    }
}

impl FromIterator<Triplet> for InMemoryTripletStore {
    fn from_iter<I: IntoIterator<Item = Triplet>>(iter: I) -> Self {
        Self {
            triplets: iter.into_iter().map(|t| (t.id, t)).collect(),
        }
    }
}

impl TripletStore for InMemoryTripletStore {
    fn find(&self, id: u64) -> Result<Option<Triplet>, AnswerError> {
        Ok(self.triplets.get(&id).copied())
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_store_finds_inserted_triplets() {
        let store: InMemoryTripletStore =
            [Triplet::new(1, 1), Triplet::new(2, -1)].into_iter().collect();

        assert_eq!(store.find(1).unwrap(), Some(Triplet::new(1, 1)));
        assert_eq!(store.find(3).unwrap(), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn insert_replaces_same_id() {
        let mut store = InMemoryTripletStore::new();
        store.insert(Triplet::new(7, 1));
        store.insert(Triplet::new(7, -1));

        assert_eq!(store.find(7).unwrap(), Some(Triplet::new(7, -1)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unscored_triplet_has_no_result() {
        assert_eq!(Triplet::unscored(3).compared_result, None);
    }
}
