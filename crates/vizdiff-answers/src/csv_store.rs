//! CSV-backed secondary store

use crate::answer::{AnswerError, HumanAnswer, Side};
use crate::triplet::{Triplet, TripletStore};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Secondary triplet store backed by a CSV export
///
/// Loaded once at open time; lookups after that never touch the filesystem.
/// Expected columns: `id`, `compared_result` (the latter may be empty).
#[derive(Debug, Clone)]
pub struct CsvTripletStore {
    triplets: HashMap<u64, Triplet>,
}

#[derive(Debug, Deserialize)]
struct TripletRow {
    id: u64,
    #[serde(default)]
    compared_result: Option<i8>,
}

impl CsvTripletStore {
    /// Load a store from a CSV file
    ///
    /// # Errors
    /// Returns [`AnswerError`] when the file cannot be read or a row is
    /// malformed. A well-formed file with zero rows is a valid, empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AnswerError> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        let mut triplets = HashMap::new();

        for row in reader.deserialize() {
            let row: TripletRow = row?;
            triplets.insert(
                row.id,
                Triplet {
                    id: row.id,
                    compared_result: row.compared_result,
                },
            );
        }

        tracing::debug!(count = triplets.len(), "loaded CSV triplet store");
        Ok(Self { triplets })
    }

    /// Number of loaded triplets
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

impl TripletStore for CsvTripletStore {
    fn find(&self, id: u64) -> Result<Option<Triplet>, AnswerError> {
        Ok(self.triplets.get(&id).copied())
    }

    fn name(&self) -> &'static str {
        "csv"
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    id: u64,
    user_id: u64,
    triplet_id: u64,
    answer: Side,
}

/// Load recorded answers from a CSV file
///
/// Expected columns: `id`, `user_id`, `triplet_id`, `answer`
/// (`left`/`right`). Triplet associations start unresolved; see
/// [`with_resolved_triplets`](crate::with_resolved_triplets).
///
/// # Errors
/// Returns [`AnswerError`] when the file cannot be read or a row is
/// malformed.
pub fn load_answers<P: AsRef<Path>>(path: P) -> Result<Vec<HumanAnswer>, AnswerError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut answers = Vec::new();

    for row in reader.deserialize() {
        let row: AnswerRow = row?;
        answers.push(HumanAnswer::new(row.id, row.user_id, row.triplet_id, row.answer));
    }

    Ok(answers)
}
