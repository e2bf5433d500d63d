//! Human answers

use crate::triplet::Triplet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which chart variant the user chose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The left chart
    Left,
    /// The right chart
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// One user's choice between two chart variants
///
/// Immutable once recorded, apart from backfilling the `triplet`
/// association when the primary store lacked it at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanAnswer {
    /// Stable identifier
    pub id: u64,

    /// The user who answered
    pub user_id: u64,

    /// The comparison this answers
    pub triplet_id: u64,

    /// Chosen side
    pub answer: Side,

    /// Resolved comparison, when either store had it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triplet: Option<Triplet>,
}

impl HumanAnswer {
    /// Create an answer with an unresolved triplet
    #[must_use]
    pub fn new(id: u64, user_id: u64, triplet_id: u64, answer: Side) -> Self {
        Self {
            id,
            user_id,
            triplet_id,
            answer,
            triplet: None,
        }
    }

    /// Attach the resolved triplet
    #[must_use]
    pub fn with_triplet(mut self, triplet: Option<Triplet>) -> Self {
        self.triplet = triplet;
        self
    }

    /// Whether the chosen side disagrees with the ground truth
    ///
    /// True exactly when the user chose left and the right chart is truly
    /// preferred (`compared_result == 1`), or chose right and the left chart
    /// is (`compared_result == -1`). An unresolved triplet or a missing
    /// `compared_result` never counts as wrong.
    #[must_use]
    pub fn is_wrong(&self) -> bool {
        let result = self.triplet.as_ref().and_then(|t| t.compared_result);
        matches!(
            (self.answer, result),
            (Side::Left, Some(1)) | (Side::Right, Some(-1))
        )
    }
}

/// Errors in the answer subsystem
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    /// Backing file could not be read
    #[error("cannot read answer data: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV row
    #[error("malformed CSV record: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(side: Side, compared_result: Option<i8>) -> HumanAnswer {
        HumanAnswer::new(1, 10, 100, side).with_triplet(Some(Triplet {
            id: 100,
            compared_result,
        }))
    }

    #[test]
    fn left_against_right_preference_is_wrong() {
        assert!(answer(Side::Left, Some(1)).is_wrong());
    }

    #[test]
    fn right_against_left_preference_is_wrong() {
        assert!(answer(Side::Right, Some(-1)).is_wrong());
    }

    #[test]
    fn agreeing_answers_are_right() {
        assert!(!answer(Side::Left, Some(-1)).is_wrong());
        assert!(!answer(Side::Right, Some(1)).is_wrong());
    }

    #[test]
    fn missing_result_is_never_wrong() {
        assert!(!answer(Side::Left, None).is_wrong());
        assert!(!answer(Side::Right, None).is_wrong());
    }

    #[test]
    fn unresolved_triplet_is_never_wrong() {
        let a = HumanAnswer::new(1, 10, 100, Side::Left);
        assert!(!a.is_wrong());
    }

    #[test]
    fn zero_result_is_never_wrong() {
        assert!(!answer(Side::Left, Some(0)).is_wrong());
        assert!(!answer(Side::Right, Some(0)).is_wrong());
    }

    #[test]
    fn side_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Side::Left).unwrap(), "\"left\"");
    }
}
