//! vizdiff human-answer subsystem
//!
//! Records of human choices in paired chart comparisons, with two-tier
//! resolution of the comparison they reference.
//!
//! # Core Concepts
//!
//! - [`HumanAnswer`]: one user's `left`/`right` choice for a [`Triplet`],
//!   immutable once recorded, with a derived [`HumanAnswer::is_wrong`]
//! - [`TripletStore`]: seam for anything that can look a triplet up by id
//! - [`CsvTripletStore`]: secondary store backed by a CSV export
//! - [`TripletResolver`]: primary store first, CSV fallback on a miss,
//!   absent (never an error) when both miss
//!
//! Bulk enumeration with partially-missing triplet data is supported:
//! [`with_resolved_triplets`] backfills what it can and leaves the rest
//! unresolved.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod answer;
mod csv_store;
mod resolver;
mod triplet;

pub use answer::{AnswerError, HumanAnswer, Side};
pub use csv_store::{load_answers, CsvTripletStore};
pub use resolver::{with_resolved_triplets, TripletResolver};
pub use triplet::{InMemoryTripletStore, Triplet, TripletStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
