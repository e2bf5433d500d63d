//! vizdiff transition adapter
//!
//! Consumes an external spec-diffing capability and flattens its categorized
//! output into one ordered list of annotated [`Modification`]s.
//!
//! # Core Concepts
//!
//! - [`TransitionDelegate`]: the collaborator seam — two specs in, an
//!   ordered category → raw-entries map out
//! - [`diff_specs`]: defensive-copying adapter; flattens array-valued
//!   categories in order, stamps each record with its category, and attaches
//!   readable names
//! - [`StructuralTransition`]: built-in delegate comparing `mark` and
//!   `encoding` so the walkthrough harness runs without an external differ
//!
//! Non-array values in the delegate output are auxiliary metadata (a
//! transition cost, for instance) and are skipped, never errors.
//!
//! [`Modification`]: vizdiff_edit::Modification

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod adapter;
mod delegate;
mod structural;

pub use adapter::{diff_specs, diff_specs_with};
pub use delegate::{TransitionDelegate, TransitionError, TransitionMap};
pub use structural::StructuralTransition;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
