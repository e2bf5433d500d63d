//! vizdiff driver library
//!
//! The harness behind the `vizdiff` binary: a step-by-step walkthrough of
//! diffing one spec into another, and a verdict report over recorded human
//! answers. Lives in a library so the accumulation and ordering behavior of
//! the walkthrough is testable without spawning the binary.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod report;
pub mod walkthrough;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
