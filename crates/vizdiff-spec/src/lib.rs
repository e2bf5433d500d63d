//! vizdiff chart specification model
//!
//! JSON-backed chart specifications with value semantics.
//!
//! # Core Concepts
//!
//! - [`ChartSpec`]: Vega-Lite-like document with optional `mark`, `encoding`,
//!   and `data` regions
//! - [`ChannelDef`]: typed view of one encoding channel (`field`, `type`,
//!   plus preserved unknown keys)
//!
//! Specs are treated as immutable values by the rest of the workspace: every
//! operation that would change a spec clones it and returns the changed copy,
//! leaving the caller's spec untouched.
//!
//! # Example
//!
//! ```rust
//! use vizdiff_spec::{ChannelDef, ChartSpec};
//!
//! let spec = ChartSpec::new()
//!     .with_mark("point")
//!     .with_channel("x", ChannelDef::new("Horsepower", "quantitative"));
//!
//! assert_eq!(spec.mark(), Some("point"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod channel;
mod spec;

pub use channel::ChannelDef;
pub use spec::{ChartSpec, SpecError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
