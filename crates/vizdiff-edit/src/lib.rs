//! vizdiff edit system
//!
//! Modification records and the pluggable rule table that names and applies
//! them.
//!
//! # Core Concepts
//!
//! - [`Modification`]: one atomic edit transforming a spec toward a target
//! - [`EditCategory`]: which region of the spec an edit touches
//! - [`EditRule`]: trait pairing a menu label (`describe`) with an
//!   application (`apply`) for one kind of edit
//! - [`RuleRegistry`]: (category, name) → rule table; extending the system
//!   is registering a new entry, not editing a conditional
//!
//! Unmatched modifications degrade softly: [`readable_name`] returns `None`
//! and [`apply_modification`] returns an unchanged copy. Matched rules with
//! malformed details fail with a descriptive [`EditError`] instead.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use vizdiff_edit::{apply_modification, EditCategory, Modification};
//! use vizdiff_spec::ChartSpec;
//!
//! let spec = ChartSpec::new().with_mark("point");
//! let m = Modification::new(
//!     EditCategory::Mark,
//!     "MODIFY_MARK",
//!     json!({"before": "point", "after": "BAR"}),
//! );
//!
//! let next = apply_modification(&spec, &m).unwrap();
//! assert_eq!(next.mark(), Some("bar"));
//! assert_eq!(spec.mark(), Some("point"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod add_y;
mod mark_style;
mod modification;
mod modify_x;
mod registry;
mod rule;

pub use add_y::AddYRule;
pub use mark_style::MarkStyleRule;
pub use modification::{EditCategory, Modification};
pub use modify_x::ModifyXRule;
pub use registry::{apply_modification, readable_name, RuleKey, RuleRegistry};
pub use rule::{EditError, EditRule};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
