//! Testing utilities for the vizdiff workspace
//!
//! Shared fixtures: the walkthrough example specs and modification builders.

#![allow(missing_docs)]

use serde_json::{json, Value};
use vizdiff_edit::{EditCategory, Modification};
use vizdiff_spec::{ChannelDef, ChartSpec};

/// The spec a user is working on: a point chart of Horsepower.
pub fn source_spec() -> ChartSpec {
    ChartSpec::new()
        .with_data(json!({"url": "data/cars.json"}))
        .with_mark("point")
        .with_channel("x", ChannelDef::new("Horsepower", "quantitative"))
}

/// The spec being borrowed from: an ordinal bar chart with a y channel.
pub fn borrowee_spec() -> ChartSpec {
    ChartSpec::new()
        .with_data(json!({
            "values": [
                {"a": "A", "b": 28}, {"a": "B", "b": 55}, {"a": "C", "b": 43},
                {"a": "D", "b": 91}, {"a": "E", "b": 81}, {"a": "F", "b": 53},
                {"a": "G", "b": 19}, {"a": "H", "b": 87}, {"a": "I", "b": 52}
            ]
        }))
        .with_mark("bar")
        .with_channel("x", ChannelDef::new("a", "ordinal"))
        .with_channel("y", ChannelDef::new("b", "quantitative"))
}

pub fn mark_modification(before: &str, after: &str) -> Modification {
    Modification::new(
        EditCategory::Mark,
        "MODIFY_MARK",
        json!({"before": before, "after": after}),
    )
}

pub fn add_y_modification() -> Modification {
    Modification::new(EditCategory::Encoding, "ADD_Y", json!({}))
}

pub fn modify_x_modification(what: &str, after: Value) -> Modification {
    Modification::new(
        EditCategory::Encoding,
        "MODIFY_X",
        json!({"what": what, "after": after}),
    )
}
