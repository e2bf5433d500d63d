//! Property tests for the edit pipeline's value-semantics contract.
//!
//! Every core function must leave caller-owned specs deep-equal to their
//! pre-call state, for arbitrary styles and field names, not just the
//! examples the unit tests pin down.

use proptest::prelude::*;
use serde_json::json;
use vizdiff_edit::{apply_modification, readable_name, EditCategory, Modification};
use vizdiff_spec::{ChannelDef, ChartSpec};

fn style() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,12}"
}

fn field() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,15}"
}

proptest! {
    #[test]
    fn mark_edit_never_mutates_input(before in style(), after in style()) {
        let spec = ChartSpec::new().with_mark(&before);
        let snapshot = spec.clone();

        let m = Modification::new(
            EditCategory::Mark,
            "MODIFY_MARK",
            json!({"before": before, "after": after}),
        );
        let next = apply_modification(&spec, &m).unwrap();

        prop_assert_eq!(spec, snapshot);
        let after_lower = after.to_lowercase();
        prop_assert_eq!(next.mark(), Some(after_lower.as_str()));
    }

    #[test]
    fn mark_edit_name_capitalizes(after in style()) {
        let m = Modification::new(EditCategory::Mark, "MODIFY_MARK", json!({"after": after}));

        let name = readable_name(&m).unwrap();
        let mut chars = after.chars();
        let first = chars.next().unwrap().to_uppercase().to_string();
        let rest: String = chars.flat_map(char::to_lowercase).collect();
        prop_assert_eq!(name, format!("Mark style: {}{}", first, rest));
    }

    #[test]
    fn modify_x_touches_only_the_named_sub_field(old in field(), new in field()) {
        let spec = ChartSpec::new()
            .with_mark("point")
            .with_channel("x", ChannelDef::new(&old, "quantitative"));
        let snapshot = spec.clone();

        let m = Modification::new(
            EditCategory::Encoding,
            "MODIFY_X",
            json!({"what": "field", "after": new}),
        );
        let next = apply_modification(&spec, &m).unwrap();

        prop_assert_eq!(spec, snapshot);
        let def = next.channel_def("x").unwrap();
        prop_assert_eq!(def.field.as_deref(), Some(new.as_str()));
        prop_assert_eq!(def.ty.as_deref(), Some("quantitative"));
    }

    #[test]
    fn unmatched_categories_are_no_ops(category in "[a-z]{1,10}", name in "[A-Z_]{1,12}") {
        prop_assume!(category != "mark" && category != "encoding");
        let spec = ChartSpec::new()
            .with_mark("point")
            .with_channel("x", ChannelDef::new("a", "ordinal"));

        let m = Modification::new(EditCategory::from(category.as_str()), &name, json!({}));
        let next = apply_modification(&spec, &m).unwrap();

        prop_assert_eq!(next, spec);
        prop_assert_eq!(readable_name(&m), None);
    }
}
