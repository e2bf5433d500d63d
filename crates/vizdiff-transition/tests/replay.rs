//! Functional tests for the diff-then-replay contract.
//!
//! This suite exercises the full pipeline: diff the walkthrough example
//! specs, then apply each modification in order to an accumulating spec and
//! check the edits land where the names said they would. It focuses on:
//! - Agreement between named edits and applied edits.
//! - The never-mutate-caller-inputs contract of the adapter.
//! - Soft handling of delegate metadata and unnamed records.

use pretty_assertions::assert_eq;
use serde_json::json;
use vizdiff_edit::apply_modification;
use vizdiff_transition::{diff_specs, StructuralTransition};
use vizdiff_test_utils::{
    add_y_modification, borrowee_spec, mark_modification, modify_x_modification, source_spec,
};

/// Tenet: replaying the diff onto the source reaches the borrowed shape.
///
/// The final spec must carry the borrowee's mark, its y channel default,
/// and the borrowee's x field. If this fails, the naming rules and the
/// application rules have drifted apart.
#[test]
fn replaying_the_diff_reaches_the_target_shape() {
    let source = source_spec();
    let borrowee = borrowee_spec();

    let modifications = diff_specs(&StructuralTransition::new(), &source, &borrowee).unwrap();
    assert!(!modifications.is_empty());

    let mut current = source.clone();
    for modification in &modifications {
        current = apply_modification(&current, modification).unwrap();
    }

    assert_eq!(current.mark(), Some("bar"));
    assert_eq!(
        current.channel("y"),
        Some(&json!({"field": "b", "type": "quantitative"}))
    );
    assert_eq!(
        current.channel_def("x").unwrap().field.as_deref(),
        Some("a")
    );
}

/// Tenet: diffing never mutates the caller's specs.
///
/// The delegate is allowed to be destructive, so the adapter must hand it
/// copies. If this fails, callers lose their working spec by asking what
/// would change.
#[test]
fn diff_specs_never_mutates_its_inputs() {
    let source = source_spec();
    let borrowee = borrowee_spec();
    let source_before = source.clone();
    let borrowee_before = borrowee.clone();

    let _ = diff_specs(&StructuralTransition::new(), &source, &borrowee).unwrap();

    assert_eq!(source, source_before);
    assert_eq!(borrowee, borrowee_before);
}

/// Tenet: the walkthrough diff names the edits a user would see in a menu.
///
/// Mark and encoding edits with naming rules carry labels; the type change
/// on x has no rule yet and must flow through unnamed rather than fault.
#[test]
fn walkthrough_diff_carries_expected_labels() {
    let modifications =
        diff_specs(&StructuralTransition::new(), &source_spec(), &borrowee_spec()).unwrap();

    let labels: Vec<Option<&str>> = modifications
        .iter()
        .map(|m| m.readable_name.as_deref())
        .collect();

    assert_eq!(
        labels,
        vec![
            Some("Mark style: Bar"),
            Some("x field name"),
            None, // MODIFY_X on "type" has no naming rule
            Some("y variable"),
        ]
    );
}

/// Tenet: a hand-built edit list lands the same named edits as the diff.
///
/// Modifications are self-describing, so records built by hand (as a menu
/// front-end would) must replay exactly like diffed ones for the edits both
/// can express.
#[test]
fn hand_built_edit_list_agrees_with_the_diff() {
    let edits = [
        mark_modification("point", "bar"),
        modify_x_modification("field", json!("a")),
        add_y_modification(),
    ];

    let mut current = source_spec();
    for edit in &edits {
        current = apply_modification(&current, edit).unwrap();
    }

    assert_eq!(current.mark(), Some("bar"));
    assert_eq!(current.channel_def("x").unwrap().field.as_deref(), Some("a"));
    assert_eq!(
        current.channel("y"),
        Some(&json!({"field": "b", "type": "quantitative"}))
    );
}

/// Tenet: mark edits come first, then encoding edits in channel order.
#[test]
fn modification_order_is_category_then_entry_order() {
    let modifications =
        diff_specs(&StructuralTransition::new(), &source_spec(), &borrowee_spec()).unwrap();

    let names: Vec<&str> = modifications.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["MODIFY_MARK", "MODIFY_X", "MODIFY_X", "ADD_Y"]);
}
