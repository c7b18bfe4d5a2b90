use flowloom_components::{ComponentConfig, ComponentKind, Palette, PaletteEntry, ViewPrimitive};
use flowloom_editor::{EditorConfig, EditorError, EditorSession};
use flowloom_graph::NodeId;
use glam::Vec2;
use serde_json::json;
use uuid::Uuid;

fn button_palette() -> Palette {
    Palette::new(vec![PaletteEntry {
        id: "palette-button".to_string(),
        kind: ComponentKind::Button,
        display_name: "Button".to_string(),
        variant: None,
        config: ComponentConfig {
            field: [("label".to_string(), json!("Continue"))]
                .into_iter()
                .collect(),
            styles: Default::default(),
        },
    }])
}

fn session_with_selected_button() -> (EditorSession, NodeId, Uuid) {
    let mut session = EditorSession::new(EditorConfig::default(), button_palette());
    let node = session.add_step("Sign In", Vec2::new(100.0, 100.0));
    session.begin_drag("palette-button");
    let component_id = session.drop_on(node).unwrap().unwrap();
    session.select(node, component_id).unwrap();
    (session, node, component_id)
}

#[test]
fn test_variant_change_updates_store_and_cached_selection_together() {
    let (mut session, node, component_id) = session_with_selected_button();

    session.change_variant("LARGE").unwrap();

    let stored = session.graph().find_component(node, component_id).unwrap();
    assert_eq!(stored.variant.as_deref(), Some("LARGE"));
    assert_eq!(stored.config.field["size"], json!("large"));
    assert_eq!(stored.config.field["label"], json!("Continue"));

    // the cached selection reflects the same fields in the same pass
    let cached = &session.selection().unwrap().element;
    assert_eq!(cached, stored);
}

#[test]
fn test_unknown_variant_is_surfaced() {
    let (mut session, node, component_id) = session_with_selected_button();

    let err = session.change_variant("HUGE").unwrap_err();
    assert!(matches!(err, EditorError::Graph(_)));

    // store untouched
    let stored = session.graph().find_component(node, component_id).unwrap();
    assert!(stored.variant.is_none());
}

#[test]
fn test_property_change_flows_into_store_and_cache() {
    let (mut session, node, component_id) = session_with_selected_button();

    session.change_property("label", json!("Sign in")).unwrap();

    let stored = session.graph().find_component(node, component_id).unwrap();
    assert_eq!(stored.config.field["label"], json!("Sign in"));
    assert_eq!(
        session.selection().unwrap().element.config.field["label"],
        json!("Sign in")
    );
}

#[test]
fn test_validation_failure_leaves_store_untouched() {
    let (mut session, node, component_id) = session_with_selected_button();

    // "label" is declared as Text; a number must be rejected
    let err = session.change_property("label", json!(42)).unwrap_err();
    match err {
        EditorError::Validation(inner) => assert_eq!(inner.key, "label"),
        other => panic!("expected ValidationError, got {other:?}"),
    }

    let stored = session.graph().find_component(node, component_id).unwrap();
    assert_eq!(stored.config.field["label"], json!("Continue"));
    assert_eq!(
        session.selection().unwrap().element.config.field["label"],
        json!("Continue")
    );
}

#[test]
fn test_equal_value_update_records_no_history() {
    let (mut session, node, _component_id) = session_with_selected_button();

    // writing the value the field already holds must not create an undo entry
    session.change_property("label", json!("Continue")).unwrap();

    // the last real mutation is still the drop: one undo removes the component
    assert!(session.undo());
    assert!(session.graph().node(node).unwrap().components.is_empty());
}

#[test]
fn test_editing_without_selection_fails() {
    let mut session = EditorSession::new(EditorConfig::default(), button_palette());
    assert_eq!(
        session.change_property("label", json!("x")).unwrap_err(),
        EditorError::NoSelection
    );
    assert_eq!(
        session.change_variant("LARGE").unwrap_err(),
        EditorError::NoSelection
    );
}

#[test]
fn test_undeclared_keys_are_opaque_payload() {
    let (mut session, node, component_id) = session_with_selected_button();

    session
        .change_property("analyticsTag", json!({ "campaign": "q3" }))
        .unwrap();

    let stored = session.graph().find_component(node, component_id).unwrap();
    assert_eq!(stored.config.field["analyticsTag"], json!({ "campaign": "q3" }));
}

#[test]
fn test_render_step_reflects_variant() {
    let (mut session, node, _component_id) = session_with_selected_button();
    session.change_variant("LARGE").unwrap();

    let rendered = session.render_step(node).unwrap();
    assert_eq!(rendered.len(), 1);
    match &rendered[0].primitive {
        ViewPrimitive::Button { label, size } => {
            assert_eq!(label, "Continue");
            assert_eq!(size.as_deref(), Some("large"));
        }
        other => panic!("expected Button, got {other:?}"),
    }
}
