use flowloom_components::Palette;
use flowloom_editor::{EditorConfig, EditorSession, FlowRepository, MemoryRepository};
use glam::Vec2;
use serde_json::json;

#[tokio::test]
async fn test_session_roundtrip_through_repository() {
    let repository = MemoryRepository::default();

    // 1. Author a flow
    let mut session = EditorSession::new(EditorConfig::default(), Palette::builtin());
    let sign_in = session.add_step("Sign In", Vec2::new(100.0, 100.0));
    let done = session.add_step("Done", Vec2::new(600.0, 100.0));
    session
        .connect_steps(sign_in, done, Some("success"))
        .unwrap();
    session.begin_drag("input-password");
    let component_id = session.drop_on(sign_in).unwrap().unwrap();
    session.select(sign_in, component_id).unwrap();

    session.save_to(&repository).await.unwrap();

    // 2. A fresh session loads the same flow
    let mut restored = EditorSession::new(EditorConfig::default(), Palette::builtin());
    restored.load_from(&repository).await.unwrap();

    assert_eq!(restored.graph().nodes.len(), 2);
    assert_eq!(restored.graph().edges.len(), 1);

    let labels: Vec<_> = restored
        .graph()
        .draw_order
        .iter()
        .map(|&id| restored.graph().node(id).unwrap().label.clone())
        .collect();
    assert_eq!(labels, vec!["Sign In".to_string(), "Done".to_string()]);

    let restored_sign_in = restored.graph().draw_order[0];
    let components = &restored.graph().node(restored_sign_in).unwrap().components;
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].config.field["inputType"], json!("password"));

    // a load starts a fresh document: no history, no selection
    assert!(!restored.can_undo());
    assert!(restored.selection().is_none());
}

#[tokio::test]
async fn test_load_failure_is_propagated() {
    let repository = MemoryRepository::default(); // nothing saved yet

    let mut session = EditorSession::new(EditorConfig::default(), Palette::builtin());
    assert!(session.load_from(&repository).await.is_err());
    // the session keeps its (empty) graph
    assert!(session.graph().nodes.is_empty());
}

#[tokio::test]
async fn test_selection_does_not_survive_load() {
    let repository = MemoryRepository::default();

    let mut session = EditorSession::new(EditorConfig::default(), Palette::builtin());
    let step = session.add_step("Sign In", Vec2::ZERO);
    session.begin_drag("button-action");
    let component_id = session.drop_on(step).unwrap().unwrap();
    session.select(step, component_id).unwrap();
    session.save_to(&repository).await.unwrap();

    // remove the component, then load the older copy back: the selection was
    // cleared by the removal and must stay cleared (fresh document)
    session.remove_component(step, component_id).unwrap();
    assert!(session.selection().is_none());
    session.load_from(&repository).await.unwrap();
    assert!(session.selection().is_none());

    let raw: &dyn FlowRepository = &repository;
    assert!(raw.load_graph().await.is_ok());
}
