use flowloom_components::{Component, ComponentKind};
use flowloom_graph::{GraphState, Node, SavedEdge, SavedGraph};
use glam::Vec2;
use serde_json::json;
use uuid::Uuid;

#[test]
fn test_roundtrip_persistence() {
    // 1. Two connected steps, one carrying components
    let graph = GraphState::default();
    let (graph, node_a) = graph.insert_node(Node::new(
        "Sign In",
        Vec2::new(0.0, 0.0),
        Vec2::new(300.0, 200.0),
    ));
    let (graph, node_b) = graph.insert_node(Node::new(
        "Done",
        Vec2::new(500.0, 0.0),
        Vec2::new(300.0, 200.0),
    ));
    let (graph, _) = graph
        .connect(node_a, node_b, Some("success".to_string()))
        .unwrap();

    let mut button = Component::new(ComponentKind::Button);
    button
        .config
        .field
        .insert("label".to_string(), json!("Continue"));
    let button_id = button.id;
    let graph = graph.add_component(node_a, button).unwrap();

    let uuid_a = graph.node(node_a).unwrap().uuid;
    let uuid_b = graph.node(node_b).unwrap().uuid;

    // 2. Save
    let saved = graph.save();
    assert_eq!(saved.nodes.len(), 2);
    assert_eq!(saved.edges.len(), 1);
    assert_eq!(saved.edges[0].source, uuid_a);
    assert_eq!(saved.edges[0].target, uuid_b);
    assert_eq!(saved.edges[0].label.as_deref(), Some("success"));

    // 3. Serialize through JSON like the wire would
    let payload = serde_json::to_string(&saved).unwrap();
    let decoded: SavedGraph = serde_json::from_str(&payload).unwrap();

    // 4. Load into a fresh state
    let restored = GraphState::from_saved(decoded);
    assert_eq!(restored.nodes.len(), 2);
    assert_eq!(restored.edges.len(), 1);

    let restored_a = restored.node_by_uuid(&uuid_a).expect("step A missing");
    let restored_b = restored.node_by_uuid(&uuid_b).expect("step B missing");

    let node = restored.node(restored_a).unwrap();
    assert_eq!(node.label, "Sign In");
    assert_eq!(node.components.len(), 1);
    assert_eq!(node.components[0].id, button_id);
    assert_eq!(node.components[0].config.field["label"], json!("Continue"));

    let edge = restored.edges.values().next().expect("transition missing");
    assert_eq!(edge.source, restored_a);
    assert_eq!(edge.target, restored_b);
}

#[test]
fn test_load_drops_dangling_edges() {
    let graph = GraphState::default();
    let (graph, node_a) = graph.insert_node(Node::new("A", Vec2::ZERO, Vec2::ONE));
    let uuid_a = graph.node(node_a).unwrap().uuid;

    let mut saved = graph.save();
    saved.edges.push(SavedEdge {
        source: uuid_a,
        target: Uuid::new_v4(), // never existed
        label: None,
    });

    let restored = GraphState::from_saved(saved);
    assert_eq!(restored.nodes.len(), 1);
    assert!(restored.edges.is_empty());
}

#[test]
fn test_save_preserves_draw_order() {
    let graph = GraphState::default();
    let (graph, a) = graph.insert_node(Node::new("A", Vec2::ZERO, Vec2::ONE));
    let (graph, _b) = graph.insert_node(Node::new("B", Vec2::ZERO, Vec2::ONE));
    let graph = graph.bring_to_front(a).unwrap();

    let saved = graph.save();
    assert_eq!(saved.nodes[0].label, "B");
    assert_eq!(saved.nodes[1].label, "A");

    let restored = GraphState::from_saved(saved);
    let labels: Vec<_> = restored
        .draw_order
        .iter()
        .map(|&id| restored.node(id).unwrap().label.clone())
        .collect();
    assert_eq!(labels, vec!["B".to_string(), "A".to_string()]);
}
