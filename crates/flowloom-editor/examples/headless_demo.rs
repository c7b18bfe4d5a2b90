use flowloom_components::Palette;
use flowloom_editor::{EditorConfig, EditorSession, MemoryRepository};
use glam::Vec2;
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("=== FlowLoom Headless Demo ===");

    // 1. A session over an empty flow with the builtin palette
    let mut session = EditorSession::new(EditorConfig::default(), Palette::builtin());

    // 2. Author a two-step login flow
    let sign_in = session.add_step("Sign In", Vec2::new(100.0, 100.0));
    let done = session.add_step("Done", Vec2::new(600.0, 100.0));
    session.connect_steps(sign_in, done, Some("success"))?;
    println!(
        "Created flow with {} steps and {} transitions",
        session.graph().nodes.len(),
        session.graph().edges.len()
    );

    // 3. Drag components from the palette onto the Sign In step
    for palette_id in ["typography-heading", "input-text", "input-password", "button-action"] {
        session.begin_drag(palette_id);
        let component = session.drop_on(sign_in)?;
        println!("Dropped {palette_id} -> {component:?}");
    }

    // 4. Select the button and edit it through the property panel
    let button_id = session
        .graph()
        .node(sign_in)?
        .components
        .last()
        .map(|c| c.id)
        .expect("button was just dropped");
    session.select(sign_in, button_id)?;
    session.change_property("label", json!("Sign in"))?;
    session.change_variant("LARGE")?;
    println!(
        "Button after edits: {:?}",
        session.selection().map(|s| &s.element.config.field)
    );

    // 5. Render the step to presentation primitives
    for rendered in session.render_step(sign_in)? {
        println!("  {:?}", rendered.primitive);
    }

    // 6. Undo the variant change, then redo it
    session.undo();
    println!(
        "After undo, size = {:?}",
        session
            .graph()
            .find_component(sign_in, button_id)?
            .config
            .field
            .get("size")
    );
    session.redo();

    // 7. Round-trip through a repository
    let repository = MemoryRepository::default();
    session.save_to(&repository).await?;

    let mut reloaded = EditorSession::new(EditorConfig::default(), Palette::builtin());
    reloaded.load_from(&repository).await?;
    println!(
        "Reloaded flow: {} steps, {} transitions",
        reloaded.graph().nodes.len(),
        reloaded.graph().edges.len()
    );

    println!("\nDemo Complete.");
    Ok(())
}
