//! Demo driver: replays a short editing session on a headless canvas and
//! prints the resulting diagram as JSON.

use anyhow::{Context, Result};
use nodeboard::canvas::MemoryCanvas;
use nodeboard::config::WorkspaceConfig;
use nodeboard::input::{KeyEvent, MotionEvent, PointerEvent};
use nodeboard::palette::Toolbar;
use nodeboard::types::Gamma;
use nodeboard::Workspace;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nodeboard=info")),
        )
        .init();

    let config = WorkspaceConfig::load_or_default();
    let mut workspace = Workspace::new(MemoryCanvas::new(), Toolbar::new(), config);

    let nodes = workspace
        .load_demo_layout()
        .context("Failed to build the demo layout")?;
    info!(nodes = nodes.len(), "Demo layout loaded");

    // Spawn a gray node from the palette, then wire the first node to it.
    workspace.palette_mut().select(Gamma::Gray);
    workspace.handle_pointer_down(&PointerEvent::primary(800, 120))?;
    workspace.handle_pointer_up(&PointerEvent::primary(800, 120))?;

    let first = nodes[0];
    let anchor = workspace.diagram().connectible(first)?.output_point();
    let anchor = workspace.viewport().to_viewport_space(anchor);
    // Select the first node, then press on its output anchor and drop on the new node.
    workspace.handle_pointer_down(&PointerEvent::primary(100 + 20, 100 + 50))?;
    workspace.handle_pointer_up(&PointerEvent::primary(100 + 20, 100 + 50))?;
    workspace.handle_pointer_down(&PointerEvent::primary(anchor.x, anchor.y))?;
    workspace.handle_pointer_move(&MotionEvent::with_primary(850, 170))?;
    workspace.handle_pointer_up(&PointerEvent::primary(850, 170))?;

    // Drag the third node a little, then delete the top-most node of the overlapping pair.
    workspace.handle_pointer_down(&PointerEvent::primary(250, 220))?;
    workspace.handle_pointer_move(&MotionEvent::with_primary(280, 240))?;
    workspace.handle_pointer_up(&PointerEvent::primary(280, 240))?;
    workspace.handle_pointer_down(&PointerEvent::primary(550, 420))?;
    workspace.handle_pointer_up(&PointerEvent::primary(550, 420))?;
    workspace.handle_key_press(&KeyEvent::named("Delete"))?;

    let snapshot = workspace.snapshot();
    println!("{}", snapshot.to_json()?);

    let canvas = workspace.close()?;
    info!(primitives = canvas.len(), "Session closed");
    Ok(())
}
