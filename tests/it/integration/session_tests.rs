//! Session lifecycle, viewport panning and tolerance of odd event orderings.

use crate::helpers::*;
use nodeboard::canvas::MemoryCanvas;
use nodeboard::capabilities::{Connectible, Targetable};
use nodeboard::config::WorkspaceConfig;
use nodeboard::input::{MotionEvent, PointerEvent};
use nodeboard::palette::{NoPalette, Toolbar};
use nodeboard::types::{Coords, Gamma, Vector};
use nodeboard::Workspace;

#[test]
fn test_pointer_up_without_press_is_ignored() {
    let (mut ws, _, _) = two_nodes();
    release(&mut ws, (10, 10));
    release(&mut ws, (10, 10));
    assert!(ws.state().is_idle());
    assert_item_count(&ws, 2);
}

#[test]
fn test_lost_release_abandons_connect_gesture() {
    let (mut ws, n1, n2) = two_nodes();
    click(&mut ws, body_point((100, 100)));
    let anchor = output_anchor(&ws, n1);
    press(&mut ws, anchor);
    move_to(&mut ws, body_point((500, 500)));
    let line = ws.state().tentative().unwrap().line();
    assert!(ws.diagram().node(n2).unwrap().is_highlighted());

    // The release never arrives; the next press starts afresh
    press(&mut ws, (1500, 1500));
    assert!(ws.state().is_idle());
    assert!(!ws.canvas().contains(line));
    assert!(!ws.diagram().node(n2).unwrap().is_highlighted());
    assert!(ws.diagram().node(n1).unwrap().output_connectors().is_empty());
    assert_eq!(ws.selection(), None);
}

#[test]
fn test_secondary_button_pans_viewport() {
    let (mut ws, n1, _) = two_nodes();

    ws.handle_pointer_down(&PointerEvent::secondary(500, 400)).unwrap();
    ws.handle_pointer_move(&MotionEvent::with_secondary(400, 300)).unwrap();
    ws.handle_pointer_up(&PointerEvent::secondary(400, 300)).unwrap();
    assert_eq!(ws.viewport().origin(), Coords::new(100, 100));
    assert!(ws.state().is_idle());

    // Viewport (20, 50) is canvas (120, 150), inside N1's body
    click(&mut ws, (20, 50));
    assert_eq!(ws.selection(), Some(n1));
}

#[test]
fn test_drag_after_panning_uses_canvas_space() {
    let (mut ws, n1, _) = two_nodes();
    ws.handle_pointer_down(&PointerEvent::secondary(300, 300)).unwrap();
    ws.handle_pointer_move(&MotionEvent::with_secondary(250, 260)).unwrap();

    drag(&mut ws, (70, 110), (100, 130));
    assert_eq!(ws.diagram().node(n1).unwrap().origin(), Coords::new(130, 120));
}

#[test]
fn test_panning_is_orthogonal_to_selection() {
    let (mut ws, n1, _) = two_nodes();
    click(&mut ws, body_point((100, 100)));

    ws.handle_pointer_down(&PointerEvent::secondary(0, 0)).unwrap();
    ws.handle_pointer_move(&MotionEvent::with_secondary(-30, -30)).unwrap();
    assert_eq!(ws.selection(), Some(n1));
}

#[test]
fn test_workspaces_are_independent() {
    let mut first = Workspace::new(MemoryCanvas::new(), NoPalette, WorkspaceConfig::default());
    let mut second = Workspace::new(MemoryCanvas::new(), Toolbar::new(), WorkspaceConfig::default());

    let a = first.add_node(Coords::new(0, 0), Gamma::Blue);
    let b = first.add_node(Coords::new(300, 0), Gamma::Blue);
    let c = second.add_node(Coords::new(0, 0), Gamma::Blue);

    assert_eq!(a, c, "each session starts its own counters");
    assert_ne!(a, b);
    assert_eq!(second.diagram().registry().len(), 1);
}

#[test]
fn test_close_clears_canvas() {
    let (mut ws, n1, _, _) = connected_pair();
    click(&mut ws, body_point((100, 100)));
    let anchor = output_anchor(&ws, n1);
    press(&mut ws, anchor);

    let canvas = ws.close().unwrap();
    assert!(canvas.is_empty());
}

#[test]
fn test_demo_layout() {
    let (mut ws, _) = TestWorkspaceBuilder::new().build();
    let nodes = ws.load_demo_layout().unwrap();

    assert_eq!(nodes.len(), 5);
    assert_item_count(&ws, 9);
    let snapshot = ws.snapshot();
    assert_eq!(snapshot.nodes.len(), 5);
    assert_eq!(snapshot.edges.len(), 4);
    assert_eq!(snapshot.node(nodes[2]).unwrap().outputs.len(), 2);
    assert_eq!(snapshot.node(nodes[3]).unwrap().inputs.len(), 2);
}

#[test]
fn test_config_changes_geometry() {
    let mut config = WorkspaceConfig::default();
    config.node.width = 300;
    config.grid_spacing = 0;
    let mut ws = Workspace::with_viewport_size(
        MemoryCanvas::new(),
        NoPalette,
        config,
        Vector::new(800, 600),
    );
    let id = ws.add_node(Coords::new(0, 0), Gamma::Gray);

    assert!(ws.grid_lines().is_empty());
    assert_eq!(
        ws.diagram().connectible(id).unwrap().output_point(),
        Coords::new(300, 66)
    );
    assert_eq!(ws.viewport().size(), Vector::new(800, 600));
}
