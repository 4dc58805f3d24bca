//! Dragging nodes and the connector ends attached to them.

use crate::helpers::*;
use nodeboard::canvas::{Canvas, Shape};
use nodeboard::capabilities::{Connectible, Connector};
use nodeboard::geometry::edge_curve;
use nodeboard::types::{Coords, Gamma};

#[test]
fn test_drag_translates_outgoing_edge_end() {
    let (mut ws, n1, _, edge) = connected_pair();

    drag(&mut ws, body_point((100, 100)), (170, 170));

    let node = ws.diagram().node(n1).unwrap();
    assert_eq!(node.origin(), Coords::new(150, 120));
    assert_eq!(node.output_point(), Coords::new(350, 186));

    let edge = ws.diagram().edge(edge).unwrap();
    assert_eq!(edge.source_point(), node.output_point());
    assert_eq!(edge.target_point(), Coords::new(500, 566));
    assert_eq!(
        ws.canvas().shape_of(edge.line()),
        Some(Shape::Curve(edge_curve(Coords::new(350, 186), Coords::new(500, 566))))
    );
}

#[test]
fn test_drag_translates_incoming_edge_end() {
    let (mut ws, _, n2, edge) = connected_pair();

    drag(&mut ws, body_point((500, 500)), (470, 600));

    let node = ws.diagram().node(n2).unwrap();
    let edge = ws.diagram().edge(edge).unwrap();
    assert_eq!(edge.target_point(), node.input_point());
    assert_eq!(edge.target_point(), Coords::new(450, 616));
    assert_eq!(edge.source_point(), Coords::new(300, 166));
}

#[test]
fn test_many_small_moves_equal_one_large_move() {
    let (mut stepped, n1, _, edge) = connected_pair();
    let (mut direct, _, _, _) = connected_pair();

    let start = body_point((100, 100));
    press(&mut stepped, start);
    for step in 1..=25 {
        move_to(&mut stepped, (start.0 + 3 * step, start.1 - 2 * step));
    }
    release(&mut stepped, (start.0 + 75, start.1 - 50));

    drag(&mut direct, start, (start.0 + 75, start.1 - 50));

    let a = stepped.diagram().edge(edge).unwrap();
    let b = direct.diagram().edge(edge).unwrap();
    assert_eq!(a.curve(), b.curve());
    assert_eq!(
        a.source_point(),
        stepped.diagram().node(n1).unwrap().output_point()
    );
    assert_eq!(stepped.snapshot(), direct.snapshot());
}

#[test]
fn test_drag_moves_every_node_primitive() {
    let (mut ws, n1, _) = two_nodes();
    let before: Vec<_> = ws
        .diagram()
        .primitives_of(n1)
        .unwrap()
        .into_iter()
        .map(|p| ws.canvas().shape_of(p).unwrap())
        .collect();

    drag(&mut ws, body_point((100, 100)), (130, 160));

    let after: Vec<_> = ws
        .diagram()
        .primitives_of(n1)
        .unwrap()
        .into_iter()
        .map(|p| ws.canvas().shape_of(p).unwrap())
        .collect();
    let expected: Vec<_> = before
        .iter()
        .map(|s| s.translate(nodeboard::types::Vector::new(10, 10)))
        .collect();
    assert_eq!(after, expected);
}

#[test]
fn test_drag_ends_on_release_and_keeps_selection() {
    let (mut ws, n1, _) = two_nodes();

    press(&mut ws, body_point((100, 100)));
    assert_eq!(ws.state().dragged_item(), Some(n1));
    release(&mut ws, body_point((100, 100)));

    assert!(ws.state().is_idle());
    assert_eq!(ws.selection(), Some(n1));

    // Motion after release moves nothing
    move_to(&mut ws, (400, 400));
    assert_eq!(ws.diagram().node(n1).unwrap().origin(), Coords::new(100, 100));
}

#[test]
fn test_hover_motion_is_ignored() {
    let (mut ws, n1, _) = two_nodes();
    press(&mut ws, body_point((100, 100)));

    ws.handle_pointer_move(&nodeboard::input::MotionEvent::hover(300, 300))
        .unwrap();
    assert_eq!(ws.diagram().node(n1).unwrap().origin(), Coords::new(100, 100));
    assert!(ws.state().is_dragging());
}

#[test]
fn test_dragged_node_stays_hittable_at_new_position() {
    let (mut ws, ids) = TestWorkspaceBuilder::new()
        .with_node((100, 100), Gamma::Blue)
        .build();

    drag(&mut ws, body_point((100, 100)), (820, 850));
    click(&mut ws, (2000, 2000));
    assert_eq!(ws.selection(), None);

    click(&mut ws, body_point((800, 800)));
    assert_eq!(ws.selection(), Some(ids[0]));
}
