//! Delete key handling and the cascades it triggers.

use crate::helpers::*;
use nodeboard::capabilities::{Connectible, Connector, Targetable};
use nodeboard::error::DiagramError;
use nodeboard::input::{Key, KeyEvent};
use nodeboard::types::Gamma;

#[test]
fn test_deleting_target_node_removes_edge() {
    let (mut ws, n1, n2, edge) = connected_pair();
    let edge_line = ws.diagram().edge(edge).unwrap().line();

    click(&mut ws, body_point((500, 500)));
    assert_eq!(ws.selection(), Some(n2));
    press_delete(&mut ws);

    assert_eq!(ws.selection(), None);
    assert!(matches!(ws.diagram().registry().get(n2), Err(DiagramError::NotFound(id)) if id == n2));
    assert!(matches!(ws.diagram().registry().get(edge), Err(DiagramError::NotFound(_))));
    assert!(ws.diagram().node(n1).unwrap().output_connectors().is_empty());
    assert!(!ws.diagram().node(n1).unwrap().is_already_connected_with(n2));
    assert!(!ws.canvas().contains(edge_line));
    assert_item_count(&ws, 1);
}

#[test]
fn test_deleting_hub_node_removes_every_attached_edge() {
    let (mut ws, ids) = TestWorkspaceBuilder::new()
        .with_node((100, 100), Gamma::Blue)
        .with_node((500, 500), Gamma::Green)
        .with_node((900, 100), Gamma::Red)
        .with_edge(0, 1)
        .with_edge(1, 2)
        .build();
    let primitives_before = ws.canvas().len();

    click(&mut ws, body_point((500, 500)));
    press_delete(&mut ws);

    assert_item_count(&ws, 2);
    let n1 = ws.diagram().node(ids[0]).unwrap();
    let n3 = ws.diagram().node(ids[2]).unwrap();
    assert!(n1.output_connectors().is_empty());
    assert!(n3.input_connectors().is_empty());
    // five primitives for the node, one per edge
    assert_eq!(ws.canvas().len(), primitives_before - 7);
}

#[test]
fn test_deleting_edge_detaches_both_endpoints() {
    let (mut ws, n1, n2, edge) = connected_pair();

    // Midpoint of the curve, well away from both nodes
    let on_curve = {
        let curve = ws.diagram().edge(edge).unwrap().curve();
        nodeboard::geometry::cubic_point(&curve, 0.5)
    };
    click(&mut ws, (on_curve.0.round() as i32, on_curve.1.round() as i32));
    assert_eq!(ws.selection(), Some(edge));
    assert!(ws.state().is_idle(), "edges are not draggable");

    press_delete(&mut ws);
    assert_item_count(&ws, 2);
    assert!(ws.diagram().node(n1).unwrap().output_connectors().is_empty());
    assert!(ws.diagram().node(n2).unwrap().input_connectors().is_empty());
    assert!(!ws.diagram().node(n2).unwrap().is_already_connected_with(n1));
}

#[test]
fn test_delete_without_selection_is_noop() {
    let (mut ws, _, _, _) = connected_pair();
    click(&mut ws, (1500, 1500));
    assert_eq!(ws.selection(), None);

    press_delete(&mut ws);
    assert_item_count(&ws, 3);
}

#[test]
fn test_other_keys_do_nothing() {
    let (mut ws, n1, _, _) = connected_pair();
    click(&mut ws, body_point((100, 100)));

    ws.handle_key_press(&KeyEvent::named("BackSpace")).unwrap();
    ws.handle_key_press(&KeyEvent::from(Key::Other("x".into()))).unwrap();
    assert_eq!(ws.selection(), Some(n1));
    assert_item_count(&ws, 3);
}

#[test]
fn test_delete_ignored_while_dragging() {
    let (mut ws, n1, _, _) = connected_pair();
    press(&mut ws, body_point((100, 100)));
    assert!(ws.state().is_dragging());

    press_delete(&mut ws);
    assert!(ws.diagram().registry().contains(n1));
    assert_eq!(ws.selection(), Some(n1));

    release(&mut ws, body_point((100, 100)));
    press_delete(&mut ws);
    assert!(!ws.diagram().registry().contains(n1));
}

#[test]
fn test_delete_ignored_while_connecting() {
    let (mut ws, n1, _) = two_nodes();
    click(&mut ws, body_point((100, 100)));
    let anchor = output_anchor(&ws, n1);
    press(&mut ws, anchor);
    assert!(ws.state().is_connecting());

    press_delete(&mut ws);
    assert!(ws.diagram().registry().contains(n1));
    assert!(ws.state().is_connecting());
}

#[test]
fn test_delete_requires_focus() {
    let (mut ws, n1, _) = two_nodes();
    click(&mut ws, body_point((100, 100)));
    ws.blur();

    press_delete(&mut ws);
    assert!(ws.diagram().registry().contains(n1));

    // Any primary press focuses the workspace again
    click(&mut ws, body_point((100, 100)));
    assert!(ws.is_focused());
    press_delete(&mut ws);
    assert!(!ws.diagram().registry().contains(n1));
}

#[test]
fn test_deleted_identifiers_are_not_reused() {
    let (mut ws, n1, n2, _) = connected_pair();
    click(&mut ws, body_point((500, 500)));
    press_delete(&mut ws);

    let n3 = ws.add_node((500, 500).into(), Gamma::Gray);
    assert_ne!(n3, n2);
    assert_eq!(n3.sequence(), 3);
    let edge = ws.connect(n1, n3).unwrap();
    assert_eq!(edge.sequence(), 2);
}
