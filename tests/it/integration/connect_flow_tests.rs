//! Connect gesture: starting from the selected node's output anchor, growing
//! the tentative connector, candidacy and commit.

use crate::helpers::*;
use nodeboard::capabilities::{Connectible, Connector, Targetable};
use nodeboard::canvas::Canvas;
use nodeboard::constants::{COLOR_TARGET_FOUND, COLOR_TARGET_NOT_FOUND};
use nodeboard::types::{Coords, Gamma};

#[test]
fn test_connect_flow_commits_edge() {
    let (mut ws, n1, n2) = two_nodes();

    click(&mut ws, body_point((100, 100)));
    assert_eq!(ws.selection(), Some(n1));
    assert!(ws.state().is_idle());

    let anchor = output_anchor(&ws, n1);
    assert_eq!(anchor, (300, 166));
    press(&mut ws, anchor);
    assert!(ws.state().is_connecting());
    assert_eq!(ws.state().connect_source(), Some(n1));
    assert_eq!(ws.selection(), Some(n1), "starting a connector keeps the selection");

    move_to(&mut ws, body_point((500, 500)));
    assert_eq!(ws.state().candidate(), Some(n2));
    assert!(ws.diagram().node(n2).unwrap().is_highlighted());
    let line = ws.state().tentative().unwrap().line();
    let style = ws.canvas().style_of(line).unwrap();
    assert_eq!(style.outline.unwrap().color, COLOR_TARGET_FOUND);

    release(&mut ws, body_point((500, 500)));
    assert!(ws.state().is_idle());
    assert!(!ws.canvas().contains(line), "tentative connector is destroyed");
    assert!(!ws.diagram().node(n2).unwrap().is_highlighted());
    assert_eq!(ws.selection(), Some(n1));

    let source = ws.diagram().node(n1).unwrap();
    assert!(source.is_already_connected_with(n2));
    assert_eq!(source.output_connectors().len(), 1);
    let edge_id = source.output_connectors()[0].connector;

    let edge = ws.diagram().edge(edge_id).unwrap();
    assert_eq!(edge.source(), n1);
    assert_eq!(edge.target(), n2);
    assert_eq!(edge.source_point(), Coords::new(300, 166));
    assert_eq!(edge.target_point(), Coords::new(500, 566));
    assert_eq!(ws.diagram().node(n2).unwrap().input_connectors()[0].connector, edge_id);
}

#[test]
fn test_tentative_connector_is_not_registered() {
    let (mut ws, n1, _) = two_nodes();
    click(&mut ws, body_point((100, 100)));
    let before = ws.canvas().len();

    let anchor = output_anchor(&ws, n1);
    press(&mut ws, anchor);
    assert_item_count(&ws, 2);
    assert_eq!(ws.canvas().len(), before + 1);

    let line = ws.state().tentative().unwrap().line();
    assert_eq!(ws.diagram().registry().resolve_identifier(line), None);
}

#[test]
fn test_release_without_candidate_commits_nothing() {
    let (mut ws, n1, _) = two_nodes();
    connect_by_gesture(&mut ws, n1, (100, 100), (900, 150));

    assert!(ws.state().is_idle());
    assert_item_count(&ws, 2);
    assert!(ws.diagram().node(n1).unwrap().output_connectors().is_empty());
}

#[test]
fn test_free_end_follows_pointer() {
    let (mut ws, n1, _) = two_nodes();
    click(&mut ws, body_point((100, 100)));
    press(&mut ws, (300, 166));

    move_to(&mut ws, (350, 200));
    move_to(&mut ws, (420, 260));
    let connector = ws.state().tentative().unwrap();
    assert_eq!(connector.source_point(), Coords::new(300, 166));
    assert_eq!(connector.target_point(), Coords::new(420, 260));
    assert_eq!(connector.source(), n1);
}

#[test]
fn test_self_is_never_a_candidate() {
    let (mut ws, n1, _) = two_nodes();
    click(&mut ws, body_point((100, 100)));
    press(&mut ws, (300, 166));

    move_to(&mut ws, body_point((100, 100)));
    assert_eq!(ws.state().candidate(), None);
    assert!(!ws.diagram().node(n1).unwrap().is_highlighted());
    let line = ws.state().tentative().unwrap().line();
    assert_eq!(
        ws.canvas().style_of(line).unwrap().outline.unwrap().color,
        COLOR_TARGET_NOT_FOUND
    );

    release(&mut ws, body_point((100, 100)));
    assert_item_count(&ws, 2);
}

#[test]
fn test_duplicate_edge_rejected_in_both_directions() {
    let (mut ws, n1, n2, _) = connected_pair();

    // Same direction again
    connect_by_gesture(&mut ws, n1, (100, 100), body_point((500, 500)));
    assert_eq!(ws.diagram().node(n1).unwrap().output_connectors().len(), 1);

    // Reverse direction
    click(&mut ws, body_point((500, 500)));
    let anchor = output_anchor(&ws, n2);
    press(&mut ws, anchor);
    move_to(&mut ws, body_point((100, 100)));
    assert_eq!(ws.state().candidate(), None);
    release(&mut ws, body_point((100, 100)));

    assert_item_count(&ws, 3);
    assert!(ws.diagram().node(n2).unwrap().output_connectors().is_empty());
}

#[test]
fn test_candidate_switches_and_clears() {
    let (mut ws, ids) = TestWorkspaceBuilder::new()
        .with_node((100, 100), Gamma::Blue)
        .with_node((500, 500), Gamma::Green)
        .with_node((500, 100), Gamma::Red)
        .build();
    let (n1, n2, n3) = (ids[0], ids[1], ids[2]);

    click(&mut ws, body_point((100, 100)));
    let anchor = output_anchor(&ws, n1);
    press(&mut ws, anchor);

    move_to(&mut ws, body_point((500, 500)));
    assert_eq!(ws.state().candidate(), Some(n2));

    // Re-hovering the same node keeps it
    move_to(&mut ws, (530, 560));
    assert_eq!(ws.state().candidate(), Some(n2));
    assert!(ws.diagram().node(n2).unwrap().is_highlighted());

    move_to(&mut ws, body_point((500, 100)));
    assert_eq!(ws.state().candidate(), Some(n3));
    assert!(!ws.diagram().node(n2).unwrap().is_highlighted());
    assert!(ws.diagram().node(n3).unwrap().is_highlighted());

    move_to(&mut ws, (900, 900));
    assert_eq!(ws.state().candidate(), None);
    assert!(!ws.diagram().node(n3).unwrap().is_highlighted());

    move_to(&mut ws, body_point((500, 100)));
    release(&mut ws, body_point((500, 100)));
    assert!(ws.diagram().node(n1).unwrap().is_already_connected_with(n3));
    assert!(!ws.diagram().node(n1).unwrap().is_already_connected_with(n2));
}

#[test]
fn test_anchor_of_unselected_node_selects_instead() {
    let (mut ws, n1, n2) = two_nodes();
    click(&mut ws, body_point((500, 500)));
    assert_eq!(ws.selection(), Some(n2));

    press(&mut ws, (300, 166));
    assert!(!ws.state().is_connecting());
    assert!(ws.state().is_dragging());
    assert_eq!(ws.selection(), Some(n1));
    release(&mut ws, (300, 166));
}

#[test]
fn test_commit_raises_source_node_above_new_edge() {
    let (mut ws, n1, _) = two_nodes();
    connect_by_gesture(&mut ws, n1, (100, 100), body_point((500, 500)));

    let node = ws.diagram().node(n1).unwrap();
    let edge = ws.diagram().edge(node.output_connectors()[0].connector).unwrap();
    let frame = ws.canvas().stacking_index(node.frame_primitive());
    let line = ws.canvas().stacking_index(edge.line());
    assert!(frame > line);
}

#[test]
fn test_press_near_anchor_over_grid_line_starts_connector() {
    let (mut ws, n1, _) = two_nodes();
    click(&mut ws, body_point((100, 100)));

    // One unit above the anchor handle, exactly on the grid line at y = 160
    press(&mut ws, (302, 160));
    assert!(ws.state().is_connecting());
    assert_eq!(ws.state().connect_source(), Some(n1));
    assert_eq!(ws.selection(), Some(n1));
}
