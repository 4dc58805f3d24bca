//! Structural snapshots of a diagram.

use crate::helpers::*;
use insta::assert_json_snapshot;
use nodeboard::types::Coords;

#[test]
fn test_edge_snapshot() {
    let (ws, _, _, edge) = connected_pair();
    let snapshot = ws.snapshot();

    assert_json_snapshot!(snapshot.edge(edge).unwrap(), @r#"
    {
      "id": "id-edge-1",
      "source": "id-node-1",
      "target": "id-node-2",
      "source_point": {
        "x": 300,
        "y": 166
      },
      "target_point": {
        "x": 500,
        "y": 566
      },
      "selected": false
    }
    "#);
}

#[test]
fn test_node_snapshot() {
    let (ws, n1, _, _) = connected_pair();
    let snapshot = ws.snapshot();

    assert_json_snapshot!(snapshot.node(n1).unwrap(), @r#"
    {
      "id": "id-node-1",
      "gamma": "BLUE",
      "origin": {
        "x": 100,
        "y": 100
      },
      "input_point": {
        "x": 100,
        "y": 166
      },
      "output_point": {
        "x": 300,
        "y": 166
      },
      "inputs": [],
      "outputs": [
        "id-edge-1"
      ],
      "selected": false,
      "highlighted": false
    }
    "#);
}

#[test]
fn test_snapshot_reflects_selection_and_moves() {
    let (mut ws, n1, n2, edge) = connected_pair();
    drag(&mut ws, body_point((500, 500)), (540, 560));

    let snapshot = ws.snapshot();
    let target = snapshot.node(n2).unwrap();
    assert!(target.selected);
    assert_eq!(target.origin, Coords::new(520, 510));
    assert_eq!(snapshot.edge(edge).unwrap().target_point, target.input_point);
    assert!(!snapshot.node(n1).unwrap().selected);
}

#[test]
fn test_snapshot_ordering_and_json() {
    let (ws, n1, n2, edge) = connected_pair();
    let snapshot = ws.snapshot();

    let ids: Vec<_> = snapshot.nodes.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![n1, n2]);
    assert_eq!(snapshot.edges[0].id, edge);

    let value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
    assert_eq!(value["edges"][0]["source"], "id-node-1");
    assert_eq!(value["nodes"][1]["inputs"][0], "id-edge-1");
}
