//! Structural view of a diagram.
//!
//! A snapshot is a plain, serialisable copy of what the registry holds: nodes
//! with their live anchor points and connector lists, edges with their
//! endpoints. It is produced for inspection (tests, the demo binary's JSON
//! output) and is never loaded back.

use crate::capabilities::{Connectible, Connector, Selectable, Targetable};
use crate::items::Item;
use crate::registry::{ItemId, Registry};
use crate::types::{Coords, Gamma};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSnapshot {
    pub id: ItemId,
    pub gamma: Gamma,
    pub origin: Coords,
    pub input_point: Coords,
    pub output_point: Coords,
    /// Connectors ending at this node
    pub inputs: Vec<ItemId>,
    /// Connectors starting at this node
    pub outputs: Vec<ItemId>,
    pub selected: bool,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeSnapshot {
    pub id: ItemId,
    pub source: ItemId,
    pub target: ItemId,
    pub source_point: Coords,
    pub target_point: Coords,
    pub selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiagramSnapshot {
    pub nodes: Vec<NodeSnapshot>,
    pub edges: Vec<EdgeSnapshot>,
}

impl DiagramSnapshot {
    /// Capture every live item, ordered by identifier.
    pub fn capture(registry: &Registry) -> Self {
        let mut snapshot = Self::default();

        for id in registry.ids() {
            match registry.get(id) {
                Ok(Item::Node(node)) => snapshot.nodes.push(NodeSnapshot {
                    id,
                    gamma: node.gamma(),
                    origin: node.origin(),
                    input_point: node.input_point(),
                    output_point: node.output_point(),
                    inputs: node.input_connectors().iter().map(|l| l.connector).collect(),
                    outputs: node.output_connectors().iter().map(|l| l.connector).collect(),
                    selected: node.is_selected(),
                    highlighted: node.is_highlighted(),
                }),
                Ok(Item::Edge(edge)) => snapshot.edges.push(EdgeSnapshot {
                    id,
                    source: edge.source(),
                    target: edge.target(),
                    source_point: edge.source_point(),
                    target_point: edge.target_point(),
                    selected: edge.is_selected(),
                }),
                Err(_) => {}
            }
        }

        snapshot
    }

    pub fn node(&self, id: ItemId) -> Option<&NodeSnapshot> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: ItemId) -> Option<&EdgeSnapshot> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
