//! Diagram items placed on the canvas.
//!
//! - `node` - connectible, draggable, selectable, removable box
//! - `edge` - committed directed edge between two nodes
//! - `tentative` - the connector being drawn during a connect gesture

mod edge;
mod node;
mod tentative;

pub use edge::DirectedEdge;
pub use node::Node;
pub use tentative::TentativeConnector;

use crate::canvas::PrimitiveId;
use crate::capabilities::{Connectible, Draggable, Removable, Selectable, Targetable};
use crate::registry::{Category, HitRole};

/// A registered item.
#[derive(Debug)]
pub enum Item {
    Node(Node),
    Edge(DirectedEdge),
}

impl Item {
    pub fn category(&self) -> Category {
        match self {
            Item::Node(_) => Category::Node,
            Item::Edge(_) => Category::Edge,
        }
    }

    /// Primitives drawn for this item, bottom-most first.
    pub fn primitives(&self) -> Vec<PrimitiveId> {
        match self {
            Item::Node(node) => node.primitives().to_vec(),
            Item::Edge(edge) => vec![edge.line()],
        }
    }

    /// Primitives paired with the role a hit on them plays.
    pub fn hit_regions(&self) -> Vec<(PrimitiveId, HitRole)> {
        match self {
            Item::Node(node) => node.hit_regions().to_vec(),
            Item::Edge(edge) => vec![(edge.line(), HitRole::Edge)],
        }
    }

    pub fn as_draggable_mut(&mut self) -> Option<&mut dyn Draggable> {
        match self {
            Item::Node(node) => Some(node),
            Item::Edge(_) => None,
        }
    }

    pub fn is_draggable(&self) -> bool {
        matches!(self, Item::Node(_))
    }

    pub fn as_selectable(&self) -> Option<&dyn Selectable> {
        match self {
            Item::Node(node) => Some(node),
            Item::Edge(edge) => Some(edge),
        }
    }

    pub fn as_selectable_mut(&mut self) -> Option<&mut dyn Selectable> {
        match self {
            Item::Node(node) => Some(node),
            Item::Edge(edge) => Some(edge),
        }
    }

    pub fn as_targetable(&self) -> Option<&dyn Targetable> {
        match self {
            Item::Node(node) => Some(node),
            Item::Edge(_) => None,
        }
    }

    pub fn as_targetable_mut(&mut self) -> Option<&mut dyn Targetable> {
        match self {
            Item::Node(node) => Some(node),
            Item::Edge(_) => None,
        }
    }

    pub fn as_connectible(&self) -> Option<&dyn Connectible> {
        match self {
            Item::Node(node) => Some(node),
            Item::Edge(_) => None,
        }
    }

    pub fn as_connectible_mut(&mut self) -> Option<&mut dyn Connectible> {
        match self {
            Item::Node(node) => Some(node),
            Item::Edge(_) => None,
        }
    }

    pub fn as_removable(&self) -> Option<&dyn Removable> {
        match self {
            Item::Node(node) => Some(node),
            Item::Edge(edge) => Some(edge),
        }
    }

    pub fn as_removable_mut(&mut self) -> Option<&mut dyn Removable> {
        match self {
            Item::Node(node) => Some(node),
            Item::Edge(edge) => Some(edge),
        }
    }
}

impl From<Node> for Item {
    fn from(node: Node) -> Self {
        Item::Node(node)
    }
}

impl From<DirectedEdge> for Item {
    fn from(edge: DirectedEdge) -> Self {
        Item::Edge(edge)
    }
}
