//! Spatial registry: identifier allocation, live item storage and the reverse
//! mapping from canvas primitives to the items that own them.
//!
//! The registry is owned by a [`Diagram`](crate::diagram::Diagram), so every
//! editor session (and every test) gets its own counters.

use crate::canvas::PrimitiveId;
use crate::error::{DiagramError, DiagramResult};
use crate::items::{DirectedEdge, Item, Node};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroU64;

/// Kind of item an identifier names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Node,
    Edge,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Node => "node",
            Category::Edge => "edge",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque item identifier: a category plus a 1-based per-category sequence.
///
/// # Invariants
/// - Never reused within a registry, even after the item is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId {
    category: Category,
    sequence: NonZeroU64,
}

impl ItemId {
    #[inline]
    pub fn category(self) -> Category {
        self.category
    }

    #[inline]
    pub fn sequence(self) -> u64 {
        self.sequence.get()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id-{}-{}", self.category, self.sequence)
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Part of an item a primitive renders. Decides what a hit on it can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitRole {
    /// Frame, body and texts of a node.
    Body,
    /// The output anchor handle of a node.
    OutputAnchor,
    /// The curve of a committed edge.
    Edge,
}

impl HitRole {
    pub fn is_selectable(self) -> bool {
        true
    }

    pub fn is_draggable(self) -> bool {
        matches!(self, HitRole::Body | HitRole::OutputAnchor)
    }

    pub fn is_connect_target(self) -> bool {
        matches!(self, HitRole::Body | HitRole::OutputAnchor)
    }

    pub fn is_connect_source_trigger(self) -> bool {
        matches!(self, HitRole::OutputAnchor)
    }
}

/// What the core knows about a primitive on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitTags {
    pub item: ItemId,
    pub role: HitRole,
}

/// Live items keyed by identifier, plus the primitive tags pointing at them.
#[derive(Default)]
pub struct Registry {
    items: HashMap<ItemId, Item>,
    counters: HashMap<Category, u64>,
    tags: HashMap<PrimitiveId, HitTags>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `item` under a fresh identifier and tag its primitives.
    pub fn add(&mut self, item: impl Into<Item>) -> ItemId {
        let item = item.into();
        let category = item.category();
        let counter = self.counters.entry(category).or_insert(0);
        let id = ItemId {
            category,
            sequence: NonZeroU64::MIN.saturating_add(*counter),
        };
        *counter += 1;

        for (primitive, role) in item.hit_regions() {
            self.tags.insert(primitive, HitTags { item: id, role });
        }
        self.items.insert(id, item);
        id
    }

    pub fn get(&self, id: ItemId) -> DiagramResult<&Item> {
        self.items.get(&id).ok_or(DiagramError::NotFound(id))
    }

    pub fn get_mut(&mut self, id: ItemId) -> DiagramResult<&mut Item> {
        self.items.get_mut(&id).ok_or(DiagramError::NotFound(id))
    }

    /// Remove the item together with every primitive tag pointing at it.
    /// Deleting twice fails.
    pub fn delete(&mut self, id: ItemId) -> DiagramResult<Item> {
        let item = self.items.remove(&id).ok_or(DiagramError::NotFound(id))?;
        self.tags.retain(|_, tags| tags.item != id);
        Ok(item)
    }

    pub fn node(&self, id: ItemId) -> DiagramResult<&Node> {
        match self.get(id)? {
            Item::Node(node) => Ok(node),
            _ => Err(DiagramError::UnexpectedCategory {
                id,
                expected: Category::Node,
            }),
        }
    }

    pub fn edge(&self, id: ItemId) -> DiagramResult<&DirectedEdge> {
        match self.get(id)? {
            Item::Edge(edge) => Ok(edge),
            _ => Err(DiagramError::UnexpectedCategory {
                id,
                expected: Category::Edge,
            }),
        }
    }

    pub fn edge_mut(&mut self, id: ItemId) -> DiagramResult<&mut DirectedEdge> {
        match self.get_mut(id)? {
            Item::Edge(edge) => Ok(edge),
            _ => Err(DiagramError::UnexpectedCategory {
                id,
                expected: Category::Edge,
            }),
        }
    }

    /// Identifier of the item owning `primitive`, or `None` for untagged
    /// primitives such as the background grid.
    pub fn resolve_identifier(&self, primitive: PrimitiveId) -> Option<ItemId> {
        self.tags.get(&primitive).map(|tags| tags.item)
    }

    pub fn tags_of(&self, primitive: PrimitiveId) -> Option<HitTags> {
        self.tags.get(&primitive).copied()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Live identifiers in category, then sequence order.
    pub fn ids(&self) -> Vec<ItemId> {
        let mut ids: Vec<_> = self.items.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items.iter().map(|(id, item)| (*id, item))
    }
}
