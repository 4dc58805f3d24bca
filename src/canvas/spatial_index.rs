//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for primitive hit testing on the
//! headless canvas. This keeps point and probe queries O(log n).

use super::PrimitiveId;
use crate::types::Rect;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing a primitive's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub id: PrimitiveId,
    pub bounds: Rect,
}

impl SpatialEntry {
    pub fn new(id: PrimitiveId, bounds: Rect) -> Self {
        Self { id, bounds }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[i32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.min.x, self.bounds.min.y],
            [self.bounds.max.x, self.bounds.max.y],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Spatial index for canvas primitives using an R-tree.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<PrimitiveId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the box of `id`.
    pub fn insert(&mut self, id: PrimitiveId, bounds: Rect) {
        if let Some(old_entry) = self.entries.remove(&id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(id, bounds);
        self.tree.insert(entry);
        self.entries.insert(id, entry);
    }

    pub fn remove(&mut self, id: PrimitiveId) -> bool {
        if let Some(entry) = self.entries.remove(&id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn update(&mut self, id: PrimitiveId, bounds: Rect) {
        self.insert(id, bounds);
    }

    /// Query all primitives whose boxes intersect a rectangular region.
    pub fn query_rect(&self, rect: Rect) -> Vec<PrimitiveId> {
        let envelope = AABB::from_corners([rect.min.x, rect.min.y], [rect.max.x, rect.max.y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
