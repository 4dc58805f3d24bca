//! Headless retained-mode canvas.

use super::{Canvas, PrimitiveId, Shape, SpatialIndex, Style};
use crate::profile_scope;
use crate::types::{Coords, Rect, Vector};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Primitive {
    shape: Shape,
    style: Style,
    /// Draw order, larger is on top.
    z: u64,
}

/// In-memory [`Canvas`] that keeps every primitive's shape, style and draw
/// order and answers hit tests through a [`SpatialIndex`].
#[derive(Default)]
pub struct MemoryCanvas {
    primitives: HashMap<PrimitiveId, Primitive>,
    index: SpatialIndex,
    next_id: u64,
    next_z: u64,
    focus_requests: u32,
}

impl MemoryCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn contains(&self, id: PrimitiveId) -> bool {
        self.primitives.contains_key(&id)
    }

    /// How many times focus was requested.
    pub fn focus_requests(&self) -> u32 {
        self.focus_requests
    }

    /// All primitives, bottom-most first.
    pub fn draw_order(&self) -> Vec<PrimitiveId> {
        let mut ids: Vec<_> = self.primitives.keys().copied().collect();
        self.sort_by_z(&mut ids);
        ids
    }

    /// Position of `id` in the draw order, 0 being the bottom.
    pub fn stacking_index(&self, id: PrimitiveId) -> Option<usize> {
        self.draw_order().iter().position(|p| *p == id)
    }

    fn sort_by_z(&self, ids: &mut [PrimitiveId]) {
        ids.sort_by_key(|id| self.primitives.get(id).map_or(0, |p| p.z));
    }

    fn bump_z(&mut self) -> u64 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    fn reindex(&mut self, id: PrimitiveId) {
        if let Some(primitive) = self.primitives.get(&id) {
            let bounds = primitive.shape.bounds();
            self.index.update(id, bounds);
        }
    }
}

impl Canvas for MemoryCanvas {
    fn create(&mut self, shape: Shape, style: Style) -> PrimitiveId {
        self.next_id += 1;
        let id = PrimitiveId::new(self.next_id);
        let z = self.bump_z();
        self.index.insert(id, shape.bounds());
        self.primitives.insert(id, Primitive { shape, style, z });
        id
    }

    fn set_shape(&mut self, id: PrimitiveId, shape: Shape) {
        if let Some(primitive) = self.primitives.get_mut(&id) {
            primitive.shape = shape;
            self.reindex(id);
        }
    }

    fn set_style(&mut self, id: PrimitiveId, style: Style) {
        if let Some(primitive) = self.primitives.get_mut(&id) {
            primitive.style = style;
        }
    }

    fn move_by(&mut self, id: PrimitiveId, delta: Vector) {
        if let Some(primitive) = self.primitives.get_mut(&id) {
            primitive.shape = primitive.shape.translate(delta);
            self.reindex(id);
        }
    }

    fn raise(&mut self, ids: &[PrimitiveId]) {
        let mut ids: Vec<_> = ids
            .iter()
            .copied()
            .filter(|id| self.primitives.contains_key(id))
            .collect();
        self.sort_by_z(&mut ids);
        for id in ids {
            let z = self.bump_z();
            if let Some(primitive) = self.primitives.get_mut(&id) {
                primitive.z = z;
            }
        }
    }

    fn delete(&mut self, id: PrimitiveId) {
        if self.primitives.remove(&id).is_some() {
            self.index.remove(id);
        }
    }

    fn focus(&mut self) {
        self.focus_requests += 1;
    }

    fn nearest_primitive_at(&self, point: Coords, tolerance: i32) -> Option<PrimitiveId> {
        profile_scope!("nearest_primitive_at");

        let window = Rect::from_corners(point, point).inflate(tolerance.max(0));
        let limit = tolerance.max(0) as f32;

        self.index
            .query_rect(window)
            .into_iter()
            .filter_map(|id| {
                let primitive = self.primitives.get(&id)?;
                let distance = primitive.shape.distance_to(point);
                // Anything inside the halo is a direct hit
                let score = (distance - limit).max(0.0);
                (distance <= limit).then_some((id, score, primitive.z))
            })
            .min_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| b.2.cmp(&a.2))
            })
            .map(|(id, _, _)| id)
    }

    fn overlapping(&self, rect: Rect) -> Vec<PrimitiveId> {
        profile_scope!("overlapping");

        let mut ids = self.index.query_rect(rect);
        self.sort_by_z(&mut ids);
        ids
    }

    fn shape_of(&self, id: PrimitiveId) -> Option<Shape> {
        self.primitives.get(&id).map(|p| p.shape.clone())
    }

    fn style_of(&self, id: PrimitiveId) -> Option<Style> {
        self.primitives.get(&id).map(|p| p.style.clone())
    }
}
