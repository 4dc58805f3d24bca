//! Rendering surface contract.
//!
//! The core never draws pixels itself. It asks a [`Canvas`] to create, move,
//! restyle and delete primitives, and to answer hit-test queries with opaque
//! [`PrimitiveId`] handles. Which logical item a handle belongs to is tracked
//! by the [`Registry`](crate::registry::Registry), not by the surface.
//!
//! [`MemoryCanvas`] is a headless implementation backed by an R-tree, used by
//! the demo binary and the tests.

mod memory;
mod spatial_index;

pub use memory::MemoryCanvas;
pub use spatial_index::{SpatialEntry, SpatialIndex};

use crate::geometry;
use crate::types::{BezierCoords, Color, Coords, Rect, Vector};

/// Opaque handle of a primitive on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimitiveId(u64);

impl PrimitiveId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Glyph box used to approximate text extents.
const GLYPH_WIDTH: i32 = 7;
const LINE_HEIGHT: i32 = 14;

/// Geometry of a primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Rectangle(Rect),
    /// Text centred on `at`.
    Text { at: Coords, text: String },
    Line { from: Coords, to: Coords },
    Curve(BezierCoords),
}

impl Shape {
    pub fn translate(&self, delta: Vector) -> Shape {
        match self {
            Shape::Rectangle(rect) => Shape::Rectangle(rect.translate(delta)),
            Shape::Text { at, text } => Shape::Text {
                at: *at + delta,
                text: text.clone(),
            },
            Shape::Line { from, to } => Shape::Line {
                from: *from + delta,
                to: *to + delta,
            },
            Shape::Curve(curve) => Shape::Curve(curve.translate(delta)),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(rect) => *rect,
            Shape::Text { at, text } => {
                let columns = text.lines().map(|l| l.chars().count()).max().unwrap_or(0) as i32;
                let rows = text.lines().count().max(1) as i32;
                Rect::centered(*at, columns * GLYPH_WIDTH, rows * LINE_HEIGHT)
            }
            Shape::Line { from, to } => Rect::from_corners(*from, *to),
            Shape::Curve(curve) => curve.bounds(),
        }
    }

    /// Distance from `p` to the primitive; filled shapes are zero inside.
    pub fn distance_to(&self, p: Coords) -> f32 {
        match self {
            Shape::Rectangle(_) | Shape::Text { .. } => self.bounds().distance_to(p),
            Shape::Line { from, to } => geometry::segment_distance(
                (p.x as f32, p.y as f32),
                (from.x as f32, from.y as f32),
                (to.x as f32, to.y as f32),
            ),
            Shape::Curve(curve) => geometry::curve_distance(curve, p),
        }
    }
}

/// Outline or line stroke. An empty `dash` is a solid stroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stroke {
    pub color: Color,
    pub width: u32,
    pub dash: Vec<u32>,
}

impl Stroke {
    pub fn solid(color: Color, width: u32) -> Self {
        Self {
            color,
            width,
            dash: Vec::new(),
        }
    }

    pub fn dashed(mut self, pattern: &[u32]) -> Self {
        self.dash = pattern.to_vec();
        self
    }

    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}

/// Visual attributes of a primitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub fill: Option<Color>,
    pub outline: Option<Stroke>,
    /// Draw an arrow head at the end of a line or curve.
    pub arrow: bool,
}

impl Style {
    pub fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            ..Self::default()
        }
    }

    pub fn stroked(stroke: Stroke) -> Self {
        Self {
            outline: Some(stroke),
            ..Self::default()
        }
    }

    pub fn with_outline(mut self, stroke: Stroke) -> Self {
        self.outline = Some(stroke);
        self
    }

    pub fn with_arrow(mut self) -> Self {
        self.arrow = true;
        self
    }
}

/// Drawing surface the diagram renders onto.
///
/// Operations on unknown handles are ignored, the way a retained-mode canvas
/// ignores stale item ids.
pub trait Canvas {
    /// Create a primitive on top of everything drawn so far.
    fn create(&mut self, shape: Shape, style: Style) -> PrimitiveId;

    fn set_shape(&mut self, id: PrimitiveId, shape: Shape);

    fn set_style(&mut self, id: PrimitiveId, style: Style);

    fn move_by(&mut self, id: PrimitiveId, delta: Vector);

    /// Raise the given primitives above all others, keeping their relative order.
    fn raise(&mut self, ids: &[PrimitiveId]);

    fn delete(&mut self, id: PrimitiveId);

    /// Take keyboard focus.
    fn focus(&mut self);

    /// Top-most primitive within `tolerance` of `point`. Every primitive inside
    /// that halo counts as a direct hit, as with a Tk `find_closest` halo.
    fn nearest_primitive_at(&self, point: Coords, tolerance: i32) -> Option<PrimitiveId>;

    /// Primitives whose bounding boxes meet `rect`, bottom-most first.
    fn overlapping(&self, rect: Rect) -> Vec<PrimitiveId>;

    fn shape_of(&self, id: PrimitiveId) -> Option<Shape>;

    fn style_of(&self, id: PrimitiveId) -> Option<Style>;
}
