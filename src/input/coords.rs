//! Viewport to canvas coordinate conversion.
//!
//! Pointer events arrive relative to the visible area. The visible area is a
//! window onto the larger canvas whose top-left corner sits at `origin` in
//! canvas space, confined to the scroll region.

use crate::types::{Coords, Rect, Vector};

/// Scroll state of the visible area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// Canvas-space position of the visible area's top-left corner
    origin: Coords,
    /// Size of the visible area
    size: Vector,
    /// Area the view may scroll over
    scroll_region: Rect,
    /// Pan anchor: pointer position and origin when panning started
    mark: Option<(Coords, Coords)>,
}

impl Viewport {
    pub fn new(scroll_region: Rect, size: Vector) -> Self {
        let mut viewport = Self {
            origin: Coords::ORIGIN,
            size,
            scroll_region,
            mark: None,
        };
        viewport.origin = viewport.confine(Coords::ORIGIN);
        viewport
    }

    /// Scroll region of a `width` x `height` canvas with `margin` of empty field around it.
    pub fn scroll_region_for(width: i32, height: i32, margin: i32) -> Rect {
        Rect::from_corners(
            Coords::new(-margin, -margin),
            Coords::new(width + margin, height + margin),
        )
    }

    #[inline]
    pub fn origin(&self) -> Coords {
        self.origin
    }

    #[inline]
    pub fn size(&self) -> Vector {
        self.size
    }

    /// Convert a viewport-relative point to canvas space.
    #[inline]
    pub fn to_canvas_space(&self, viewport_point: Coords) -> Coords {
        viewport_point + (self.origin - Coords::ORIGIN)
    }

    /// Convert a canvas point to viewport-relative coordinates.
    #[inline]
    pub fn to_viewport_space(&self, canvas_point: Coords) -> Coords {
        canvas_point - (self.origin - Coords::ORIGIN)
    }

    /// Remember where panning started.
    pub fn scan_mark(&mut self, viewport_point: Coords) {
        self.mark = Some((viewport_point, self.origin));
    }

    /// Scroll so the content follows the pointer by `gain` times its travel
    /// since [`scan_mark`](Self::scan_mark). Does nothing without a mark.
    pub fn scan_dragto(&mut self, viewport_point: Coords, gain: i32) {
        let Some((mark, mark_origin)) = self.mark else {
            return;
        };
        let travel = viewport_point - mark;
        let wanted = Coords::new(
            mark_origin.x - gain * travel.dx,
            mark_origin.y - gain * travel.dy,
        );
        self.origin = self.confine(wanted);
    }

    pub fn end_scan(&mut self) {
        self.mark = None;
    }

    /// Clamp an origin so the visible area stays inside the scroll region.
    fn confine(&self, origin: Coords) -> Coords {
        let region = self.scroll_region;
        let max_x = (region.max.x - self.size.dx).max(region.min.x);
        let max_y = (region.max.y - self.size.dy).max(region.min.y);
        Coords::new(
            origin.x.clamp(region.min.x, max_x),
            origin.y.clamp(region.min.y, max_y),
        )
    }
}
