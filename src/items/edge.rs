//! Committed directed edge.

use crate::canvas::{Canvas, PrimitiveId, Shape, Stroke, Style};
use crate::capabilities::{Connector, Detachment, Removable, Selectable};
use crate::constants::{COLOR_EDGE, COLOR_SELECTION, EDGE_SELECTION_DASH, EDGE_WIDTH};
use crate::geometry;
use crate::registry::ItemId;
use crate::types::{BezierCoords, Coords, Vector};

/// Arrow from a source node's output anchor to a target node's input anchor.
///
/// The endpoints are stored as absolute coordinates; the drawn curve is always
/// rebuilt from them.
#[derive(Debug)]
pub struct DirectedEdge {
    source: ItemId,
    target: ItemId,
    source_point: Coords,
    target_point: Coords,
    line: PrimitiveId,
    selected: bool,
}

impl DirectedEdge {
    pub fn draw(
        canvas: &mut dyn Canvas,
        source: ItemId,
        source_point: Coords,
        target: ItemId,
        target_point: Coords,
    ) -> Self {
        let line = canvas.create(
            Shape::Curve(geometry::edge_curve(source_point, target_point)),
            Self::style(false),
        );
        Self {
            source,
            target,
            source_point,
            target_point,
            line,
            selected: false,
        }
    }

    fn style(selected: bool) -> Style {
        let stroke = if selected {
            Stroke::solid(COLOR_SELECTION, EDGE_WIDTH).dashed(EDGE_SELECTION_DASH)
        } else {
            Stroke::solid(COLOR_EDGE, EDGE_WIDTH)
        };
        Style::stroked(stroke).with_arrow()
    }

    pub fn target(&self) -> ItemId {
        self.target
    }

    pub fn line(&self) -> PrimitiveId {
        self.line
    }

    fn redraw(&self, canvas: &mut dyn Canvas) {
        canvas.set_shape(self.line, Shape::Curve(self.curve()));
    }
}

impl Connector for DirectedEdge {
    fn source(&self) -> ItemId {
        self.source
    }

    fn source_point(&self) -> Coords {
        self.source_point
    }

    fn target_point(&self) -> Coords {
        self.target_point
    }

    fn curve(&self) -> BezierCoords {
        geometry::edge_curve(self.source_point, self.target_point)
    }

    fn move_target_point(&mut self, delta: Vector, canvas: &mut dyn Canvas) {
        self.target_point += delta;
        self.redraw(canvas);
    }

    fn move_source_point(&mut self, delta: Vector, canvas: &mut dyn Canvas) {
        self.source_point += delta;
        self.redraw(canvas);
    }
}

impl Selectable for DirectedEdge {
    fn draw_selection(&mut self, canvas: &mut dyn Canvas) {
        self.selected = true;
        canvas.set_style(self.line, Self::style(true));
        canvas.raise(&[self.line]);
    }

    fn clear_selection(&mut self, canvas: &mut dyn Canvas) {
        self.selected = false;
        canvas.set_style(self.line, Self::style(false));
    }

    fn is_selected(&self) -> bool {
        self.selected
    }
}

impl Removable for DirectedEdge {
    fn detachment(&self) -> Detachment {
        Detachment::Endpoints {
            source: self.source,
            target: self.target,
        }
    }

    fn erase(&mut self, canvas: &mut dyn Canvas) {
        canvas.delete(self.line);
    }
}
