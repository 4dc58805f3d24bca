//! Connector drawn while the user drags from a node's output anchor.

use crate::canvas::{Canvas, PrimitiveId, Shape, Stroke, Style};
use crate::capabilities::Connector;
use crate::connection::{self, Candidacy};
use crate::constants::{COLOR_TARGET_FOUND, COLOR_TARGET_NOT_FOUND, TENTATIVE_WIDTH};
use crate::diagram::Diagram;
use crate::error::{Capability, DiagramError, DiagramResult};
use crate::geometry;
use crate::registry::ItemId;
use crate::types::{BezierCoords, Coords, Vector};
use tracing::trace;

/// Transient edge with a fixed source and a pointer-following free end.
///
/// Never registered: its primitive carries no hit tags, so probes under the
/// pointer never resolve to it.
#[derive(Debug)]
pub struct TentativeConnector {
    source: ItemId,
    source_point: Coords,
    free_end: Coords,
    target: Option<ItemId>,
    line: PrimitiveId,
}

impl TentativeConnector {
    /// Start a connector at `source_point`, the output anchor of `source`.
    pub fn begin(canvas: &mut dyn Canvas, source: ItemId, source_point: Coords) -> Self {
        let line = canvas.create(
            Shape::Curve(geometry::tentative_curve(source_point, source_point)),
            Self::style(false),
        );
        Self {
            source,
            source_point,
            free_end: source_point,
            target: None,
            line,
        }
    }

    fn style(target_found: bool) -> Style {
        let color = if target_found {
            COLOR_TARGET_FOUND
        } else {
            COLOR_TARGET_NOT_FOUND
        };
        Style::stroked(Stroke::solid(color, TENTATIVE_WIDTH)).with_arrow()
    }

    pub fn target(&self) -> Option<ItemId> {
        self.target
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    pub fn line(&self) -> PrimitiveId {
        self.line
    }

    pub fn mark_target_found(&self, canvas: &mut dyn Canvas) {
        canvas.set_style(self.line, Self::style(true));
    }

    pub fn mark_target_not_found(&self, canvas: &mut dyn Canvas) {
        canvas.set_style(self.line, Self::style(false));
    }

    /// Offer `candidate` as the target. Returns whether it is (now) the held target.
    pub fn try_to_target<C: Canvas>(
        &mut self,
        candidate: ItemId,
        diagram: &mut Diagram<C>,
    ) -> DiagramResult<bool> {
        let targetable = diagram
            .registry()
            .get(candidate)?
            .as_targetable()
            .ok_or(DiagramError::MissingCapability {
                id: candidate,
                capability: Capability::Targetable,
            })?;

        match connection::evaluate(self.source, self.target, candidate, targetable) {
            Candidacy::Rejected(reason) => {
                trace!(%candidate, %reason, "Candidate rejected");
                Ok(false)
            }
            Candidacy::Unchanged => Ok(true),
            Candidacy::Accepted => {
                if let Some(previous) = self.target.take() {
                    diagram.set_highlight(previous, false)?;
                }
                diagram.set_highlight(candidate, true)?;
                self.target = Some(candidate);
                self.mark_target_found(diagram.canvas_mut());
                trace!(%candidate, "Candidate targeted");
                Ok(true)
            }
        }
    }

    /// Drop the held target, if any, and show "target not found".
    pub fn clear_target<C: Canvas>(&mut self, diagram: &mut Diagram<C>) -> DiagramResult<()> {
        if let Some(previous) = self.target.take() {
            diagram.set_highlight(previous, false)?;
        }
        self.mark_target_not_found(diagram.canvas_mut());
        Ok(())
    }

    /// Remove the connector from the canvas, handing back the held target.
    pub fn destroy(self, canvas: &mut dyn Canvas) -> Option<ItemId> {
        canvas.delete(self.line);
        self.target
    }

    fn redraw(&self, canvas: &mut dyn Canvas) {
        canvas.set_shape(self.line, Shape::Curve(self.curve()));
    }
}

impl Connector for TentativeConnector {
    fn source(&self) -> ItemId {
        self.source
    }

    fn source_point(&self) -> Coords {
        self.source_point
    }

    fn target_point(&self) -> Coords {
        self.free_end
    }

    fn curve(&self) -> BezierCoords {
        geometry::tentative_curve(self.source_point, self.free_end)
    }

    fn move_target_point(&mut self, delta: Vector, canvas: &mut dyn Canvas) {
        self.free_end += delta;
        self.redraw(canvas);
    }

    fn move_source_point(&mut self, delta: Vector, canvas: &mut dyn Canvas) {
        self.source_point += delta;
        self.redraw(canvas);
    }
}
