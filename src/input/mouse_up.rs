//! Pointer-up handling - end drags, commit or drop the connector being drawn.

use crate::canvas::Canvas;
use crate::capabilities::Connector;
use crate::error::DiagramResult;
use crate::input::events::{PointerButton, PointerEvent};
use crate::input::InteractionState;
use crate::palette::Palette;
use crate::profile_scope;
use crate::workspace::Workspace;
use tracing::{debug, trace};

impl<C: Canvas, P: Palette> Workspace<C, P> {
    pub fn handle_pointer_up(&mut self, event: &PointerEvent) -> DiagramResult<()> {
        profile_scope!("handle_pointer_up");

        match event.button {
            PointerButton::Primary => self.primary_up(),
            PointerButton::Secondary => {
                self.viewport.end_scan();
                Ok(())
            }
            PointerButton::Middle => Ok(()),
        }
    }

    fn primary_up(&mut self) -> DiagramResult<()> {
        // The slot is Idle from here on, whatever the outcome below.
        match self.state.take() {
            InteractionState::Idle => {
                trace!("Pointer-up without a gesture, ignored");
                Ok(())
            }

            InteractionState::Dragging { item, .. } => {
                trace!(%item, "Drag finished");
                Ok(())
            }

            InteractionState::Connecting { connector, .. } => {
                let source = connector.source();
                let Some(target) = connector.destroy(self.diagram.canvas_mut()) else {
                    debug!(%source, "Connect gesture ended without a target");
                    return Ok(());
                };

                // The candidate passed the integrity rules when it was targeted.
                self.diagram.set_highlight(target, false)?;
                let edge = self.diagram.connect(source, target)?;
                self.diagram.raise_item(source)?;
                debug!(%edge, %source, %target, "Connect gesture committed");
                Ok(())
            }
        }
    }
}
