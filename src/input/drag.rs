//! Pointer-move handling - item dragging, connector growth, panning.
//!
//! ## Performance Notes
//!
//! Motion events arrive many times per second during a gesture. Key points:
//! - Early exit for motion without a held button
//! - One probe query per motion while connecting
//! - Connector curves are rebuilt only for the edges attached to the dragged node
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::canvas::Canvas;
use crate::capabilities::Connector;
use crate::constants::PAN_GAIN;
use crate::error::DiagramResult;
use crate::input::events::{MotionEvent, PointerButton};
use crate::input::InteractionState;
use crate::palette::Palette;
use crate::profile_scope;
use crate::types::Rect;
use crate::workspace::Workspace;
use tracing::trace;

impl<C: Canvas, P: Palette> Workspace<C, P> {
    pub fn handle_pointer_move(&mut self, event: &MotionEvent) -> DiagramResult<()> {
        profile_scope!("handle_pointer_move");

        match event.held {
            Some(PointerButton::Primary) => self.primary_motion(event),
            Some(PointerButton::Secondary) => {
                self.viewport.scan_dragto(event.position, PAN_GAIN);
                Ok(())
            }
            Some(PointerButton::Middle) | None => Ok(()),
        }
    }

    fn primary_motion(&mut self, event: &MotionEvent) -> DiagramResult<()> {
        let pos = self.viewport.to_canvas_space(event.position);
        let probe_size = self.config.probe_size;

        match &mut self.state {
            InteractionState::Idle => {
                trace!("Motion with no gesture in progress, ignored");
                Ok(())
            }

            InteractionState::Dragging { item, last_pos } => {
                let delta = pos - *last_pos;
                *last_pos = pos;
                if delta.is_zero() {
                    return Ok(());
                }
                self.diagram.move_item(*item, delta)
            }

            InteractionState::Connecting {
                connector,
                last_pos,
            } => {
                let delta = pos - *last_pos;
                *last_pos = pos;
                connector.move_target_point(delta, self.diagram.canvas_mut());

                profile_scope!("probe_targets");
                let probe = Rect::from_origin_size(pos, probe_size, probe_size);
                for candidate in self.diagram.targetable_items_in(probe) {
                    if connector.try_to_target(candidate, &mut self.diagram)? {
                        return Ok(());
                    }
                }

                if connector.has_target() {
                    trace!("Pointer left the candidate");
                }
                connector.clear_target(&mut self.diagram)
            }
        }
    }
}
