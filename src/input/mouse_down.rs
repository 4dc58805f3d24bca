//! Pointer-down handling - node spawning, selection, drag and connect initiation.
//!
//! ## Performance Notes
//!
//! Pointer-down runs one hit test: a nearest-primitive query through the
//! canvas' R-tree, then a tag lookup in the registry. Enable profiling with
//! `cargo build --features profiling` to see timing.

use crate::canvas::Canvas;
use crate::error::DiagramResult;
use crate::input::events::{PointerButton, PointerEvent};
use crate::items::TentativeConnector;
use crate::palette::Palette;
use crate::profile_scope;
use crate::registry::HitTags;
use crate::workspace::Workspace;
use tracing::{debug, trace};

impl<C: Canvas, P: Palette> Workspace<C, P> {
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) -> DiagramResult<()> {
        profile_scope!("handle_pointer_down");

        match event.button {
            PointerButton::Primary => self.primary_down(event),
            PointerButton::Secondary => {
                self.viewport.scan_mark(event.position);
                Ok(())
            }
            PointerButton::Middle => Ok(()),
        }
    }

    fn primary_down(&mut self, event: &PointerEvent) -> DiagramResult<()> {
        self.focus();

        // A gesture still running here lost its pointer-up.
        if !self.state.is_idle() {
            trace!(state = self.state.name(), "Pointer-down during a gesture, abandoning it");
            self.abandon_gesture()?;
        }

        let pos = self.viewport.to_canvas_space(event.position);

        if let Some(gamma) = self.palette.pop_selected_style() {
            let id = self.diagram.add_node(pos, gamma);
            debug!(%id, "Node spawned from palette");
        }

        let hit = self.diagram.hit_at(pos, self.config.hit_tolerance);
        trace!(x = pos.x, y = pos.y, ?hit, "Pointer-down hit test");

        if let Some(tags) = hit {
            if self.is_connect_trigger(tags) {
                let source = tags.item;
                let source_point = self.diagram.connectible(source)?.output_point();
                let connector =
                    TentativeConnector::begin(self.diagram.canvas_mut(), source, source_point);
                self.state.start_connecting(connector, pos);
                debug!(%source, "Connect gesture started");
                return Ok(());
            }
        }

        self.deselect()?;

        let Some(tags) = hit else {
            return Ok(());
        };
        if !tags.role.is_selectable() {
            return Ok(());
        }
        if self.diagram.registry().get(tags.item)?.as_selectable().is_none() {
            return Ok(());
        }
        self.select(tags.item)?;

        if tags.role.is_draggable() && self.diagram.registry().get(tags.item)?.is_draggable() {
            self.state.start_dragging(tags.item, pos);
            trace!(item = %tags.item, "Drag started");
        }
        Ok(())
    }

    /// A hit starts a connector when it lands on the selected node's output anchor.
    fn is_connect_trigger(&self, tags: HitTags) -> bool {
        tags.role.is_connect_source_trigger()
            && self.selection == Some(tags.item)
            && self
                .diagram
                .registry()
                .get(tags.item)
                .is_ok_and(|item| item.as_connectible().is_some())
    }
}
