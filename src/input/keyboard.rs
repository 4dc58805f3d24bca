//! Key-press handling.

use crate::canvas::Canvas;
use crate::error::DiagramResult;
use crate::input::events::{Key, KeyEvent};
use crate::palette::Palette;
use crate::workspace::Workspace;
use tracing::{debug, trace};

impl<C: Canvas, P: Palette> Workspace<C, P> {
    pub fn handle_key_press(&mut self, event: &KeyEvent) -> DiagramResult<()> {
        if !self.focused {
            return Ok(());
        }

        match &event.key {
            Key::Delete => self.delete_selection(),
            Key::Other(_) => Ok(()),
        }
    }

    /// Delete the selected item. Ignored while a drag or connect gesture runs,
    /// since the gesture's slots may reference the selection.
    fn delete_selection(&mut self) -> DiagramResult<()> {
        if !self.state.is_idle() {
            trace!(state = self.state.name(), "Delete ignored during a gesture");
            return Ok(());
        }
        let Some(id) = self.selection else {
            return Ok(());
        };
        if self.diagram.registry().get(id)?.as_removable().is_none() {
            return Ok(());
        }

        self.selection = None;
        self.diagram.delete_item(id)?;
        debug!(%id, "Selection deleted");
        Ok(())
    }
}
