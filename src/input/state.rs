//! Interaction state machine - one explicit mode for the primary button.
//!
//! Selection is not part of the state: it is an orthogonal slot on the
//! workspace that may hold an item in any state. Panning with the secondary
//! button is a viewport concern and is not tracked here either.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging      (pointer-down on a draggable item)
//! Idle -> Connecting    (pointer-down on the selected node's output anchor)
//!
//! Dragging -> Idle      (pointer-up)
//! Connecting -> Idle    (pointer-up - commits the held candidate, if any)
//! ```

use crate::capabilities::Connector;
use crate::items::TentativeConnector;
use crate::registry::ItemId;
use crate::types::Coords;

/// Current mode of the primary pointer button.
#[derive(Debug, Default)]
pub enum InteractionState {
    /// No gesture in progress
    #[default]
    Idle,

    /// Dragging an item around
    Dragging {
        item: ItemId,
        /// Canvas position of the previous pointer event, for deltas
        last_pos: Coords,
    },

    /// Drawing a new connector from the selected node
    Connecting {
        connector: TentativeConnector,
        /// Canvas position of the previous pointer event, for deltas
        last_pos: Coords,
    },
}

impl InteractionState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, Self::Connecting { .. })
    }

    /// Get the item being dragged, if any
    pub fn dragged_item(&self) -> Option<ItemId> {
        match self {
            Self::Dragging { item, .. } => Some(*item),
            _ => None,
        }
    }

    /// The connector being drawn, if connecting
    pub fn tentative(&self) -> Option<&TentativeConnector> {
        match self {
            Self::Connecting { connector, .. } => Some(connector),
            _ => None,
        }
    }

    /// Source of the connector being drawn
    pub fn connect_source(&self) -> Option<ItemId> {
        self.tentative().map(|c| c.source())
    }

    /// Candidate currently held by the connector being drawn
    pub fn candidate(&self) -> Option<ItemId> {
        self.tentative().and_then(|c| c.target())
    }

    /// Last pointer position of the active gesture
    pub fn last_pos(&self) -> Option<Coords> {
        match self {
            Self::Idle => None,
            Self::Dragging { last_pos, .. } | Self::Connecting { last_pos, .. } => Some(*last_pos),
        }
    }

    pub fn start_dragging(&mut self, item: ItemId, pos: Coords) {
        *self = Self::Dragging {
            item,
            last_pos: pos,
        };
    }

    pub fn start_connecting(&mut self, connector: TentativeConnector, pos: Coords) {
        *self = Self::Connecting {
            connector,
            last_pos: pos,
        };
    }

    /// Leave the current state, returning it; the machine is Idle afterwards.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging { .. } => "dragging",
            Self::Connecting { .. } => "connecting",
        }
    }
}
