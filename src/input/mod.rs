//! Pointer and keyboard input handling for the workspace.
//!
//! This module turns raw events into structural edits of the diagram:
//! selection, dragging, drawing and committing connectors, deletion.
//!
//! ## Architecture
//!
//! The primary button is driven by an explicit state machine
//! ([`InteractionState`]): `Idle`, `Dragging` or `Connecting`. The selection
//! slot and the viewport's pan anchor are orthogonal to it. Every handler
//! leaves the slots mutually consistent before returning.
//!
//! ## Modules
//!
//! - `events` - Event types delivered by the windowing layer
//! - `state` - Interaction state machine enum and helper methods
//! - `coords` - Viewport to canvas coordinate conversion and panning
//! - `mouse_down` - Pointer-down handling (spawn, select, start drag/connect)
//! - `drag` - Pointer-move handling (drag, connector growth, pan)
//! - `mouse_up` - Pointer-up handling (end drag, commit connector)
//! - `keyboard` - Key-press handling (delete)

pub mod coords;
pub mod events;
mod state;
mod mouse_down;
mod drag;
mod mouse_up;
mod keyboard;

pub use coords::Viewport;
pub use events::{Key, KeyEvent, MotionEvent, PointerButton, PointerEvent};
pub use state::InteractionState;
