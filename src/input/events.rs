//! Events delivered by the windowing layer.
//!
//! Positions are viewport-relative; the workspace converts them to canvas
//! space before any hit test.

use crate::types::Coords;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Select, drag and connect
    Primary,
    Middle,
    /// Pans the canvas
    Secondary,
}

/// Button press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub position: Coords,
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn primary(x: i32, y: i32) -> Self {
        Self {
            position: Coords::new(x, y),
            button: PointerButton::Primary,
        }
    }

    pub fn secondary(x: i32, y: i32) -> Self {
        Self {
            position: Coords::new(x, y),
            button: PointerButton::Secondary,
        }
    }
}

/// Pointer motion, with the button held during the motion if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionEvent {
    pub position: Coords,
    pub held: Option<PointerButton>,
}

impl MotionEvent {
    pub fn with_primary(x: i32, y: i32) -> Self {
        Self {
            position: Coords::new(x, y),
            held: Some(PointerButton::Primary),
        }
    }

    pub fn with_secondary(x: i32, y: i32) -> Self {
        Self {
            position: Coords::new(x, y),
            held: Some(PointerButton::Secondary),
        }
    }

    pub fn hover(x: i32, y: i32) -> Self {
        Self {
            position: Coords::new(x, y),
            held: None,
        }
    }
}

/// Symbolic key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Delete,
    Other(String),
}

impl Key {
    /// Map a windowing-layer key name such as `"Delete"` to a key.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Delete" => Key::Delete,
            other => Key::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
}

impl KeyEvent {
    pub fn named(name: &str) -> Self {
        Self {
            key: Key::from_name(name),
        }
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self { key }
    }
}
