//! Palette hand-off.
//!
//! The workspace asks the palette once per primary pointer-down whether a node
//! should be spawned. Popping consumes the pending choice, so one icon click
//! spawns at most one node.

use crate::types::Gamma;
use tracing::trace;

/// Source of pending node styles.
pub trait Palette {
    /// Take the pending style, leaving nothing pending.
    fn pop_selected_style(&mut self) -> Option<Gamma>;
}

/// Left-hand toolbar with one icon per [`Gamma`].
#[derive(Debug, Clone, Default)]
pub struct Toolbar {
    pending: Option<Gamma>,
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Icon click. Clicking another icon replaces the pending choice.
    pub fn select(&mut self, gamma: Gamma) {
        trace!(?gamma, "Palette style selected");
        self.pending = Some(gamma);
    }

    pub fn pending(&self) -> Option<Gamma> {
        self.pending
    }
}

impl Palette for Toolbar {
    fn pop_selected_style(&mut self) -> Option<Gamma> {
        self.pending.take()
    }
}

/// A palette that never has anything pending.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPalette;

impl Palette for NoPalette {
    fn pop_selected_style(&mut self) -> Option<Gamma> {
        None
    }
}
