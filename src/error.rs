//! Error types for diagram operations
//!
//! Every variant except the configuration ones signals a desynchronisation
//! between the registry, the canvas and the state machine. Those are bugs and
//! are propagated to the embedder rather than absorbed.

use crate::connection::IllegalConnection;
use crate::registry::{Category, ItemId};
use thiserror::Error;

/// Capability names used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Draggable,
    Selectable,
    Targetable,
    Connectible,
    Removable,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Capability::Draggable => "draggable",
            Capability::Selectable => "selectable",
            Capability::Targetable => "targetable",
            Capability::Connectible => "connectible",
            Capability::Removable => "removable",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while editing a diagram
#[derive(Error, Debug)]
pub enum DiagramError {
    /// No live item has this identifier
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// The identifier names an item of another category
    #[error("{id} is not a {expected}")]
    UnexpectedCategory { id: ItemId, expected: Category },

    /// The item lacks a capability the operation requires
    #[error("{id} is not {capability}")]
    MissingCapability { id: ItemId, capability: Capability },

    /// The integrity rules reject the proposed edge
    #[error("illegal connection {source_id} -> {target_id}: {reason}")]
    IllegalConnection {
        source_id: ItemId,
        target_id: ItemId,
        reason: IllegalConnection,
    },

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Config(String),

    /// IO error while reading configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for diagram operations
pub type DiagramResult<T> = Result<T, DiagramError>;
