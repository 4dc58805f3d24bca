//! Nodeboard - interaction core of a node diagram editor.
//!
//! Users place typed nodes on a canvas and draw directed connectors between
//! them. This crate turns pointer and keyboard events into structural edits:
//! selection, dragging, drawing and committing connectors, deletion with
//! cascades. Rendering is delegated to a [`canvas::Canvas`] implementation;
//! [`canvas::MemoryCanvas`] is a headless one.
//!
//! ```ignore
//! let mut workspace = Workspace::new(MemoryCanvas::new(), Toolbar::new(), WorkspaceConfig::default());
//! workspace.palette_mut().select(Gamma::Blue);
//! workspace.handle_pointer_down(&PointerEvent::primary(100, 100))?;
//! ```

pub mod canvas;
pub mod capabilities;
pub mod config;
pub mod connection;
pub mod constants;
pub mod diagram;
pub mod error;
pub mod geometry;
pub mod input;
pub mod items;
pub mod palette;
pub mod perf;
pub mod registry;
pub mod snapshot;
pub mod types;
pub mod workspace;

pub use diagram::Diagram;
pub use error::{DiagramError, DiagramResult};
pub use workspace::Workspace;
