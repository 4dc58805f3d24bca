//! Capability contracts of diagram items.
//!
//! A concrete item implements the subset it supports; the state machine asks
//! an [`Item`](crate::items::Item) for a capability (`as_draggable_mut`,
//! `as_selectable_mut`, ...) instead of matching on its concrete type.
//!
//! Items refer to each other by [`ItemId`] only. Effects that span several
//! items (dragging a node drags its connector ends, deleting a node deletes its
//! connectors) are carried out by the owning
//! [`Diagram`](crate::diagram::Diagram) from what these traits report.

use crate::canvas::Canvas;
use crate::registry::ItemId;
use crate::types::{BezierCoords, Coords, Vector};

/// Item that can be dragged around the workspace.
pub trait Draggable {
    /// Translate the item's own primitives by `delta`.
    fn move_by(&mut self, delta: Vector, canvas: &mut dyn Canvas);
}

/// Item that can hold the selection.
///
/// Both toggles are idempotent.
pub trait Selectable {
    fn draw_selection(&mut self, canvas: &mut dyn Canvas);

    fn clear_selection(&mut self, canvas: &mut dyn Canvas);

    fn is_selected(&self) -> bool;
}

/// Item that can be pointed at as the end of a connector being drawn.
pub trait Targetable {
    fn turn_highlight_on(&mut self, canvas: &mut dyn Canvas);

    fn turn_highlight_off(&mut self, canvas: &mut dyn Canvas);

    fn is_highlighted(&self) -> bool;

    /// Whether any edge, in either direction, joins this item and `other`.
    fn is_already_connected_with(&self, other: ItemId) -> bool;
}

/// One connector attached to a connectible, with the item at its other end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub connector: ItemId,
    pub peer: ItemId,
}

/// Item that can be the source or target of connectors.
///
/// The list operations are silent: adding a connector that is already
/// attached, or removing one that is not, changes nothing and returns `false`.
pub trait Connectible: Targetable {
    fn add_input_connector(&mut self, link: Link) -> bool;

    fn add_output_connector(&mut self, link: Link) -> bool;

    fn remove_input_connector(&mut self, connector: ItemId) -> bool;

    fn remove_output_connector(&mut self, connector: ItemId) -> bool;

    /// Connectors ending here.
    fn input_connectors(&self) -> &[Link];

    /// Connectors starting here.
    fn output_connectors(&self) -> &[Link];

    /// Where outgoing connectors start, from the live geometry.
    fn output_point(&self) -> Coords;

    /// Where incoming connectors end, from the live geometry.
    fn input_point(&self) -> Coords;
}

/// Relationships an item holds that must be severed before it disappears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detachment {
    /// Items to delete first (a node's connectors).
    Cascade(Vec<ItemId>),
    /// Endpoints whose connector lists reference this item.
    Endpoints { source: ItemId, target: ItemId },
}

/// Item that can be deleted.
pub trait Removable {
    fn detachment(&self) -> Detachment;

    /// Remove the item's primitives from the canvas.
    fn erase(&mut self, canvas: &mut dyn Canvas);
}

/// A curve joining a source connectible to a target point.
///
/// Moving one end recomputes the whole curve from the absolute endpoints with
/// the other end held fixed.
pub trait Connector {
    fn source(&self) -> ItemId;

    fn source_point(&self) -> Coords;

    fn target_point(&self) -> Coords;

    fn curve(&self) -> BezierCoords;

    fn move_target_point(&mut self, delta: Vector, canvas: &mut dyn Canvas);

    fn move_source_point(&mut self, delta: Vector, canvas: &mut dyn Canvas);
}
