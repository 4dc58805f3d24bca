//! Workspace node.

use crate::canvas::{Canvas, PrimitiveId, Shape, Stroke, Style};
use crate::capabilities::{Connectible, Detachment, Draggable, Link, Removable, Selectable, Targetable};
use crate::config::NodeConfig;
use crate::constants::*;
use crate::registry::{HitRole, ItemId};
use crate::types::{Coords, Gamma, Rect, Vector};

/// A box with a colored header, a body and an output anchor handle.
///
/// Anchor points are computed from `origin` on every call, so they always
/// follow the node's live position.
#[derive(Debug)]
pub struct Node {
    origin: Coords,
    gamma: Gamma,
    geometry: NodeConfig,
    frame: PrimitiveId,
    body: PrimitiveId,
    title_text: PrimitiveId,
    description_text: PrimitiveId,
    anchor: PrimitiveId,
    inputs: Vec<Link>,
    outputs: Vec<Link>,
    selected: bool,
    highlighted: bool,
}

impl Node {
    /// Draw a node with its top-left corner at `origin`.
    pub fn draw(canvas: &mut dyn Canvas, origin: Coords, gamma: Gamma, geometry: &NodeConfig) -> Self {
        let scheme = gamma.scheme();
        let frame_rect = Rect::from_origin_size(origin, geometry.width, geometry.height);

        let frame = canvas.create(
            Shape::Rectangle(frame_rect),
            Style::filled(scheme.main)
                .with_outline(Stroke::solid(COLOR_NODE_OUTLINE, NODE_OUTLINE_WIDTH)),
        );
        let body = canvas.create(
            Shape::Rectangle(Self::body_rect_at(origin, geometry)),
            Style::filled(scheme.secondary),
        );
        let title_text = canvas.create(
            Shape::Text {
                at: Coords::new(origin.x + geometry.width / 2, origin.y + geometry.header_height / 2),
                text: geometry.title.clone(),
            },
            Style::filled(COLOR_HEADER_TEXT),
        );
        let description_text = canvas.create(
            Shape::Text {
                at: Coords::new(
                    origin.x + geometry.width / 2,
                    origin.y + (geometry.height + geometry.header_height) / 2,
                ),
                text: geometry.description.clone(),
            },
            Style::filled(COLOR_BODY_TEXT),
        );
        let anchor = canvas.create(
            Shape::Rectangle(Rect::centered(
                Self::output_point_at(origin, geometry),
                geometry.anchor_size,
                geometry.anchor_size,
            )),
            Style::filled(COLOR_ANCHOR).with_outline(Stroke::solid(COLOR_NODE_OUTLINE, 1)),
        );

        Self {
            origin,
            gamma,
            geometry: geometry.clone(),
            frame,
            body,
            title_text,
            description_text,
            anchor,
            inputs: Vec::new(),
            outputs: Vec::new(),
            selected: false,
            highlighted: false,
        }
    }

    fn body_rect_at(origin: Coords, geometry: &NodeConfig) -> Rect {
        let b = geometry.border_width;
        Rect::from_corners(
            Coords::new(origin.x + b, origin.y + b + geometry.header_height),
            Coords::new(origin.x + geometry.width - b, origin.y + geometry.height - b),
        )
    }

    fn output_point_at(origin: Coords, geometry: &NodeConfig) -> Coords {
        let body = Self::body_rect_at(origin, geometry);
        Coords::new(body.max.x + geometry.border_width, body.center().y)
    }

    pub fn origin(&self) -> Coords {
        self.origin
    }

    pub fn gamma(&self) -> Gamma {
        self.gamma
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.geometry.width, self.geometry.height)
    }

    /// Frame, body, title, description and anchor, bottom-most first.
    pub fn primitives(&self) -> [PrimitiveId; 5] {
        [
            self.frame,
            self.body,
            self.title_text,
            self.description_text,
            self.anchor,
        ]
    }

    pub fn anchor_primitive(&self) -> PrimitiveId {
        self.anchor
    }

    pub fn frame_primitive(&self) -> PrimitiveId {
        self.frame
    }

    pub fn hit_regions(&self) -> [(PrimitiveId, HitRole); 5] {
        [
            (self.frame, HitRole::Body),
            (self.body, HitRole::Body),
            (self.title_text, HitRole::Body),
            (self.description_text, HitRole::Body),
            (self.anchor, HitRole::OutputAnchor),
        ]
    }

    /// Frame style for the current selection and highlight flags.
    /// A highlight wins over a selection.
    fn frame_style(&self) -> Style {
        let outline = if self.highlighted {
            Stroke::solid(COLOR_HIGHLIGHT, NODE_FOCUS_OUTLINE_WIDTH)
        } else if self.selected {
            Stroke::solid(COLOR_SELECTION, NODE_FOCUS_OUTLINE_WIDTH).dashed(NODE_SELECTION_DASH)
        } else {
            Stroke::solid(COLOR_NODE_OUTLINE, NODE_OUTLINE_WIDTH)
        };
        Style::filled(self.gamma.scheme().main).with_outline(outline)
    }

    fn restyle_frame(&self, canvas: &mut dyn Canvas) {
        canvas.set_style(self.frame, self.frame_style());
    }
}

impl Draggable for Node {
    fn move_by(&mut self, delta: Vector, canvas: &mut dyn Canvas) {
        self.origin += delta;
        for primitive in self.primitives() {
            canvas.move_by(primitive, delta);
        }
    }
}

impl Selectable for Node {
    fn draw_selection(&mut self, canvas: &mut dyn Canvas) {
        self.selected = true;
        self.restyle_frame(canvas);
        canvas.raise(&self.primitives());
    }

    fn clear_selection(&mut self, canvas: &mut dyn Canvas) {
        self.selected = false;
        self.restyle_frame(canvas);
    }

    fn is_selected(&self) -> bool {
        self.selected
    }
}

impl Targetable for Node {
    fn turn_highlight_on(&mut self, canvas: &mut dyn Canvas) {
        self.highlighted = true;
        self.restyle_frame(canvas);
    }

    fn turn_highlight_off(&mut self, canvas: &mut dyn Canvas) {
        self.highlighted = false;
        self.restyle_frame(canvas);
    }

    fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    fn is_already_connected_with(&self, other: ItemId) -> bool {
        self.inputs
            .iter()
            .chain(self.outputs.iter())
            .any(|link| link.peer == other)
    }
}

impl Connectible for Node {
    fn add_input_connector(&mut self, link: Link) -> bool {
        if self.inputs.iter().any(|l| l.connector == link.connector) {
            return false;
        }
        self.inputs.push(link);
        true
    }

    fn add_output_connector(&mut self, link: Link) -> bool {
        if self.outputs.iter().any(|l| l.connector == link.connector) {
            return false;
        }
        self.outputs.push(link);
        true
    }

    fn remove_input_connector(&mut self, connector: ItemId) -> bool {
        match self.inputs.iter().position(|l| l.connector == connector) {
            Some(index) => {
                self.inputs.remove(index);
                true
            }
            None => false,
        }
    }

    fn remove_output_connector(&mut self, connector: ItemId) -> bool {
        match self.outputs.iter().position(|l| l.connector == connector) {
            Some(index) => {
                self.outputs.remove(index);
                true
            }
            None => false,
        }
    }

    fn input_connectors(&self) -> &[Link] {
        &self.inputs
    }

    fn output_connectors(&self) -> &[Link] {
        &self.outputs
    }

    fn output_point(&self) -> Coords {
        Self::output_point_at(self.origin, &self.geometry)
    }

    fn input_point(&self) -> Coords {
        let body = Self::body_rect_at(self.origin, &self.geometry);
        Coords::new(body.min.x - self.geometry.border_width, body.center().y)
    }
}

impl Removable for Node {
    fn detachment(&self) -> Detachment {
        Detachment::Cascade(
            self.inputs
                .iter()
                .chain(self.outputs.iter())
                .map(|link| link.connector)
                .collect(),
        )
    }

    fn erase(&mut self, canvas: &mut dyn Canvas) {
        for primitive in self.primitives() {
            canvas.delete(primitive);
        }
    }
}
