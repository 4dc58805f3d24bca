//! The diagram aggregate: registry plus canvas, and every structural edit.
//!
//! Nodes do not own their connectors (a connector spans two nodes). Edits that
//! reach across items go through [`Diagram`], which reads what the capability
//! traits report and applies the follow-up effects in a fixed order:
//!
//! - moving a node moves the matching end of every attached connector
//! - deleting a node deletes its connectors first, then itself
//! - deleting a connector drops it from both endpoints' lists, then itself

use crate::canvas::{Canvas, PrimitiveId};
use crate::capabilities::{Connectible, Connector, Detachment, Link};
use crate::config::NodeConfig;
use crate::connection;
use crate::error::{Capability, DiagramError, DiagramResult};
use crate::items::{DirectedEdge, Node};
use crate::profile_scope;
use crate::registry::{HitTags, ItemId, Registry};
use crate::snapshot::DiagramSnapshot;
use crate::types::{Coords, Gamma, Rect, Vector};
use tracing::debug;

pub struct Diagram<C: Canvas> {
    registry: Registry,
    canvas: C,
    node_config: NodeConfig,
}

impl<C: Canvas> Diagram<C> {
    pub fn new(canvas: C, node_config: NodeConfig) -> Self {
        Self {
            registry: Registry::new(),
            canvas,
            node_config,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn node_config(&self) -> &NodeConfig {
        &self.node_config
    }

    pub fn node(&self, id: ItemId) -> DiagramResult<&Node> {
        self.registry.node(id)
    }

    pub fn edge(&self, id: ItemId) -> DiagramResult<&DirectedEdge> {
        self.registry.edge(id)
    }

    pub fn connectible(&self, id: ItemId) -> DiagramResult<&dyn Connectible> {
        self.registry
            .get(id)?
            .as_connectible()
            .ok_or(DiagramError::MissingCapability {
                id,
                capability: Capability::Connectible,
            })
    }

    fn connectible_mut(&mut self, id: ItemId) -> DiagramResult<&mut dyn Connectible> {
        self.registry
            .get_mut(id)?
            .as_connectible_mut()
            .ok_or(DiagramError::MissingCapability {
                id,
                capability: Capability::Connectible,
            })
    }

    // ------------------------------------------------------------------
    // Creation
    // ------------------------------------------------------------------

    /// Draw and register a node with its top-left corner at `origin`.
    pub fn add_node(&mut self, origin: Coords, gamma: Gamma) -> ItemId {
        let node = Node::draw(&mut self.canvas, origin, gamma, &self.node_config);
        let id = self.registry.add(node);
        debug!(%id, x = origin.x, y = origin.y, ?gamma, "Node created");
        id
    }

    /// Draw, register and attach an edge `source -> target`.
    pub fn connect(&mut self, source: ItemId, target: ItemId) -> DiagramResult<ItemId> {
        let target_item = self.registry.get(target)?;
        let targetable = target_item
            .as_targetable()
            .ok_or(DiagramError::MissingCapability {
                id: target,
                capability: Capability::Targetable,
            })?;
        connection::check(source, target, targetable).map_err(|reason| {
            DiagramError::IllegalConnection {
                source_id: source,
                target_id: target,
                reason,
            }
        })?;

        let source_point = self.connectible(source)?.output_point();
        let target_point = self.connectible(target)?.input_point();

        let edge = DirectedEdge::draw(&mut self.canvas, source, source_point, target, target_point);
        let id = self.registry.add(edge);
        self.connectible_mut(source)?.add_output_connector(Link {
            connector: id,
            peer: target,
        });
        self.connectible_mut(target)?.add_input_connector(Link {
            connector: id,
            peer: source,
        });
        debug!(%id, %source, %target, "Edge committed");
        Ok(id)
    }

    // ------------------------------------------------------------------
    // Structural edits
    // ------------------------------------------------------------------

    /// Drag `id` by `delta`, taking attached connector ends along.
    pub fn move_item(&mut self, id: ItemId, delta: Vector) -> DiagramResult<()> {
        let item = self.registry.get_mut(id)?;
        let draggable = item.as_draggable_mut().ok_or(DiagramError::MissingCapability {
            id,
            capability: Capability::Draggable,
        })?;
        draggable.move_by(delta, &mut self.canvas);

        let (inputs, outputs) = match item.as_connectible() {
            Some(connectible) => (
                connectible.input_connectors().to_vec(),
                connectible.output_connectors().to_vec(),
            ),
            None => return Ok(()),
        };
        for link in inputs {
            self.registry
                .edge_mut(link.connector)?
                .move_target_point(delta, &mut self.canvas);
        }
        for link in outputs {
            self.registry
                .edge_mut(link.connector)?
                .move_source_point(delta, &mut self.canvas);
        }
        Ok(())
    }

    /// Delete `id` and everything that cannot outlive it.
    pub fn delete_item(&mut self, id: ItemId) -> DiagramResult<()> {
        let detachment = self
            .registry
            .get(id)?
            .as_removable()
            .ok_or(DiagramError::MissingCapability {
                id,
                capability: Capability::Removable,
            })?
            .detachment();

        match detachment {
            Detachment::Cascade(dependents) => {
                for dependent in dependents {
                    self.delete_item(dependent)?;
                }
            }
            Detachment::Endpoints { source, target } => {
                self.connectible_mut(source)?.remove_output_connector(id);
                self.connectible_mut(target)?.remove_input_connector(id);
            }
        }

        if let Some(removable) = self.registry.get_mut(id)?.as_removable_mut() {
            removable.erase(&mut self.canvas);
        }
        self.registry.delete(id)?;
        debug!(%id, "Item deleted");
        Ok(())
    }

    /// Delete every item. Identifier counters keep running.
    pub fn clear(&mut self) -> DiagramResult<()> {
        for id in self.registry.ids() {
            if self.registry.contains(id) {
                self.delete_item(id)?;
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Visual state
    // ------------------------------------------------------------------

    pub fn set_selected(&mut self, id: ItemId, selected: bool) -> DiagramResult<()> {
        let selectable = self
            .registry
            .get_mut(id)?
            .as_selectable_mut()
            .ok_or(DiagramError::MissingCapability {
                id,
                capability: Capability::Selectable,
            })?;
        if selected {
            selectable.draw_selection(&mut self.canvas);
        } else {
            selectable.clear_selection(&mut self.canvas);
        }
        Ok(())
    }

    pub fn set_highlight(&mut self, id: ItemId, on: bool) -> DiagramResult<()> {
        let targetable = self
            .registry
            .get_mut(id)?
            .as_targetable_mut()
            .ok_or(DiagramError::MissingCapability {
                id,
                capability: Capability::Targetable,
            })?;
        if on {
            targetable.turn_highlight_on(&mut self.canvas);
        } else {
            targetable.turn_highlight_off(&mut self.canvas);
        }
        Ok(())
    }

    /// Raise the item's primitives above everything else.
    pub fn raise_item(&mut self, id: ItemId) -> DiagramResult<()> {
        let primitives = self.registry.get(id)?.primitives();
        self.canvas.raise(&primitives);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Tags of the primitive nearest to `point`, `None` for background hits.
    pub fn hit_at(&self, point: Coords, tolerance: i32) -> Option<HitTags> {
        profile_scope!("hit_at");
        let primitive = self.canvas.nearest_primitive_at(point, tolerance)?;
        self.registry.tags_of(primitive)
    }

    /// Distinct connect-targetable items under `probe`, in draw order.
    pub fn targetable_items_in(&self, probe: Rect) -> Vec<ItemId> {
        profile_scope!("targetable_items_in");
        let mut items: Vec<ItemId> = Vec::new();
        for primitive in self.canvas.overlapping(probe) {
            let Some(tags) = self.registry.tags_of(primitive) else {
                continue;
            };
            if tags.role.is_connect_target() && !items.contains(&tags.item) {
                items.push(tags.item);
            }
        }
        items
    }

    pub fn is_already_connected(&self, a: ItemId, b: ItemId) -> DiagramResult<bool> {
        let targetable = self
            .registry
            .get(a)?
            .as_targetable()
            .ok_or(DiagramError::MissingCapability {
                id: a,
                capability: Capability::Targetable,
            })?;
        Ok(targetable.is_already_connected_with(b))
    }

    pub fn primitives_of(&self, id: ItemId) -> DiagramResult<Vec<PrimitiveId>> {
        Ok(self.registry.get(id)?.primitives())
    }

    pub fn snapshot(&self) -> DiagramSnapshot {
        DiagramSnapshot::capture(&self.registry)
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }
}

impl<C: Canvas> std::fmt::Debug for Diagram<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagram")
            .field("items", &self.registry.len())
            .finish()
    }
}

