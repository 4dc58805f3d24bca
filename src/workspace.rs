//! Editor session - the diagram, its viewport and the interaction slots.
//!
//! A [`Workspace`] owns everything one editor instance needs: the
//! [`Diagram`] (registry plus canvas), the palette it pops node styles from,
//! the viewport mapping and the three interaction slots (selection, the
//! [`InteractionState`] holding the drag or connect gesture, keyboard focus).
//! Event handlers live in [`input`](crate::input), one file per event kind.
//!
//! Creating a workspace starts a session with fresh identifier counters;
//! [`Workspace::close`] ends it and hands back the canvas.

use crate::canvas::{Canvas, PrimitiveId, Shape, Stroke, Style};
use crate::config::WorkspaceConfig;
use crate::constants::{COLOR_GRID, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::diagram::Diagram;
use crate::error::DiagramResult;
use crate::input::{InteractionState, Viewport};
use crate::palette::Palette;
use crate::registry::ItemId;
use crate::snapshot::DiagramSnapshot;
use crate::types::{Coords, Gamma, Vector};
use tracing::{debug, info};

pub struct Workspace<C: Canvas, P: Palette> {
    pub(crate) diagram: Diagram<C>,
    pub(crate) palette: P,
    pub(crate) viewport: Viewport,
    pub(crate) state: InteractionState,
    /// At most one selected item
    pub(crate) selection: Option<ItemId>,
    /// Key events are handled only while focused
    pub(crate) focused: bool,
    pub(crate) config: WorkspaceConfig,
    grid: Vec<PrimitiveId>,
}

impl<C: Canvas, P: Palette> Workspace<C, P> {
    /// Start a session on `canvas` with the default viewport size.
    pub fn new(canvas: C, palette: P, config: WorkspaceConfig) -> Self {
        Self::with_viewport_size(
            canvas,
            palette,
            config,
            Vector::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
        )
    }

    pub fn with_viewport_size(canvas: C, palette: P, config: WorkspaceConfig, size: Vector) -> Self {
        let viewport = Viewport::new(
            Viewport::scroll_region_for(config.canvas_width, config.canvas_height, config.margin),
            size,
        );
        let mut workspace = Self {
            diagram: Diagram::new(canvas, config.node.clone()),
            palette,
            viewport,
            state: InteractionState::Idle,
            selection: None,
            focused: false,
            config,
            grid: Vec::new(),
        };
        workspace.draw_grid();
        info!(
            width = workspace.config.canvas_width,
            height = workspace.config.canvas_height,
            "Workspace session started"
        );
        workspace
    }

    /// Untagged background lines; hitting them resolves to no item.
    fn draw_grid(&mut self) {
        let spacing = self.config.grid_spacing;
        if spacing <= 0 {
            return;
        }
        let (width, height) = (self.config.canvas_width, self.config.canvas_height);
        let style = Style::stroked(Stroke::solid(COLOR_GRID, 1));
        let canvas = self.diagram.canvas_mut();

        for y in (0..height).step_by(spacing as usize) {
            let line = Shape::Line {
                from: Coords::new(0, y),
                to: Coords::new(width, y),
            };
            self.grid.push(canvas.create(line, style.clone()));
        }
        for x in (0..width).step_by(spacing as usize) {
            let line = Shape::Line {
                from: Coords::new(x, 0),
                to: Coords::new(x, height),
            };
            self.grid.push(canvas.create(line, style.clone()));
        }
        debug!(lines = self.grid.len(), "Background grid drawn");
    }

    /// End the session: abandon any gesture, delete every item and hand back the canvas.
    pub fn close(mut self) -> DiagramResult<C> {
        self.abandon_gesture()?;
        self.selection = None;
        self.diagram.clear()?;
        for line in self.grid.drain(..) {
            self.diagram.canvas_mut().delete(line);
        }
        info!("Workspace session closed");
        Ok(self.diagram.into_canvas())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn diagram(&self) -> &Diagram<C> {
        &self.diagram
    }

    pub fn canvas(&self) -> &C {
        self.diagram.canvas()
    }

    pub fn palette(&self) -> &P {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut P {
        &mut self.palette
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn selection(&self) -> Option<ItemId> {
        self.selection
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn grid_lines(&self) -> &[PrimitiveId] {
        &self.grid
    }

    pub fn snapshot(&self) -> DiagramSnapshot {
        self.diagram.snapshot()
    }

    /// Take keyboard focus; subsequent key events are routed here.
    pub fn focus(&mut self) {
        self.focused = true;
        self.diagram.canvas_mut().focus();
    }

    /// Lose keyboard focus.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Place a node programmatically, outside any gesture.
    pub fn add_node(&mut self, origin: Coords, gamma: Gamma) -> ItemId {
        self.diagram.add_node(origin, gamma)
    }

    /// Connect two nodes programmatically, subject to the integrity rules.
    pub fn connect(&mut self, source: ItemId, target: ItemId) -> DiagramResult<ItemId> {
        self.diagram.connect(source, target)
    }

    /// Populate the session with the five-node layout used by the demo.
    pub fn load_demo_layout(&mut self) -> DiagramResult<Vec<ItemId>> {
        let n1 = self.add_node(Coords::new(100, 100), Gamma::Blue);
        let n2 = self.add_node(Coords::new(500, 500), Gamma::Green);
        self.connect(n1, n2)?;

        let n3 = self.add_node(Coords::new(200, 200), Gamma::Yellow);
        let n4 = self.add_node(Coords::new(400, 400), Gamma::Red);
        self.connect(n3, n4)?;
        self.connect(n2, n4)?;

        let n5 = self.add_node(Coords::new(400, 400), Gamma::Purple);
        self.connect(n3, n5)?;

        Ok(vec![n1, n2, n3, n4, n5])
    }

    // ------------------------------------------------------------------
    // Slot helpers shared by the handlers
    // ------------------------------------------------------------------

    /// Clear the selection slot and its visuals.
    pub(crate) fn deselect(&mut self) -> DiagramResult<()> {
        if let Some(previous) = self.selection.take() {
            self.diagram.set_selected(previous, false)?;
        }
        Ok(())
    }

    /// Select `id`, clearing any previous selection first.
    pub(crate) fn select(&mut self, id: ItemId) -> DiagramResult<()> {
        self.deselect()?;
        self.diagram.set_selected(id, true)?;
        self.selection = Some(id);
        Ok(())
    }

    /// Drop the active gesture without committing anything.
    pub(crate) fn abandon_gesture(&mut self) -> DiagramResult<()> {
        match self.state.take() {
            InteractionState::Idle => {}
            InteractionState::Dragging { item, .. } => {
                debug!(%item, "Drag abandoned");
            }
            InteractionState::Connecting { mut connector, .. } => {
                connector.clear_target(&mut self.diagram)?;
                connector.destroy(self.diagram.canvas_mut());
                debug!("Connect gesture abandoned");
            }
        }
        Ok(())
    }
}

impl<C: Canvas, P: Palette> std::fmt::Debug for Workspace<C, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("diagram", &self.diagram)
            .field("state", &self.state.name())
            .field("selection", &self.selection)
            .field("focused", &self.focused)
            .finish()
    }
}
