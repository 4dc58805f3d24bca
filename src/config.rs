//! Workspace configuration.
//!
//! Loaded from `<config_dir>/nodeboard/config.json`. Every field is optional
//! in the file; missing fields take the defaults from [`constants`](crate::constants).

use crate::constants::*;
use crate::error::{DiagramError, DiagramResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Geometry and default texts of newly created nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    pub width: i32,
    pub height: i32,
    pub header_height: i32,
    pub border_width: i32,
    pub anchor_size: i32,
    pub title: String,
    pub description: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            width: NODE_WIDTH,
            height: NODE_HEIGHT,
            header_height: NODE_HEADER_HEIGHT,
            border_width: NODE_BORDER_WIDTH,
            anchor_size: NODE_ANCHOR_SIZE,
            title: NODE_TITLE.to_string(),
            description: NODE_DESCRIPTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub canvas_width: i32,
    pub canvas_height: i32,
    /// Scrollable empty field around the canvas
    pub margin: i32,
    /// Background grid spacing, 0 disables the grid
    pub grid_spacing: i32,
    /// Pointer-down hit test radius
    pub hit_tolerance: i32,
    /// Side of the probe used to find connection targets
    pub probe_size: i32,
    pub node: NodeConfig,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            margin: CANVAS_MARGIN,
            grid_spacing: GRID_SPACING,
            hit_tolerance: HIT_TOLERANCE,
            probe_size: PROBE_SIZE,
            node: NodeConfig::default(),
        }
    }
}

impl WorkspaceConfig {
    /// Parse and validate the configuration file at `path`.
    pub fn load(path: &Path) -> DiagramResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: WorkspaceConfig = serde_json::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), "Loaded workspace configuration");
        Ok(config)
    }

    /// Load from the default location, falling back to defaults on any problem.
    pub fn load_or_default() -> Self {
        match default_config_path() {
            Some(path) => Self::load_from_or_default(&path),
            None => {
                debug!("No config directory on this platform, using defaults");
                Self::default()
            }
        }
    }

    /// Load from `path`, falling back to defaults when it is missing or invalid.
    pub fn load_from_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "No configuration file, using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring configuration at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> DiagramResult<()> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("probe_size", self.probe_size),
            ("node.width", self.node.width),
            ("node.height", self.node.height),
            ("node.anchor_size", self.node.anchor_size),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(DiagramError::Config(format!("{name} must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("margin", self.margin),
            ("grid_spacing", self.grid_spacing),
            ("hit_tolerance", self.hit_tolerance),
            ("node.border_width", self.node.border_width),
            ("node.header_height", self.node.header_height),
        ];
        for (name, value) in non_negative {
            if value < 0 {
                return Err(DiagramError::Config(format!("{name} must not be negative, got {value}")));
            }
        }

        if self.node.header_height + 2 * self.node.border_width >= self.node.height {
            return Err(DiagramError::Config(format!(
                "node.header_height {} leaves no body in a node of height {}",
                self.node.header_height, self.node.height
            )));
        }
        Ok(())
    }
}

/// `<config_dir>/nodeboard/config.json`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nodeboard").join("config.json"))
}
