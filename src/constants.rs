//! Application-wide constants.
//!
//! Centralizes colors, stroke widths and default layout values. Values that
//! users may tune live in [`WorkspaceConfig`](crate::config::WorkspaceConfig),
//! which takes its defaults from here.

use crate::types::Color;

// ============================================================================
// Workspace Layout
// ============================================================================

/// Default canvas width in canvas units
pub const CANVAS_WIDTH: i32 = 3617;

/// Default canvas height in canvas units
pub const CANVAS_HEIGHT: i32 = 2401;

/// Empty field around the canvas that can still be scrolled into view
pub const CANVAS_MARGIN: i32 = 50;

/// Distance between background grid lines
pub const GRID_SPACING: i32 = 32;

/// Visible area of the workspace (window minus the toolbar column)
pub const VIEWPORT_WIDTH: i32 = 1150;
pub const VIEWPORT_HEIGHT: i32 = 800;

/// Secondary-button panning gain
pub const PAN_GAIN: i32 = 1;

/// Pointer-down hit test radius
pub const HIT_TOLERANCE: i32 = 3;

/// Side of the probe square used to look for connection targets
pub const PROBE_SIZE: i32 = 1;

// ============================================================================
// Node Defaults
// ============================================================================

pub const NODE_WIDTH: i32 = 200;
pub const NODE_HEIGHT: i32 = 100;
pub const NODE_HEADER_HEIGHT: i32 = 32;
pub const NODE_BORDER_WIDTH: i32 = 2;

/// Side of the square output anchor handle
pub const NODE_ANCHOR_SIZE: i32 = 10;

pub const NODE_TITLE: &str = "Hello";
pub const NODE_DESCRIPTION: &str = "My name is Alex\nWhat is your name?";

// ============================================================================
// Colors
// ============================================================================

pub const COLOR_GRID: Color = Color::rgb(0x50, 0x50, 0x50);

/// Outline of a node that is the current connection candidate
pub const COLOR_HIGHLIGHT: Color = Color::rgb(0xA0, 0xD5, 0x00);

/// Outline of a selected node, stroke of a selected edge
pub const COLOR_SELECTION: Color = Color::rgb(0x00, 0xFF, 0xFF);

pub const COLOR_NODE_OUTLINE: Color = Color::rgb(0x00, 0x00, 0x00);
pub const COLOR_HEADER_TEXT: Color = Color::rgb(0xFF, 0xFF, 0xFF);
pub const COLOR_BODY_TEXT: Color = Color::rgb(0x00, 0x00, 0x00);
pub const COLOR_ANCHOR: Color = Color::rgb(0xDD, 0xDD, 0xDD);

pub const COLOR_EDGE: Color = Color::rgb(0xAA, 0xAA, 0xAA);
pub const COLOR_TARGET_NOT_FOUND: Color = Color::rgb(0xAA, 0x44, 0x44);
pub const COLOR_TARGET_FOUND: Color = Color::rgb(0x66, 0xDD, 0x66);

// ============================================================================
// Strokes
// ============================================================================

pub const NODE_OUTLINE_WIDTH: u32 = 2;
pub const NODE_FOCUS_OUTLINE_WIDTH: u32 = 3;
pub const NODE_SELECTION_DASH: &[u32] = &[30];

pub const EDGE_WIDTH: u32 = 3;
pub const EDGE_SELECTION_DASH: &[u32] = &[6, 4];

pub const TENTATIVE_WIDTH: u32 = 4;
