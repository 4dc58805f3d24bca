//! Core value types for the diagram canvas.
//!
//! Coordinates are integral canvas units. Every anchor and curve point is
//! derived from integer arithmetic, so repeated small moves land on exactly
//! the same coordinates as one large move.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

// ============================================================================
// Points, deltas and boxes
// ============================================================================

/// A point in canvas space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coords {
    pub x: i32,
    pub y: i32,
}

impl Coords {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Coords {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A displacement between two points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector {
    pub dx: i32,
    pub dy: i32,
}

impl Vector {
    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl Add<Vector> for Coords {
    type Output = Coords;

    fn add(self, rhs: Vector) -> Coords {
        Coords::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl AddAssign<Vector> for Coords {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.dx;
        self.y += rhs.dy;
    }
}

impl Sub<Vector> for Coords {
    type Output = Coords;

    fn sub(self, rhs: Vector) -> Coords {
        Coords::new(self.x - rhs.dx, self.y - rhs.dy)
    }
}

impl Sub for Coords {
    type Output = Vector;

    fn sub(self, rhs: Coords) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.dx += rhs.dx;
        self.dy += rhs.dy;
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.dx, -self.dy)
    }
}

/// Axis-aligned box, `min` inclusive and `max` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub min: Coords,
    pub max: Coords,
}

impl Rect {
    /// Box spanning two arbitrary corners.
    pub fn from_corners(a: Coords, b: Coords) -> Self {
        Self {
            min: Coords::new(a.x.min(b.x), a.y.min(b.y)),
            max: Coords::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Box with its top-left corner at `origin`.
    pub fn from_origin_size(origin: Coords, width: i32, height: i32) -> Self {
        Self::from_corners(origin, Coords::new(origin.x + width, origin.y + height))
    }

    /// Box of the given size centred on `center`.
    pub fn centered(center: Coords, width: i32, height: i32) -> Self {
        let min = Coords::new(center.x - width / 2, center.y - height / 2);
        Self::from_origin_size(min, width, height)
    }

    /// Centre, rounded towards negative infinity like the anchor maths.
    pub fn center(&self) -> Coords {
        Coords::new(
            (self.min.x + self.max.x).div_euclid(2),
            (self.min.y + self.max.y).div_euclid(2),
        )
    }

    pub fn translate(&self, delta: Vector) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Grow the box by `amount` on every side.
    pub fn inflate(&self, amount: i32) -> Self {
        Self {
            min: Coords::new(self.min.x - amount, self.min.y - amount),
            max: Coords::new(self.max.x + amount, self.max.y + amount),
        }
    }

    /// Euclidean distance from `p` to the box, zero inside.
    pub fn distance_to(&self, p: Coords) -> f32 {
        let dx = (self.min.x - p.x).max(0).max(p.x - self.max.x) as f32;
        let dy = (self.min.y - p.y).max(0).max(p.y - self.max.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

/// The four points of a cubic curve: start, two controls and end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BezierCoords(pub [Coords; 4]);

impl BezierCoords {
    #[inline]
    pub fn start(&self) -> Coords {
        self.0[0]
    }

    #[inline]
    pub fn end(&self) -> Coords {
        self.0[3]
    }

    #[inline]
    pub fn controls(&self) -> (Coords, Coords) {
        (self.0[1], self.0[2])
    }

    pub fn translate(&self, delta: Vector) -> Self {
        Self(self.0.map(|p| p + delta))
    }

    /// Bounding box of the control polygon (which encloses the curve).
    pub fn bounds(&self) -> Rect {
        let [a, b, c, d] = self.0;
        Rect::from_corners(
            Coords::new(a.x.min(b.x).min(c.x).min(d.x), a.y.min(b.y).min(c.y).min(d.y)),
            Coords::new(a.x.max(b.x).max(c.x).max(d.x), a.y.max(b.y).max(c.y).max(d.y)),
        )
    }
}

// ============================================================================
// Colors
// ============================================================================

/// An sRGB color, written as `#RRGGBB` (or the short `#RGB` form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `#RGB`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        let nibble = |c: u8| (c as char).to_digit(16).map(|d| d as u8);
        match digits.as_bytes() {
            [r, g, b] => Some(Self::rgb(
                nibble(*r)? * 17,
                nibble(*g)? * 17,
                nibble(*b)? * 17,
            )),
            [r1, r2, g1, g2, b1, b2] => Some(Self::rgb(
                nibble(*r1)? << 4 | nibble(*r2)?,
                nibble(*g1)? << 4 | nibble(*g2)?,
                nibble(*b1)? << 4 | nibble(*b2)?,
            )),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or_else(|| format!("invalid color: {value}"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Main/secondary color pair of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub main: Color,
    pub secondary: Color,
}

/// Node color schemes offered by the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gamma {
    Blue,
    Green,
    Red,
    Violet,
    Yellow,
    Purple,
    Gray,
}

impl Gamma {
    pub const fn scheme(self) -> ColorScheme {
        let (main, secondary) = match self {
            Gamma::Blue => (Color::rgb(0x00, 0x7B, 0xA0), Color::rgb(0x1A, 0xAA, 0xD8)),
            Gamma::Green => (Color::rgb(0x7B, 0xA0, 0x00), Color::rgb(0xA0, 0xD5, 0x00)),
            Gamma::Red => (Color::rgb(0xB2, 0x45, 0x2E), Color::rgb(0xD8, 0x77, 0x65)),
            Gamma::Violet => (Color::rgb(0x59, 0x45, 0xB2), Color::rgb(0x84, 0x77, 0xD1)),
            Gamma::Yellow => (Color::rgb(0x91, 0x91, 0x00), Color::rgb(0xD6, 0xD6, 0x1A)),
            Gamma::Purple => (Color::rgb(0x86, 0x00, 0xB2), Color::rgb(0xC1, 0x82, 0xD6)),
            Gamma::Gray => (Color::rgb(0x6E, 0x91, 0x91), Color::rgb(0xA1, 0xD6, 0xD6)),
        };
        ColorScheme { main, secondary }
    }
}
