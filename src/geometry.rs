//! Connector curve contract and the small amount of curve maths hit testing needs.
//!
//! Both curve builders take absolute endpoints and produce all four points
//! from scratch, so a connector never accumulates drift from incremental
//! recomputation.

use crate::types::{BezierCoords, Coords};

/// Minimum horizontal control offset of a committed edge.
pub const EDGE_MIN_SPREAD_X: i32 = 30;

/// Minimum vertical control offset of a connector.
pub const MIN_SPREAD_Y: i32 = 10;

/// Extra pull-back of a committed edge's second control point, leaves room for the arrow head.
pub const EDGE_ARROW_SLACK: i32 = 20;

/// Minimum horizontal control offset of a tentative connector.
pub const TENTATIVE_MIN_SPREAD_X: i32 = 20;

/// Number of segments used when flattening a curve.
pub const FLATTEN_STEPS: usize = 32;

/// Curve of a committed edge from `source` (an output anchor) to `target` (an input anchor).
pub fn edge_curve(source: Coords, target: Coords) -> BezierCoords {
    let spread_x = ((target.x - source.x).abs().div_euclid(3)).max(EDGE_MIN_SPREAD_X);
    let spread_y = (target.y - source.y).div_euclid(10).max(MIN_SPREAD_Y);
    BezierCoords([
        source,
        Coords::new(source.x + spread_x, source.y + spread_y),
        Coords::new(target.x - spread_x - EDGE_ARROW_SLACK, target.y - spread_y),
        target,
    ])
}

/// Curve of the connector being drawn, from `source` to the pointer-following `free_end`.
pub fn tentative_curve(source: Coords, free_end: Coords) -> BezierCoords {
    let span_x = free_end.x - source.x;
    let span_y = free_end.y - source.y;
    let spread_x = (span_x.abs().div_euclid(3)).max(TENTATIVE_MIN_SPREAD_X);
    let spread_y = span_y.div_euclid(10).max(MIN_SPREAD_Y);
    BezierCoords([
        source,
        Coords::new(source.x + spread_x, source.y + spread_y),
        Coords::new(
            free_end.x - span_x.div_euclid(10),
            free_end.y - span_y.div_euclid(10),
        ),
        free_end,
    ])
}

/// Point on the cubic at parameter `t` in `[0, 1]`.
pub fn cubic_point(curve: &BezierCoords, t: f32) -> (f32, f32) {
    let [p0, p1, p2, p3] = curve.0;
    let u = 1.0 - t;
    let w0 = u * u * u;
    let w1 = 3.0 * u * u * t;
    let w2 = 3.0 * u * t * t;
    let w3 = t * t * t;
    (
        w0 * p0.x as f32 + w1 * p1.x as f32 + w2 * p2.x as f32 + w3 * p3.x as f32,
        w0 * p0.y as f32 + w1 * p1.y as f32 + w2 * p2.y as f32 + w3 * p3.y as f32,
    )
}

/// Polyline approximation of the curve with `steps` segments.
pub fn flatten(curve: &BezierCoords, steps: usize) -> Vec<(f32, f32)> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| cubic_point(curve, i as f32 / steps as f32))
        .collect()
}

/// Distance from `p` to the segment `a`-`b`.
pub fn segment_distance(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (abx, aby) = (b.0 - a.0, b.1 - a.1);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.0 - a.0) * abx + (p.1 - a.1) * aby) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.0 + t * abx, a.1 + t * aby);
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}

/// Distance from `p` to the nearest point of the curve.
pub fn curve_distance(curve: &BezierCoords, p: Coords) -> f32 {
    let p = (p.x as f32, p.y as f32);
    flatten(curve, FLATTEN_STEPS)
        .windows(2)
        .map(|w| segment_distance(p, w[0], w[1]))
        .fold(f32::INFINITY, f32::min)
}
