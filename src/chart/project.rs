//! (value, index) → pixel projection.

use super::scale::Domain;

/// Pixel-space rectangle a sparkline is drawn into.
///
/// A 1px interior margin on each side keeps the stroke from clipping at the
/// viewport edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    /// The size the dashboard renders inline sparklines at.
    fn default() -> Self {
        Self::new(280.0, 44.0)
    }
}

/// A projected vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Map one sample onto pixel coordinates.
///
/// `index` runs left to right over a series of `len` buckets (`len >= 2`,
/// with index 0 at the left inset and `len - 1` at the right). Higher values
/// map to smaller `y`, matching top-down pixel coordinates. Pure: no state,
/// no I/O.
pub fn project(value: f64, index: usize, len: usize, domain: &Domain, viewport: &Viewport) -> Point {
    debug_assert!(len >= 2, "projection needs at least 2 buckets");

    let x = (index as f64 / (len as f64 - 1.0)) * (viewport.width - 2.0) + 1.0;
    let y = (viewport.height - 1.0)
        - ((value - domain.min) / domain.span()) * (viewport.height - 2.0);

    Point { x, y }
}
