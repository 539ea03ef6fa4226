//! Cell shape stamping.
//!
//! Coverage is decided at pixel centers. Working in doubled coordinates
//! (`a = 2 * dx + 1`, `b = 2 * dy + 1`, cell edge `2 * size`, center `size`)
//! keeps every test in integer arithmetic.

use crate::schema::{Rgb, ShapeKind};

use super::PixelBuffer;

/// Whether the pixel at offset (dx, dy) inside a `size`-pixel cell belongs to `kind`.
#[inline]
pub fn covers(kind: ShapeKind, dx: usize, dy: usize, size: usize) -> bool {
    let s = size as i64;
    let a = 2 * dx as i64 + 1;
    let b = 2 * dy as i64 + 1;
    let (ca, cb) = (a - s, b - s);

    match kind {
        ShapeKind::Square => true,
        ShapeKind::Circle => ca * ca + cb * cb <= s * s,
        // Radius 0.3 * size, i.e. 0.6 * s in doubled units.
        ShapeKind::CircleSmall => 25 * (ca * ca + cb * cb) <= 9 * s * s,
        ShapeKind::TriangleUp => 2 * ca.abs() <= b,
        ShapeKind::TriangleDown => 2 * ca.abs() <= 2 * s - b,
        ShapeKind::TriangleLeft => 2 * cb.abs() <= a,
        ShapeKind::TriangleRight => 2 * cb.abs() <= 2 * s - a,
        ShapeKind::TriangleTopLeft => a + b <= 2 * s,
        ShapeKind::TriangleTopRight => a >= b,
        ShapeKind::TriangleBottomLeft => a <= b,
        ShapeKind::TriangleBottomRight => a + b >= 2 * s,
    }
}

/// Stamp a shape into `buffer` with its top-left corner at (x, y).
///
/// Only covered pixels are written; everything else keeps its prior value.
pub fn stamp(buffer: &mut PixelBuffer, kind: ShapeKind, x: usize, y: usize, size: usize, color: Rgb) {
    if kind == ShapeKind::Square {
        buffer.fill_rect(x, y, size, size, color);
        return;
    }

    for dy in 0..size {
        for dx in 0..size {
            if covers(kind, dx, dy, size) {
                buffer.put_pixel((x + dx) as i64, (y + dy) as i64, color);
            }
        }
    }
}
