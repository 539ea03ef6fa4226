//! Links from alive cells to the alive parents that produced them.

use crate::schema::Rgb;

use super::{CellLayout, Gradient, Grid, PixelBuffer};

/// Line thickness for a cell scale: one pixel per eight, at least one.
#[inline]
pub fn link_thickness(scale: usize) -> i64 {
    (scale as i64 / 8).max(1)
}

/// Draw links for every alive cell in generations 1.. to the alive cells
/// among its three parent columns in the previous generation.
///
/// Only alive parents are linked. A cell born from an all-dead neighbourhood
/// (pattern 000, odd rules) therefore gets no links.
///
/// Links use the alive color of the child's generation and go through
/// `layout`, so they follow any mirroring applied to the shapes.
pub fn draw_links(buffer: &mut PixelBuffer, grid: &Grid, layout: &CellLayout, alive: &Gradient) {
    let thickness = link_thickness(layout.scale);
    let generations = grid.generations();
    let width = grid.width();
    let mut drawn = 0usize;

    for g in 1..generations {
        let color = alive.at_generation(g, generations);
        for x in (0..width).filter(|&x| grid.get(g, x)) {
            let (cx, cy) = layout.center(g, x);
            let parents = x.saturating_sub(1)..=(x + 1).min(width - 1);
            for px in parents.filter(|&px| grid.get(g - 1, px)) {
                let (pcx, pcy) = layout.center(g - 1, px);
                draw_line(buffer, (cx, cy), (pcx, pcy), color, thickness);
                drawn += 1;
            }
        }
    }

    log::trace!("Drew {drawn} links");
}

/// Bresenham line with a square brush of side `thickness` (rounded up to odd).
pub fn draw_line(
    buffer: &mut PixelBuffer,
    from: (i64, i64),
    to: (i64, i64),
    color: Rgb,
    thickness: i64,
) {
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let half = thickness / 2;

    loop {
        for oy in -half..=half {
            for ox in -half..=half {
                buffer.put_pixel(x0 + ox, y0 + oy, color);
            }
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
