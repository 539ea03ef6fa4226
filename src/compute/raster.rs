//! Rasterizer - turns a grid and a style into an RGBA image.

use crate::schema::StyleConfig;

use super::{Gradient, Grid, PixelBuffer, draw_links, stamp};

/// Maps grid coordinates to pixel positions, applying mirroring.
///
/// Mirroring only moves cells; it never changes which cell is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLayout {
    pub width: usize,
    pub generations: usize,
    pub scale: usize,
    pub mirror_x: bool,
    pub mirror_y: bool,
}

impl CellLayout {
    pub fn new(
        width: usize,
        generations: usize,
        scale: usize,
        mirror_x: bool,
        mirror_y: bool,
    ) -> Self {
        Self {
            width,
            generations,
            scale,
            mirror_x,
            mirror_y,
        }
    }

    pub fn for_grid(grid: &Grid, style: &StyleConfig) -> Self {
        Self::new(
            grid.width(),
            grid.generations(),
            style.scale,
            style.mirror_x,
            style.mirror_y,
        )
    }

    /// Image width in pixels.
    #[inline]
    pub fn image_width(&self) -> usize {
        self.width * self.scale
    }

    /// Image height in pixels.
    #[inline]
    pub fn image_height(&self) -> usize {
        self.generations * self.scale
    }

    /// Placement (column, row) in cell units.
    #[inline]
    pub fn place(&self, generation: usize, column: usize) -> (usize, usize) {
        let col = if self.mirror_x {
            self.width - 1 - column
        } else {
            column
        };
        let row = if self.mirror_y {
            self.generations - 1 - generation
        } else {
            generation
        };
        (col, row)
    }

    /// Top-left pixel of a cell.
    #[inline]
    pub fn origin(&self, generation: usize, column: usize) -> (usize, usize) {
        let (col, row) = self.place(generation, column);
        (col * self.scale, row * self.scale)
    }

    /// Center pixel of a cell.
    #[inline]
    pub fn center(&self, generation: usize, column: usize) -> (i64, i64) {
        let (x, y) = self.origin(generation, column);
        let half = self.scale / 2;
        ((x + half) as i64, (y + half) as i64)
    }
}

/// Rasterize `grid` with `style`.
///
/// The buffer is allocated at its final size and filled with the background
/// color, then each cell's shape is stamped in its generation's gradient
/// color. Links, when enabled, are drawn last so they sit on top.
pub fn rasterize(grid: &Grid, style: &StyleConfig) -> PixelBuffer {
    let layout = CellLayout::for_grid(grid, style);
    let generations = grid.generations();
    let mut buffer = PixelBuffer::filled(
        layout.image_width(),
        layout.image_height(),
        style.background,
    );

    let alive = Gradient::new(style.alive_from, style.alive_to);
    let dead = Gradient::new(style.dead_from, style.dead_to);

    for (g, row) in grid.rows().enumerate() {
        let alive_color = alive.at_generation(g, generations);
        let dead_color = dead.at_generation(g, generations);
        for (x, &cell) in row.iter().enumerate() {
            let (shape, color) = if cell {
                (style.alive_shape, alive_color)
            } else {
                (style.dead_shape, dead_color)
            };
            let (px, py) = layout.origin(g, x);
            stamp(&mut buffer, shape, px, py, style.scale, color);
        }
    }

    if style.links {
        draw_links(&mut buffer, grid, &layout, &alive);
    }

    log::debug!(
        "Rasterized {}x{} grid at scale {} into {}x{} pixels",
        grid.width(),
        generations,
        style.scale,
        buffer.width(),
        buffer.height()
    );

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::Rule;
    use crate::schema::{Rgb, ShapeKind, center_row};

    fn style(scale: usize) -> StyleConfig {
        StyleConfig {
            scale,
            dead_from: Rgb::new(10, 10, 10),
            dead_to: Rgb::new(30, 30, 30),
            alive_from: Rgb::new(200, 0, 0),
            alive_to: Rgb::new(0, 0, 200),
            background: Rgb::new(1, 2, 3),
            ..Default::default()
        }
    }

    #[test]
    fn test_layout_mirroring() {
        let layout = CellLayout::new(5, 4, 3, true, false);
        assert_eq!(layout.origin(0, 0), (12, 0));
        assert_eq!(layout.origin(2, 4), (0, 6));

        let layout = CellLayout::new(5, 4, 3, false, true);
        assert_eq!(layout.origin(0, 0), (0, 9));
        assert_eq!(layout.center(3, 1), (4, 1));
    }

    #[test]
    fn test_buffer_dimensions() {
        let grid = Grid::build(Rule(30), center_row(7), 5);
        let buffer = rasterize(&grid, &style(3));
        assert_eq!(buffer.width(), 21);
        assert_eq!(buffer.height(), 15);
        assert_eq!(buffer.as_bytes().len(), 21 * 15 * 4);
    }

    #[test]
    fn test_square_cells_use_generation_colors() {
        let grid = Grid::build(Rule(90), center_row(3), 3);
        let buffer = rasterize(&grid, &style(2));

        // Generation 0: center alive, alive_from.
        assert_eq!(buffer.get_pixel(2, 0), [200, 0, 0, 255]);
        assert_eq!(buffer.get_pixel(0, 1), [10, 10, 10, 255]);
        // Generation 1 (midpoint): #.#
        assert_eq!(buffer.get_pixel(0, 2), [100, 0, 100, 255]);
        assert_eq!(buffer.get_pixel(3, 3), [20, 20, 20, 255]);
        // Generation 2 (last) is all dead: dead_to.
        assert_eq!(buffer.get_pixel(0, 4), [30, 30, 30, 255]);
        assert_eq!(buffer.get_pixel(5, 5), [30, 30, 30, 255]);
    }

    #[test]
    fn test_every_pixel_is_opaque() {
        let grid = Grid::build(Rule(110), center_row(9), 6);
        let s = StyleConfig {
            alive_shape: ShapeKind::TriangleUp,
            dead_shape: ShapeKind::CircleSmall,
            links: true,
            ..style(6)
        };
        let buffer = rasterize(&grid, &s);
        assert!(buffer.as_bytes().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_background_shows_around_shapes() {
        let grid = Grid::build(Rule(0), vec![false; 2], 1);
        let s = StyleConfig {
            dead_shape: ShapeKind::Circle,
            ..style(8)
        };
        let buffer = rasterize(&grid, &s);
        assert_eq!(buffer.get_pixel(0, 0), [1, 2, 3, 255]);
        assert_eq!(buffer.get_pixel(4, 4), [10, 10, 10, 255]);
        assert_eq!(buffer.get_pixel(8, 0), [1, 2, 3, 255]);
        assert_eq!(buffer.get_pixel(12, 4), [10, 10, 10, 255]);
    }

    #[test]
    fn test_mirror_x_matches_flipped_columns() {
        let grid = Grid::build(Rule(30), center_row(8), 6);
        let base = style(4);
        let mirrored = StyleConfig {
            mirror_x: true,
            alive_shape: ShapeKind::TriangleTopLeft,
            dead_shape: ShapeKind::Circle,
            ..base.clone()
        };
        let plain = StyleConfig {
            alive_shape: ShapeKind::TriangleTopLeft,
            dead_shape: ShapeKind::Circle,
            ..base
        };

        let normal = rasterize(&grid, &plain);
        let flipped = rasterize(&grid, &mirrored);
        let width = grid.width();
        let scale = plain.scale;

        // The block drawn for column x in the mirrored image equals the block
        // the plain image draws for column x at position width - 1 - x, and
        // vice versa.
        for g in 0..grid.generations() {
            for x in 0..width {
                let mirror_col = width - 1 - x;
                for dy in 0..scale {
                    for dx in 0..scale {
                        assert_eq!(
                            flipped.get_pixel(mirror_col * scale + dx, g * scale + dy),
                            normal.get_pixel(x * scale + dx, g * scale + dy),
                            "cell ({g}, {x}) offset ({dx}, {dy})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_mirror_y_flips_rows() {
        let grid = Grid::build(Rule(90), center_row(5), 3);
        let flipped = rasterize(
            &grid,
            &StyleConfig {
                mirror_y: true,
                ..style(1)
            },
        );
        // Generation 0 lands on the bottom row.
        assert_eq!(flipped.get_pixel(2, 2), [200, 0, 0, 255]);
        assert_eq!(flipped.get_pixel(2, 0), [30, 30, 30, 255]);
    }

    #[test]
    fn test_row_colors_follow_gradient() {
        let grid = Grid::build(Rule(255), vec![true, false, true], 7);
        let buffer = rasterize(&grid, &style(1));
        let alive = Gradient::new(Rgb::new(200, 0, 0), Rgb::new(0, 0, 200));
        for g in 1..7 {
            assert_eq!(buffer.get_pixel(1, g), alive.at_generation(g, 7).to_rgba());
        }
        // Generation 0 keeps its dead cell.
        assert_eq!(buffer.get_pixel(1, 0), [10, 10, 10, 255]);
    }

    #[test]
    fn test_links_follow_mirrored_cells() {
        // Width 4 keeps the pattern asymmetric: generation 1 is .#.# and both
        // alive cells descend from the single parent in column 2.
        let grid = Grid::build(Rule(90), center_row(4), 2);
        let s = StyleConfig {
            links: true,
            mirror_x: true,
            mirror_y: true,
            ..style(8)
        };
        let buffer = rasterize(&grid, &s);
        let layout = CellLayout::for_grid(&grid, &s);
        let link = [0, 0, 200, 255];

        let parent = layout.center(0, 2);
        assert_eq!(parent, (12, 12));
        for child in [layout.center(1, 1), layout.center(1, 3)] {
            let steps = (child.0 - parent.0).abs();
            assert_eq!(steps, (child.1 - parent.1).abs());
            let sx = (child.0 - parent.0).signum();
            let sy = (child.1 - parent.1).signum();
            for i in 0..=steps {
                let (x, y) = (parent.0 + sx * i, parent.1 + sy * i);
                assert_eq!(buffer.get_pixel(x as usize, y as usize), link, "({x}, {y})");
            }
        }

        // Where the unmirrored image would draw its second link, the mirrored
        // one shows a plain dead cell of generation 0.
        assert_eq!(buffer.get_pixel(24, 8), [10, 10, 10, 255]);
    }

    #[test]
    fn test_links_draw_over_shapes() {
        let grid = Grid::build(Rule(90), center_row(3), 2);
        let without = rasterize(&grid, &style(8));
        let with = rasterize(
            &grid,
            &StyleConfig {
                links: true,
                ..style(8)
            },
        );
        assert_ne!(without, with);
        // Diagonal midpoint between child (1, 0) and parent (0, 1) gets the
        // alive color of generation 1.
        assert_eq!(with.get_pixel(8, 8), [0, 0, 200, 255]);
        assert_eq!(without.get_pixel(8, 8), [30, 30, 30, 255]);
    }
}
