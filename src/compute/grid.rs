//! Grid construction - runs a rule across generations.

use std::fmt;

use super::{Rule, next_row_into};

/// Immutable space-time diagram of an elementary automaton.
///
/// Cells are stored row-major: `cells[generation * width + column]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    generations: usize,
    rule: Rule,
}

impl Grid {
    /// Build a grid from an initial row.
    ///
    /// `generations` counts the initial row, so `generations == 1` returns
    /// just `initial`. The width is taken from `initial`.
    pub fn build(rule: Rule, initial: Vec<bool>, generations: usize) -> Self {
        let width = initial.len();
        let mut cells = initial;
        cells.reserve(width * generations.saturating_sub(1));

        for g in 1..generations {
            let prev_start = (g - 1) * width;
            cells.resize(prev_start + 2 * width, false);
            let (prev, next) = cells[prev_start..].split_at_mut(width);
            next_row_into(prev, rule, next);
        }

        log::trace!(
            "Built rule {} grid: {}x{}",
            rule.0,
            width,
            generations
        );

        Self {
            cells,
            width,
            generations,
            rule,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn generations(&self) -> usize {
        self.generations
    }

    #[inline]
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Cell state at (generation, column).
    #[inline]
    pub fn get(&self, generation: usize, column: usize) -> bool {
        debug_assert!(column < self.width);
        self.cells[generation * self.width + column]
    }

    /// One generation.
    #[inline]
    pub fn row(&self, generation: usize) -> &[bool] {
        let start = generation * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate generations in order.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Number of alive cells across all generations.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Row-major bytes, 1 for alive and 0 for dead.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|&c| c as u8).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                f.write_str(if cell { "█" } else { " " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
