//! Well-known Life fixtures for tests and demos
//!
//! Each pattern is a named set of (row, col) offsets relative to its
//! top-left corner. Stamping writes the live cells; it does not clear the
//! surrounding area first.

use crate::grid::Grid;

/// A named still life, oscillator, or spaceship
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    cells: &'static [(usize, usize)],
}

/// 2x2 still life - stable under the rule
pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

/// Period-2 oscillator: a row of three flips to a column of three
pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

/// Period-2 oscillator of two offset rows
pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

/// Period-2 oscillator of two diagonal blocks
pub const BEACON: Pattern = Pattern {
    name: "beacon",
    cells: &[
        (0, 0),
        (0, 1),
        (1, 0),
        (1, 1),
        (2, 2),
        (2, 3),
        (3, 2),
        (3, 3),
    ],
};

/// The classic spaceship: translates one cell down-right every 4 steps
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// All built-in patterns
pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, TOAD, BEACON, GLIDER];

impl Pattern {
    /// The pattern's cells as offsets from its top-left corner
    pub fn cells(&self) -> &'static [(usize, usize)] {
        self.cells
    }

    /// Stamp the pattern onto `grid` with its corner at (row, col)
    ///
    /// Cells that would land out of bounds are skipped.
    pub fn stamp(&self, grid: &mut Grid, row: usize, col: usize) {
        for &(dr, dc) in self.cells {
            grid.set(row + dr, col + dc, true);
        }
    }
}
