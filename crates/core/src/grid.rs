//! Grid module - the simulation field
//!
//! The field is a 64x64 grid where each cell is alive or dead.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row 0 is the top row and col 0 is the
//! leftmost column. The outermost ring of cells is the hard-dead boundary;
//! the advance rule forces it dead every generation.

use tui_life_types::{GRID_CELLS, GRID_SIZE, SEED_ALIVE, SEED_RANGE};

use crate::rng::SimpleRng;

/// The simulation field - 64x64 cells using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [bool; GRID_CELLS],
}

impl Grid {
    /// Create a new all-dead grid
    pub fn new() -> Self {
        Self {
            cells: [false; GRID_CELLS],
        }
    }

    /// Seed a fresh soup: every cell independently alive with P = 1/10
    ///
    /// Implemented exactly as "uniform draw in [0, 10) equals 1" so a given
    /// RNG state always reproduces the same soup.
    pub fn seeded(rng: &mut SimpleRng) -> Self {
        let mut grid = Self::new();
        for cell in grid.cells.iter_mut() {
            *cell = rng.next_range(SEED_RANGE) == SEED_ALIVE;
        }
        grid
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Grid dimension (rows == cols)
    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Whether the cell at (row, col) is alive; out-of-bounds reads are dead
    #[inline(always)]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        Self::index(row, col).is_some_and(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = alive;
                true
            }
            None => false,
        }
    }

    /// Whether (row, col) lies on the boundary ring
    pub fn is_border(row: usize, col: usize) -> bool {
        row == 0 || row == GRID_SIZE - 1 || col == 0 || col == GRID_SIZE - 1
    }

    /// Count of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
