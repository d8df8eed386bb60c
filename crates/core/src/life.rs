//! Advance rule module - synchronous Game of Life step on a bounded field
//!
//! Classic birth-on-3 / survive-on-2-or-3 over the 8-cell Moore
//! neighborhood, with one deliberate twist: the outermost ring of cells is
//! forced dead every generation. The field absorbs activity at its edges
//! rather than wrapping around or growing.
//!
//! The update is synchronous: the whole next generation is computed from a
//! snapshot of the current one and swapped in atomically. The rule never
//! reads cells it has already written.

use tui_life_types::GRID_SIZE;

use crate::grid::Grid;
use crate::rng::SimpleRng;

/// The 8 Moore-neighborhood offsets as (row, col); the cell itself is
/// excluded. Exactly these eight - the window is symmetric.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Per-generation transition summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepDelta {
    /// Cells that transitioned dead -> alive
    pub born: u32,
    /// Cells that transitioned alive -> dead
    pub died: u32,
    /// Total live cells after the transition
    pub alive: u32,
}

/// Count live Moore neighbors of an interior cell in the previous generation
///
/// Callers only pass interior coordinates, so every offset lands in bounds.
#[inline]
fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    debug_assert!(!Grid::is_border(row, col));

    let mut count = 0;
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let r = (row as isize + dr) as usize;
        let c = (col as isize + dc) as usize;
        if grid.is_alive(r, c) {
            count += 1;
        }
    }
    count
}

/// Compute the next generation of `src` into `dst`
///
/// `dst` is overwritten completely; `src` is never touched. Returns the
/// transition summary for the step.
pub fn step_into(src: &Grid, dst: &mut Grid) -> StepDelta {
    let mut born = 0u32;
    let mut died = 0u32;
    let mut alive = 0u32;

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if Grid::is_border(row, col) {
                // Absorbing boundary: dead regardless of state or neighbors.
                // A kill here is an alive -> dead transition like any other
                // and lands in `died`.
                if src.is_alive(row, col) {
                    died += 1;
                }
                dst.set(row, col, false);
                continue;
            }

            let was_alive = src.is_alive(row, col);
            let next = match (was_alive, live_neighbors(src, row, col)) {
                (true, 2) | (true, 3) => true,
                (false, 3) => {
                    born += 1;
                    true
                }
                (true, _) => {
                    died += 1;
                    false
                }
                (false, _) => false,
            };

            if next {
                alive += 1;
            }
            dst.set(row, col, next);
        }
    }

    StepDelta { born, died, alive }
}

/// Pure advance: the next generation plus its summary, `grid` untouched
pub fn step(grid: &Grid) -> (Grid, StepDelta) {
    let mut next = Grid::new();
    let delta = step_into(grid, &mut next);
    (next, delta)
}

/// Long-lived simulation state: current grid, scratch buffer, generation
/// counter. Owned by the driver loop; nothing else aliases it.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    scratch: Grid,
    generation: u64,
}

impl Simulation {
    /// Create a simulation seeded as a ~10% random soup from the given seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        Self::from_grid(Grid::seeded(&mut rng))
    }

    /// Create a simulation from an explicit starting grid (fixtures, tests)
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            scratch: Grid::new(),
            generation: 0,
        }
    }

    /// The current generation's grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generations advanced so far (0 before the first advance)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Live cells in the current generation
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Advance one generation in place and return the transition summary
    ///
    /// Computes into the scratch buffer, then swaps it in as an atomic
    /// replacement. The generation counter increments exactly once.
    pub fn advance(&mut self) -> StepDelta {
        let delta = step_into(&self.grid, &mut self.scratch);
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
        delta
    }
}
