//! Core simulation logic module - pure, deterministic, and testable
//!
//! This module contains the field, the advance rule, and the seeding logic.
//! It has **zero dependencies** on UI, timing, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the identical run
//! - **Testable**: Unit tests cover the rule cell by cell
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`grid`]: 64x64 bounded field of boolean cells
//! - [`life`]: B3/S23 advance rule and the [`Simulation`] driver state
//! - [`patterns`]: Named still lifes, oscillators, and spaceships
//! - [`rng`]: Linear congruential generator for reproducible soups
//!
//! # Rules
//!
//! The field evolves under the classic rule over the 8-cell Moore
//! neighborhood:
//!
//! - **Birth**: A dead cell with exactly 3 live neighbors becomes alive
//! - **Survival**: A live cell with 2 or 3 live neighbors stays alive
//! - **Death**: Every other cell is dead in the next generation
//! - **Boundary**: The outermost ring is forced dead every generation;
//!   activity is absorbed at the edges, never wrapped
//!
//! # Example
//!
//! ```
//! use tui_life_core::Simulation;
//!
//! // Seed a ~10% random soup and advance it
//! let mut sim = Simulation::new(12345);
//! let delta = sim.advance();
//!
//! assert_eq!(sim.generation(), 1);
//! assert_eq!(delta.alive as usize, sim.population());
//! ```

pub mod grid;
pub mod life;
pub mod patterns;
pub mod rng;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use grid::Grid;
pub use life::{step, step_into, Simulation, StepDelta};
pub use patterns::{Pattern, PATTERNS};
pub use rng::SimpleRng;
