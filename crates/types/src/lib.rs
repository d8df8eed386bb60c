//! Core types module - shared constants for the Life simulation
//!
//! This module defines the fixed geometry and timing used throughout the
//! application. All values are plain constants with no external dependencies,
//! making them usable in any context (simulation core, terminal rendering,
//! benches).
//!
//! # Grid Geometry
//!
//! The simulation runs on a fixed, bounded 64x64 field:
//!
//! - **Size**: 64 rows x 64 columns, indexed `(row, col)` from the top-left
//! - **Boundary**: the outermost ring of cells is forced dead after every
//!   generation (hard-dead boundary, not wraparound)
//!
//! # Braille Frame Geometry
//!
//! Each terminal glyph encodes a 4-row x 2-column block of cells as one
//! Braille Pattern character (U+2800..U+28FF):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BLOCK_ROWS` | 4 | Cell rows per glyph |
//! | `BLOCK_COLS` | 2 | Cell columns per glyph |
//! | `FRAME_ROWS` | 16 | Text lines per frame (64 / 4) |
//! | `FRAME_COLS` | 32 | Glyphs per line (64 / 2) |
//!
//! # Timing
//!
//! The driver loop suspends for a fixed `TICK_MS` quantum after every
//! generation (~100 FPS). The quantum is a lower bound on the frame period,
//! not a precise rate.
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{BLOCK_COLS, BLOCK_ROWS, FRAME_COLS, FRAME_ROWS, GRID_SIZE};
//!
//! assert_eq!(GRID_SIZE, 64);
//! assert_eq!(FRAME_ROWS * BLOCK_ROWS, GRID_SIZE);
//! assert_eq!(FRAME_COLS * BLOCK_COLS, GRID_SIZE);
//! ```

/// Grid dimension in cells (64x64, fixed for the process lifetime)
pub const GRID_SIZE: usize = 64;

/// Total cell count of the grid
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Cell rows packed into one Braille glyph
pub const BLOCK_ROWS: usize = 4;

/// Cell columns packed into one Braille glyph
pub const BLOCK_COLS: usize = 2;

/// Text lines per rendered frame (16)
pub const FRAME_ROWS: usize = GRID_SIZE / BLOCK_ROWS;

/// Glyphs per rendered line (32)
pub const FRAME_COLS: usize = GRID_SIZE / BLOCK_COLS;

/// Fixed suspension quantum between generations in milliseconds (~100 FPS)
pub const TICK_MS: u64 = 10;

/// Sampling range for the initial soup: each cell draws a uniform integer in
/// `[0, SEED_RANGE)` and comes up alive iff it equals [`SEED_ALIVE`]
pub const SEED_RANGE: u32 = 10;

/// The single value in `[0, SEED_RANGE)` that seeds a live cell (P = 1/10)
pub const SEED_ALIVE: u32 = 1;
