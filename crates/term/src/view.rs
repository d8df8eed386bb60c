//! Frame view: maps a simulation grid into a Braille character frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_life_core::Grid;
use tui_life_types::{BLOCK_COLS, BLOCK_ROWS, FRAME_COLS, FRAME_ROWS};

use crate::braille;

/// One rendered generation: a fixed 16x32 matrix of Braille characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    glyphs: [[char; FRAME_COLS]; FRAME_ROWS],
}

impl Frame {
    /// An all-blank frame (every glyph U+2800)
    pub fn new() -> Self {
        Self {
            glyphs: [[braille::glyph(0); FRAME_COLS]; FRAME_ROWS],
        }
    }

    /// The glyph at (row, col) in frame coordinates, `None` out of bounds
    pub fn glyph(&self, row: usize, col: usize) -> Option<char> {
        self.glyphs.get(row)?.get(col).copied()
    }

    /// One frame row as a printable line (no trailing newline)
    pub fn line(&self, row: usize) -> String {
        self.glyphs[row].iter().collect()
    }

    /// All frame rows, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..FRAME_ROWS).map(|row| self.line(row))
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the grid into an existing frame
///
/// This is the allocation-free hot path. Callers can reuse one `Frame`
/// across generations; every glyph is overwritten.
pub fn render_into(grid: &Grid, frame: &mut Frame) {
    for block_row in 0..FRAME_ROWS {
        for block_col in 0..FRAME_COLS {
            let pattern =
                braille::block_pattern(grid, block_row * BLOCK_ROWS, block_col * BLOCK_COLS);
            frame.glyphs[block_row][block_col] = braille::glyph(pattern);
        }
    }
}

/// Convenience helper that allocates a new frame
pub fn render(grid: &Grid) -> Frame {
    let mut frame = Frame::new();
    render_into(grid, &mut frame);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_renders_all_blank() {
        let frame = render(&Grid::new());
        for line in frame.lines() {
            assert_eq!(line.chars().count(), FRAME_COLS);
            assert!(line.chars().all(|ch| ch == '\u{2800}'));
        }
        assert_eq!(frame.lines().count(), FRAME_ROWS);
    }

    #[test]
    fn test_full_block_renders_full_glyph() {
        let mut grid = Grid::new();
        for r in 0..4 {
            for c in 0..2 {
                grid.set(r, c, true);
            }
        }

        let frame = render(&grid);
        assert_eq!(frame.glyph(0, 0), Some('\u{28FF}'));
        assert_eq!(frame.glyph(0, 1), Some('\u{2800}'));
    }

    #[test]
    fn test_grid_cell_lands_in_its_block() {
        // Cell (4, 2) is the top-left of the block at frame position (1, 1).
        let mut grid = Grid::new();
        grid.set(4, 2, true);

        let frame = render(&grid);
        assert_eq!(frame.glyph(1, 1), Some('\u{2801}'));
        assert_eq!(frame.glyph(0, 0), Some('\u{2800}'));
        assert_eq!(frame.glyph(1, 0), Some('\u{2800}'));
    }

    #[test]
    fn test_render_into_overwrites_stale_glyphs() {
        let mut grid = Grid::new();
        grid.set(10, 10, true);
        let mut frame = render(&grid);

        grid.set(10, 10, false);
        render_into(&grid, &mut frame);
        assert_eq!(frame, Frame::new());
    }

    #[test]
    fn test_out_of_bounds_glyph_is_none() {
        let frame = Frame::new();
        assert!(frame.glyph(FRAME_ROWS, 0).is_none());
        assert!(frame.glyph(0, FRAME_COLS).is_none());
    }
}
