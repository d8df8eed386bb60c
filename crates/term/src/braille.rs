//! Braille block encoding: 4x2 cell blocks packed into single glyphs
//!
//! Unicode Braille Patterns (U+2800..U+28FF) give us a 2-wide by 4-tall dot
//! matrix per character cell, so a 64x64 field fits in a 16x32 character
//! frame. The 8 low bits of the codepoint each raise one dot.
//!
//! The dot numbering is the historical Braille order, not row-major: the
//! left column carries bits {0, 1, 2, 6} top to bottom and the right column
//! carries bits {3, 4, 5, 7}. Scanning a block row-major therefore needs the
//! fixed permutation in [`DOT_BITS`]. Any other bit order still yields 256
//! distinct glyphs but scrambles the picture.

use tui_life_core::Grid;

/// Bit position for each block cell, scanning the block row-major
/// (two cells per row, top row first).
const DOT_BITS: [u8; 8] = [0, 3, 1, 4, 2, 5, 6, 7];

/// Base codepoint of the Braille Patterns range; pattern 0 is the blank cell
const BRAILLE_BASE: u32 = 0x2800;

/// The Braille character for an 8-bit dot pattern
///
/// Every pattern 0..=255 lands inside U+2800..U+28FF, so the fallback is
/// unreachable in practice.
pub fn glyph(pattern: u8) -> char {
    char::from_u32(BRAILLE_BASE + pattern as u32).unwrap_or(' ')
}

/// Pack the 4x2 block with top-left corner at (top, left) into a dot pattern
///
/// Cells outside the grid read as dead, so a block hanging off the edge
/// degrades to a partial glyph instead of panicking.
pub fn block_pattern(grid: &Grid, top: usize, left: usize) -> u8 {
    let mut pattern = 0u8;
    for (i, &bit) in DOT_BITS.iter().enumerate() {
        let row = top + (i >> 1);
        let col = left + (i & 1);
        if grid.is_alive(row, col) {
            pattern |= 1 << bit;
        }
    }
    pattern
}
