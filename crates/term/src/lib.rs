//! Terminal rendering module.
//!
//! This is a small, purpose-built rendering layer for the simulation.
//! It intentionally avoids ratatui widgets/layout and instead encodes the
//! grid into Braille character lines that can be flushed to any `Write`
//! sink.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the glyph encoding pure so every byte of output is assertable
//! - Let tests capture output by swapping stdout for a `Vec<u8>`

pub mod braille;
pub mod renderer;
pub mod view;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use braille::{block_pattern, glyph};
pub use renderer::{encode_frame_into, encode_title_into, TerminalRenderer};
pub use view::{render, render_into, Frame};
