//! TerminalRenderer: flushes frames and title updates to a terminal.
//!
//! This module intentionally keeps the drawing API small: full-frame redraws
//! only, since a 16x32 frame is cheap enough to repaint every tick.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use tui_life_core::StepDelta;

use crate::view::Frame;

/// Writes frames to any `Write` sink; `stdout()` for the real terminal,
/// a `Vec<u8>` in tests.
pub struct TerminalRenderer<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    /// A renderer over the process's standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Clear the screen and draw a full frame
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()
    }

    /// Update the terminal title with one generation's statistics
    pub fn update_title(&mut self, delta: &StepDelta, generation: u64) -> Result<()> {
        self.buf.clear();
        encode_title_into(delta, generation, &mut self.buf)?;
        self.flush_buf()
    }

    /// The underlying sink, for inspecting captured output in tests
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a clear-and-redraw of the whole frame into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for line in frame.lines() {
        out.queue(Print(line))?;
        out.queue(Print('\n'))?;
    }

    Ok(())
}

/// Encode a title-bar update into `out`.
///
/// The title carries the transition counts and the generation number, e.g.
/// `Killed: 3, Born: 5, Alive: 120, T=42`.
pub fn encode_title_into(delta: &StepDelta, generation: u64, out: &mut Vec<u8>) -> Result<()> {
    let title = format!(
        "Killed: {}, Born: {}, Alive: {}, T={}",
        delta.died, delta.born, delta.alive, generation
    );
    out.queue(terminal::SetTitle(title))?;
    Ok(())
}
