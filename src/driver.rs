//! Driver loop: composes simulation, rendering, and pacing.
//!
//! Each tick clears the screen, draws the current generation, advances the
//! simulation, pushes the transition counts into the terminal title, and
//! then waits out the rest of the frame budget. The wait is injected as a
//! [`Scheduler`] so tests can run the loop to a deterministic stop instead
//! of sleeping on the wall clock.

use std::future::Future;
use std::io::Write;
use std::pin::Pin;

use anyhow::Result;
use async_trait::async_trait;
use tokio::time::Duration;

use tui_life_core::Simulation;
use tui_life_term::view::{render_into, Frame};
use tui_life_term::TerminalRenderer;
use tui_life_types::TICK_MS;

/// Outcome of one scheduler wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The frame budget elapsed; keep looping
    Elapsed,
    /// The host asked us to stop; exit cleanly
    Cancelled,
}

/// Pacing seam for the driver loop.
///
/// The production implementation sleeps on the wall clock and watches for
/// Ctrl-C; tests substitute a deterministic countdown.
#[async_trait]
pub trait Scheduler {
    /// Suspend until the next tick is due or the loop is cancelled
    async fn wait(&mut self) -> Tick;
}

/// Wall-clock scheduler: a 10ms sleep raced against Ctrl-C.
///
/// The signal future is created once and kept across ticks so an interrupt
/// arriving between waits is not lost.
pub struct WallClock {
    period: Duration,
    ctrl_c: Pin<Box<dyn Future<Output = std::io::Result<()>> + Send>>,
    cancelled: bool,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            period: Duration::from_millis(TICK_MS),
            ctrl_c: Box::pin(tokio::signal::ctrl_c()),
            cancelled: false,
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Scheduler for WallClock {
    async fn wait(&mut self) -> Tick {
        if self.cancelled {
            return Tick::Cancelled;
        }
        tokio::select! {
            _ = &mut self.ctrl_c => {
                // Completed once; latch so the future is never polled again.
                self.cancelled = true;
                Tick::Cancelled
            }
            _ = tokio::time::sleep(self.period) => Tick::Elapsed,
        }
    }
}

/// The main loop: exclusively owns the simulation and the renderer.
pub struct DriverLoop<W: Write, S: Scheduler> {
    sim: Simulation,
    renderer: TerminalRenderer<W>,
    scheduler: S,
    frame: Frame,
}

impl<W: Write, S: Scheduler> DriverLoop<W, S> {
    pub fn new(sim: Simulation, renderer: TerminalRenderer<W>, scheduler: S) -> Self {
        Self {
            sim,
            renderer,
            scheduler,
            frame: Frame::new(),
        }
    }

    /// Run until the scheduler reports cancellation.
    ///
    /// Every iteration, in order: draw the current generation (clear plus
    /// full frame), advance one generation, update the title with the
    /// resulting counts, wait. Cancellation is only observed at the wait,
    /// so a frame is never left half-written.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            render_into(self.sim.grid(), &mut self.frame);
            self.renderer.draw(&self.frame)?;

            let delta = self.sim.advance();
            self.renderer.update_title(&delta, self.sim.generation())?;

            match self.scheduler.wait().await {
                Tick::Elapsed => {}
                Tick::Cancelled => return Ok(()),
            }
        }
    }

    /// The simulation state, for inspection after a bounded run
    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// The renderer, for inspecting captured output in tests
    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }
}
