//! Terminal Life runner (default binary).
//!
//! Seeds a random soup, then runs the driver loop forever: one Braille
//! frame roughly every 10ms, with the generation statistics in the
//! terminal title. Ctrl-C stops the loop and exits with status 0.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use tui_life::core::Simulation;
use tui_life::driver::{DriverLoop, WallClock};
use tui_life::term::TerminalRenderer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let sim = Simulation::new(entropy_seed());
    let renderer = TerminalRenderer::stdout();

    let mut driver = DriverLoop::new(sim, renderer, WallClock::new());
    driver.run().await
}

/// A fresh seed per run; sub-second nanos vary plenty between launches.
fn entropy_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0)
}
