//! Braille Life (workspace facade crate).
//!
//! This package keeps the public `tui_life::{core,term,types}` API stable while
//! the implementation lives in dedicated crates under `crates/`. The driver
//! loop that composes them lives here.

pub mod driver;

pub use tui_life_core as core;
pub use tui_life_term as term;
pub use tui_life_types as types;

pub use driver::{DriverLoop, Scheduler, Tick, WallClock};
