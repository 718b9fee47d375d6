#![warn(clippy::all)]

mod engine;
mod error;
mod grid;
mod rule;
mod stepper;
mod tick_gate;
mod utils;

pub use engine::{LifeEngine, RunState};
pub use error::LifeError;
pub use grid::{wrap_next, wrap_prev, Grid};
pub use rule::next_state;
pub use stepper::{step, DoubleBuffer};
pub use tick_gate::{TickGate, TickInterval};
pub use utils::{Config, EngineConfig, FrameLimiter, Pattern, UnknownPattern};
