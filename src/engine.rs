use crate::{
    stepper::DoubleBuffer, EngineConfig, Grid, LifeError, Pattern, TickGate, TickInterval,
};
use rand::Rng;
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

/// Game of Life on a torus, driven one frame at a time.
///
/// Edits are accepted only while paused; generations advance only while running and
/// only when the tick gate allows it. Time and randomness are supplied by the caller.
#[derive(Clone, Debug)]
pub struct LifeEngine {
    buffers: DoubleBuffer,  // Current and next generation.
    run_state: RunState,    // Paused on construction.
    gate: TickGate,         // Limits how often generations advance.
    interval: TickInterval, // Seconds between generations.
    generation: u64,        // Generations computed since the last reset.
}

impl LifeEngine {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_config(EngineConfig {
            width,
            height,
            ..EngineConfig::default()
        })
    }

    /// Panics if a dimension is zero. A NaN interval falls back to the default one.
    pub fn with_config(config: EngineConfig) -> Self {
        let interval = TickInterval::clamped(config.interval).unwrap_or_default();
        debug!(
            width = config.width,
            height = config.height,
            interval = interval.seconds(),
            "creating engine"
        );
        Self {
            buffers: DoubleBuffer::new(config.width, config.height),
            run_state: RunState::Paused,
            gate: TickGate::new(),
            interval,
            generation: 0,
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid().dimensions()
    }

    /// The current generation.
    pub fn grid(&self) -> &Grid {
        self.buffers.active()
    }

    /// Row-major cells of the current generation.
    pub fn cells(&self) -> &[bool] {
        self.grid().cells()
    }

    pub fn get_cell(&self, x: usize, y: usize) -> Result<bool, LifeError> {
        self.grid().get(x, y)
    }

    pub fn population(&self) -> usize {
        self.grid().population()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Seconds between generations.
    pub fn current_speed(&self) -> f64 {
        self.interval.seconds()
    }

    pub fn toggle_run(&mut self) {
        self.run_state = match self.run_state {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        };
        debug!(state = ?self.run_state, generation = self.generation, "run state toggled");
    }

    pub fn pause(&mut self) {
        if self.is_running() {
            self.toggle_run();
        }
    }

    pub fn resume(&mut self) {
        if !self.is_running() {
            self.toggle_run();
        }
    }

    /// Sets the tick interval, clamped into the supported range. Returns the applied value.
    ///
    /// Only NaN is rejected; the previous interval is kept in that case.
    pub fn set_speed(&mut self, interval: f64) -> Result<f64, LifeError> {
        self.interval = TickInterval::clamped(interval)?;
        if self.interval.seconds() != interval {
            debug!(
                requested = interval,
                applied = self.interval.seconds(),
                "tick interval clamped"
            );
        } else {
            debug!(interval, "tick interval changed");
        }
        Ok(self.interval.seconds())
    }

    /// Shifts the tick interval by `delta` seconds, see [`Self::set_speed`].
    pub fn adjust_speed(&mut self, delta: f64) -> Result<f64, LifeError> {
        self.set_speed(self.interval.seconds() + delta)
    }

    /// Flips one cell. Returns `Ok(false)` without touching the grid while running.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<bool, LifeError> {
        self.grid().get(x, y)?;
        if !self.is_editable("toggle_cell") {
            return Ok(false);
        }
        self.buffers.active_mut().toggle(x, y)?;
        Ok(true)
    }

    /// Writes one cell. Returns `Ok(false)` without touching the grid while running.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<bool, LifeError> {
        self.grid().get(x, y)?;
        if !self.is_editable("set_cell") {
            return Ok(false);
        }
        self.buffers.active_mut().set(x, y, alive)?;
        Ok(true)
    }

    /// Makes the live cells of `pattern` alive with its top-left corner at `(x, y)`.
    ///
    /// The corner must be inside the grid; the rest of the pattern wraps around the edges.
    /// Returns `Ok(false)` without touching the grid while running.
    pub fn stamp(&mut self, pattern: Pattern, x: usize, y: usize) -> Result<bool, LifeError> {
        self.grid().get(x, y)?;
        if !self.is_editable("stamp") {
            return Ok(false);
        }
        let (w, h) = self.dimensions();
        let grid = self.buffers.active_mut();
        for &(dx, dy) in pattern.cells() {
            grid.put((x + dx) % w, (y + dy) % h, true);
        }
        debug!(%pattern, x, y, "pattern stamped");
        Ok(true)
    }

    /// Kills every cell and resets the generation counter and tick gate. Ignored while running.
    pub fn clear_all(&mut self) -> bool {
        if !self.is_editable("clear_all") {
            return false;
        }
        self.buffers.active_mut().clear();
        self.restart();
        debug!("grid cleared");
        true
    }

    /// Fills the grid with random cells and resets the generation counter and tick gate.
    /// Ignored while running.
    pub fn randomize_all<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.is_editable("randomize_all") {
            return false;
        }
        self.buffers.active_mut().randomize(rng);
        self.restart();
        debug!(population = self.population(), "grid randomized");
        true
    }

    /// Per-frame entry point. Advances one generation if running and the tick gate allows it.
    ///
    /// `now` is in seconds on the caller's monotonic clock. Returns whether a step happened.
    pub fn advance_frame(&mut self, now: f64) -> bool {
        if !self.is_running() || !self.gate.elapsed(self.interval.seconds(), now) {
            return false;
        }
        self.step();
        true
    }

    /// Advances exactly one generation regardless of run state and tick gate.
    pub fn step_once(&mut self) {
        self.step();
    }

    fn step(&mut self) {
        self.buffers.advance();
        self.generation += 1;
        trace!(
            generation = self.generation,
            population = self.population(),
            "generation advanced"
        );
    }

    /// A fresh board starts counting from zero and steps on the first running frame.
    fn restart(&mut self) {
        self.generation = 0;
        self.gate.reset();
    }

    fn is_editable(&self, op: &'static str) -> bool {
        if self.is_running() {
            trace!(op, "edit ignored while running");
            false
        } else {
            true
        }
    }
}

impl Default for LifeEngine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}
