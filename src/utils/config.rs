pub struct Config;

impl Config {
    pub const DEFAULT_WIDTH: usize = 100;
    pub const DEFAULT_HEIGHT: usize = 100;

    /// Seconds between generations while running.
    pub const DEFAULT_INTERVAL: f64 = 0.5;
    pub const MIN_INTERVAL: f64 = 0.0001;
    pub const MAX_INTERVAL: f64 = 4.;

    pub const FILL_RATE: f64 = 0.5;

    pub const MAX_FPS: f64 = 60.;
}

/// Runtime parameters of [`crate::LifeEngine`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    pub width: usize,
    pub height: usize,
    /// Tick interval in seconds; clamped into the supported range on use.
    pub interval: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: Config::DEFAULT_WIDTH,
            height: Config::DEFAULT_HEIGHT,
            interval: Config::DEFAULT_INTERVAL,
        }
    }
}
