use thiserror::Error;

/// Errors reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LifeError {
    /// Direct cell access outside `[0, width) x [0, height)`.
    #[error("cell ({x}, {y}) is out of bounds for a {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Tick interval that can't be used, in seconds.
    #[error("invalid tick interval: {0} s")]
    InvalidSpeed(f64),
}
