use crate::{Config, LifeError};

/// Seconds between generations, always within `[Config::MIN_INTERVAL, Config::MAX_INTERVAL]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct TickInterval(f64);

impl TickInterval {
    /// Accepts only finite values inside the supported range.
    pub fn new(seconds: f64) -> Result<Self, LifeError> {
        if (Config::MIN_INTERVAL..=Config::MAX_INTERVAL).contains(&seconds) {
            Ok(Self(seconds))
        } else {
            Err(LifeError::InvalidSpeed(seconds))
        }
    }

    /// Moves `seconds` to the nearest supported value. NaN has no nearest value.
    pub fn clamped(seconds: f64) -> Result<Self, LifeError> {
        if seconds.is_nan() {
            return Err(LifeError::InvalidSpeed(seconds));
        }
        Ok(Self(seconds.clamp(Config::MIN_INTERVAL, Config::MAX_INTERVAL)))
    }

    pub fn seconds(self) -> f64 {
        self.0
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(Config::DEFAULT_INTERVAL)
    }
}

/// Decides whether enough time has passed since the last authorized step.
///
/// Timestamps are seconds on any monotonic clock chosen by the caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickGate {
    baseline: Option<f64>,
}

impl TickGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first call always passes. Later calls pass once `now - baseline >= interval`,
    /// and only a passing call moves the baseline to `now`. A NaN `now` never becomes the baseline.
    pub fn elapsed(&mut self, interval: f64, now: f64) -> bool {
        let pass = match self.baseline {
            None => true,
            Some(baseline) => now - baseline >= interval,
        };
        if pass && !now.is_nan() {
            self.baseline = Some(now);
        }
        pass
    }

    /// Timestamp of the last authorized step, if any.
    pub fn baseline(&self) -> Option<f64> {
        self.baseline
    }

    /// Forgets the baseline so the next check passes immediately.
    pub fn reset(&mut self) {
        self.baseline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_passes() {
        let mut gate = TickGate::new();
        assert_eq!(gate.baseline(), None);
        assert!(gate.elapsed(0.5, 10.));
        assert_eq!(gate.baseline(), Some(10.));
    }

    #[test]
    fn test_interval_boundary() {
        let (interval, eps) = (0.5, 1e-6);
        let mut gate = TickGate::new();
        assert!(gate.elapsed(interval, 1.));

        assert!(!gate.elapsed(interval, 1. + interval - eps));
        assert_eq!(gate.baseline(), Some(1.));

        assert!(gate.elapsed(interval, 1. + interval));
        assert_eq!(gate.baseline(), Some(1. + interval));

        assert!(!gate.elapsed(interval, 1. + interval));
    }

    #[test]
    fn test_late_check_moves_baseline_to_now() {
        let mut gate = TickGate::new();
        gate.elapsed(1., 0.);
        assert!(gate.elapsed(1., 3.7));
        assert_eq!(gate.baseline(), Some(3.7));
        assert!(!gate.elapsed(1., 4.));
    }

    #[test]
    fn test_nan_timestamp_is_refused() {
        let mut gate = TickGate::new();
        assert!(gate.elapsed(1., 0.));
        assert!(!gate.elapsed(1., f64::NAN));
        assert_eq!(gate.baseline(), Some(0.));
        assert!(!gate.elapsed(1., 0.1));
        assert_eq!(gate.baseline(), Some(0.));
        assert!(gate.elapsed(1., 1.));
    }

    #[test]
    fn test_nan_first_call_leaves_gate_unset() {
        let mut gate = TickGate::new();
        assert!(gate.elapsed(1., f64::NAN));
        assert_eq!(gate.baseline(), None);
        assert!(gate.elapsed(1., 5.));
        assert!(!gate.elapsed(1., 5.5));
    }

    #[test]
    fn test_reset() {
        let mut gate = TickGate::new();
        gate.elapsed(4., 0.);
        gate.reset();
        assert!(gate.elapsed(4., 0.1));
    }

    #[test]
    fn test_interval_validation() {
        assert_eq!(TickInterval::new(0.5).unwrap().seconds(), 0.5);
        assert_eq!(TickInterval::new(0.), Err(LifeError::InvalidSpeed(0.)));
        assert!(TickInterval::new(-1.).is_err());
        assert!(TickInterval::new(10.).is_err());
        assert!(TickInterval::new(f64::INFINITY).is_err());
        assert!(TickInterval::new(f64::NAN).is_err());
    }

    #[test]
    fn test_interval_clamping() {
        let lo = TickInterval::clamped(-3.).unwrap();
        let hi = TickInterval::clamped(100.).unwrap();
        assert_eq!(lo.seconds(), Config::MIN_INTERVAL);
        assert_eq!(hi.seconds(), Config::MAX_INTERVAL);
        assert_eq!(
            TickInterval::clamped(f64::INFINITY).unwrap().seconds(),
            Config::MAX_INTERVAL
        );
        assert!(TickInterval::clamped(f64::NAN).is_err());
    }
}
