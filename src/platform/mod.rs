//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (frame timestamps)
//! - Input events (pointer motion)

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Millisecond clock that advances only when told to
///
/// Stands in for `requestAnimationFrame` timestamps in headless runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticClock {
    now_ms: f64,
    step_ms: f64,
}

impl SyntheticClock {
    /// A clock starting at `start_ms` that moves `step_ms` per `advance`
    pub fn new(start_ms: f64, step_ms: f64) -> Self {
        Self {
            now_ms: start_ms,
            step_ms: step_ms.max(0.0),
        }
    }

    /// 60 Hz display refresh
    pub fn display_rate() -> Self {
        Self::new(0.0, 1000.0 / 60.0)
    }

    pub fn now(&self) -> f64 {
        self.now_ms
    }

    /// Move forward one step and return the new time
    pub fn advance(&mut self) -> f64 {
        self.now_ms += self.step_ms;
        self.now_ms
    }

    /// Move forward by an arbitrary amount (negative amounts are ignored)
    pub fn advance_by(&mut self, ms: f64) -> f64 {
        self.now_ms += ms.max(0.0);
        self.now_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_monotonic() {
        let mut clock = SyntheticClock::new(100.0, 10.0);
        assert_eq!(clock.now(), 100.0);
        assert_eq!(clock.advance(), 110.0);
        assert_eq!(clock.advance_by(-50.0), 110.0);
        assert_eq!(clock.advance_by(5.0), 115.0);
    }

    #[test]
    fn test_negative_step_clamped() {
        let mut clock = SyntheticClock::new(0.0, -1.0);
        assert_eq!(clock.advance(), 0.0);
    }

    #[test]
    fn test_display_rate() {
        let mut clock = SyntheticClock::display_rate();
        for _ in 0..60 {
            clock.advance();
        }
        assert!((clock.now() - 1000.0).abs() < 1e-9);
    }
}
