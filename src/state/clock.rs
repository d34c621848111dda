// Wall-clock deltas for the animation tick. Intervals fire late under load
// and are throttled in background tabs, so each tick reports the real time
// since the previous one rather than the nominal period.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickClock {
    last_ms: f64,
}

impl TickClock {
    pub fn starting_at(now_ms: f64) -> Self {
        Self { last_ms: now_ms }
    }

    /// Milliseconds since the previous call. A clock that steps backwards
    /// yields zero instead of a negative delta.
    pub fn elapsed(&mut self, now_ms: f64) -> f64 {
        let dt = (now_ms - self.last_ms).max(0.0);
        self.last_ms = self.last_ms.max(now_ms);
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_real_gaps_between_ticks() {
        let mut c = TickClock::starting_at(1_000.0);
        assert_eq!(c.elapsed(1_100.0), 100.0);
        assert_eq!(c.elapsed(2_350.0), 1_250.0);
        assert_eq!(c.elapsed(2_360.0), 10.0);
    }

    #[test]
    fn backwards_step_is_zero_and_does_not_rewind() {
        let mut c = TickClock::starting_at(500.0);
        assert_eq!(c.elapsed(400.0), 0.0);
        assert_eq!(c.elapsed(600.0), 100.0);
    }
}
