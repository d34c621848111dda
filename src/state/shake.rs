// Shake sequence as an explicit state machine advanced by the animation tick.
use crate::config::Tuning;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShakePhase {
    Idle,
    Shaking { remaining_ms: f64 },
    Whiteout { remaining_ms: f64 },
    Settling { remaining_ms: f64 },
}

/// Things the store must do as the sequence progresses, in the order they
/// happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShakeEffect {
    /// Whiteout began; objects get scattered under cover of the flash.
    WhiteoutStarted,
    WhiteoutEnded,
    Settled,
    SnowExpired,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShakeMachine {
    pub phase: ShakePhase,
    /// Lifetime left for the globe snow of the last shake.
    pub snow_remaining_ms: Option<f64>,
    shaking_ms: f64,
    whiteout_ms: f64,
    settling_ms: f64,
    snow_lifetime_ms: f64,
}

impl ShakeMachine {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: ShakePhase::Idle,
            snow_remaining_ms: None,
            shaking_ms: tuning.whiteout_at_ms,
            whiteout_ms: tuning.whiteout_end_ms - tuning.whiteout_at_ms,
            settling_ms: tuning.settle_end_ms - tuning.whiteout_end_ms,
            snow_lifetime_ms: tuning.globe_snow_lifetime_ms,
        }
    }

    /// Gestures are refused whenever this is true.
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, ShakePhase::Idle)
    }

    pub fn is_whiteout(&self) -> bool {
        matches!(self.phase, ShakePhase::Whiteout { .. })
    }

    /// Starts a sequence. Returns false, and changes nothing, while a previous
    /// sequence is still running.
    pub fn trigger(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        self.phase = ShakePhase::Shaking { remaining_ms: self.shaking_ms };
        self.snow_remaining_ms = Some(self.snow_lifetime_ms);
        true
    }

    /// Advances by `dt_ms`, carrying leftover time across phase boundaries so
    /// one long tick still yields every effect, oldest first.
    pub fn advance(&mut self, dt_ms: f64) -> Vec<ShakeEffect> {
        let mut timed: Vec<(f64, ShakeEffect)> = Vec::new();
        let mut elapsed = 0.0;
        let mut left = dt_ms.max(0.0);
        loop {
            let (remaining, next, effect) = match self.phase {
                ShakePhase::Idle => break,
                ShakePhase::Shaking { remaining_ms } => (
                    remaining_ms,
                    ShakePhase::Whiteout { remaining_ms: self.whiteout_ms },
                    ShakeEffect::WhiteoutStarted,
                ),
                ShakePhase::Whiteout { remaining_ms } => (
                    remaining_ms,
                    ShakePhase::Settling { remaining_ms: self.settling_ms },
                    ShakeEffect::WhiteoutEnded,
                ),
                ShakePhase::Settling { remaining_ms } => {
                    (remaining_ms, ShakePhase::Idle, ShakeEffect::Settled)
                }
            };
            if left < remaining {
                self.phase = match self.phase {
                    ShakePhase::Shaking { .. } => ShakePhase::Shaking { remaining_ms: remaining - left },
                    ShakePhase::Whiteout { .. } => ShakePhase::Whiteout { remaining_ms: remaining - left },
                    ShakePhase::Settling { .. } => ShakePhase::Settling { remaining_ms: remaining - left },
                    ShakePhase::Idle => ShakePhase::Idle,
                };
                break;
            }
            left -= remaining;
            elapsed += remaining;
            self.phase = next;
            timed.push((elapsed, effect));
        }

        if let Some(snow) = self.snow_remaining_ms {
            let snow_left = snow - dt_ms.max(0.0);
            if snow_left <= 0.0 {
                self.snow_remaining_ms = None;
                timed.push((snow, ShakeEffect::SnowExpired));
            } else {
                self.snow_remaining_ms = Some(snow_left);
            }
        }

        // stable sort keeps phase order for simultaneous offsets
        timed.sort_by(|a, b| a.0.total_cmp(&b.0));
        timed.into_iter().map(|(_, e)| e).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> ShakeMachine {
        ShakeMachine::new(&Tuning::default())
    }

    /// Runs in `tick` steps until `until_ms`, recording the time of each effect.
    fn run(m: &mut ShakeMachine, tick: f64, until_ms: f64) -> Vec<(f64, ShakeEffect)> {
        let mut t = 0.0;
        let mut out = Vec::new();
        while t < until_ms {
            t += tick;
            for e in m.advance(tick) {
                out.push((t, e));
            }
        }
        out
    }

    #[test]
    fn idle_machine_emits_nothing() {
        let mut m = machine();
        assert!(m.advance(10_000.0).is_empty());
        assert!(!m.is_active());
    }

    #[test]
    fn sequence_fires_at_expected_offsets() {
        let mut m = machine();
        assert!(m.trigger());
        let got = run(&mut m, 100.0, 7000.0);
        assert_eq!(
            got,
            vec![
                (500.0, ShakeEffect::WhiteoutStarted),
                (1500.0, ShakeEffect::WhiteoutEnded),
                (2000.0, ShakeEffect::Settled),
                (6000.0, ShakeEffect::SnowExpired),
            ]
        );
    }

    #[test]
    fn active_until_settled() {
        let mut m = machine();
        m.trigger();
        m.advance(1999.0);
        assert!(m.is_active());
        m.advance(1.0);
        assert!(!m.is_active());
        assert!(m.snow_remaining_ms.is_some());
    }

    #[test]
    fn whiteout_spans_500_to_1500() {
        let mut m = machine();
        m.trigger();
        m.advance(499.0);
        assert!(!m.is_whiteout());
        m.advance(1.0);
        assert!(m.is_whiteout());
        m.advance(999.0);
        assert!(m.is_whiteout());
        m.advance(1.0);
        assert!(!m.is_whiteout());
    }

    #[test]
    fn one_long_tick_keeps_chronological_order() {
        let mut m = machine();
        m.trigger();
        assert_eq!(
            m.advance(10_000.0),
            vec![
                ShakeEffect::WhiteoutStarted,
                ShakeEffect::WhiteoutEnded,
                ShakeEffect::Settled,
                ShakeEffect::SnowExpired,
            ]
        );
        assert!(!m.is_active());
        assert_eq!(m.snow_remaining_ms, None);
    }

    #[test]
    fn retrigger_while_active_is_ignored() {
        let mut m = machine();
        assert!(m.trigger());
        m.advance(700.0);
        let before = m.clone();
        assert!(!m.trigger());
        assert_eq!(m, before);
    }

    #[test]
    fn retrigger_after_settle_restarts_snow_lifetime() {
        let mut m = machine();
        m.trigger();
        m.advance(3000.0);
        assert!(m.trigger());
        assert_eq!(m.snow_remaining_ms, Some(6000.0));
    }
}
