//! Roulette wheel on the solution slide.
//!
//! Idle, the wheel turns once every four seconds. A spin picks 3–6 full
//! turns plus a random landing angle and decelerates over three seconds;
//! spinning again while a spin is running does nothing. A frozen wheel
//! (reduced motion) holds its angle while idle.

use std::time::Duration;

use rand::Rng;

use crate::animation::ease_out;

const IDLE_PERIOD: Duration = Duration::from_secs(4);
const IDLE_RESTART_DELAY: Duration = Duration::from_millis(300);
pub const SPIN_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Spin {
    started_at: Duration,
    from_deg: f64,
    turn_deg: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouletteWheel {
    segments: usize,
    /// Angle the idle rotation is measured from, and when it was anchored.
    idle_anchor: (f64, Duration),
    spin: Option<Spin>,
    frozen: bool,
}

impl RouletteWheel {
    pub fn new(segments: usize) -> Self {
        Self {
            segments: segments.max(1),
            idle_anchor: (0.0, Duration::ZERO),
            spin: None,
            frozen: false,
        }
    }

    /// Stop idle rotation.
    pub fn frozen(mut self, frozen: bool) -> Self {
        self.frozen = frozen;
        self
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Restart idle rotation from zero; rotation resumes after a short delay.
    pub fn reset(&mut self, now: Duration) {
        self.idle_anchor = (0.0, now + IDLE_RESTART_DELAY);
        self.spin = None;
    }

    pub fn is_spinning(&self, now: Duration) -> bool {
        self.spin
            .is_some_and(|s| now.saturating_sub(s.started_at) < SPIN_DURATION)
    }

    /// Start a spin. Returns false when one is already running.
    pub fn spin<R: Rng>(&mut self, rng: &mut R, now: Duration) -> bool {
        if self.is_spinning(now) {
            return false;
        }
        let turns = rng.gen_range(3.0..6.0);
        let landing = rng.gen_range(0.0..360.0);
        self.spin = Some(Spin {
            started_at: now,
            from_deg: self.angle(now),
            turn_deg: turns * 360.0 + landing,
        });
        tracing::debug!(turns, landing, "wheel spin");
        true
    }

    /// Wheel angle in degrees, `[0, 360)`.
    pub fn angle(&self, now: Duration) -> f64 {
        let deg = match self.spin {
            Some(spin) if now.saturating_sub(spin.started_at) < SPIN_DURATION => {
                let t = now.saturating_sub(spin.started_at).as_secs_f64()
                    / SPIN_DURATION.as_secs_f64();
                spin.from_deg + spin.turn_deg * ease_out(t)
            }
            Some(spin) => {
                let settled = spin.started_at + SPIN_DURATION;
                spin.from_deg + spin.turn_deg + self.idle_degrees(now.saturating_sub(settled))
            }
            None => {
                let (base, at) = self.idle_anchor;
                base + self.idle_degrees(now.saturating_sub(at))
            }
        };
        deg.rem_euclid(360.0)
    }

    fn idle_degrees(&self, elapsed: Duration) -> f64 {
        if self.frozen {
            return 0.0;
        }
        elapsed.as_secs_f64() / IDLE_PERIOD.as_secs_f64() * 360.0
    }

    /// Index of the segment under the pointer at the top of the wheel.
    pub fn selected_segment(&self, now: Duration) -> usize {
        let width = 360.0 / self.segments as f64;
        let pointer = (360.0 - self.angle(now)).rem_euclid(360.0);
        ((pointer / width) as usize).min(self.segments - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn idle_rotation() {
        let wheel = RouletteWheel::new(6);
        assert_eq!(wheel.angle(ms(0)), 0.0);
        assert!((wheel.angle(ms(1000)) - 90.0).abs() < 1e-9);
        assert!((wheel.angle(ms(4000))).abs() < 1e-9);
    }

    #[test]
    fn frozen_wheel_holds_still() {
        let mut wheel = RouletteWheel::new(6).frozen(true);
        wheel.reset(ms(0));
        assert!(wheel.is_frozen());
        assert_eq!(wheel.angle(ms(2000)), 0.0);
        assert_eq!(wheel.angle(ms(9000)), 0.0);
        assert_eq!(wheel.selected_segment(ms(9000)), 0);
    }

    #[test]
    fn reset_holds_still_briefly() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut wheel = RouletteWheel::new(6);
        wheel.spin(&mut rng, ms(0));
        wheel.reset(ms(10_000));
        assert!(!wheel.is_spinning(ms(10_000)));
        assert_eq!(wheel.angle(ms(10_200)), 0.0);
        assert!((wheel.angle(ms(11_300)) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn second_spin_ignored_while_running() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut wheel = RouletteWheel::new(6);
        assert!(wheel.spin(&mut rng, ms(100)));
        assert!(wheel.is_spinning(ms(1000)));
        assert!(!wheel.spin(&mut rng, ms(1000)));
        assert!(!wheel.is_spinning(ms(3100)));
        assert!(wheel.spin(&mut rng, ms(3100)));
    }

    #[test]
    fn spin_is_continuous_at_end() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut wheel = RouletteWheel::new(8);
        wheel.spin(&mut rng, ms(0));
        let before = wheel.angle(ms(2999));
        let after = wheel.angle(ms(3000));
        let diff = (after - before).rem_euclid(360.0);
        assert!(diff < 1.0, "jump of {diff} degrees");
    }

    #[test]
    fn selected_segment_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut wheel = RouletteWheel::new(5);
        wheel.spin(&mut rng, ms(0));
        for t in (0..8000).step_by(97) {
            assert!(wheel.selected_segment(ms(t)) < 5);
        }
    }
}
