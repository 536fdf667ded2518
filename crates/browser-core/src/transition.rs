//! Time-based tween used for the grid/full-screen slide and the top bar fade.
//!
//! A tween only records where it is heading. The caller drives it by calling
//! [`Tween::tick`] from a timer; the first tick after a retarget marks the
//! start time, so state changes never need a clock.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out.
    #[default]
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Pending,
    Running(Instant),
}

#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    value: f32,
    duration: Duration,
    easing: Easing,
    phase: Phase,
}

impl Tween {
    /// A tween resting at `value`.
    pub fn settled(value: f32, duration: Duration) -> Self {
        Self {
            from: value,
            to: value,
            value,
            duration,
            easing: Easing::default(),
            phase: Phase::Idle,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Head toward `to`, starting from wherever the tween is now.
    ///
    /// Reaffirming a target the tween already rests at is a no-op.
    pub fn retarget(&mut self, to: f32) {
        if !self.is_animating() && self.value == to {
            self.to = to;
            return;
        }

        self.from = self.value;
        self.to = to;
        self.phase = Phase::Pending;
    }

    /// Advance to `now`. Returns true while the tween is still moving.
    pub fn tick(&mut self, now: Instant) -> bool {
        let started = match self.phase {
            Phase::Idle => return false,
            Phase::Pending => {
                self.phase = Phase::Running(now);
                now
            }
            Phase::Running(started) => started,
        };

        let elapsed = now.saturating_duration_since(started);
        if self.duration.is_zero() || elapsed >= self.duration {
            self.value = self.to;
            self.phase = Phase::Idle;
            return false;
        }

        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.value = self.from + (self.to - self.from) * self.easing.apply(t);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(300);

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tween_reaches_target() {
        let mut tween = Tween::settled(0.0, DURATION);
        tween.retarget(1.0);
        assert!(tween.is_animating());
        assert_eq!(tween.value(), 0.0);

        let start = Instant::now();
        assert!(tween.tick(start));
        assert!(tween.tick(start + Duration::from_millis(150)));
        let mid = tween.value();
        assert!(mid > 0.0 && mid < 1.0);

        assert!(!tween.tick(start + DURATION));
        assert_eq!(tween.value(), 1.0);
        assert!(!tween.is_animating());
    }

    #[test]
    fn test_retarget_mid_flight_starts_from_current_value() {
        let mut tween = Tween::settled(0.0, DURATION).with_easing(Easing::Linear);
        tween.retarget(1.0);

        let start = Instant::now();
        tween.tick(start);
        tween.tick(start + Duration::from_millis(150));
        let mid = tween.value();

        tween.retarget(0.0);
        let restart = start + Duration::from_millis(160);
        tween.tick(restart);
        assert!((tween.value() - mid).abs() < f32::EPSILON);

        tween.tick(restart + Duration::from_millis(150));
        assert!(tween.value() < mid);

        tween.tick(restart + DURATION);
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn test_reaffirming_rest_value_does_not_animate() {
        let mut tween = Tween::settled(1.0, DURATION);
        tween.retarget(1.0);
        assert!(!tween.is_animating());
        assert_eq!(tween.value(), 1.0);
    }
}
