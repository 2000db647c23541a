use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Interpolatable value driven by a [`Tween`].
pub trait Lerp: Copy {
    #[must_use]
    fn lerp(from: Self, to: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(from: Self, to: Self, t: f64) -> Self {
        from + (to - from) * t
    }
}

impl Lerp for Color {
    fn lerp(from: Self, to: Self, t: f64) -> Self {
        Color::lerp(from, to, t)
    }
}

/// Linear tween between two values over a fixed duration.
///
/// Tweens never read a clock; they advance only through [`Tween::step`],
/// so every animation in the crate is host-stepped and deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    duration: Duration,
    elapsed: Duration,
}

impl<T: Lerp> Tween<T> {
    #[must_use]
    pub fn new(from: T, to: T, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// An already-completed tween pinned at `value`.
    #[must_use]
    pub fn fixed(value: T) -> Self {
        Self::new(value, value, Duration::ZERO)
    }

    pub fn step(&mut self, elapsed: Duration) {
        self.elapsed = (self.elapsed + elapsed).min(self.duration);
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn value(&self) -> T {
        T::lerp(self.from, self.to, self.progress())
    }

    #[must_use]
    pub fn target(&self) -> T {
        self.to
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Retargets mid-flight: the current interpolated value becomes the
    /// new starting point.
    pub fn retarget(&mut self, to: T, duration: Duration) {
        self.from = self.value();
        self.to = to;
        self.duration = duration;
        self.elapsed = Duration::ZERO;
    }

    /// Pins the tween at its current interpolated value.
    pub fn freeze(&mut self) {
        let current = self.value();
        *self = Self::fixed(current);
    }
}

/// Transition timing for every animated element of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDurations {
    pub bar_enter: Duration,
    pub bar_update: Duration,
    pub bar_exit: Duration,
    pub label_fade_in: Duration,
    pub label_fade_out: Duration,
    pub hover: Duration,
}

impl Default for TransitionDurations {
    fn default() -> Self {
        Self {
            bar_enter: Duration::from_millis(700),
            bar_update: Duration::from_millis(700),
            bar_exit: Duration::from_millis(350),
            label_fade_in: Duration::from_millis(500),
            label_fade_out: Duration::from_millis(200),
            hover: Duration::from_millis(150),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use approx::assert_relative_eq;

    use super::Tween;

    #[test]
    fn tween_interpolates_linearly() {
        let mut tween = Tween::new(0.0, 100.0, Duration::from_millis(400));
        assert_relative_eq!(tween.value(), 0.0);
        tween.step(Duration::from_millis(100));
        assert_relative_eq!(tween.value(), 25.0);
        tween.step(Duration::from_millis(900));
        assert_relative_eq!(tween.value(), 100.0);
        assert!(tween.is_complete());
    }

    #[test]
    fn retarget_restarts_from_current_value() {
        let mut tween = Tween::new(0.0, 100.0, Duration::from_millis(400));
        tween.step(Duration::from_millis(200));
        tween.retarget(0.0, Duration::from_millis(100));
        assert_relative_eq!(tween.value(), 50.0);
        tween.step(Duration::from_millis(50));
        assert_relative_eq!(tween.value(), 25.0);
    }

    #[test]
    fn freeze_pins_the_current_value() {
        let mut tween = Tween::new(0.0, 100.0, Duration::from_millis(400));
        tween.step(Duration::from_millis(100));
        tween.freeze();
        assert!(tween.is_complete());
        tween.step(Duration::from_millis(500));
        assert_relative_eq!(tween.value(), 25.0);
    }
}
