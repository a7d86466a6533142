//! Timed value transitions

use crate::easing::Easing;
use crate::values::Interpolate;

/// A timed interpolation from a start value to an end value
///
/// A tween owns no clock of its own; the scheduler (or a test) advances it
/// with [`Tween::tick`]. On the tick that crosses the duration the value
/// clamps exactly onto the end value and the tween stops playing.
#[derive(Clone, Debug)]
pub struct Tween<T: Interpolate> {
    start: T,
    end: T,
    /// Duration in seconds
    duration: f32,
    /// Elapsed time in seconds
    elapsed: f32,
    easing: Easing,
    playing: bool,
}

impl<T: Interpolate> Tween<T> {
    /// Create a tween running from `start` to `end` over `duration` seconds
    pub fn new(start: T, end: T, duration: f32, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
            playing: true,
        }
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.playing = false;
        }
    }

    /// Normalized progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Current interpolated value
    pub fn value(&self) -> T {
        if !self.playing && self.elapsed >= self.duration {
            // Settle exactly on the end value
            return self.end.clone();
        }
        let eased = self.easing.apply(self.progress());
        self.start.lerp(&self.end, eased)
    }

    /// Whether the tween has reached its end
    pub fn is_finished(&self) -> bool {
        !self.playing
    }

    pub fn end_value(&self) -> T {
        self.end.clone()
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }
}
