//! Animatable value types
//!
//! Provides the [`Interpolate`] trait for values that can be linearly
//! blended, plus eased interpolation helpers over scalars, vectors, and
//! colors. The eased helpers clamp progress to [0, 1] *before* applying the
//! easing curve, so callers can feed raw elapsed/duration ratios.

use crate::easing::Easing;
use vibejam_core::{Color, Vec3};

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

impl Interpolate for Vec3 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec3::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

/// Interpolate between two values with easing
///
/// Progress is clamped to [0, 1] before the curve is applied; inputs are
/// not mutated and a new value is returned.
pub fn lerp_eased<T: Interpolate>(start: &T, end: &T, t: f32, easing: Easing) -> T {
    let eased = easing.apply(t.clamp(0.0, 1.0));
    start.lerp(end, eased)
}

/// Interpolate between two points with easing
pub fn lerp_vec3(start: Vec3, end: Vec3, t: f32, easing: Easing) -> Vec3 {
    lerp_eased(&start, &end, t, easing)
}

/// Interpolate between two colors with easing
pub fn lerp_color(start: Color, end: Color, t: f32, easing: Easing) -> Color {
    lerp_eased(&start, &end, t, easing)
}
