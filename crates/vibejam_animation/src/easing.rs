//! Easing functions
//!
//! Pure curves mapping normalized progress to eased progress. Every variant
//! satisfies `apply(0.0) == 0.0` and `apply(1.0) == 1.0`; the elastic and
//! bounce variants overshoot in between. Inputs outside [0, 1] are not
//! clamped here; call sites that need clamping (see [`crate::values`])
//! clamp before easing.

use std::f32::consts::PI;

/// Easing curve selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseOutElastic,
    EaseOutBounce,
}

impl Easing {
    /// Evaluate the curve at progress `t`
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => t * (2.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
            Easing::EaseOutElastic => {
                // The tail oscillation never quite reaches 1, so pin the
                // endpoint to keep apply(1) exact.
                if t <= 0.0 {
                    return 0.0;
                }
                if t >= 1.0 {
                    return 1.0;
                }
                let p = 0.3;
                2f32.powf(-10.0 * t) * ((t - p / 4.0) * (2.0 * PI) / p).sin() + 1.0
            }
            Easing::EaseOutBounce => {
                if t < 1.0 / 2.75 {
                    7.5625 * t * t
                } else if t < 2.0 / 2.75 {
                    let u = t - 1.5 / 2.75;
                    7.5625 * u * u + 0.75
                } else if t < 2.5 / 2.75 {
                    let u = t - 2.25 / 2.75;
                    7.5625 * u * u + 0.9375
                } else {
                    let u = t - 2.625 / 2.75;
                    7.5625 * u * u + 0.984375
                }
            }
        }
    }

    /// All easing variants, for exhaustive property tests
    pub const ALL: [Easing; 9] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseOutElastic,
        Easing::EaseOutBounce,
    ];
}
