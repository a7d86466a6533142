//! Vibejam Animation System
//!
//! Easing curves, eased interpolation, and time-based tweens driven by a
//! single per-frame scheduler.
//!
//! # Features
//!
//! - **Easing Library**: quadratic/cubic/elastic/bounce curves
//! - **Interpolators**: eased lerp over scalars, vectors, and colors
//! - **Tweens**: timed value transitions with exact endpoint settling
//! - **Frame Scheduler**: one cooperative tick per display frame, driving
//!   tweens and registered per-tick callbacks
//! - **Last-wins targets**: starting a tween for a logical target cancels
//!   any in-flight tween for the same target
//! - **RAII teardown**: tick registrations unsubscribe on drop

pub mod easing;
pub mod scheduler;
pub mod tween;
pub mod values;

pub use easing::Easing;
pub use scheduler::{
    FrameScheduler, FrameTick, SchedulerHandle, TickCallbackId, TickHandle, TweenId, TweenTarget,
};
pub use tween::Tween;
pub use values::{lerp_color, lerp_eased, lerp_vec3, Interpolate};
