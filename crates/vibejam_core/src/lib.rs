//! Vibejam core primitives
//!
//! Math and color types shared by the animation and scene crates.
//! Everything here is plain data: no handles, no scheduling, no I/O.

mod color;
mod math;

pub use color::Color;
pub use math::Vec3;
