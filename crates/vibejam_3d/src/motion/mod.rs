//! Procedural motion drivers
//!
//! A driver is a per-frame function of (its node's base parameters, elapsed
//! time, frame delta, hover flag) that mutates the transform or material of
//! the one node it is attached to. Drivers never read other nodes and keep
//! no cross-frame state beyond their construction parameters, so they can
//! run in any fixed order.
//!
//! Displacement comes from bounded periodic terms; no driver accumulates
//! unbounded offsets (the one exception is the ambient particle drift,
//! see [`crate::particles`]).

mod drift;
mod glow;
mod portal;

pub use drift::{FloatDriver, SpinDriver, StepSpinDriver, SwayDriver};
pub use glow::{EmissivePulseDriver, HoverScaleDriver};
pub use portal::{PortalRingDriver, PortalSpinDriver};

use crate::scene::SceneNode;
use vibejam_animation::FrameTick;

/// Per-frame mutation of a single scene node
pub trait MotionDriver {
    /// Update the node for this frame
    fn update(&mut self, node: &mut SceneNode, tick: &FrameTick);

    /// Driver name for logging
    fn name(&self) -> &'static str;
}
