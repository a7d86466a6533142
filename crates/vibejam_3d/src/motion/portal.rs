//! Portal ring and swirl-group drivers

use super::MotionDriver;
use crate::scene::SceneNode;
use vibejam_animation::FrameTick;
use vibejam_core::Vec3;

/// Portal group yaw computed from elapsed time:
/// `rotation.y = elapsed · rate`
#[derive(Clone, Copy, Debug)]
pub struct PortalSpinDriver {
    pub rate: f32,
}

impl Default for PortalSpinDriver {
    fn default() -> Self {
        Self { rate: 0.5 }
    }
}

impl MotionDriver for PortalSpinDriver {
    fn update(&mut self, node: &mut SceneNode, tick: &FrameTick) {
        node.rotation.y = tick.elapsed * self.rate;
    }

    fn name(&self) -> &'static str {
        "PortalSpinDriver"
    }
}

/// Portal ring pulse: `scale = 1 + sin(elapsed · 2) · 0.1`, plus the shader
/// clock uniform
#[derive(Clone, Copy, Debug)]
pub struct PortalRingDriver {
    pub pulse_frequency: f32,
    pub pulse_amplitude: f32,
}

impl Default for PortalRingDriver {
    fn default() -> Self {
        Self {
            pulse_frequency: 2.0,
            pulse_amplitude: 0.1,
        }
    }
}

impl MotionDriver for PortalRingDriver {
    fn update(&mut self, node: &mut SceneNode, tick: &FrameTick) {
        let pulse = 1.0 + (tick.elapsed * self.pulse_frequency).sin() * self.pulse_amplitude;
        node.scale = Vec3::splat(pulse);
        node.material.time = tick.elapsed;
    }

    fn name(&self) -> &'static str {
        "PortalRingDriver"
    }
}
