//! Emissive pulsing and hover feedback

use super::MotionDriver;
use crate::scene::SceneNode;
use vibejam_animation::FrameTick;
use vibejam_core::Vec3;

/// Emissive intensity pulse:
/// `intensity = offset + sin(elapsed · frequency) · amplitude`
#[derive(Clone, Copy, Debug)]
pub struct EmissivePulseDriver {
    pub offset: f32,
    pub amplitude: f32,
    pub frequency: f32,
}

impl Default for EmissivePulseDriver {
    /// Hub platform pulse
    fn default() -> Self {
        Self {
            offset: 0.2,
            amplitude: 0.1,
            frequency: 1.0,
        }
    }
}

impl MotionDriver for EmissivePulseDriver {
    fn update(&mut self, node: &mut SceneNode, tick: &FrameTick) {
        node.material.emissive_intensity =
            self.offset + (tick.elapsed * self.frequency).sin() * self.amplitude;
    }

    fn name(&self) -> &'static str {
        "EmissivePulseDriver"
    }
}

/// Pointer-hover feedback: scale eases toward `base_scale · hover_factor`
/// at a fixed blend per frame, emissive intensity snaps between the rest
/// and hovered values
#[derive(Clone, Copy, Debug)]
pub struct HoverScaleDriver {
    pub base_scale: f32,
    pub hover_factor: f32,
    pub blend: f32,
    pub rest_emissive: f32,
    pub hover_emissive: f32,
}

impl HoverScaleDriver {
    /// Island hover: 5% growth
    pub fn island(base_scale: f32) -> Self {
        Self {
            base_scale,
            hover_factor: 1.05,
            blend: 0.1,
            rest_emissive: 0.2,
            hover_emissive: 0.5,
        }
    }

    /// Avatar hover: 10% growth
    pub fn avatar() -> Self {
        Self {
            base_scale: 1.0,
            hover_factor: 1.1,
            blend: 0.1,
            rest_emissive: 0.2,
            hover_emissive: 0.5,
        }
    }
}

impl MotionDriver for HoverScaleDriver {
    fn update(&mut self, node: &mut SceneNode, _tick: &FrameTick) {
        let target = if node.hovered {
            self.base_scale * self.hover_factor
        } else {
            self.base_scale
        };
        let current = node.scale.x;
        let next = current + (target - current) * self.blend;
        node.scale = Vec3::splat(next);

        node.material.emissive_intensity = if node.hovered {
            self.hover_emissive
        } else {
            self.rest_emissive
        };
    }

    fn name(&self) -> &'static str {
        "HoverScaleDriver"
    }
}
