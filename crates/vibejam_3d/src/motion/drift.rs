//! Floating, spinning and swaying drivers

use super::MotionDriver;
use crate::scene::SceneNode;
use vibejam_animation::FrameTick;

/// Vertical bob: `y = base_y + sin(elapsed · frequency) · amplitude`
#[derive(Clone, Copy, Debug)]
pub struct FloatDriver {
    pub base_y: f32,
    pub frequency: f32,
    pub amplitude: f32,
}

impl FloatDriver {
    /// Island bob
    pub fn island(base_y: f32) -> Self {
        Self {
            base_y,
            frequency: 1.0,
            amplitude: 0.2,
        }
    }

    /// Judge avatar bob
    pub fn avatar(base_y: f32) -> Self {
        Self {
            base_y,
            frequency: 1.0,
            amplitude: 0.1,
        }
    }

    /// Countdown clock bob
    pub fn clock(base_y: f32) -> Self {
        Self {
            base_y,
            frequency: 0.5,
            amplitude: 0.2,
        }
    }
}

impl MotionDriver for FloatDriver {
    fn update(&mut self, node: &mut SceneNode, tick: &FrameTick) {
        node.position.y = self.base_y + (tick.elapsed * self.frequency).sin() * self.amplitude;
    }

    fn name(&self) -> &'static str {
        "FloatDriver"
    }
}

/// Continuous yaw accumulation at `rate` radians per second, scaled by the
/// frame delta
#[derive(Clone, Copy, Debug)]
pub struct SpinDriver {
    pub rate: f32,
}

impl MotionDriver for SpinDriver {
    fn update(&mut self, node: &mut SceneNode, tick: &FrameTick) {
        node.rotation.y += self.rate * tick.dt;
    }

    fn name(&self) -> &'static str {
        "SpinDriver"
    }
}

/// Fixed yaw increment per frame, unscaled
#[derive(Clone, Copy, Debug)]
pub struct StepSpinDriver {
    pub step: f32,
}

impl MotionDriver for StepSpinDriver {
    fn update(&mut self, node: &mut SceneNode, _tick: &FrameTick) {
        node.rotation.y += self.step;
    }

    fn name(&self) -> &'static str {
        "StepSpinDriver"
    }
}

/// Oscillatory yaw computed from elapsed time (never accumulates):
/// `rotation.y = sin(elapsed · frequency) · amplitude`
#[derive(Clone, Copy, Debug)]
pub struct SwayDriver {
    pub frequency: f32,
    pub amplitude: f32,
}

impl SwayDriver {
    /// Countdown clock sway
    pub fn clock() -> Self {
        Self {
            frequency: 0.2,
            amplitude: 0.1,
        }
    }
}

impl MotionDriver for SwayDriver {
    fn update(&mut self, node: &mut SceneNode, tick: &FrameTick) {
        node.rotation.y = (tick.elapsed * self.frequency).sin() * self.amplitude;
    }

    fn name(&self) -> &'static str {
        "SwayDriver"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn tick(elapsed: f32, dt: f32) -> FrameTick {
        FrameTick { elapsed, dt }
    }

    #[test]
    fn test_float_is_bounded_and_periodic() {
        let mut driver = FloatDriver::island(-1.0);
        let mut node = SceneNode::at(0.0, -1.0, 0.0);

        for i in 0..1000 {
            driver.update(&mut node, &tick(i as f32 * 0.1, 0.1));
            assert!(node.position.y >= -1.2 - 1e-5);
            assert!(node.position.y <= -0.8 + 1e-5);
        }

        // One full period returns to the base height
        driver.update(&mut node, &tick(2.0 * PI, 0.016));
        assert!((node.position.y - -1.0).abs() < 1e-4);
    }

    #[test]
    fn test_spin_accumulates_by_frame_delta() {
        let mut driver = SpinDriver { rate: 0.1 };
        let mut node = SceneNode::new();

        // Elapsed time does not matter, only dt
        driver.update(&mut node, &tick(100.0, 0.5));
        driver.update(&mut node, &tick(200.0, 0.5));
        assert!((node.rotation.y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_sway_reads_elapsed_not_dt() {
        let mut driver = SwayDriver::clock();
        let mut node = SceneNode::new();

        driver.update(&mut node, &tick(3.0, 123.0));
        let expected = (3.0f32 * 0.2).sin() * 0.1;
        assert!((node.rotation.y - expected).abs() < 1e-6);

        // Re-running at the same elapsed yields the same angle: no
        // accumulation
        driver.update(&mut node, &tick(3.0, 0.016));
        assert!((node.rotation.y - expected).abs() < 1e-6);
    }

    #[test]
    fn test_step_spin_ignores_timing() {
        let mut driver = StepSpinDriver { step: 0.01 };
        let mut node = SceneNode::new();

        for _ in 0..10 {
            driver.update(&mut node, &tick(0.0, 99.0));
        }
        assert!((node.rotation.y - 0.1).abs() < 1e-6);
    }
}
