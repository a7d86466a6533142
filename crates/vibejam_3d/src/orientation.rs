//! Device orientation adapter
//!
//! Converts device tilt into a small camera-rotation offset on mobile.
//! The platform sensor pushes samples into a shared [`DeviceOrientation`];
//! the [`OrientationNudger`] reads the derived delta on a fixed ~60 Hz step
//! and eases the camera toward it. On unsupported platforms the adapter
//! reports a zero delta and consumers skip the behavior entirely.

use crate::scene::SceneContextHandle;
use std::sync::{Arc, Mutex};
use vibejam_animation::{SchedulerHandle, TickHandle};

/// Tilt angles beyond this clamp to the limit (degrees)
const TILT_LIMIT_DEG: f32 = 45.0;

/// Fixed nudge step (~60 Hz)
const NUDGE_STEP_SECS: f32 = 1.0 / 60.0;

/// Fraction of the gap closed per step
const NUDGE_BLEND: f32 = 0.05;

/// Tilt-to-rotation strength
const NUDGE_STRENGTH: f32 = 0.1;

/// Latest raw reading from the platform orientation sensor
///
/// Axes are nullable: some devices report only a subset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationSample {
    /// Rotation around the Z axis (0–360)
    pub alpha: Option<f32>,
    /// Rotation around the X axis (−180–180)
    pub beta: Option<f32>,
    /// Rotation around the Y axis (−90–90)
    pub gamma: Option<f32>,
    pub absolute: bool,
}

/// Clamped, normalized camera-rotation delta derived from device tilt
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationDelta {
    /// Up/down rotation, in [−1, 1]
    pub x: f32,
    /// Left/right rotation, in [−1, 1]
    pub y: f32,
}

/// Sensor state: support flag plus the latest sample
///
/// Each sensor event replaces the sample wholesale.
#[derive(Clone, Debug)]
pub struct DeviceOrientation {
    supported: bool,
    latest: Option<OrientationSample>,
}

impl DeviceOrientation {
    pub fn new(supported: bool) -> Self {
        Self {
            supported,
            latest: None,
        }
    }

    /// An adapter for platforms without an orientation sensor
    pub fn unsupported() -> Self {
        Self::new(false)
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Store the latest sensor reading; ignored when unsupported
    pub fn push_sample(&mut self, sample: OrientationSample) {
        if self.supported {
            self.latest = Some(sample);
        }
    }

    pub fn latest(&self) -> Option<OrientationSample> {
        self.latest
    }

    /// Derive the camera-rotation delta from the latest sample
    ///
    /// Beta and gamma clamp to ±45° and normalize to [−1, 1]. Unsupported
    /// sensors, missing samples and missing axes all yield zero.
    pub fn camera_rotation(&self) -> RotationDelta {
        if !self.supported {
            return RotationDelta::default();
        }
        let Some(sample) = self.latest else {
            return RotationDelta::default();
        };
        let (Some(beta), Some(gamma)) = (sample.beta, sample.gamma) else {
            return RotationDelta::default();
        };

        RotationDelta {
            x: beta.clamp(-TILT_LIMIT_DEG, TILT_LIMIT_DEG) / TILT_LIMIT_DEG,
            y: gamma.clamp(-TILT_LIMIT_DEG, TILT_LIMIT_DEG) / TILT_LIMIT_DEG,
        }
    }
}

/// What kind of device the site is running on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

/// Eases the camera rotation toward the tilt-derived delta
pub struct OrientationNudger;

impl OrientationNudger {
    /// Register the nudger on the scheduler
    ///
    /// Returns `None` on desktop or when the sensor is unsupported; the
    /// effect is mobile-only. Dropping the returned handle (or the sensor
    /// feed, or the camera context) stops the nudging.
    pub fn spawn(
        scheduler: &SchedulerHandle,
        context: SceneContextHandle,
        feed: &Arc<Mutex<DeviceOrientation>>,
        device: DeviceClass,
    ) -> Option<TickHandle> {
        if device != DeviceClass::Mobile {
            return None;
        }
        if !feed.lock().unwrap().is_supported() {
            return None;
        }

        let feed = Arc::downgrade(feed);
        let mut accumulator = 0.0f32;

        scheduler.on_tick(move |tick| {
            let Some(feed) = feed.upgrade() else { return };

            accumulator += tick.dt;
            while accumulator >= NUDGE_STEP_SECS {
                accumulator -= NUDGE_STEP_SECS;

                let delta = feed.lock().unwrap().camera_rotation();
                context.update(|state| {
                    let camera = &mut state.camera;
                    camera.rotation.x +=
                        (delta.x * NUDGE_STRENGTH - camera.rotation.x) * NUDGE_BLEND;
                    camera.rotation.y +=
                        (delta.y * NUDGE_STRENGTH - camera.rotation.y) * NUDGE_BLEND;
                });
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Camera, OrbitControls, SceneContext};
    use vibejam_animation::FrameScheduler;

    fn sample(beta: f32, gamma: f32) -> OrientationSample {
        OrientationSample {
            alpha: Some(0.0),
            beta: Some(beta),
            gamma: Some(gamma),
            absolute: false,
        }
    }

    #[test]
    fn test_delta_clamps_to_unit_range() {
        let mut sensor = DeviceOrientation::new(true);
        sensor.push_sample(sample(90.0, -90.0));

        let delta = sensor.camera_rotation();
        assert_eq!(delta, RotationDelta { x: 1.0, y: -1.0 });
    }

    #[test]
    fn test_level_device_yields_zero_delta() {
        let mut sensor = DeviceOrientation::new(true);
        sensor.push_sample(sample(0.0, 0.0));
        assert_eq!(sensor.camera_rotation(), RotationDelta::default());
    }

    #[test]
    fn test_partial_tilt_normalizes() {
        let mut sensor = DeviceOrientation::new(true);
        sensor.push_sample(sample(22.5, -9.0));

        let delta = sensor.camera_rotation();
        assert!((delta.x - 0.5).abs() < 1e-6);
        assert!((delta.y - -0.2).abs() < 1e-6);
    }

    #[test]
    fn test_unsupported_sensor_always_reports_zero() {
        let mut sensor = DeviceOrientation::unsupported();
        sensor.push_sample(sample(90.0, 90.0));

        assert!(!sensor.is_supported());
        assert_eq!(sensor.camera_rotation(), RotationDelta::default());
        assert!(sensor.latest().is_none());
    }

    #[test]
    fn test_missing_axes_yield_zero() {
        let mut sensor = DeviceOrientation::new(true);
        sensor.push_sample(OrientationSample {
            alpha: Some(120.0),
            beta: None,
            gamma: Some(30.0),
            absolute: true,
        });
        assert_eq!(sensor.camera_rotation(), RotationDelta::default());
    }

    #[test]
    fn test_samples_replace_wholesale() {
        let mut sensor = DeviceOrientation::new(true);
        sensor.push_sample(sample(45.0, 45.0));
        sensor.push_sample(sample(-45.0, 0.0));

        let delta = sensor.camera_rotation();
        assert_eq!(delta, RotationDelta { x: -1.0, y: 0.0 });
    }

    #[test]
    fn test_nudger_is_mobile_only() {
        let scheduler = FrameScheduler::new();
        let context = SceneContext::new(Camera::default(), OrbitControls::default());
        let feed = Arc::new(Mutex::new(DeviceOrientation::new(true)));

        assert!(OrientationNudger::spawn(
            &scheduler.handle(),
            context.handle(),
            &feed,
            DeviceClass::Desktop,
        )
        .is_none());

        let unsupported = Arc::new(Mutex::new(DeviceOrientation::unsupported()));
        assert!(OrientationNudger::spawn(
            &scheduler.handle(),
            context.handle(),
            &unsupported,
            DeviceClass::Mobile,
        )
        .is_none());
    }

    #[test]
    fn test_nudger_eases_camera_toward_tilt() {
        let scheduler = FrameScheduler::new();
        let context = SceneContext::new(Camera::default(), OrbitControls::default());
        let feed = Arc::new(Mutex::new(DeviceOrientation::new(true)));
        feed.lock().unwrap().push_sample(sample(45.0, 0.0));

        let _guard = OrientationNudger::spawn(
            &scheduler.handle(),
            context.handle(),
            &feed,
            DeviceClass::Mobile,
        )
        .unwrap();

        // One 60 Hz step closes 5% of the gap toward strength · delta
        scheduler.tick(NUDGE_STEP_SECS);
        let rotation = context.read(|state| state.camera.rotation);
        assert!((rotation.x - NUDGE_STRENGTH * NUDGE_BLEND).abs() < 1e-6);

        // Long runs converge to the full offset
        for _ in 0..2000 {
            scheduler.tick(NUDGE_STEP_SECS);
        }
        let rotation = context.read(|state| state.camera.rotation);
        assert!((rotation.x - NUDGE_STRENGTH).abs() < 1e-3);
    }

    #[test]
    fn test_dropping_nudger_stops_updates() {
        let scheduler = FrameScheduler::new();
        let context = SceneContext::new(Camera::default(), OrbitControls::default());
        let feed = Arc::new(Mutex::new(DeviceOrientation::new(true)));
        feed.lock().unwrap().push_sample(sample(45.0, 45.0));

        let guard = OrientationNudger::spawn(
            &scheduler.handle(),
            context.handle(),
            &feed,
            DeviceClass::Mobile,
        )
        .unwrap();

        scheduler.tick(NUDGE_STEP_SECS);
        let moved = context.read(|state| state.camera.rotation);
        assert!(moved.x != 0.0);

        drop(guard);
        scheduler.tick(NUDGE_STEP_SECS);
        scheduler.tick(NUDGE_STEP_SECS);
        let after = context.read(|state| state.camera.rotation);
        assert_eq!(after, moved);
    }
}
