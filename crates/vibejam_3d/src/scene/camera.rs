//! Camera and orbit controls
//!
//! The camera state mutated by the transition controller and the
//! orientation nudger. Both consumers receive an explicit
//! [`SceneContextHandle`]; there is no ambient global camera.

use std::sync::{Arc, Mutex, Weak};
use vibejam_core::Vec3;

/// The active camera pose
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Euler rotation in radians, applied Y-X-Z
    pub rotation: Vec3,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    /// Aim the camera at a world-space target
    pub fn look_at(&mut self, target: Vec3) {
        let dir = target.sub(self.position);
        if dir.length() < 1e-6 {
            return;
        }
        let yaw = (-dir.x).atan2(-dir.z);
        let pitch = dir.y.atan2((dir.x * dir.x + dir.z * dir.z).sqrt());
        self.rotation = Vec3::new(pitch, yaw, 0.0);
    }

    /// View direction (-Z rotated by the camera's Euler angles)
    pub fn forward(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, -1.0).rotate_euler(self.rotation)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

/// Orbit-controls abstraction: a mutable look-at target the camera
/// continuously re-aims toward
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enabled: bool,
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            enabled: true,
        }
    }

    /// Re-aim the camera at the current target
    pub fn update(&self, camera: &mut Camera) {
        if self.enabled {
            camera.look_at(self.target);
        }
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

/// Camera plus controls, guarded together
#[derive(Clone, Debug)]
pub struct SceneState {
    pub camera: Camera,
    pub controls: OrbitControls,
}

impl SceneState {
    /// Move the orbit target and re-aim the camera at it
    pub fn retarget(&mut self, target: Vec3) {
        self.controls.target = target;
        self.controls.update(&mut self.camera);
    }

    /// Jump to a pose with no animation
    pub fn jump_to(&mut self, position: Vec3, look_at: Vec3) {
        self.camera.position = position;
        self.retarget(look_at);
    }
}

/// Shared camera/controls context
///
/// Owned by the scene assembly; consumers get weak
/// [`SceneContextHandle`]s.
pub struct SceneContext {
    inner: Arc<Mutex<SceneState>>,
}

impl SceneContext {
    pub fn new(camera: Camera, controls: OrbitControls) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SceneState { camera, controls })),
        }
    }

    /// Get a weak handle for passing to components
    pub fn handle(&self) -> SceneContextHandle {
        SceneContextHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&SceneState) -> R) -> R {
        f(&self.inner.lock().unwrap())
    }

    pub fn update(&self, f: impl FnOnce(&mut SceneState)) {
        f(&mut self.inner.lock().unwrap());
    }

    pub fn camera_position(&self) -> Vec3 {
        self.inner.lock().unwrap().camera.position
    }

    pub fn orbit_target(&self) -> Vec3 {
        self.inner.lock().unwrap().controls.target
    }
}

/// A weak handle to the shared camera context
///
/// Every operation is a silent no-op once the context is gone.
#[derive(Clone)]
pub struct SceneContextHandle {
    inner: Weak<Mutex<SceneState>>,
}

impl SceneContextHandle {
    pub fn read<R>(&self, f: impl FnOnce(&SceneState) -> R) -> Option<R> {
        self.inner.upgrade().map(|inner| f(&inner.lock().unwrap()))
    }

    pub fn update(&self, f: impl FnOnce(&mut SceneState)) {
        if let Some(inner) = self.inner.upgrade() {
            f(&mut inner.lock().unwrap());
        }
    }

    pub fn camera_position(&self) -> Option<Vec3> {
        self.read(|state| state.camera.position)
    }

    pub fn orbit_target(&self) -> Option<Vec3> {
        self.read(|state| state.controls.target)
    }

    /// Check if the context is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}
