//! Common imports for hub-scene consumers

pub use crate::countdown::{CountdownClock, TimeLeft};
pub use crate::hub::{HubLayout, HubScene, IslandSpec, JudgeSpec, PortalSpec};
pub use crate::motion::{
    EmissivePulseDriver, FloatDriver, HoverScaleDriver, MotionDriver, PortalRingDriver,
    PortalSpinDriver, SpinDriver, StepSpinDriver, SwayDriver,
};
pub use crate::orientation::{
    DeviceClass, DeviceOrientation, OrientationNudger, OrientationSample, RotationDelta,
};
pub use crate::particles::{
    AmbientDriftDriver, FieldDriver, ParticleField, ParticleInstance, SwirlDriver,
};
pub use crate::path::generate_path;
pub use crate::scene::{
    Camera, FieldId, MaterialState, NodeId, OrbitControls, Scene, SceneContext,
    SceneContextHandle, SceneHandle, SceneNode,
};
pub use crate::section::{CameraPose, Section};
pub use crate::transition::{CameraDirector, TRANSITION_SECS};
pub use vibejam_animation::{Easing, FrameScheduler, FrameTick, SchedulerHandle, Tween};
pub use vibejam_core::{Color, Vec3};
