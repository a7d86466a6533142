//! # Vibejam 3D
//!
//! The animated hub scene behind the vibejam promo site: floating islands,
//! judge avatars, portal rings, an ambient particle field, a countdown
//! clock, and a camera that glides between named sections.
//!
//! The rendering engine is an external collaborator; this crate owns the
//! per-frame *state*: node transforms, material intensities, particle
//! positions, and the camera pose. A host render loop drives everything by
//! calling [`vibejam_animation::FrameScheduler::tick`] once per display
//! frame and uploading whatever it wants to draw.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vibejam_3d::prelude::*;
//!
//! let scheduler = FrameScheduler::new();
//! let mut rng = rand::rng();
//! let mut hub = HubScene::build(&HubLayout::default(), deadline, &scheduler, &mut rng);
//!
//! hub.set_section(Section::Judges);
//! loop {
//!     scheduler.tick(frame_dt);
//!     // read hub.scene() / hub.context() and render
//! }
//! ```

// Scene graph
pub mod scene;

// Section state and camera poses
pub mod section;

// Camera transition controller
pub mod transition;

// Procedural motion drivers
pub mod motion;

// Particle fields
pub mod particles;

// Path generation
pub mod path;

// Device orientation adapter
pub mod orientation;

// Shader sources
pub mod render;

// Countdown clock
pub mod countdown;

// Assembled hub scene
pub mod hub;

// Prelude for common imports
pub mod prelude;

pub use countdown::{CountdownClock, TimeLeft};
pub use hub::{HubLayout, HubScene, IslandSpec, JudgeSpec, LayoutError, PortalSpec};
pub use motion::MotionDriver;
pub use orientation::{
    DeviceClass, DeviceOrientation, OrientationNudger, OrientationSample, RotationDelta,
};
pub use particles::{AmbientDriftDriver, FieldDriver, ParticleField, ParticleInstance, SwirlDriver};
pub use path::generate_path;
pub use scene::{
    Camera, FieldId, MaterialState, NodeId, OrbitControls, Scene, SceneContext,
    SceneContextHandle, SceneHandle, SceneNode, SceneState,
};
pub use section::{CameraPose, ParseSectionError, Section};
pub use transition::CameraDirector;
