//! Camera transition controller
//!
//! Glides the camera between section poses. A section change starts two
//! independent tweens (one for the camera position, one for the orbit
//! target), both over the same fixed duration. The orbit-target tween
//! re-aims the camera on every step, so the camera keeps looking at the
//! moving target mid-flight.
//!
//! Changing section again before a transition completes cancels the
//! in-flight tweens outright; the last request wins. There is no terminal
//! state: the director is always ready for the next transition.

use crate::scene::SceneContextHandle;
use crate::section::Section;
use vibejam_animation::{Easing, SchedulerHandle, Tween, TweenTarget};

/// Logical tween targets owned by the director
pub mod tween_targets {
    use super::TweenTarget;

    pub const CAMERA_POSITION: TweenTarget = 0;
    pub const ORBIT_TARGET: TweenTarget = 1;
}

/// Seconds a section transition takes
pub const TRANSITION_SECS: f32 = 2.0;

const TRANSITION_EASING: Easing = Easing::EaseInOutQuad;

/// Drives the camera between section poses
pub struct CameraDirector {
    scheduler: SchedulerHandle,
    context: SceneContextHandle,
    current: Section,
}

impl CameraDirector {
    /// Create the director and apply the welcome pose with no animation
    pub fn new(scheduler: SchedulerHandle, context: SceneContextHandle) -> Self {
        let pose = Section::Welcome.pose();
        context.update(|state| state.jump_to(pose.position, pose.look_at));

        Self {
            scheduler,
            context,
            current: Section::Welcome,
        }
    }

    /// The active section
    pub fn current(&self) -> Section {
        self.current
    }

    /// Transition to a section
    ///
    /// No-op when the section is already active. A transition started while
    /// another is in flight replaces it.
    pub fn set_section(&mut self, section: Section) {
        if section == self.current {
            return;
        }
        tracing::debug!(from = self.current.as_str(), to = section.as_str(), "camera transition");

        let pose = section.pose();
        self.current = section;

        let Some((from_position, from_target)) = self
            .context
            .read(|state| (state.camera.position, state.controls.target))
        else {
            // Context is gone; remember the section so a future context
            // starts from the right state
            return;
        };

        let position_context = self.context.clone();
        self.scheduler.drive(
            tween_targets::CAMERA_POSITION,
            Tween::new(from_position, pose.position, TRANSITION_SECS, TRANSITION_EASING),
            move |value| {
                position_context.update(|state| state.camera.position = value);
            },
        );

        let target_context = self.context.clone();
        self.scheduler.drive(
            tween_targets::ORBIT_TARGET,
            Tween::new(from_target, pose.look_at, TRANSITION_SECS, TRANSITION_EASING),
            move |value| {
                target_context.update(|state| state.retarget(value));
            },
        );
    }

    /// Transition to a section by name
    ///
    /// Unknown names fall back to the welcome pose. Returns the section
    /// actually selected.
    pub fn set_section_by_name(&mut self, name: &str) -> Section {
        let section = name.parse().unwrap_or_else(|_| {
            tracing::warn!(name, "unknown section, falling back to welcome");
            Section::Welcome
        });
        self.set_section(section);
        section
    }
}
