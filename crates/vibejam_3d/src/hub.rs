//! The assembled hub scene
//!
//! Builds the full promo scene from a [`HubLayout`]: the central hub with
//! its pulsing platform and spinning logo group, one floating island per
//! content section, the judge avatars, a portal at each content area, the
//! countdown clock, and the ambient particle field. Every entity gets its
//! motion drivers attached, the scene is subscribed to the scheduler, and a
//! [`CameraDirector`] is wired to the shared camera context.

use crate::countdown::CountdownClock;
use crate::motion::{
    EmissivePulseDriver, FloatDriver, HoverScaleDriver, PortalRingDriver, PortalSpinDriver,
    SpinDriver, StepSpinDriver, SwayDriver,
};
use crate::particles::{AmbientDriftDriver, ParticleField, SwirlDriver};
use crate::scene::{Camera, NodeId, OrbitControls, Scene, SceneContext, SceneNode};
use crate::section::Section;
use crate::transition::CameraDirector;
use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use vibejam_animation::{FrameScheduler, TickHandle};
use vibejam_core::{Color, Vec3};

/// Error produced when a layout fails to parse
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("malformed hub layout: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A floating island advertising one content section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IslandSpec {
    pub section: Section,
    pub position: Vec3,
    pub scale: f32,
    /// Yaw in radians
    pub yaw: f32,
    pub color: Color,
}

/// One judge's avatar
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JudgeSpec {
    pub id: String,
    pub name: String,
    pub blurb: String,
    pub position: Vec3,
    pub color: Color,
}

/// A portal marking a content area
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PortalSpec {
    pub position: Vec3,
    pub color: Color,
}

/// Everything needed to assemble the hub scene
///
/// Serde round-trippable so layouts can ship as JSON; the default layout
/// is the live site's.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HubLayout {
    pub islands: Vec<IslandSpec>,
    pub judges: Vec<JudgeSpec>,
    pub portals: Vec<PortalSpec>,
    pub countdown_position: Vec3,
    pub ambient_particles: usize,
    pub ambient_radius: f32,
}

impl HubLayout {
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for HubLayout {
    fn default() -> Self {
        use std::f32::consts::PI;

        Self {
            islands: vec![
                IslandSpec {
                    section: Section::About,
                    position: Vec3::new(-8.0, -1.0, -5.0),
                    scale: 0.8,
                    yaw: PI / 6.0,
                    color: Color::from_hex(0x4422AA),
                },
                IslandSpec {
                    section: Section::Judges,
                    position: Vec3::new(10.0, 0.0, -3.0),
                    scale: 1.2,
                    yaw: -PI / 4.0,
                    color: Color::from_hex(0xFF33CC),
                },
                IslandSpec {
                    section: Section::Sponsors,
                    position: Vec3::new(0.0, -2.0, -12.0),
                    scale: 1.5,
                    yaw: PI / 2.0,
                    color: Color::from_hex(0x6633CC),
                },
                IslandSpec {
                    section: Section::Submission,
                    position: Vec3::new(15.0, 2.0, 8.0),
                    scale: 0.7,
                    yaw: PI / 5.0,
                    color: Color::from_hex(0x33CCFF),
                },
            ],
            judges: vec![
                JudgeSpec {
                    id: "andrej".into(),
                    name: "Andrej Karpathy".into(),
                    blurb: "AI researcher and former Tesla AI Director".into(),
                    position: Vec3::new(8.0, 1.0, 2.0),
                    color: Color::from_hex(0x6633CC),
                },
                JudgeSpec {
                    id: "tim".into(),
                    name: "Tim Soret".into(),
                    blurb: "Game developer and creator of The Last Night".into(),
                    position: Vec3::new(10.0, 1.0, 0.0),
                    color: Color::from_hex(0xFF33CC),
                },
                JudgeSpec {
                    id: "mrdoob".into(),
                    name: "Mr. Doob (Ricardo Cabello)".into(),
                    blurb: "Creator of Three.js".into(),
                    position: Vec3::new(12.0, 1.0, 2.0),
                    color: Color::from_hex(0x33CCFF),
                },
                JudgeSpec {
                    id: "s13k".into(),
                    name: "s13k".into(),
                    blurb: "Renowned game developer and programmer".into(),
                    position: Vec3::new(10.0, 1.0, 4.0),
                    color: Color::from_hex(0x33FF66),
                },
                JudgeSpec {
                    id: "levelsio".into(),
                    name: "levelsio (Pieter Levels)".into(),
                    blurb: "Serial indie maker and founder of Nomad List".into(),
                    position: Vec3::new(14.0, 1.0, 1.0),
                    color: Color::from_hex(0xFFCC33),
                },
            ],
            portals: vec![
                PortalSpec {
                    position: Vec3::new(-8.0, 1.0, -5.0),
                    color: Color::from_hex(0x4422AA),
                },
                PortalSpec {
                    position: Vec3::new(10.0, 2.0, -3.0),
                    color: Color::from_hex(0xFF33CC),
                },
                PortalSpec {
                    position: Vec3::new(0.0, 0.0, -12.0),
                    color: Color::from_hex(0x6633CC),
                },
                PortalSpec {
                    position: Vec3::new(15.0, 3.0, 8.0),
                    color: Color::from_hex(0x33CCFF),
                },
            ],
            countdown_position: Vec3::new(0.0, 3.0, 0.0),
            ambient_particles: 1000,
            ambient_radius: 25.0,
        }
    }
}

fn island_banner(section: Section) -> &'static str {
    match section {
        Section::Welcome => "WELCOME",
        Section::About => "ABOUT",
        Section::Judges => "JUDGES",
        Section::Sponsors => "SPONSORS",
        Section::Submission => "SUBMIT",
    }
}

/// The live hub: scene, camera context, director, and countdown clock
pub struct HubScene {
    scene: Scene,
    context: SceneContext,
    director: CameraDirector,
    countdown: CountdownClock,
    islands: FxHashMap<Section, NodeId>,
    judges: Vec<(String, NodeId)>,
    _scene_tick: Option<TickHandle>,
}

impl HubScene {
    /// Assemble the scene and wire it to the scheduler
    pub fn build(
        layout: &HubLayout,
        deadline: SystemTime,
        scheduler: &FrameScheduler,
        rng: &mut impl Rng,
    ) -> Self {
        let scene = Scene::new();

        // Central hub: pulsing platform plus the spinning logo group with
        // its decorative ring
        let platform = scene.insert(
            SceneNode::at(0.0, -0.25, 0.0)
                .with_color(Color::from_hex(0x6633CC))
                .with_emissive_intensity(0.2)
                .with_label("hub-platform"),
        );
        scene.attach(platform, EmissivePulseDriver::default());

        let spinner = scene.insert(SceneNode::at(0.0, 2.0, 0.0).with_label("hub-spinner"));
        scene.attach(spinner, SpinDriver { rate: 0.1 });
        scene.insert_child(
            spinner,
            SceneNode::at(0.0, 1.5, 0.0)
                .with_color(Color::from_hex(0xFF33CC))
                .with_emissive_intensity(0.5)
                .with_label("hub-ring"),
        );

        // Ambient spinner carrying the glowing sphere
        let ambient_spinner = scene.insert(SceneNode::new().with_label("ambient-spinner"));
        scene.attach(ambient_spinner, SpinDriver { rate: 0.05 });
        scene.insert_child(
            ambient_spinner,
            SceneNode::at(0.0, 8.0, 0.0)
                .with_color(Color::from_hex(0xFF33CC))
                .with_emissive_intensity(2.0)
                .with_label("ambient-sphere"),
        );

        // Floating islands
        let mut islands = FxHashMap::default();
        for spec in &layout.islands {
            let id = scene.insert(
                SceneNode::new()
                    .with_position(spec.position)
                    .with_yaw(spec.yaw)
                    .with_uniform_scale(spec.scale)
                    .with_color(spec.color)
                    .with_emissive_intensity(0.2)
                    .with_label(island_banner(spec.section)),
            );
            scene.attach(id, FloatDriver::island(spec.position.y));
            scene.attach(id, HoverScaleDriver::island(spec.scale));
            islands.insert(spec.section, id);
        }

        // Judge avatars
        let mut judges = Vec::with_capacity(layout.judges.len());
        for judge in &layout.judges {
            let id = scene.insert(
                SceneNode::new()
                    .with_position(judge.position)
                    .with_color(judge.color)
                    .with_emissive_intensity(0.2)
                    .with_label(judge.name.clone()),
            );
            scene.attach(id, FloatDriver::avatar(judge.position.y));
            scene.attach(id, StepSpinDriver { step: 0.01 });
            scene.attach(id, HoverScaleDriver::avatar());
            judges.push((judge.id.clone(), id));
        }

        // Portals: pulsing ring, spinning swirl group, swirl particles
        for portal in &layout.portals {
            let ring = scene.insert(
                SceneNode::new()
                    .with_position(portal.position)
                    .with_color(portal.color)
                    .with_label("portal-ring"),
            );
            scene.attach(ring, PortalRingDriver::default());

            let swirl = scene.insert(
                SceneNode::new()
                    .with_position(portal.position)
                    .with_label("portal-swirl"),
            );
            scene.attach(swirl, PortalSpinDriver::default());

            let field = ParticleField::portal_swirl(100, portal.color, rng);
            let field_id = scene.insert_field(field);
            scene.attach_field_driver(field_id, SwirlDriver);
        }

        // Countdown clock
        let clock_node = scene.insert(
            SceneNode::new()
                .with_position(layout.countdown_position)
                .with_color(Color::from_hex(0x6633CC))
                .with_emissive_intensity(0.5)
                .with_label("countdown"),
        );
        scene.attach(clock_node, FloatDriver::clock(layout.countdown_position.y));
        scene.attach(clock_node, SwayDriver::clock());

        // Ambient starfield
        let starfield = ParticleField::ambient(layout.ambient_particles, layout.ambient_radius, rng);
        let starfield_id = scene.insert_field(starfield);
        scene.attach_field_driver(starfield_id, AmbientDriftDriver::default());

        // Camera context and director; welcome pose applies immediately
        let context = SceneContext::new(Camera::default(), OrbitControls::default());
        let director = CameraDirector::new(scheduler.handle(), context.handle());

        let scene_tick = scene.register(&scheduler.handle());
        tracing::debug!(
            nodes = scene.node_count(),
            fields = scene.field_count(),
            "hub scene assembled"
        );

        Self {
            scene,
            context,
            director,
            countdown: CountdownClock::new(deadline),
            islands,
            judges,
            _scene_tick: scene_tick,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn context(&self) -> &SceneContext {
        &self.context
    }

    pub fn countdown(&self) -> &CountdownClock {
        &self.countdown
    }

    /// The active section
    pub fn current_section(&self) -> Section {
        self.director.current()
    }

    /// Transition the camera to a section
    pub fn set_section(&mut self, section: Section) {
        self.director.set_section(section);
    }

    /// Transition by name; unknown names fall back to welcome
    pub fn set_section_by_name(&mut self, name: &str) -> Section {
        self.director.set_section_by_name(name)
    }

    /// The island node advertising a section, if the layout has one
    pub fn island_node(&self, section: Section) -> Option<NodeId> {
        self.islands.get(&section).copied()
    }

    /// The avatar node for a judge id
    pub fn judge_node(&self, judge_id: &str) -> Option<NodeId> {
        self.judges
            .iter()
            .find(|(id, _)| id == judge_id)
            .map(|(_, node)| *node)
    }

    /// Forward a pointer-hover change from the host's raycasting
    pub fn set_island_hovered(&self, section: Section, hovered: bool) {
        if let Some(id) = self.island_node(section) {
            self.scene.set_hovered(id, hovered);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::time::{Duration, UNIX_EPOCH};

    fn build() -> (FrameScheduler, HubScene) {
        let scheduler = FrameScheduler::new();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let hub = HubScene::build(
            &HubLayout::default(),
            UNIX_EPOCH + Duration::from_secs(1_000_000),
            &scheduler,
            &mut rng,
        );
        (scheduler, hub)
    }

    #[test]
    fn test_default_layout_matches_site_content() {
        let layout = HubLayout::default();

        assert_eq!(layout.islands.len(), 4);
        assert_eq!(layout.judges.len(), 5);
        assert_eq!(layout.portals.len(), 4);
        assert_eq!(layout.ambient_particles, 1000);

        // One island per content section, none for welcome
        let sections: Vec<Section> = layout.islands.iter().map(|i| i.section).collect();
        assert!(!sections.contains(&Section::Welcome));
        assert!(sections.contains(&Section::Judges));
    }

    #[test]
    fn test_layout_roundtrips_through_json() {
        let layout = HubLayout::default();
        let json = layout.to_json().unwrap();
        let back = HubLayout::from_json(&json).unwrap();

        assert_eq!(back.islands.len(), layout.islands.len());
        assert_eq!(back.judges[2].name, layout.judges[2].name);
        assert_eq!(back.portals[3].position, layout.portals[3].position);
        assert!(HubLayout::from_json("{\"islands\": 7}").is_err());
    }

    #[test]
    fn test_build_populates_scene() {
        let (_scheduler, hub) = build();

        // platform + spinner + ring + ambient spinner + sphere
        //  + 4 islands + 5 judges + 4*2 portal nodes + countdown
        assert_eq!(hub.scene().node_count(), 23);
        // 4 portal swirls + 1 starfield
        assert_eq!(hub.scene().field_count(), 5);

        assert!(hub.island_node(Section::About).is_some());
        assert!(hub.island_node(Section::Welcome).is_none());
        assert!(hub.judge_node("mrdoob").is_some());
        assert!(hub.judge_node("nobody").is_none());
    }

    #[test]
    fn test_ticking_animates_the_hub() {
        let (scheduler, hub) = build();

        let island = hub.island_node(Section::Judges).unwrap();
        let before = hub.scene().with_node(island, |n| n.position.y).unwrap();

        // Advance to the bob peak: sin(π/2) · 0.2
        for _ in 0..30 {
            scheduler.tick(std::f32::consts::FRAC_PI_2 / 30.0);
        }
        let after = hub.scene().with_node(island, |n| n.position.y).unwrap();
        assert!((after - before - 0.2).abs() < 1e-3);
    }

    #[test]
    fn test_hover_grows_island() {
        let (scheduler, hub) = build();
        let island = hub.island_node(Section::About).unwrap();

        hub.set_island_hovered(Section::About, true);
        for _ in 0..200 {
            scheduler.tick(1.0 / 60.0);
        }

        let scale = hub.scene().with_node(island, |n| n.scale.x).unwrap();
        assert!((scale - 0.8 * 1.05).abs() < 1e-3);
    }

    #[test]
    fn test_sections_drive_camera() {
        let (scheduler, mut hub) = build();

        hub.set_section(Section::Submission);
        for _ in 0..120 {
            scheduler.tick(2.0 / 120.0);
        }

        let pose = Section::Submission.pose();
        let position = hub.context().camera_position();
        assert!(position.distance(pose.position) < 1e-3);
        assert_eq!(hub.current_section(), Section::Submission);
    }

    #[test]
    fn test_countdown_reads_deadline() {
        let (_scheduler, hub) = build();
        let left = hub
            .countdown()
            .remaining(UNIX_EPOCH + Duration::from_secs(1_000_000 - 61));
        assert_eq!(left.minutes, 1);
        assert_eq!(left.seconds, 1);
    }
}
