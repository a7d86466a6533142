//! Scene graph
//!
//! A slotmap of [`SceneNode`]s plus the motion drivers and particle fields
//! attached to them. The scene ticks once per frame: every attached driver
//! runs against its node in attachment order. Drivers own disjoint nodes,
//! so the order carries no semantics; it is merely fixed.
//!
//! Components hold a weak [`SceneHandle`]; once the scene is dropped every
//! handle operation becomes a silent no-op, and a driver whose node has
//! been removed simply stops running.

mod camera;
mod node;

pub use camera::{Camera, OrbitControls, SceneContext, SceneContextHandle, SceneState};
pub use node::{MaterialState, SceneNode};

use crate::motion::MotionDriver;
use crate::particles::{FieldDriver, ParticleField};
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};
use vibejam_animation::{FrameTick, SchedulerHandle, TickHandle};
use vibejam_core::Vec3;

new_key_type! {
    /// Handle to a scene node
    pub struct NodeId;
    /// Handle to a particle field
    pub struct FieldId;
}

/// Parent chains deeper than this stop composing (the hub graphs are two
/// levels deep at most)
const MAX_PARENT_DEPTH: usize = 64;

struct SceneInner {
    nodes: SlotMap<NodeId, SceneNode>,
    drivers: Vec<(NodeId, Box<dyn MotionDriver + Send>)>,
    fields: SlotMap<FieldId, ParticleField>,
    field_drivers: Vec<(FieldId, Box<dyn FieldDriver + Send>)>,
}

impl SceneInner {
    fn tick(&mut self, tick: &FrameTick) {
        for (id, driver) in self.drivers.iter_mut() {
            if let Some(node) = self.nodes.get_mut(*id) {
                driver.update(node, tick);
            }
        }
        for (id, driver) in self.field_drivers.iter_mut() {
            if let Some(field) = self.fields.get_mut(*id) {
                driver.update(field, tick);
            }
        }
    }

    fn world_position(&self, id: NodeId) -> Option<Vec3> {
        let node = self.nodes.get(id)?;
        let mut position = node.position;
        let mut parent = node.parent;

        for _ in 0..MAX_PARENT_DEPTH {
            let Some(pid) = parent else { break };
            // A removed parent contributes nothing
            let Some(p) = self.nodes.get(pid) else { break };
            let offset = Vec3::new(
                position.x * p.scale.x,
                position.y * p.scale.y,
                position.z * p.scale.z,
            )
            .rotate_euler(p.rotation);
            position = p.position.add(offset);
            parent = p.parent;
        }
        Some(position)
    }
}

/// The scene: nodes, particle fields, and their attached drivers
pub struct Scene {
    inner: Arc<Mutex<SceneInner>>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SceneInner {
                nodes: SlotMap::with_key(),
                drivers: Vec::new(),
                fields: SlotMap::with_key(),
                field_drivers: Vec::new(),
            })),
        }
    }

    /// Get a weak handle for passing to components
    pub fn handle(&self) -> SceneHandle {
        SceneHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    pub fn insert(&self, node: SceneNode) -> NodeId {
        self.inner.lock().unwrap().nodes.insert(node)
    }

    /// Insert a node parented under `parent`
    pub fn insert_child(&self, parent: NodeId, mut node: SceneNode) -> NodeId {
        node.parent = Some(parent);
        self.insert(node)
    }

    /// Remove a node and detach its drivers
    pub fn remove(&self, id: NodeId) -> Option<SceneNode> {
        let mut inner = self.inner.lock().unwrap();
        inner.drivers.retain(|(nid, _)| *nid != id);
        inner.nodes.remove(id)
    }

    /// Attach a motion driver to a node
    pub fn attach(&self, id: NodeId, driver: impl MotionDriver + Send + 'static) {
        tracing::debug!(driver = driver.name(), "attaching motion driver");
        self.inner.lock().unwrap().drivers.push((id, Box::new(driver)));
    }

    pub fn insert_field(&self, field: ParticleField) -> FieldId {
        self.inner.lock().unwrap().fields.insert(field)
    }

    /// Remove a particle field and detach its drivers
    pub fn remove_field(&self, id: FieldId) -> Option<ParticleField> {
        let mut inner = self.inner.lock().unwrap();
        inner.field_drivers.retain(|(fid, _)| *fid != id);
        inner.fields.remove(id)
    }

    /// Attach a driver to a particle field
    pub fn attach_field_driver(&self, id: FieldId, driver: impl FieldDriver + Send + 'static) {
        self.inner
            .lock()
            .unwrap()
            .field_drivers
            .push((id, Box::new(driver)));
    }

    /// Run every attached driver once
    pub fn tick(&self, tick: &FrameTick) {
        self.inner.lock().unwrap().tick(tick);
    }

    /// Subscribe the scene to a scheduler's frame ticks
    ///
    /// Returns the RAII registration; dropping it (or the scene, or the
    /// scheduler) stops the ticking.
    pub fn register(&self, scheduler: &SchedulerHandle) -> Option<TickHandle> {
        let handle = self.handle();
        scheduler.on_tick(move |tick| handle.tick(tick))
    }

    pub fn node_count(&self) -> usize {
        self.inner.lock().unwrap().nodes.len()
    }

    pub fn field_count(&self) -> usize {
        self.inner.lock().unwrap().fields.len()
    }

    /// Read a node
    pub fn with_node<R>(&self, id: NodeId, f: impl FnOnce(&SceneNode) -> R) -> Option<R> {
        self.inner.lock().unwrap().nodes.get(id).map(f)
    }

    /// Modify a node
    pub fn with_node_mut<R>(&self, id: NodeId, f: impl FnOnce(&mut SceneNode) -> R) -> Option<R> {
        self.inner.lock().unwrap().nodes.get_mut(id).map(f)
    }

    /// Read a particle field
    pub fn with_field<R>(&self, id: FieldId, f: impl FnOnce(&ParticleField) -> R) -> Option<R> {
        self.inner.lock().unwrap().fields.get(id).map(f)
    }

    /// Node position with all parent transforms applied
    pub fn world_position(&self, id: NodeId) -> Option<Vec3> {
        self.inner.lock().unwrap().world_position(id)
    }

    /// Set a node's pointer-hover flag
    pub fn set_hovered(&self, id: NodeId, hovered: bool) {
        if let Some(node) = self.inner.lock().unwrap().nodes.get_mut(id) {
            node.hovered = hovered;
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the scene
#[derive(Clone)]
pub struct SceneHandle {
    inner: Weak<Mutex<SceneInner>>,
}

impl SceneHandle {
    /// Run every attached driver once; no-op when the scene is gone
    pub fn tick(&self, tick: &FrameTick) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().tick(tick);
        }
    }

    /// Modify a node; `None` when the scene or node is gone
    pub fn with_node_mut<R>(&self, id: NodeId, f: impl FnOnce(&mut SceneNode) -> R) -> Option<R> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().nodes.get_mut(id).map(f))
    }

    /// Set a node's pointer-hover flag; no-op when the scene or node is gone
    pub fn set_hovered(&self, id: NodeId, hovered: bool) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(node) = inner.lock().unwrap().nodes.get_mut(id) {
                node.hovered = hovered;
            }
        }
    }

    /// Check if the scene is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::SpinDriver;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_insert_and_tick_driver() {
        let scene = Scene::new();
        let id = scene.insert(SceneNode::new());
        scene.attach(id, SpinDriver { rate: 1.0 });

        scene.tick(&FrameTick {
            elapsed: 0.5,
            dt: 0.5,
        });

        let yaw = scene.with_node(id, |n| n.rotation.y).unwrap();
        assert!((yaw - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_removed_node_makes_driver_a_noop() {
        let scene = Scene::new();
        let id = scene.insert(SceneNode::new());
        let other = scene.insert(SceneNode::new());
        scene.attach(id, SpinDriver { rate: 1.0 });
        scene.attach(other, SpinDriver { rate: 1.0 });

        scene.remove(id);

        // Ticking after removal must not panic and must still run the
        // surviving driver
        scene.tick(&FrameTick {
            elapsed: 1.0,
            dt: 1.0,
        });
        let yaw = scene.with_node(other, |n| n.rotation.y).unwrap();
        assert!((yaw - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_world_position_composes_parent_yaw() {
        let scene = Scene::new();
        let group = scene.insert(SceneNode::at(10.0, 0.0, 0.0));
        let child = scene.insert_child(group, SceneNode::at(0.0, 0.0, -2.0));

        scene
            .with_node_mut(group, |n| n.rotation.y = FRAC_PI_2)
            .unwrap();

        let world = scene.world_position(child).unwrap();
        assert!((world.x - 8.0).abs() < 1e-5);
        assert!(world.z.abs() < 1e-5);
    }

    #[test]
    fn test_handle_outlives_scene_safely() {
        let handle = {
            let scene = Scene::new();
            scene.handle()
        };

        assert!(!handle.is_alive());
        handle.tick(&FrameTick {
            elapsed: 0.0,
            dt: 0.016,
        });
        assert!(handle.with_node_mut(NodeId::default(), |_| ()).is_none());
    }
}
