//! Scene node component

use crate::scene::NodeId;
use vibejam_core::{Color, Vec3};

/// Material fields the motion drivers animate
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialState {
    pub color: Color,
    pub emissive: Color,
    pub emissive_intensity: f32,
    pub opacity: f32,
    /// Shader clock uniform (advanced by the portal ring driver)
    pub time: f32,
}

impl Default for MaterialState {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            emissive: Color::BLACK,
            emissive_intensity: 0.0,
            opacity: 1.0,
            time: 0.0,
        }
    }
}

/// A renderable object in the scene graph
///
/// Holds the local transform (position, Euler rotation, scale) plus the
/// material and interaction state that motion drivers mutate each frame.
/// Rotation is stored as Euler angles in radians, applied Y-X-Z.
#[derive(Clone, Debug)]
pub struct SceneNode {
    /// Local position relative to parent
    pub position: Vec3,
    /// Local Euler rotation in radians
    pub rotation: Vec3,
    /// Local scale
    pub scale: Vec3,
    /// Visibility flag
    pub visible: bool,
    /// Pointer-hover flag, set by the host's raycasting
    pub hovered: bool,
    /// Parent node for grouped transforms
    pub parent: Option<NodeId>,
    /// Display label (island banner, judge name)
    pub label: Option<String>,
    pub material: MaterialState,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            visible: true,
            hovered: false,
            parent: None,
            label: None,
            material: MaterialState::default(),
        }
    }
}

impl SceneNode {
    /// Create a node at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with position
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            ..Default::default()
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set rotation around the Y axis (radians)
    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.rotation.y = yaw;
        self
    }

    pub fn with_uniform_scale(mut self, s: f32) -> Self {
        self.scale = Vec3::splat(s);
        self
    }

    /// Set base color and matching emissive
    pub fn with_color(mut self, color: Color) -> Self {
        self.material.color = color;
        self.material.emissive = color;
        self
    }

    pub fn with_emissive_intensity(mut self, intensity: f32) -> Self {
        self.material.emissive_intensity = intensity;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let node = SceneNode::at(1.0, 2.0, 3.0)
            .with_uniform_scale(0.8)
            .with_yaw(0.5)
            .with_color(Color::from_hex(0x6633CC))
            .with_emissive_intensity(0.2)
            .with_label("about");

        assert_eq!(node.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(node.scale, Vec3::splat(0.8));
        assert!((node.rotation.y - 0.5).abs() < 1e-6);
        assert_eq!(node.material.emissive, node.material.color);
        assert_eq!(node.label.as_deref(), Some("about"));
        assert!(node.visible);
        assert!(!node.hovered);
    }
}
