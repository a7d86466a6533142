//! Shader sources and reference functions

pub mod shaders;

pub use shaders::{ring_intensity, PORTAL_RING_WGSL};
