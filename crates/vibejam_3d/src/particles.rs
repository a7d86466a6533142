//! Particle fields
//!
//! A particle field is a fixed-size set of points (and colors) generated
//! once at creation and displaced in place every frame. The count never
//! changes for the field's lifetime; the mutation API hands out slices, so
//! drivers cannot grow or shrink the field.

use rand::Rng;
use std::f32::consts::TAU;
use vibejam_animation::FrameTick;
use vibejam_core::{Color, Vec3};

/// A fixed-size set of animated points
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    colors: Vec<Color>,
    /// Whole-field Euler rotation
    pub rotation: Vec3,
    /// Render point size
    pub point_size: f32,
}

impl ParticleField {
    /// The ambient starfield: a spherical shell around the hub, colors
    /// derived from position
    pub fn ambient(count: usize, radius: f32, rng: &mut impl Rng) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);

        for _ in 0..count {
            let theta = rng.random_range(0.0..TAU);
            let phi = (rng.random_range(-1.0f32..1.0)).acos();

            let x = radius * phi.sin() * theta.cos();
            let y = radius * phi.sin() * theta.sin() + rng.random_range(0.0..5.0);
            let z = radius * phi.cos();
            positions.push(Vec3::new(x, y, z));

            colors.push(Color::rgb(
                (x / radius).abs() * 0.5 + 0.3,
                (y / radius).abs() * 0.3 + 0.2,
                (z / radius).abs() * 0.5 + 0.4,
            ));
        }

        Self {
            positions,
            colors,
            rotation: Vec3::ZERO,
            point_size: 0.1,
        }
    }

    /// A portal's swirl: points on a loose ring, all in the portal's color
    pub fn portal_swirl(count: usize, color: Color, rng: &mut impl Rng) -> Self {
        let mut positions = Vec::with_capacity(count);

        for i in 0..count {
            let angle = (i as f32 / count as f32) * TAU;
            let radius = 0.5 + rng.random_range(0.0..0.5);
            positions.push(Vec3::new(
                angle.cos() * radius,
                rng.random_range(-0.25..0.25),
                angle.sin() * radius,
            ));
        }

        Self {
            positions,
            colors: vec![color.with_alpha(0.7); count],
            rotation: Vec3::ZERO,
            point_size: 0.05,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// GPU-friendly instance data for upload
    pub fn instances(&self) -> Vec<ParticleInstance> {
        self.positions
            .iter()
            .zip(self.colors.iter())
            .map(|(p, c)| ParticleInstance {
                position_size: [p.x, p.y, p.z, self.point_size],
                color: c.to_array(),
            })
            .collect()
    }
}

/// GPU-friendly particle data for instancing
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    /// Position (xyz) and size (w)
    pub position_size: [f32; 4],
    /// Color (rgba)
    pub color: [f32; 4],
}

/// Per-frame mutation of a particle field
pub trait FieldDriver {
    fn update(&mut self, field: &mut ParticleField, tick: &FrameTick);

    /// Driver name for logging
    fn name(&self) -> &'static str;
}

/// Ambient starfield drift
///
/// The whole field tumbles slowly while each particle wanders on phase-
/// shifted sine waves. The per-particle offsets accumulate frame over
/// frame, so the field drifts rather than oscillating around a fixed base.
#[derive(Clone, Copy, Debug)]
pub struct AmbientDriftDriver {
    pub factor: f32,
    pub phase_step: f32,
}

impl Default for AmbientDriftDriver {
    fn default() -> Self {
        Self {
            factor: 0.1,
            phase_step: 0.1,
        }
    }
}

impl FieldDriver for AmbientDriftDriver {
    fn update(&mut self, field: &mut ParticleField, tick: &FrameTick) {
        field.rotation.x = tick.elapsed * 0.05;
        field.rotation.y = tick.elapsed * 0.03;

        let factor = self.factor;
        let phase_step = self.phase_step;
        for (i, p) in field.positions_mut().iter_mut().enumerate() {
            let phase = i as f32 * phase_step;
            p.x += (tick.elapsed + phase).sin() * factor;
            p.y += (tick.elapsed + phase).cos() * factor;
            p.z += (tick.elapsed + phase).sin() * factor;
        }
    }

    fn name(&self) -> &'static str {
        "AmbientDriftDriver"
    }
}

/// Portal swirl: particles spiral around the ring axis with a gentle
/// vertical shimmer
#[derive(Clone, Copy, Debug, Default)]
pub struct SwirlDriver;

impl FieldDriver for SwirlDriver {
    fn update(&mut self, field: &mut ParticleField, tick: &FrameTick) {
        for (i, p) in field.positions_mut().iter_mut().enumerate() {
            let fi = i as f32;
            let angle = tick.elapsed * 0.5 + fi * 0.01;
            let radius = 0.2 + fi * 0.001;

            p.x += angle.cos() * radius * 0.1;
            p.y += (tick.elapsed + fi * 0.1).sin() * 0.01;
            p.z += angle.sin() * radius * 0.1;
        }
    }

    fn name(&self) -> &'static str {
        "SwirlDriver"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn rng() -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(7)
    }

    #[test]
    fn test_ambient_field_shape() {
        let field = ParticleField::ambient(1000, 25.0, &mut rng());

        assert_eq!(field.len(), 1000);
        assert_eq!(field.colors().len(), 1000);

        // Points sit on the shell (with the small vertical lift)
        for p in field.positions() {
            let horizontal = Vec3::new(p.x, 0.0, p.z).length();
            assert!(horizontal <= 25.0 + 1e-3);
            assert!(p.y >= -25.0 - 1e-3 && p.y <= 30.0 + 1e-3);
        }

        // Colors stay inside their derivation bands
        for c in field.colors() {
            assert!(c.r >= 0.3 - 1e-5 && c.r <= 0.8 + 1e-5);
            assert!(c.b >= 0.4 - 1e-5 && c.b <= 0.9 + 1e-5);
        }
    }

    #[test]
    fn test_count_is_invariant_under_drivers() {
        let mut field = ParticleField::ambient(64, 25.0, &mut rng());
        let mut driver = AmbientDriftDriver::default();

        for i in 0..100 {
            driver.update(
                &mut field,
                &FrameTick {
                    elapsed: i as f32 / 60.0,
                    dt: 1.0 / 60.0,
                },
            );
        }
        assert_eq!(field.len(), 64);
    }

    #[test]
    fn test_drift_accumulates_offsets() {
        let mut field = ParticleField::ambient(8, 25.0, &mut rng());
        let start = field.positions().to_vec();
        let mut driver = AmbientDriftDriver::default();

        // Two updates at the same elapsed time move particles twice: the
        // displacement is additive, not recomputed from a base
        let tick = FrameTick {
            elapsed: 0.5,
            dt: 1.0 / 60.0,
        };
        driver.update(&mut field, &tick);
        let after_one = field.positions()[0];
        driver.update(&mut field, &tick);
        let after_two = field.positions()[0];

        let step = after_one.sub(start[0]);
        let second_step = after_two.sub(after_one);
        assert!(step.length() > 0.0);
        assert!(second_step.distance(step) < 1e-5);
    }

    #[test]
    fn test_field_tumble_follows_elapsed() {
        let mut field = ParticleField::ambient(4, 25.0, &mut rng());
        let mut driver = AmbientDriftDriver::default();

        driver.update(
            &mut field,
            &FrameTick {
                elapsed: 10.0,
                dt: 0.016,
            },
        );
        assert!((field.rotation.x - 0.5).abs() < 1e-5);
        assert!((field.rotation.y - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_portal_swirl_ring_distribution() {
        let field = ParticleField::portal_swirl(100, Color::from_hex(0x33CCFF), &mut rng());

        assert_eq!(field.len(), 100);
        for p in field.positions() {
            let radius = Vec3::new(p.x, 0.0, p.z).length();
            assert!(radius >= 0.5 - 1e-4 && radius <= 1.0 + 1e-4);
            assert!(p.y.abs() <= 0.25 + 1e-5);
        }
        assert!((field.colors()[0].a - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_instances_match_field() {
        let field = ParticleField::portal_swirl(10, Color::WHITE, &mut rng());
        let instances = field.instances();

        assert_eq!(instances.len(), 10);
        assert_eq!(instances[3].position_size[3], field.point_size);
        assert_eq!(instances[3].position_size[0], field.positions()[3].x);

        // Pod data uploads as raw bytes
        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), instances.len() * std::mem::size_of::<ParticleInstance>());
    }
}
