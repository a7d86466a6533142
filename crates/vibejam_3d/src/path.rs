//! Path generation

use rand::Rng;
use std::f32::consts::TAU;
use vibejam_core::Vec3;

/// Generate a closed ring of key points around `center`
///
/// Points lie on a circle of `radius` with two full height oscillations per
/// lap (scaled by `height_variation`) and independent per-axis uniform
/// jitter bounded by `randomness`. The result holds `num_points + 1`
/// entries: the last point is a copy of the first, so the sequence can be
/// used directly as a closed loop or spline control set.
///
/// The whole path is computed eagerly; pass a seeded `rng` for
/// reproducible output.
pub fn generate_path(
    center: Vec3,
    radius: f32,
    num_points: usize,
    height_variation: f32,
    randomness: f32,
    rng: &mut impl Rng,
) -> Vec<Vec3> {
    if num_points == 0 {
        return Vec::new();
    }

    let mut points = Vec::with_capacity(num_points + 1);
    for i in 0..num_points {
        let angle = (i as f32 / num_points as f32) * TAU;

        let x = angle.cos() * radius;
        let z = angle.sin() * radius;
        let y = (angle * 2.0).sin() * height_variation;

        let jitter_x = rng.random_range(-0.5..0.5) * randomness;
        let jitter_y = rng.random_range(-0.5..0.5) * randomness;
        let jitter_z = rng.random_range(-0.5..0.5) * randomness;

        points.push(Vec3::new(
            center.x + x + jitter_x,
            center.y + y + jitter_y,
            center.z + z + jitter_z,
        ));
    }

    // Close the loop
    points.push(points[0]);
    points
}
