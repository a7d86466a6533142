//! Portal ring shader
//!
//! The ring is a screen-space band: a smoothstep window around radius 0.45
//! in UV space, modulated by a time-based pulsation term. The WGSL source
//! is what a host renderer compiles; [`ring_intensity`] is the same band
//! function on the CPU, used by tests and available for hit-testing.

/// WGSL source for the portal ring material
pub const PORTAL_RING_WGSL: &str = include_str!("shaders/portal_ring.wgsl");

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Ring opacity at UV coordinate (`u`, `v`) and shader time `time`
///
/// Matches the fragment stage of [`PORTAL_RING_WGSL`]: a band rising over
/// [0.4, 0.45] and falling over [0.45, 0.5], pulsing with
/// `0.5 + 0.5 · sin(time · 3 + dist · 10)`.
pub fn ring_intensity(u: f32, v: f32, time: f32) -> f32 {
    let du = u - 0.5;
    let dv = v - 0.5;
    let dist = (du * du + dv * dv).sqrt();

    let band = smoothstep(0.4, 0.5, dist) * smoothstep(0.5, 0.4, dist);
    band * (0.5 + 0.5 * (time * 3.0 + dist * 10.0).sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_peaks_at_ring_radius() {
        // dist = 0.45 maximizes both smoothsteps
        let center = ring_intensity(0.95, 0.5, 0.0);
        let inside = ring_intensity(0.88, 0.5, 0.0);
        let outside = ring_intensity(0.995, 0.5, 0.0);

        assert!(center > inside);
        assert!(center > outside);
    }

    #[test]
    fn test_zero_away_from_band() {
        assert_eq!(ring_intensity(0.5, 0.5, 1.0), 0.0);
        assert_eq!(ring_intensity(0.5, 0.55, 1.0), 0.0);
        assert_eq!(ring_intensity(0.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_pulsation_modulates_over_time() {
        let u = 0.95;
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for i in 0..100 {
            let v = ring_intensity(u, 0.5, i as f32 * 0.1);
            min = min.min(v);
            max = max.max(v);
        }
        assert!(min >= 0.0);
        assert!(max > min + 0.1);
    }

    #[test]
    fn test_wgsl_source_carries_the_band_constants() {
        assert!(PORTAL_RING_WGSL.contains("smoothstep(0.4, 0.5, dist)"));
        assert!(PORTAL_RING_WGSL.contains("sin(ring.time * 3.0 + dist * 10.0)"));
    }
}
