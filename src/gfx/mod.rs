use std::f64::consts::TAU;
use std::ops::Range;

use glam::DVec3;
use rand::Rng;
use three_d::{Mat4, Vec3, Vec4};

mod scene;

pub(crate) use scene::SceneObjects;

/// Stars are scattered in a spherical shell with these radii.
pub const STAR_SHELL: Range<f64> = 80.0..200.0;

const GLOW_BASE_SCALE: f64 = 8.0;
const GLOW_PULSE_AMPLITUDE: f64 = 0.45;
/// In radians per second.
const GLOW_PULSE_RATE: f64 = 2.2;

#[inline]
pub(crate) fn to_vec3(v: DVec3) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

/// Uniform scale followed by a translation.
pub(crate) fn get_matrix(position: DVec3, scale: f64) -> Mat4 {
    let (x, y, z) = (position.x as f32, position.y as f32, position.z as f32);
    let s = scale as f32;
    Mat4 {
        x: Vec4::new(s, 0.0, 0.0, 0.0),
        y: Vec4::new(0.0, s, 0.0, 0.0),
        z: Vec4::new(0.0, 0.0, s, 0.0),
        w: Vec4::new(x, y, z, 1.0),
    }
}

/// Evenly spaced points on a circular orbit in the XZ plane.
pub fn orbit_points(distance: f64, count: usize) -> Vec<DVec3> {
    (0..count)
        .map(|i| {
            let theta = i as f64 / count as f64 * TAU;
            DVec3::new(theta.cos() * distance, 0.0, theta.sin() * distance)
        })
        .collect()
}

/// Random points in the star shell, with directions uniform over the sphere.
pub fn star_positions(count: usize, rng: &mut impl Rng) -> Vec<DVec3> {
    (0..count)
        .map(|_| {
            let r = rng.random_range(STAR_SHELL);
            let theta = rng.random_range(0.0..TAU);
            let phi = (2.0 * rng.random::<f64>() - 1.0).acos();
            DVec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            )
        })
        .collect()
}

/// Diameter of the sun's glow after `seconds` of unpaused time.
pub fn glow_scale(seconds: f64) -> f64 {
    GLOW_BASE_SCALE + (seconds * GLOW_PULSE_RATE).sin() * GLOW_PULSE_AMPLITUDE
}

/// Unpaused seconds driving the glow pulse.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct GlowClock {
    seconds: f64,
}

impl GlowClock {
    /// Adds `elapsed_secs` unless the orbits are paused.
    pub(crate) fn advance(&mut self, paused: bool, elapsed_secs: f64) {
        if !paused && elapsed_secs.is_finite() {
            self.seconds += elapsed_secs;
        }
    }

    pub(crate) fn scale(&self) -> f64 {
        glow_scale(self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    #[test]
    fn orbit_points_lie_on_the_orbit() {
        let points = orbit_points(15.0, 128);
        assert_eq!(points.len(), 128);
        for p in &points {
            assert!((p.length() - 15.0).abs() < 1e-9);
            assert_eq!(p.y, 0.0);
        }
        assert!((points[0] - DVec3::new(15.0, 0.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn stars_stay_in_shell() {
        let mut rng = SmallRng::seed_from_u64(1);
        let stars = star_positions(500, &mut rng);
        assert_eq!(stars.len(), 500);
        for star in &stars {
            let r = star.length();
            assert!(r >= STAR_SHELL.start - 1e-9 && r < STAR_SHELL.end + 1e-9, "r = {r}");
        }
    }

    #[test]
    fn stars_are_seed_deterministic() {
        let a = star_positions(10, &mut SmallRng::seed_from_u64(9));
        let b = star_positions(10, &mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn glow_pulse_is_bounded() {
        for i in 0..1000 {
            let scale = glow_scale(i as f64 * 0.037);
            assert!((GLOW_BASE_SCALE - GLOW_PULSE_AMPLITUDE..=GLOW_BASE_SCALE + GLOW_PULSE_AMPLITUDE)
                .contains(&scale));
        }
        assert_eq!(glow_scale(0.0), GLOW_BASE_SCALE);
    }

    #[test]
    fn glow_clock_runs_while_unpaused() {
        let mut clock = GlowClock::default();
        clock.advance(false, 0.25);
        clock.advance(false, 0.25);
        assert_eq!(clock.scale(), glow_scale(0.5));
    }

    #[test]
    fn glow_clock_freezes_while_paused() {
        let mut clock = GlowClock::default();
        clock.advance(false, 0.3);
        let frozen = clock;

        for _ in 0..10 {
            clock.advance(true, 0.016);
        }
        assert_eq!(clock, frozen);
        assert_eq!(clock.scale(), glow_scale(0.3));

        clock.advance(false, 0.2);
        assert_eq!(clock.scale(), glow_scale(0.5));
    }

    #[test]
    fn matrix_scales_then_translates() {
        let m = get_matrix(DVec3::new(1.0, 2.0, 3.0), 2.0);
        let p = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(p, Vec4::new(3.0, 2.0, 3.0, 1.0));
    }
}
