use std::f64::consts::TAU;
use std::ops::RangeInclusive;

use glam::DVec3;
use rand::Rng;
use serde::Deserialize;

use super::body::Body;

/// The bounds user-adjustable orbital speeds are kept within, in radians per frame.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct SpeedRange {
    pub min: f64,
    pub max: f64,
}

impl SpeedRange {
    pub const DEFAULT: Self = Self {
        min: 0.001,
        max: 0.08,
    };

    /// The same range with `min <= max`. NaN bounds fall back to the default.
    pub fn ordered(self) -> Self {
        if self.min.is_nan() || self.max.is_nan() {
            return Self::DEFAULT;
        }
        Self {
            min: self.min.min(self.max),
            max: self.min.max(self.max),
        }
    }

    /// Clamps `speed` into the range. Never panics, even on a reversed range.
    #[inline]
    pub fn clamp(self, speed: f64) -> f64 {
        speed.max(self.min).min(self.max)
    }

    pub fn as_range(self) -> RangeInclusive<f64> {
        self.min..=self.max
    }
}

impl Default for SpeedRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Mutable per-body animation state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalState {
    /// The orbital angle, in radians. Never normalized.
    pub angle: f64,

    /// The angle added every frame, in radians.
    pub angular_speed: f64,

    /// The self-rotation angle around the body's own Y axis, in radians.
    pub spin: f64,

    distance: f64,
}

impl OrbitalState {
    /// The position on the orbit for the current angle. All orbits lie in the XZ plane.
    pub fn position(&self) -> DVec3 {
        let (sin, cos) = self.angle.sin_cos();
        DVec3::new(cos * self.distance, 0.0, sin * self.distance)
    }
}

/// Advances every body along its circular orbit, once per frame.
#[derive(Clone, Debug)]
pub struct OrbitalAnimator {
    states: Box<[OrbitalState]>,
    speed_range: SpeedRange,
    self_rotation_step: f64,
    paused: bool,
}

impl OrbitalAnimator {
    pub const DEFAULT_SELF_ROTATION_STEP: f64 = 0.02;

    /// Creates an animator with every body at a random starting angle in `[0, 2π)`.
    pub fn new(
        bodies: &[Body],
        speed_range: SpeedRange,
        self_rotation_step: f64,
        rng: &mut impl Rng,
    ) -> Self {
        let angles: Box<[f64]> = bodies.iter().map(|_| rng.random_range(0.0..TAU)).collect();
        Self::with_angles(bodies, &angles, speed_range, self_rotation_step)
    }

    /// Creates an animator with explicit starting angles.
    ///
    /// Bodies without a matching entry in `angles` start at angle zero.
    pub fn with_angles(
        bodies: &[Body],
        angles: &[f64],
        speed_range: SpeedRange,
        self_rotation_step: f64,
    ) -> Self {
        let states = bodies
            .iter()
            .enumerate()
            .map(|(i, body)| OrbitalState {
                angle: angles.get(i).copied().unwrap_or(0.0),
                angular_speed: body.base_angular_speed,
                spin: 0.0,
                distance: body.orbital_distance,
            })
            .collect();

        let ordered = speed_range.ordered();
        if ordered != speed_range {
            log::warn!("speed range {speed_range:?} is not usable, using {ordered:?}");
        }

        Self {
            states,
            speed_range: ordered,
            self_rotation_step,
            paused: false,
        }
    }

    /// Moves every body one frame along its orbit. Does nothing while paused.
    pub fn advance(&mut self) {
        if self.paused {
            return;
        }

        for state in self.states.iter_mut() {
            state.angle += state.angular_speed;
            state.spin += self.self_rotation_step;
        }
    }

    /// Sets the angular speed of a body, clamped to the speed range.
    ///
    /// Returns the speed that was applied, or `None` if there is no body at
    /// `index` or `speed` is NaN.
    pub fn set_speed(&mut self, index: usize, speed: f64) -> Option<f64> {
        if speed.is_nan() {
            return None;
        }
        let speed_range = self.speed_range;
        let state = self.states.get_mut(index)?;
        state.angular_speed = speed_range.clamp(speed);
        Some(state.angular_speed)
    }

    /// Flips the pause flag. Returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused ^= true;
        self.paused
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn speed_range(&self) -> SpeedRange {
        self.speed_range
    }

    pub fn speed(&self, index: usize) -> Option<f64> {
        self.states.get(index).map(|s| s.angular_speed)
    }

    pub fn position(&self, index: usize) -> Option<DVec3> {
        self.states.get(index).map(OrbitalState::position)
    }

    pub fn spin(&self, index: usize) -> Option<f64> {
        self.states.get(index).map(|s| s.spin)
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = DVec3> + '_ {
        self.states.iter().map(OrbitalState::position)
    }

    pub fn states(&self) -> &[OrbitalState] {
        &self.states
    }
}
