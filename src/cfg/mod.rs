use std::error::Error;
use std::fmt::{self, Display};

use glam::DVec3;
use log::LevelFilter;
use rand::Rng;
use serde::Deserialize;

use crate::camera::{CameraController, CameraPose, Lens};
use crate::sim::animator::{OrbitalAnimator, SpeedRange};

#[cfg_attr(target_family = "wasm", path = "storage_web.rs")]
#[cfg_attr(not(target_family = "wasm"), path = "storage_native.rs")]
mod storage;

pub use storage::LoadError;

/// Tunables for the simulation and the view.
///
/// Every field is optional in the stored form; missing fields take the
/// default value. The stored config is only ever read.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bounds of the per-planet speed sliders, in radians per frame.
    pub speed_range: SpeedRange,
    /// Self-rotation added to every planet each frame, in radians.
    pub self_rotation_step: f64,
    /// Tween progress added each frame; `0.04` finishes in 25 frames.
    pub tween_step: f64,
    /// Camera offset from a planet when zoomed onto it.
    pub zoom_offset: DVec3,
    pub default_camera: CameraPose,
    /// Vertical field of view, in degrees.
    pub field_of_view: f64,
    pub near_plane: f64,
    pub far_plane: f64,
    pub star_count: usize,
    /// Seed for starting angles and star positions. Random when absent.
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed_range: SpeedRange::DEFAULT,
            self_rotation_step: OrbitalAnimator::DEFAULT_SELF_ROTATION_STEP,
            tween_step: CameraController::DEFAULT_STEP,
            zoom_offset: CameraController::DEFAULT_ZOOM_OFFSET,
            default_camera: CameraPose::DEFAULT,
            field_of_view: 60.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            star_count: 800,
            seed: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Loads the stored config, falling back to the defaults if there is
    /// none or it is unusable.
    pub fn load() -> Self {
        let config = match storage::load::<Config>() {
            Ok(c) => c,
            Err(e) if storage::is_not_found(&e) => {
                log::debug!("no stored config, using defaults");
                return Self::default();
            }
            Err(e) => {
                log::warn!("failed to load config, using defaults: {e}");
                return Self::default();
            }
        };

        match config.validate() {
            Ok(c) => {
                log::info!("loaded config");
                c
            }
            Err(e) => {
                log::warn!("invalid config, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Checks that every value is usable.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let SpeedRange { min, max } = self.speed_range;
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::SpeedRange { min, max });
        }
        if !(self.tween_step > 0.0 && self.tween_step <= 1.0) {
            return Err(ConfigError::TweenStep(self.tween_step));
        }
        if !(self.field_of_view > 0.0 && self.field_of_view < 180.0) {
            return Err(ConfigError::FieldOfView(self.field_of_view));
        }
        if !(self.near_plane > 0.0 && self.near_plane < self.far_plane) {
            return Err(ConfigError::ClipPlanes {
                near: self.near_plane,
                far: self.far_plane,
            });
        }
        if !self.self_rotation_step.is_finite()
            || !self.zoom_offset.is_finite()
            || !self.default_camera.position.is_finite()
            || !self.default_camera.look_at.is_finite()
        {
            return Err(ConfigError::NonFinite);
        }
        if self.default_camera.forward().is_none() {
            return Err(ConfigError::DegenerateCamera);
        }
        Ok(self)
    }

    /// The perspective lens for a viewport of the given size.
    pub fn lens(&self, width: u32, height: u32) -> Lens {
        Lens::new(self.field_of_view, 1.0, self.near_plane, self.far_plane)
            .with_viewport(width, height)
    }

    /// The configured seed, or a fresh one from the OS-seeded thread RNG.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    SpeedRange { min: f64, max: f64 },
    TweenStep(f64),
    FieldOfView(f64),
    ClipPlanes { near: f64, far: f64 },
    NonFinite,
    DegenerateCamera,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SpeedRange { min, max } => {
                write!(f, "speed range {min}..={max} must be positive and non-empty")
            }
            ConfigError::TweenStep(step) => write!(f, "tween step {step} must be in (0, 1]"),
            ConfigError::FieldOfView(fov) => {
                write!(f, "field of view {fov} must be between 0 and 180 degrees")
            }
            ConfigError::ClipPlanes { near, far } => {
                write!(f, "clip planes must satisfy 0 < near ({near}) < far ({far})")
            }
            ConfigError::NonFinite => write!(f, "config contains non-finite numbers"),
            ConfigError::DegenerateCamera => {
                write!(f, "default camera looks at its own position")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(Config::default().validate(), Ok(Config::default()));
    }

    #[rstest]
    #[case::empty_speed_range(
        Config { speed_range: SpeedRange { min: 0.05, max: 0.01 }, ..Default::default() },
        ConfigError::SpeedRange { min: 0.05, max: 0.01 }
    )]
    #[case::zero_speed(
        Config { speed_range: SpeedRange { min: 0.0, max: 0.01 }, ..Default::default() },
        ConfigError::SpeedRange { min: 0.0, max: 0.01 }
    )]
    #[case::zero_step(
        Config { tween_step: 0.0, ..Default::default() },
        ConfigError::TweenStep(0.0)
    )]
    #[case::huge_step(
        Config { tween_step: 1.5, ..Default::default() },
        ConfigError::TweenStep(1.5)
    )]
    #[case::flat_fov(
        Config { field_of_view: 180.0, ..Default::default() },
        ConfigError::FieldOfView(180.0)
    )]
    #[case::inverted_planes(
        Config { near_plane: 10.0, far_plane: 1.0, ..Default::default() },
        ConfigError::ClipPlanes { near: 10.0, far: 1.0 }
    )]
    #[case::nan_offset(
        Config { zoom_offset: DVec3::new(0.0, f64::NAN, 4.0), ..Default::default() },
        ConfigError::NonFinite
    )]
    #[case::degenerate_camera(
        Config {
            default_camera: CameraPose { position: DVec3::ONE, look_at: DVec3::ONE },
            ..Default::default()
        },
        ConfigError::DegenerateCamera
    )]
    fn invalid_configs_are_rejected(#[case] config: Config, #[case] expected: ConfigError) {
        assert_eq!(config.validate(), Err(expected));
    }

    #[test]
    fn lens_uses_viewport_aspect() {
        let lens = Config::default().lens(1600, 800);
        assert_eq!(lens.aspect, 2.0);
        assert!((lens.fov_y - 60f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn configured_seed_is_kept() {
        let config = Config {
            seed: Some(1234),
            ..Default::default()
        };
        assert_eq!(config.seed_or_random(), 1234);
        assert_eq!(config.seed_or_random(), 1234);
    }

    #[test]
    fn missing_seed_draws_fresh_ones() {
        let config = Config::default();
        let seeds: Vec<u64> = (0..4).map(|_| config.seed_or_random()).collect();
        assert!(seeds.windows(2).any(|w| w[0] != w[1]));
    }
}
