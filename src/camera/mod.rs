use glam::{DMat4, DVec3};
use serde::Deserialize;

pub mod controller;

pub use controller::{CameraController, Tween, ZoomRequest};

/// Where the camera is and what it is looking at.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct CameraPose {
    pub position: DVec3,
    pub look_at: DVec3,
}

impl CameraPose {
    pub const DEFAULT: Self = Self {
        position: DVec3::new(0.0, 15.0, 38.0),
        look_at: DVec3::ZERO,
    };

    /// Unit vector from the camera towards the point it looks at.
    ///
    /// Returns `None` if the two points coincide.
    pub fn forward(&self) -> Option<DVec3> {
        (self.look_at - self.position).try_normalize()
    }

    /// The up vector used for the view matrix.
    ///
    /// +Y, unless the camera looks straight up or down, where +Z is used instead.
    pub fn up(&self) -> DVec3 {
        match self.forward() {
            Some(f) if f.cross(DVec3::Y).length_squared() < 1e-12 => DVec3::Z,
            _ => DVec3::Y,
        }
    }

    /// Right-handed world-to-view matrix.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.look_at, self.up())
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Perspective projection parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lens {
    /// Vertical field of view, in radians.
    pub fov_y: f64,
    /// Width divided by height of the viewport.
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Lens {
    pub fn new(fov_y_degrees: f64, aspect: f64, near: f64, far: f64) -> Self {
        Self {
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    /// Returns the same lens for a viewport of the given size.
    ///
    /// Zero-sized viewports keep the previous aspect ratio.
    pub fn with_viewport(self, width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return self;
        }
        Self {
            aspect: width as f64 / height as f64,
            ..self
        }
    }

    /// OpenGL-style projection matrix (clip depth `-1..1`).
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_falls_back_when_looking_straight_down() {
        let pose = CameraPose {
            position: DVec3::new(0.0, 10.0, 0.0),
            look_at: DVec3::ZERO,
        };
        assert_eq!(pose.up(), DVec3::Z);
        assert!(pose.view_matrix().is_finite());
    }

    #[test]
    fn default_pose_uses_y_up() {
        assert_eq!(CameraPose::DEFAULT.up(), DVec3::Y);
    }

    #[test]
    fn zero_sized_viewport_keeps_aspect() {
        let lens = Lens::new(60.0, 2.0, 0.1, 1000.0);
        assert_eq!(lens.with_viewport(0, 100).aspect, 2.0);
        assert_eq!(lens.with_viewport(300, 100).aspect, 3.0);
    }
}
