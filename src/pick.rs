//! Resolving pointer positions to bodies by ray casting.

use glam::{DVec2, DVec3};
use ordered_float::NotNan;

use crate::camera::{CameraPose, Lens};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    /// Unit length.
    pub direction: DVec3,
}

impl Ray {
    /// Builds the ray leaving the camera through `ndc` on the near plane.
    ///
    /// Returns `None` for degenerate cameras (e.g. position equal to look-at).
    pub fn from_ndc(ndc: DVec2, pose: &CameraPose, lens: &Lens) -> Option<Self> {
        let inverse = (lens.projection_matrix() * pose.view_matrix()).inverse();
        let on_near_plane = inverse.project_point3(DVec3::new(ndc.x, ndc.y, -1.0));
        let direction = (on_near_plane - pose.position).try_normalize()?;

        if !direction.is_finite() || !pose.position.is_finite() {
            return None;
        }

        Some(Self {
            origin: pose.position,
            direction,
        })
    }

    /// Distance along the ray to the first point on the sphere's surface.
    ///
    /// A ray starting inside the sphere hits its far side.
    pub fn intersect_sphere(&self, center: DVec3, radius: f64) -> Option<f64> {
        let to_origin = self.origin - center;
        let b = to_origin.dot(self.direction);
        let c = to_origin.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        [-b - root, -b + root].into_iter().find(|&t| t >= 0.0)
    }
}

/// Returns the index of the sphere closest to the camera under `ndc`, if any.
///
/// `spheres` yields `(center, radius)` pairs, indexed in iteration order.
pub fn pick(
    ndc: DVec2,
    pose: &CameraPose,
    lens: &Lens,
    spheres: impl IntoIterator<Item = (DVec3, f64)>,
) -> Option<usize> {
    let ray = Ray::from_ndc(ndc, pose, lens)?;

    spheres
        .into_iter()
        .enumerate()
        .filter_map(|(index, (center, radius))| {
            let t = ray.intersect_sphere(center, radius)?;
            NotNan::new(t).ok().map(|t| (t, index))
        })
        .min()
        .map(|(_, index)| index)
}

/// Maps a pixel inside a viewport to normalized device coordinates.
///
/// Pixel coordinates have their origin at the bottom-left corner, so +Y is up
/// in both systems.
pub fn ndc_from_pixel(pixel: DVec2, viewport_origin: DVec2, viewport_size: DVec2) -> DVec2 {
    (pixel - viewport_origin) / viewport_size * 2.0 - DVec2::ONE
}
