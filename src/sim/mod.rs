use glam::{DVec2, DVec3};
use rand::Rng;

use crate::camera::{CameraController, Lens, ZoomRequest};
use crate::cfg::Config;
use crate::pick;

pub mod animator;
pub mod body;
pub mod presets;

use animator::OrbitalAnimator;
use body::{Body, Sun};

/// Everything that changes from frame to frame, independent of any window or GPU.
#[derive(Clone, Debug)]
pub struct SimState {
    sun: Sun,
    bodies: Box<[Body]>,
    pub animator: OrbitalAnimator,
    pub camera: CameraController,
}

impl SimState {
    /// Creates the solar system described by `config`, with random starting angles.
    pub fn new(config: &Config, rng: &mut impl Rng) -> Self {
        let bodies = presets::planets();
        let animator = OrbitalAnimator::new(
            &bodies,
            config.speed_range,
            config.self_rotation_step,
            rng,
        );
        let camera = CameraController::new(
            config.default_camera,
            config.zoom_offset,
            config.tween_step,
        );

        Self::from_parts(Sun::default(), bodies, animator, camera)
    }

    pub fn from_parts(
        sun: Sun,
        bodies: Box<[Body]>,
        animator: OrbitalAnimator,
        camera: CameraController,
    ) -> Self {
        Self {
            sun,
            bodies,
            animator,
            camera,
        }
    }

    /// Runs `delta_frames` frames' worth of animation.
    ///
    /// The camera keeps moving while the orbits are paused.
    pub fn step(&mut self, delta_frames: u32) {
        for _ in 0..delta_frames {
            self.animator.advance();
            self.camera.tick();
        }
    }

    #[inline]
    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body_position(&self, index: usize) -> Option<DVec3> {
        self.animator.position(index)
    }

    /// The body under the pointer, if any.
    pub fn pick(&self, ndc: DVec2, lens: &Lens) -> Option<usize> {
        let spheres = self
            .animator
            .positions()
            .zip(self.bodies.iter())
            .map(|(position, body)| (position, body.radius));

        pick::pick(ndc, &self.camera.pose(), lens, spheres)
    }

    /// Zooms onto the body under the pointer, or back to the default view if
    /// the pointer is over empty space.
    pub fn click(&mut self, ndc: DVec2, lens: &Lens) -> ZoomRequest {
        match self.pick(ndc, lens).and_then(|i| self.body_position(i)) {
            Some(target) => self.camera.request_zoom(target),
            None => self.camera.request_reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraPose;
    use animator::SpeedRange;

    fn earth_on_x_axis() -> SimState {
        let bodies = presets::planets();
        // Earth on +X, everything else out of the way on the far side.
        let angles = [3.0, 3.0, 0.0, 3.0, 3.0, 3.0, 3.0, 3.0];
        let animator = OrbitalAnimator::with_angles(&bodies, &angles, SpeedRange::DEFAULT, 0.02);
        let camera = CameraController::new(
            CameraPose {
                position: DVec3::new(10.0, 0.0, 20.0),
                look_at: DVec3::new(10.0, 0.0, 0.0),
            },
            CameraController::DEFAULT_ZOOM_OFFSET,
            CameraController::DEFAULT_STEP,
        );
        SimState::from_parts(Sun::default(), bodies, animator, camera)
    }

    fn lens() -> Lens {
        Lens::new(60.0, 1.0, 0.1, 1000.0)
    }

    #[test]
    fn pick_finds_body_under_pointer() {
        let sim = earth_on_x_axis();
        assert_eq!(sim.pick(DVec2::ZERO, &lens()), Some(2));
        assert_eq!(sim.pick(DVec2::new(0.0, 0.9), &lens()), None);
    }

    #[test]
    fn click_on_body_zooms_to_it() {
        let mut sim = earth_on_x_axis();
        assert_eq!(sim.click(DVec2::ZERO, &lens()), ZoomRequest::Started);

        let end = sim.camera.tween().unwrap().end;
        assert!((end.look_at - DVec3::new(10.0, 0.0, 0.0)).length() < 1e-9);
        assert!((end.position - DVec3::new(10.0, 2.0, 4.0)).length() < 1e-9);
    }

    #[test]
    fn click_on_empty_space_resets() {
        let mut sim = earth_on_x_axis();
        assert_eq!(sim.click(DVec2::new(0.0, 0.9), &lens()), ZoomRequest::Started);
        assert_eq!(sim.camera.tween().unwrap().end, sim.camera.default_pose());
    }

    #[test]
    fn camera_moves_while_paused() {
        let mut sim = earth_on_x_axis();
        let _ = sim.camera.request_reset();
        sim.animator.toggle_pause();
        let angles: Vec<f64> = sim.animator.states().iter().map(|s| s.angle).collect();

        sim.step(5);

        assert!(sim.camera.tween().unwrap().progress() > 0.19);
        let after: Vec<f64> = sim.animator.states().iter().map(|s| s.angle).collect();
        assert_eq!(angles, after);
    }

    #[test]
    fn step_zero_does_nothing() {
        let mut sim = earth_on_x_axis();
        let before = sim.animator.states().to_vec();
        sim.step(0);
        assert_eq!(sim.animator.states(), before.as_slice());
    }
}
