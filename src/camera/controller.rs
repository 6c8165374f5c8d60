use glam::DVec3;

use super::CameraPose;

/// A linear move of the camera from one pose to another, one step per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub start: CameraPose,
    pub end: CameraPose,
    progress: f64,
    step: f64,
}

impl Tween {
    fn new(start: CameraPose, end: CameraPose, step: f64) -> Self {
        Self {
            start,
            end,
            progress: 0.0,
            step,
        }
    }

    /// How far along the tween is, in `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    fn advance(&mut self) {
        self.progress = (self.progress + self.step).min(1.0);
    }

    fn position(&self) -> DVec3 {
        if self.is_finished() {
            self.end.position
        } else {
            self.start.position.lerp(self.end.position, self.progress)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum CameraState {
    Idle,
    Tweening(Tween),
}

/// What happened to a zoom or reset request.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomRequest {
    /// A new tween was started.
    Started,
    /// Another tween was in flight, so the request was ignored.
    Dropped,
}

/// Owns the live camera pose and moves it between poses.
///
/// Requests that arrive while a tween is in flight are dropped rather than
/// replacing it. Rapid clicking can feel unresponsive because of this.
#[derive(Clone, Debug)]
pub struct CameraController {
    pose: CameraPose,
    default_pose: CameraPose,
    zoom_offset: DVec3,
    step: f64,
    state: CameraState,
}

impl CameraController {
    pub const DEFAULT_STEP: f64 = 0.04;
    pub const DEFAULT_ZOOM_OFFSET: DVec3 = DVec3::new(0.0, 2.0, 4.0);

    /// Creates a controller resting at `default_pose`, which later resets return to.
    pub fn new(default_pose: CameraPose, zoom_offset: DVec3, step: f64) -> Self {
        Self {
            pose: default_pose,
            default_pose,
            zoom_offset,
            step,
            state: CameraState::Idle,
        }
    }

    #[inline]
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    #[inline]
    pub fn default_pose(&self) -> CameraPose {
        self.default_pose
    }

    /// The tween in flight, if any.
    pub fn tween(&self) -> Option<&Tween> {
        match &self.state {
            CameraState::Idle => None,
            CameraState::Tweening(tween) => Some(tween),
        }
    }

    #[inline]
    pub fn is_tweening(&self) -> bool {
        matches!(self.state, CameraState::Tweening(_))
    }

    /// Starts moving to a fixed offset above and behind `target`, looking at it.
    pub fn request_zoom(&mut self, target: DVec3) -> ZoomRequest {
        self.request(CameraPose {
            position: target + self.zoom_offset,
            look_at: target,
        })
    }

    /// Starts moving back to the default pose.
    pub fn request_reset(&mut self) -> ZoomRequest {
        self.request(self.default_pose)
    }

    fn request(&mut self, end: CameraPose) -> ZoomRequest {
        if self.is_tweening() {
            log::debug!("camera busy, dropping move to {:?}", end.position);
            return ZoomRequest::Dropped;
        }

        log::debug!("camera moving to {:?}", end.position);
        self.state = CameraState::Tweening(Tween::new(self.pose, end, self.step));
        ZoomRequest::Started
    }

    /// Advances the tween in flight by one frame. Does nothing when idle.
    pub fn tick(&mut self) {
        let CameraState::Tweening(tween) = &mut self.state else {
            return;
        };

        tween.advance();
        self.pose = CameraPose {
            position: tween.position(),
            look_at: tween.end.look_at,
        };

        if tween.is_finished() {
            self.state = CameraState::Idle;
        }
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(
            CameraPose::DEFAULT,
            Self::DEFAULT_ZOOM_OFFSET,
            Self::DEFAULT_STEP,
        )
    }
}
