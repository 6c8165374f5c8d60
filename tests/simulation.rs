use glam::{DVec2, DVec3};
use rand::{SeedableRng, rngs::SmallRng};
use solar_system_demo::{
    camera::{CameraController, CameraPose, Lens, ZoomRequest},
    cfg::Config,
    sim::{
        SimState,
        animator::{OrbitalAnimator, SpeedRange},
        body::Sun,
        presets,
    },
};

fn seeded_sim(seed: u64) -> SimState {
    SimState::new(&Config::default(), &mut SmallRng::seed_from_u64(seed))
}

#[test]
fn thousand_frames_keep_every_planet_on_its_orbit() {
    let mut sim = seeded_sim(3);
    assert_eq!(sim.bodies().len(), 8);

    for _ in 0..1000 {
        sim.step(1);
        for (index, body) in sim.bodies().iter().enumerate() {
            let position = sim.body_position(index).unwrap();
            assert!(position.is_finite());
            assert_eq!(position.y, 0.0);
            assert!((position.length() - body.orbital_distance).abs() < 1e-9);
        }
    }
}

#[test]
fn paused_orbits_stay_put_while_camera_moves() {
    let mut sim = seeded_sim(11);
    let before: Vec<DVec3> = sim.animator.positions().collect();

    assert!(sim.animator.toggle_pause());
    assert_eq!(
        sim.camera.request_zoom(DVec3::new(10.0, 0.0, 0.0)),
        ZoomRequest::Started
    );
    sim.step(10);

    let after: Vec<DVec3> = sim.animator.positions().collect();
    assert_eq!(before, after);
    assert!(sim.camera.is_tweening());
    assert_ne!(sim.camera.pose(), CameraPose::DEFAULT);
}

#[test]
fn same_seed_same_system() {
    let a = seeded_sim(42);
    let b = seeded_sim(42);
    assert!(a.animator.positions().eq(b.animator.positions()));
}

#[test]
fn click_zoom_then_reset_round_trip() {
    let bodies = presets::planets();
    let angles = [3.0, 3.0, 0.0, 3.0, 3.0, 3.0, 3.0, 3.0];
    let animator = OrbitalAnimator::with_angles(&bodies, &angles, SpeedRange::DEFAULT, 0.02);
    let default_pose = CameraPose {
        position: DVec3::new(10.0, 0.0, 20.0),
        look_at: DVec3::new(10.0, 0.0, 0.0),
    };
    let camera = CameraController::new(
        default_pose,
        CameraController::DEFAULT_ZOOM_OFFSET,
        CameraController::DEFAULT_STEP,
    );
    let mut sim = SimState::from_parts(Sun::default(), bodies, animator, camera);
    sim.animator.toggle_pause();
    let lens = Lens::new(60.0, 1.0, 0.1, 1000.0);

    assert_eq!(sim.click(DVec2::ZERO, &lens), ZoomRequest::Started);
    // A second click while moving is dropped.
    assert_eq!(sim.click(DVec2::ZERO, &lens), ZoomRequest::Dropped);
    sim.step(30);

    let earth = sim.body_position(2).unwrap();
    let pose = sim.camera.pose();
    assert_eq!(pose.look_at, earth);
    assert!((pose.position - (earth + CameraController::DEFAULT_ZOOM_OFFSET)).length() < 1e-9);
    assert!(!sim.camera.is_tweening());

    // Pointing straight down the new view hits nothing but empty space above Earth.
    assert_eq!(sim.click(DVec2::new(0.0, 0.95), &lens), ZoomRequest::Started);
    sim.step(30);
    assert_eq!(sim.camera.pose().position, default_pose.position);
    assert_eq!(sim.camera.pose().look_at, default_pose.look_at);
}
