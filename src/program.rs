use std::error::Error;
use std::fmt::{self, Display};

use rand::{SeedableRng, rngs::SmallRng};
use three_d::{
    Camera, ClearState, Context, FrameInput, FrameOutput, GUI, Viewport, degrees,
    window::{Window, WindowError, WindowSettings},
};

use crate::camera::CameraPose;
use crate::cfg::Config;
use crate::gfx::{SceneObjects, to_vec3};
use crate::gui::{self, UiState};
use crate::input;
use crate::sim::SimState;

pub(crate) struct Program {
    window: Option<Window>,
    camera: Camera,
    gui: GUI,
    scene: SceneObjects,
    sim: SimState,
    ui: UiState,
    config: Config,
}

#[derive(Debug)]
pub enum ProgramError {
    CreateWindow(WindowError),
}

impl Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramError::CreateWindow(e) => write!(f, "Error when creating window: {e}"),
        }
    }
}

impl Error for ProgramError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ProgramError::CreateWindow(e) => Some(e),
        }
    }
}

impl Program {
    fn new_window() -> Result<Window, ProgramError> {
        Window::new(WindowSettings {
            title: "Solar System".into(),
            min_size: (64, 64),
            ..Default::default()
        })
        .map_err(ProgramError::CreateWindow)
    }

    fn new_camera(viewport: Viewport, pose: CameraPose, config: &Config) -> Camera {
        Camera::new_perspective(
            viewport,
            to_vec3(pose.position),
            to_vec3(pose.look_at),
            to_vec3(pose.up()),
            degrees(config.field_of_view as f32),
            config.near_plane as f32,
            config.far_plane as f32,
        )
    }

    pub(crate) fn new(config: Config) -> Result<Self, ProgramError> {
        let window = Self::new_window()?;
        let context: Context = window.gl();

        let seed = config.seed_or_random();
        log::info!("seed {seed}");
        let mut rng = SmallRng::seed_from_u64(seed);

        let sim = SimState::new(&config, &mut rng);
        let ui = UiState::default();
        let camera = Self::new_camera(window.viewport(), sim.camera.pose(), &config);
        let gui = gui::create(&context, ui.theme);
        let scene = SceneObjects::new(&context, &sim, config.star_count, &mut rng);

        Ok(Self {
            window: Some(window),
            camera,
            gui,
            scene,
            sim,
            ui,
            config,
        })
    }

    pub(crate) fn run(mut self) {
        if let Some(window) = self.window.take() {
            window.render_loop(move |frame_input| self.tick(frame_input));
        }
    }

    fn tick(&mut self, mut frame_input: FrameInput) -> FrameOutput {
        let viewport = frame_input.viewport;
        self.camera.set_viewport(viewport);
        let lens = self.config.lens(viewport.width, viewport.height);

        gui::update(
            &mut self.gui,
            &mut self.sim,
            &mut self.ui,
            &mut frame_input.events,
            frame_input.accumulated_time,
            viewport,
            frame_input.device_pixel_ratio,
        );
        input::handle_events(
            &mut self.sim,
            &mut self.ui,
            &mut frame_input.events,
            viewport,
            &lens,
        );

        self.sim.step(1);

        let pose = self.sim.camera.pose();
        self.camera.set_view(
            to_vec3(pose.position),
            to_vec3(pose.look_at),
            to_vec3(pose.up()),
        );
        self.scene
            .update(&self.sim, frame_input.elapsed_time / 1000.0);

        let [r, g, b, a] = self.ui.theme.clear_color();
        let screen = frame_input.screen();
        let res = screen
            .clear(ClearState::color_and_depth(r, g, b, a, 1.0))
            .render(&self.camera, self.scene.objects(), &self.scene.lights())
            .write(|| self.gui.render());
        if let Err(e) = res {
            log::error!("failed to draw the GUI: {e}");
        }

        FrameOutput::default()
    }
}
