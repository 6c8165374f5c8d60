//! An interactive solar system: eight planets on circular orbits around a
//! glowing sun, with per-planet speed sliders, click-to-zoom and hover labels.
//!
//! The simulation core ([`sim`], [`camera`], [`pick`]) has no window or GPU
//! dependencies and can be driven frame by frame from tests.

pub mod camera;
pub mod cfg;
pub mod pick;
pub mod sim;

mod gfx;
mod gui;
mod input;
mod logging;
mod program;

#[cfg(target_family = "wasm")]
mod web;

pub use program::ProgramError;

use cfg::Config;
use program::Program;

// Called when the WASM module is instantiated
#[cfg(target_family = "wasm")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
fn start() {
    web::panic_handler::init_panic_handler();
    run();
}

/// Opens the window and runs the render loop until it closes.
pub fn run() {
    logging::init();

    let config = Config::load();
    logging::set_level(config.log_level);

    let program = match Program::new(config) {
        Ok(p) => p,
        Err(e) => {
            log::error!("{e}");
            if cfg!(target_family = "wasm") {
                panic!("{e}");
            } else {
                std::process::exit(1);
            }
        }
    };
    program.run();
}
