use glam::DVec2;
use three_d::{Event, Key, MouseButton, PhysicalPoint, Viewport};

use crate::camera::{Lens, ZoomRequest};
use crate::gui::UiState;
use crate::pick::ndc_from_pixel;
use crate::sim::SimState;

/// Applies the events egui left alone to the simulation.
pub(crate) fn handle_events(
    sim: &mut SimState,
    ui: &mut UiState,
    events: &mut [Event],
    viewport: Viewport,
    lens: &Lens,
) {
    for event in events {
        match event {
            Event::MouseMotion {
                position, handled, ..
            } => {
                ui.hovered = match *handled {
                    true => None,
                    false => sim.pick(to_ndc(*position, viewport), lens),
                };
            }
            Event::MousePress {
                button: MouseButton::Left,
                position,
                handled,
                ..
            } => {
                if *handled {
                    continue;
                }
                handle_click(sim, to_ndc(*position, viewport), lens);
                *handled = true;
            }
            Event::MouseLeave => ui.hovered = None,
            Event::KeyPress { kind, handled, .. } => handle_keypress(sim, kind, handled),
            _ => (),
        }
    }
}

fn handle_click(sim: &mut SimState, ndc: DVec2, lens: &Lens) {
    if sim.click(ndc, lens) == ZoomRequest::Dropped {
        log::debug!("ignored click during camera move");
    }
}

fn handle_keypress(sim: &mut SimState, key: &Key, handled: &mut bool) {
    if *handled {
        return;
    }

    if let Key::Space = key {
        let paused = sim.animator.toggle_pause();
        log::debug!("orbits paused: {paused}");
        *handled = true;
    }
}

fn to_ndc(position: PhysicalPoint, viewport: Viewport) -> DVec2 {
    ndc_from_pixel(
        DVec2::new(position.x as f64, position.y as f64),
        DVec2::new(viewport.x as f64, viewport.y as f64),
        DVec2::new(viewport.width.max(1) as f64, viewport.height.max(1) as f64),
    )
}
