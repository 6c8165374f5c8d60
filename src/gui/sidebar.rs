use std::ops::RangeInclusive;

use float_pretty_print::PrettyPrintFloat;
use three_d::egui::{Align, Button, Context, Layout, RichText, ScrollArea, SidePanel, Slider, Ui};

use super::{MIN_TOUCH_TARGET_LEN, declare_id};
use crate::sim::SimState;

declare_id!(SIDE_PANEL, b"Perihelo");

const SLIDER_STEP: f64 = 0.001;

fn format_speed(number: f64, _: RangeInclusive<usize>) -> String {
    let number = PrettyPrintFloat(number);
    format!("{number:1.6}")
}

pub(super) fn draw(ctx: &Context, sim: &mut SimState, open: &mut bool) {
    SidePanel::left(*SIDE_PANEL_ID)
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Orbital speeds");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let close = Button::new(RichText::new("✖").size(18.0))
                        .min_size([MIN_TOUCH_TARGET_LEN * 0.75; 2].into());
                    if ui.add(close).on_hover_text("Close").clicked() {
                        *open = false;
                    }
                });
            });
            ui.separator();
            ScrollArea::vertical().show(ui, |ui| speed_sliders(ui, sim));
        });
}

fn speed_sliders(ui: &mut Ui, sim: &mut SimState) {
    let range = sim.animator.speed_range().as_range();

    for index in 0..sim.bodies().len() {
        let Some(mut speed) = sim.animator.speed(index) else {
            continue;
        };
        let name = sim.bodies()[index].name.clone();

        ui.label(RichText::new(&name).strong());
        let slider = Slider::new(&mut speed, range.clone())
            .step_by(SLIDER_STEP)
            .custom_formatter(format_speed);
        if ui.add(slider).changed() {
            if let Some(speed) = sim.animator.set_speed(index, speed) {
                log::debug!("{name} speed set to {speed}");
            }
        }
        ui.add_space(6.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_labels_are_short_and_accurate() {
        for speed in [0.001, 0.0015, 0.01, 0.04, 0.08] {
            let label = format_speed(speed, 0..=0);
            assert!(label.trim().len() <= 6, "{label:?}");
            let parsed: f64 = label.trim().parse().unwrap();
            assert!((parsed - speed).abs() < 1e-3, "{label:?}");
        }
    }
}
