use three_d::egui::{
    Align, Button, Color32, Context, Frame, Layout, Margin, Response, RichText, Stroke,
    TopBottomPanel, Ui, Vec2, WidgetText,
};

use super::{MIN_TOUCH_TARGET_LEN, MIN_TOUCH_TARGET_VEC, Theme, UiState, declare_id};
use crate::sim::SimState;

declare_id!(TOP_PANEL, b"Ecliptic");

pub(super) fn draw(ctx: &Context, sim: &mut SimState, ui_state: &mut UiState) {
    let fill = match ui_state.theme {
        Theme::Dark => Color32::from_black_alpha(192),
        Theme::Light => Color32::from_white_alpha(192),
    };
    TopBottomPanel::top(*TOP_PANEL_ID)
        .show_separator_line(false)
        .exact_height(MIN_TOUCH_TARGET_LEN + 8.0)
        .frame(Frame {
            inner_margin: Margin::symmetric(8, 4),
            fill,
            ..Default::default()
        })
        .show(ctx, |ui| {
            ui.horizontal(|ui| contents(ui, sim, ui_state));
        });
}

fn contents(ui: &mut Ui, sim: &mut SimState, ui_state: &mut UiState) {
    ui.set_height(MIN_TOUCH_TARGET_LEN);

    let sidebar_hover = match ui_state.sidebar_open {
        true => "Hide orbital speeds",
        false => "Show orbital speeds",
    };
    if icon_button(ui, "☰", sidebar_hover).clicked() {
        ui_state.sidebar_open ^= true;
    }
    ui.add_space(8.0);
    pause_button(ui, sim);

    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        let theme_hover = format!("{} mode\nClick/tap to switch", ui_state.theme);
        if icon_button(ui, ui_state.theme.icon(), theme_hover).clicked() {
            ui_state.theme = ui_state.theme.toggled();
        }
    });
}

fn pause_button(ui: &mut Ui, sim: &mut SimState) {
    let paused = sim.animator.is_paused();
    let (label, hover_string) = match paused {
        false => ("Pause", "Currently running\nClick/tap to pause"),
        true => ("Resume", "Currently paused\nClick/tap to resume"),
    };

    let button = Button::new(RichText::new(label).size(16.0))
        .min_size(Vec2::new(96.0, MIN_TOUCH_TARGET_LEN));
    if ui.add(button).on_hover_text(hover_string).clicked() {
        let paused = sim.animator.toggle_pause();
        log::debug!("orbits paused: {paused}");
    }
}

fn icon_button(ui: &mut Ui, icon: &str, hover_text: impl Into<WidgetText>) -> Response {
    ui.scope(|ui| {
        ui.spacing_mut().button_padding = Vec2::ZERO;
        let widget_styles = &mut ui.visuals_mut().widgets;
        widget_styles.inactive.weak_bg_fill = Color32::TRANSPARENT;
        widget_styles.inactive.bg_stroke = Stroke::NONE;
        widget_styles.hovered.bg_stroke = Stroke::NONE;

        let button = Button::new(RichText::new(icon).size(24.0))
            .min_size(MIN_TOUCH_TARGET_VEC)
            .corner_radius(MIN_TOUCH_TARGET_LEN);
        ui.add(button).on_hover_text(hover_text)
    })
    .inner
}
