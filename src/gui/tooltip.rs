use three_d::egui::{Area, Context, Frame, Order, RichText, vec2};

use super::declare_id;
use crate::sim::SimState;

declare_id!(TOOLTIP, b"Aphelion");

/// Offset of the label's top-left corner from the pointer, in points.
const POINTER_OFFSET: [f32; 2] = [10.0, -10.0];

pub(super) fn draw(ctx: &Context, sim: &SimState, hovered: Option<usize>) {
    let Some(body) = hovered.and_then(|i| sim.bodies().get(i)) else {
        return;
    };
    let Some(pointer) = ctx.pointer_hover_pos() else {
        return;
    };

    Area::new(*TOOLTIP_ID)
        .order(Order::Tooltip)
        .fixed_pos(pointer + vec2(POINTER_OFFSET[0], POINTER_OFFSET[1]))
        .interactable(false)
        .show(ctx, |ui| {
            Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(RichText::new(&body.name).size(14.0));
            });
        });
}
