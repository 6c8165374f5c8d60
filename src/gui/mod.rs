use three_d::{
    Context as ThreeDContext, Event as ThreeDEvent, GUI, Viewport,
    egui::{Context as EguiContext, CursorIcon, Vec2},
};

use crate::sim::SimState;
pub(crate) use theme::Theme;

mod sidebar;
mod theme;
mod tooltip;
mod top_bar;

macro_rules! declare_id {
    (salt_only, $name:ident, $val:expr) => {
        ::pastey::paste! {
            const [<$name _SALT>]: ::core::num::NonZeroU64 =
                ::core::num::NonZeroU64::new(u64::from_be_bytes(*$val)).unwrap();
        }
    };
    ($name:ident, $val:expr) => {
        ::pastey::paste! {
            const [<$name _SALT>]: ::core::num::NonZeroU64 =
                ::core::num::NonZeroU64::new(u64::from_be_bytes(*$val)).unwrap();
            const [<$name _ID>]: ::std::sync::LazyLock<::three_d::egui::Id> =
                ::std::sync::LazyLock::new(|| ::three_d::egui::Id::new([<$name _SALT>]));
        }
    };
}
use declare_id;

const MIN_TOUCH_TARGET_LEN: f32 = 48.0;
const MIN_TOUCH_TARGET_VEC: Vec2 = Vec2::splat(MIN_TOUCH_TARGET_LEN);

/// View state that only the UI cares about.
#[derive(Clone, Debug)]
pub(crate) struct UiState {
    pub theme: Theme,
    pub sidebar_open: bool,
    /// Index of the planet under the pointer.
    pub hovered: Option<usize>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            sidebar_open: true,
            hovered: None,
        }
    }
}

pub(crate) fn create(context: &ThreeDContext, theme: Theme) -> GUI {
    let gui = GUI::new(context);
    gui.context().set_visuals(theme.visuals());
    gui
}

/// Runs egui for one frame, marking the events it consumed as handled.
pub(crate) fn update(
    gui: &mut GUI,
    sim: &mut SimState,
    ui: &mut UiState,
    events: &mut Vec<ThreeDEvent>,
    accumulated_time_ms: f64,
    viewport: Viewport,
    device_pixel_ratio: f32,
) {
    gui.update(
        events,
        accumulated_time_ms,
        viewport,
        device_pixel_ratio,
        |ctx| handle_ui(ctx, sim, ui),
    );
}

fn handle_ui(ctx: &EguiContext, sim: &mut SimState, ui: &mut UiState) {
    let theme = ui.theme;
    top_bar::draw(ctx, sim, ui);
    if ui.theme != theme {
        log::debug!("switched to {} theme", ui.theme);
        ctx.set_visuals(ui.theme.visuals());
    }
    if ui.sidebar_open {
        sidebar::draw(ctx, sim, &mut ui.sidebar_open);
    }
    tooltip::draw(ctx, sim, ui.hovered);

    if ui.hovered.is_some() && !ctx.is_pointer_over_area() {
        ctx.set_cursor_icon(CursorIcon::PointingHand);
    }
    ctx.output(|output| set_cursor_icon(output.cursor_icon));
}

#[cfg(target_family = "wasm")]
const fn cursor_icon_to_css_value(cursor: CursorIcon) -> &'static str {
    match cursor {
        CursorIcon::PointingHand => "pointer",
        CursorIcon::Text => "text",
        CursorIcon::Grab => "grab",
        CursorIcon::Grabbing => "grabbing",
        CursorIcon::ResizeHorizontal | CursorIcon::ResizeColumn => "ew-resize",
        CursorIcon::ResizeEast => "e-resize",
        CursorIcon::ResizeWest => "w-resize",
        CursorIcon::NotAllowed => "not-allowed",
        _ => "default",
    }
}

fn set_cursor_icon(cursor: CursorIcon) {
    #[cfg(target_family = "wasm")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };

        let _ = body
            .style()
            .set_property("cursor", cursor_icon_to_css_value(cursor));
    }
    #[cfg(not(target_family = "wasm"))]
    {
        // three-d's native window owns the cursor
        let _ = cursor;
    }
}
