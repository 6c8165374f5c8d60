use std::fmt::Display;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use three_d::egui::Visuals;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter)]
pub(crate) enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The next theme in declaration order, wrapping around.
    pub(crate) fn toggled(self) -> Self {
        Self::iter()
            .cycle()
            .skip_while(|theme| *theme != self)
            .nth(1)
            .unwrap_or(self)
    }

    /// Background color of the 3D view, as linear RGBA for `ClearState`.
    pub(crate) fn clear_color(self) -> [f32; 4] {
        match self {
            Self::Dark => [0.0, 0.0, 0.0, 1.0],
            Self::Light => [245.0 / 255.0, 245.0 / 255.0, 250.0 / 255.0, 1.0],
        }
    }

    /// Icon of the toggle button, showing the current theme.
    pub(crate) const fn icon(self) -> &'static str {
        match self {
            Self::Dark => "🌙",
            Self::Light => "☀",
        }
    }

    pub(crate) fn visuals(self) -> Visuals {
        match self {
            Self::Dark => Visuals::dark(),
            Self::Light => Visuals::light(),
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dark => write!(f, "Night"),
            Self::Light => write!(f, "Day"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        for theme in Theme::iter() {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn toggle_flips_between_night_and_day() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn themes_are_distinct() {
        let dark = Theme::Dark;
        let light = Theme::Light;
        assert_ne!(dark.clear_color(), light.clear_color());
        assert_ne!(dark.icon(), light.icon());
        assert!(dark.visuals().dark_mode);
        assert!(!light.visuals().dark_mode);
    }

    #[test]
    fn dark_background_is_black() {
        assert_eq!(Theme::default().clear_color(), [0.0, 0.0, 0.0, 1.0]);
    }
}
