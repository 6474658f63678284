use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Parses the `theme.mode` config value. Anything but "light" is dark.
    pub fn from_mode(mode: &str) -> Self {
        if mode.trim().eq_ignore_ascii_case("light") {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Self::Light => egui::Visuals::light(),
            Self::Dark => egui::Visuals::dark(),
        }
    }

    pub fn apply(self, ctx: &egui::Context) {
        ctx.set_visuals(self.visuals());
    }

    /// Colour for crumbs that are not the visible screen.
    pub fn dim_text(self) -> egui::Color32 {
        match self {
            Self::Light => egui::Color32::DARK_GRAY,
            Self::Dark => egui::Color32::GRAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mode() {
        assert_eq!(Theme::from_mode("light"), Theme::Light);
        assert_eq!(Theme::from_mode(" Light "), Theme::Light);
        assert_eq!(Theme::from_mode("dark"), Theme::Dark);
        assert_eq!(Theme::from_mode("solarized"), Theme::Dark);
    }

    #[test]
    fn test_dim_text_differs_per_theme() {
        assert_ne!(Theme::Light.dim_text(), Theme::Dark.dim_text());
    }
}
