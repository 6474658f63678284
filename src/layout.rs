// Layout constants for the navigation container

use eframe::egui;

// --- Sizing ---
pub const TOP_BAR_HEIGHT: f32 = 28.0;
pub const BACK_BUTTON_WIDTH: f32 = 60.0;
pub const CRUMB_SPACING: f32 = 4.0;
pub const CONTENT_MARGIN: f32 = 8.0;

// --- Breadcrumbs ---
pub const CRUMB_SEPARATOR: &str = "›";
pub const ROOT_CRUMB: &str = "Home";

/// Render a label that truncates overflowing text with an ellipsis and uses the provided sense.
pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}
