use eframe::egui::{Color32, Context, RichText, Ui, Visuals};

use crate::models::Theme;

/// Price-change colors shared by cards and the status bar
pub const GAIN_COLOR: Color32 = Color32::from_rgb(100, 200, 100);
pub const LOSS_COLOR: Color32 = Color32::from_rgb(255, 100, 100);

/// Applies the user-selected theme to the whole application.
pub fn apply_theme(ctx: &Context, theme: Theme) {
    let mut visuals = match theme {
        Theme::Dark => Visuals::dark(),
        Theme::Light => Visuals::light(),
    };

    // Slightly stronger widget text than the egui defaults
    visuals.widgets.hovered.fg_stroke.color = match theme {
        Theme::Dark => Color32::WHITE,
        Theme::Light => Color32::BLACK,
    };

    ctx.set_visuals(visuals);
}

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (good for labels like "Market Cap").
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a "Label: Value" pair with consistent spacing and styling.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Renders an error message (red).
    fn label_error(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(LOSS_COLOR));
    }
}

/// Picks the gain/loss color for a signed 24h change.
pub fn change_color(pct: f64) -> Color32 {
    if pct >= 0.0 { GAIN_COLOR } else { LOSS_COLOR }
}
