// src/gui/components/header.rs

use eframe::egui::{self, RichText};
use crate::gui::app::App;
use super::theme;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Phishing Detector").heading().strong().color(theme::ACCENT));
        ui.separator();
        ui.label("Backend:");
        let busy = app.is_busy();
        let resp = ui.add_enabled(
            !busy,
            egui::TextEdit::singleline(&mut app.backend_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(280.0),
        );
        if resp.lost_focus() {
            app.state.options.backend.set_base_url(&app.backend_text);
            app.backend_text = s!(app.state.options.backend.base_url());
            logf!("UI: Backend → {}", app.backend_text);
        }
    });
}
