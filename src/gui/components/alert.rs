// src/gui/components/alert.rs
//
// Blocking error notification. While it is up the central panel is disabled;
// dismissing it leaves the app idle with no partial results.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(msg) = app.alert.clone() else { return };

    let mut dismissed = false;
    let resp = egui::Modal::new(egui::Id::new("alert_modal")).show(ctx, |ui| {
        ui.set_max_width(420.0);
        ui.heading("Error");
        ui.add_space(6.0);
        ui.label(msg);
        ui.add_space(10.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    });

    if dismissed || resp.should_close() {
        logd!("UI: Alert dismissed");
        app.alert = None;
    }
}
