// src/gui/components/stats.rs
//
// Stat cards above the table: totals for a batch, verdict + confidence for a URL.

use eframe::egui::{self, Color32, RichText};
use crate::{data::AnalysisResult, gui::app::App};
use super::theme;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(shown) = &app.shown else { return };
    let s = shown.summary;

    ui.add_space(6.0);
    ui.heading("Analysis Results");
    ui.add_space(4.0);

    ui.horizontal(|ui| match &shown.result {
        AnalysisResult::Single(u) => {
            let p = u.prediction();
            card(ui, "URL Analyzed", "1", None, None);
            card(ui, "Prediction", p.label(), theme::prediction_color(Some(p)), None);
            card(ui, "Confidence", &u.confidence.to_string(), None, None);
        }
        AnalysisResult::Batch(_) => {
            card(ui, "Total Analyzed", &s.total.to_string(), None, None);
            card(
                ui,
                "Phishing Detected",
                &s.phishing.to_string(),
                Some(theme::PHISHING),
                Some(format!("{:.1}%", s.phishing_pct())),
            );
            card(
                ui,
                "Legitimate",
                &s.legitimate.to_string(),
                Some(theme::LEGITIMATE),
                Some(format!("{:.1}%", s.legitimate_pct())),
            );
        }
    });

    if let AnalysisResult::Single(u) = &shown.result {
        ui.horizontal(|ui| {
            ui.strong("URL:");
            ui.hyperlink(&u.url);
        });
    }
}

fn card(ui: &mut egui::Ui, label: &str, value: &str, color: Option<Color32>, sub: Option<String>) {
    ui.group(|ui| {
        ui.set_min_width(150.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(label).weak());
            let mut v = RichText::new(value).size(24.0).strong();
            if let Some(c) = color { v = v.color(c); }
            ui.label(v);
            if let Some(sub) = sub {
                ui.label(RichText::new(sub).weak());
            }
        });
    });
}
