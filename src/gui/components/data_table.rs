// src/gui/components/data_table.rs
//
// Draws the preview table. Purely a view over `Shown::preview`; the full
// records stay untouched for export.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::{gui::app::App, results::ELLIPSIS};
use super::theme;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(shown) = &app.shown else { return };
    let preview = &shown.preview;

    if !app.state.gui.show_preview {
        return;
    }

    let cols = preview.headers.len();
    if cols == 0 {
        ui.label("Nothing to show");
        return;
    }

    // Prediction badge lives in the last column.
    let badge_col = cols - 1;

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("preview_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h);

            for h in &preview.headers {
                let col = if h == ELLIPSIS {
                    Column::exact(30.0)
                } else {
                    Column::auto().resizable(true).clip(true).at_least(60.0)
                };
                table = table.column(col);
            }

            table
                .header(24.0, |mut header| {
                    for h in &preview.headers {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.strong(h.as_str());
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, preview.rows.len(), |mut row| {
                        let Some(data) = preview.rows.get(row.index()) else { return };
                        for (ci, cell) in data.cells.iter().enumerate() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let mut rt = RichText::new(cell);
                                if ci == badge_col {
                                    if let Some(c) = theme::prediction_color(data.prediction) {
                                        rt = rt.color(c).strong();
                                    }
                                }
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                    ui.label(rt);
                                });
                            });
                        }
                    });
                });
        });

    if preview.more_features > 0 {
        ui.label(RichText::new(format!("... and {} more features", preview.more_features)).weak());
    }
    if preview.hidden_columns > 0 {
        ui.label(RichText::new(format!(
            "{} more feature column(s) hidden; the export contains all of them",
            preview.hidden_columns
        )).weak());
    }
}
