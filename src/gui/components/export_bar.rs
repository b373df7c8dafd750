// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::consts::DEFAULT_EXPORT_FILE,
    export, file,
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- New analysis + preview toggle ---
    ui.horizontal(|ui| {
        if ui.button("New Analysis").clicked() {
            app.new_analysis();
            return;
        }
        let before = app.state.gui.show_preview;
        ui.checkbox(&mut app.state.gui.show_preview, "Show preview table");
        if app.state.gui.show_preview != before {
            logf!("UI: show_preview → {}", app.state.gui.show_preview);
        }
    });

    if app.shown.is_none() {
        return;
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(360.0))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("Browse…").clicked() {
            browse_out_path(app);
        }
    });

    // --- Actions (Copy / Download) ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            copy(ui.ctx(), app);
        }
        if ui.button("Download Results (CSV)").clicked() {
            download(app);
        }
    });
}

fn browse_out_path(app: &mut App) {
    app.sync_out_path();
    let current = app.state.options.export.out_path().to_path_buf();

    let mut dialog = rfd::FileDialog::new()
        .add_filter("CSV", &["csv"])
        .set_file_name(
            current
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| s!(DEFAULT_EXPORT_FILE)),
        );
    if let Some(dir) = current.parent().filter(|d| d.is_dir()) {
        dialog = dialog.set_directory(dir);
    }

    if let Some(path) = dialog.save_file() {
        app.out_path_text = path.to_string_lossy().into_owned();
        app.out_path_dirty = true;
        app.sync_out_path();
    }
}

fn copy(ctx: &egui::Context, app: &mut App) {
    let Some(shown) = &app.shown else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let txt = export::to_export_string(&shown.result);
    logf!("Copy: rows={}", shown.result.row_count());
    ctx.copy_text(txt);
    app.status("Copied to clipboard");
}

fn download(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.sync_out_path();

    let Some(shown) = &app.shown else {
        logd!("Export: Clicked, but there's nothing to export");
        return app.status("Nothing to export");
    };

    let path = app.state.options.export.out_path();
    logf!("Export: Begin rows={} → {}", shown.result.row_count(), path.display());

    let msg = match file::write_export(path, &shown.result) {
        Ok(p) => format!("Exported to {}", p.display()),
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    // mutate app only after the result borrows are gone
    app.status(msg);
}
