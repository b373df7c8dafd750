// src/gui/components/input_panel.rs
//
// URL / CSV tabs and the Analyze button. The button is disabled while a
// request is out; validation errors surface through the alert.

use eframe::egui::{self, RichText, widgets::Spinner};
use crate::{gui::app::App, panel::InputMode};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(8.0);
    ui.heading("Analyze Website for Phishing");
    ui.label("Enter a URL or upload a CSV file to detect phishing websites");
    ui.add_space(8.0);

    let busy = app.is_busy();

    ui.add_enabled_ui(!busy, |ui| ui.horizontal(|ui| {
        for mode in [InputMode::Url, InputMode::Csv] {
            let selected = app.panel.mode == mode;
            if ui.selectable_label(selected, mode.title()).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", app.panel.mode, mode);
                app.panel.mode = mode;
            }
        }
    }));

    ui.separator();

    let mut submit = false;

    match app.panel.mode {
        InputMode::Url => {
            ui.horizontal(|ui| {
                let resp = ui.add_enabled(
                    !busy,
                    egui::TextEdit::singleline(&mut app.panel.url_input)
                        .hint_text("https://example.com")
                        .desired_width(420.0),
                );
                if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                submit |= analyze_button(ui, busy, "Analyze URL");
            });
            ui.label(RichText::new("Enter any website URL to check if it's safe or phishing").weak());
        }
        InputMode::Csv => {
            ui.horizontal(|ui| {
                if ui.add_enabled(!busy, egui::Button::new("Choose CSV File")).clicked() {
                    pick_csv(app);
                }
                let name = app
                    .panel
                    .csv_path
                    .as_ref()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| s!("No file chosen"));
                ui.label(RichText::new(name).monospace());
            });
            ui.add_space(4.0);
            submit |= analyze_button(ui, busy, "Analyze File");
            ui.label(RichText::new("CSV file must contain 30 network security features").weak());
        }
    }

    if submit && !busy {
        app.submit(ui.ctx());
    }
}

fn analyze_button(ui: &mut egui::Ui, busy: bool, label: &str) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        let text = if busy { "Analyzing..." } else { label };
        clicked = ui.add_enabled(!busy, egui::Button::new(RichText::new(text).strong())).clicked();
        if busy {
            ui.add(Spinner::new().size(16.0));
        }
    });
    clicked
}

fn pick_csv(app: &mut App) {
    let mut dialog = rfd::FileDialog::new().add_filter("CSV", &["csv"]);
    if let Some(dir) = &app.state.gui.last_browse_dir {
        dialog = dialog.set_directory(dir);
    }
    if let Some(path) = dialog.pick_file() {
        logf!("UI: CSV selected → {}", path.display());
        app.state.gui.last_browse_dir = path.parent().map(|p| p.to_path_buf());
        app.panel.csv_path = Some(path);
    }
}
