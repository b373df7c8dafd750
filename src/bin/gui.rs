// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use phish_lens::{config::state::GuiState, gui, log};
use eframe::egui::{ IconData, ViewportBuilder };
use image::{ Rgba, RgbaImage };

const ICON_SIZE: u32 = 64;

/// Shield-ish badge: accent disc with a white check ring. Drawn at startup so
/// the binary ships without image assets.
fn app_icon() -> IconData {
    let c = (ICON_SIZE as f32 - 1.0) / 2.0;
    let img = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let d = ((x as f32 - c).powi(2) + (y as f32 - c).powi(2)).sqrt();
        if d > c {
            Rgba([0, 0, 0, 0])
        } else if (c * 0.55..c * 0.70).contains(&d) {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0x66, 0x7E, 0xEA, 255])
        }
    });
    let (w, h) = img.dimensions();
    IconData { rgba: img.into_raw(), width: w, height: h }
}

fn main() {
    let _log_guard = log::init(None);

    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([size.window_w as f32, size.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
