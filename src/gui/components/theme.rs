// src/gui/components/theme.rs
use eframe::egui::Color32;
use crate::data::Prediction;

pub const PHISHING: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);
pub const LEGITIMATE: Color32 = Color32::from_rgb(0x3C, 0xB3, 0x71);
pub const ACCENT: Color32 = Color32::from_rgb(0x66, 0x7E, 0xEA);

pub fn prediction_color(p: Option<Prediction>) -> Option<Color32> {
    match p {
        Some(Prediction::Phishing) => Some(PHISHING),
        Some(Prediction::Legitimate) => Some(LEGITIMATE),
        None => None,
    }
}
