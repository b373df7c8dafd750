// src/gui/components/mod.rs
pub mod alert;
pub mod data_table;
pub mod export_bar;
pub mod header;
pub mod input_panel;
pub mod stats;
pub mod theme;
