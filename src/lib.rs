// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod adapter;
pub mod data;
pub mod export;
pub mod file;
pub mod gui;
pub mod panel;
pub mod progress;
pub mod results;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::AnalysisError;
