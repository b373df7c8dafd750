// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{data::AnalysisResult, error::AnalysisError, export::to_export_string};

/// Write the full CSV export of `result` to `path`, creating parent
/// directories as needed. Returns the path written to.
pub fn write_export(path: &Path, result: &AnalysisResult) -> Result<PathBuf, AnalysisError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(path, to_export_string(result))?;
    logf!("Export: wrote {} row(s) → {}", result.row_count(), path.display());
    Ok(path.to_path_buf())
}

/// User text → output file. Directory hints (trailing separator, or an existing
/// directory) get `default_filename` appended.
pub fn resolve_out_path(user_o: &str, default_filename: &str) -> PathBuf {
    if user_o.is_empty() { return PathBuf::from(default_filename); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(user_o) || p.is_dir() {
        p.join(default_filename)
    } else {
        p
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), AnalysisError> {
    if dir.exists() && !dir.is_dir() {
        return Err(AnalysisError::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(s: &str) -> bool {
    s.ends_with('/') || s.ends_with('\\')
}
