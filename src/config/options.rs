// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    /// Local path or `http://` URL of the dataset document
    pub data_source: String,
    /// Fixed grade selector entries; empty → use the dataset's grade keys
    pub grades: Vec<String>,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            data_source: s!(DEFAULT_DATA_SOURCE),
            grades: Vec::new(),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExportOptions {
    out_dir: PathBuf,
    pub scale: f32,
    pub background: [u8; 3],
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            scale: EXPORT_SCALE,
            background: EXPORT_BACKGROUND,
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse user text into the output directory. Blank keeps the current one.
    pub fn set_out_dir(&mut self, text: &str) {
        let s = text.trim();
        if !s.is_empty() {
            self.out_dir = PathBuf::from(crate::file::normalize_separators(s));
        }
    }

    /// Scale must be a finite positive number; anything else is ignored.
    pub fn set_scale(&mut self, scale: f32) -> bool {
        if scale.is_finite() && scale > 0.0 {
            self.scale = scale;
            true
        } else {
            false
        }
    }
}
