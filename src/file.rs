// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// First free name in `dir`:
/// "<stem>.ext", then "<stem> (N).ext" with N starting at 2.
pub fn resolve_unique_path(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    let first = dir.join(format!("{stem}.{ext}"));
    if !first.exists() { return first; }

    let mut n = 2usize;
    loop {
        let candidate = dir.join(format!("{stem} ({n}).{ext}"));
        if !candidate.exists() { return candidate; }
        n += 1;
    }
}

/// Write bytes to a fresh file in `dir` (created if missing). Returns the path used.
pub fn write_unique(
    dir: &Path,
    stem: &str,
    ext: &str,
    bytes: &[u8],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    ensure_directory(dir)?;
    let path = resolve_unique_path(dir, stem, ext);
    fs::write(&path, bytes)?;
    Ok(path)
}
