// src/config/file.rs
//
// Optional `key=value` config file layered over AppOptions::default().
// Unknown keys and unparsable values are logged and skipped.

use std::{fs, path::Path};

use super::options::AppOptions;

pub fn load(path: &Path) -> AppOptions {
    if !path.exists() {
        logd!("Config: {} not found, using defaults", path.display());
        return AppOptions::default();
    }
    match fs::read_to_string(path) {
        Ok(text) => {
            logf!("Config: Loaded {}", path.display());
            parse(&text)
        }
        Err(e) => {
            loge!("Config: Could not read {}: {}", path.display(), e);
            AppOptions::default()
        }
    }
}

pub fn parse(text: &str) -> AppOptions {
    let mut opts = AppOptions::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some(eq) = line.find('=') else {
            logd!("Config: Skipping line without '=': {}", line);
            continue;
        };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();
        match key {
            "data" => {
                if !val.is_empty() { opts.data_source = s!(val); }
            }
            "grades" => {
                opts.grades = val.split(',')
                    .map(str::trim)
                    .filter(|g| !g.is_empty())
                    .map(String::from)
                    .collect();
            }
            "out_dir" => opts.export.set_out_dir(val),
            "scale" => match val.parse::<f32>() {
                Ok(v) if opts.export.set_scale(v) => {}
                _ => loge!("Config: Invalid scale '{}'", val),
            },
            "background" => match parse_hex_rgb(val) {
                Some(rgb) => opts.export.background = rgb,
                None => loge!("Config: Invalid background '{}'", val),
            },
            other => logd!("Config: Unknown key '{}'", other),
        }
    }
    opts
}

/// `#rrggbb` or `rrggbb`
fn parse_hex_rgb(s: &str) -> Option<[u8; 3]> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() { return None; }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}
