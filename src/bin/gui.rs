// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::{IconData, ViewportBuilder};
use result_card::{
    config::{self, consts::CONFIG_FILE, state::AppState},
    gui,
};

/// Blue rounded badge with a white check, drawn at startup.
fn app_icon() -> IconData {
    const N: u32 = 64;
    let img = image::RgbaImage::from_fn(N, N, |x, y| {
        let (fx, fy) = (x as f32 - 31.5, y as f32 - 31.5);
        if fx * fx + fy * fy > 31.0 * 31.0 {
            return image::Rgba([0, 0, 0, 0]);
        }
        // check mark: two strokes
        let on_short = (fx + 10.0 - (fy - 4.0)).abs() < 4.0 && (-14.0..=-2.0).contains(&fx);
        let on_long = (fx - 2.0 + (fy - 4.0)).abs() < 4.0 && (-2.0..=16.0).contains(&fx);
        if on_short || on_long {
            image::Rgba([255, 255, 255, 255])
        } else {
            image::Rgba([0x25, 0x63, 0xEB, 255])
        }
    });
    IconData { rgba: img.into_raw(), width: N, height: N }
}

fn main() {
    let options = config::file::load(Path::new(CONFIG_FILE));
    let state = AppState::new(options);

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
