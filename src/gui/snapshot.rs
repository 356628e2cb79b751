// src/gui/snapshot.rs
//
// Snapshot capability backed by the eframe viewport screenshot:
// request in one frame, the image arrives as an input event later.

use eframe::egui::{self, Event, UserData, ViewportCommand};
use image::RgbaImage;

use crate::export::{ExportError, Snapshot, SnapshotRequest};

pub struct ViewportSnapshot {
    ctx: egui::Context,
    available: bool,
    waiting: bool,
}

impl ViewportSnapshot {
    pub fn new(ctx: egui::Context, available: bool) -> Self {
        Self { ctx, available, waiting: false }
    }
}

fn to_rgba(img: &egui::ColorImage) -> Result<RgbaImage, ExportError> {
    let [w, h] = img.size;
    let raw: Vec<u8> = img.pixels.iter()
        .flat_map(|c| c.to_srgba_unmultiplied())
        .collect();
    RgbaImage::from_raw(w as u32, h as u32, raw)
        .ok_or_else(|| ExportError::Capture(format!("bad screenshot buffer {}x{}", w, h)))
}

impl Snapshot for ViewportSnapshot {
    fn available(&self) -> bool { self.available }

    fn request(&mut self, _req: &SnapshotRequest) -> Result<(), ExportError> {
        // The viewport captures whole frames; the request's region is cropped afterwards.
        self.ctx.send_viewport_cmd(ViewportCommand::Screenshot(UserData::default()));
        self.ctx.request_repaint();
        self.waiting = true;
        Ok(())
    }

    fn poll(&mut self) -> Option<Result<RgbaImage, ExportError>> {
        if !self.waiting { return None; }
        let image = self.ctx.input(|i| {
            i.raw.events.iter().find_map(|e| match e {
                Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        match image {
            Some(img) => {
                self.waiting = false;
                Some(to_rgba(&img))
            }
            None => {
                self.ctx.request_repaint();
                None
            }
        }
    }
}
