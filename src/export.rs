// src/export.rs
//
// Card → PNG export.
//
// The pixels come from an outside snapshot capability (`Snapshot`); this
// module owns the trigger state machine and the crop/scale/flatten/write
// step. States: Ready → Busy → Ready | Failed, and Failed → Busy on retry.

use std::{fmt, io::Cursor, path::PathBuf};

use image::{imageops::{self, FilterType}, ImageFormat, Rgba, RgbaImage};

use crate::{
    config::{
        consts::{EXPORT_FALLBACK_NAME, EXPORT_FILE_PREFIX},
        options::ExportOptions,
    },
    core::sanitize::sanitize_filename,
    file,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportError {
    /// A snapshot is already being produced
    InFlight,
    /// No snapshot capability in this build/session
    Unavailable,
    Capture(String),
    Render(String),
    Write(String),
}

impl ExportError {
    /// Text for the blocking alert; None when the user should see nothing.
    pub fn alert(&self) -> Option<&'static str> {
        match self {
            ExportError::InFlight => None,
            ExportError::Unavailable => {
                Some("Image export is unavailable in this build; use Print instead.")
            }
            _ => Some("Image download failed. Use the Print button as a reliable alternative."),
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::InFlight => f.write_str("export already in progress"),
            ExportError::Unavailable => f.write_str("snapshot capability unavailable"),
            ExportError::Capture(e) => write!(f, "capture failed: {e}"),
            ExportError::Render(e) => write!(f, "render failed: {e}"),
            ExportError::Write(e) => write!(f, "write failed: {e}"),
        }
    }
}

impl std::error::Error for ExportError {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportPhase {
    #[default]
    Ready,
    Busy,
    Failed,
}

impl ExportPhase {
    pub fn label(self) -> &'static str {
        match self {
            ExportPhase::Ready => "Download as image",
            ExportPhase::Busy => "Processing…",
            ExportPhase::Failed => "Download failed",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ExportPhase::Ready => "⬇",
            ExportPhase::Busy => "⏳",
            ExportPhase::Failed => "⚠",
        }
    }

    /// The trigger only refuses clicks while a snapshot is in flight.
    pub fn clickable(self) -> bool {
        !matches!(self, ExportPhase::Busy)
    }
}

/// Pixel rectangle in the captured frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl PixelRect {
    /// Region in physical pixels for a rect given in UI points.
    /// A rect starting above or left of the frame cannot be captured whole.
    pub fn from_points(x: f32, y: f32, w: f32, h: f32, ppp: f32) -> Result<Self, ExportError> {
        let (x, y) = ((x * ppp).round(), (y * ppp).round());
        if x < 0.0 || y < 0.0 {
            return Err(ExportError::Render(format!(
                "card starts outside the window at ({}, {})", x, y
            )));
        }
        let px = |v: f32| ((v * ppp).round().max(1.0)) as u32;
        Ok(Self { x: x as u32, y: y as u32, w: px(w), h: px(h) })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotOptions {
    pub scale: f32,
    pub background: [u8; 3],
    /// Never fetch remote resources while rasterizing
    pub allow_cross_origin: bool,
    pub target_w: u32,
    pub target_h: u32,
}

impl SnapshotOptions {
    /// Options for a region `w_points × h_points` in UI points.
    pub fn for_region(opts: &ExportOptions, w_points: f32, h_points: f32) -> Self {
        let px = |v: f32| ((v * opts.scale).round().max(1.0)) as u32;
        Self {
            scale: opts.scale,
            background: opts.background,
            allow_cross_origin: false,
            target_w: px(w_points),
            target_h: px(h_points),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotRequest {
    pub region: PixelRect,
    pub options: SnapshotOptions,
    /// Output file stem (no extension)
    pub stem: String,
}

/// "result_<name>" with a generic fallback for a blank name.
pub fn file_stem_for(name: &str) -> String {
    join!(EXPORT_FILE_PREFIX, &sanitize_filename(name, EXPORT_FALLBACK_NAME))
}

/// Outside capability that rasterizes the screen.
/// `request` starts a capture; `poll` yields it once ready.
pub trait Snapshot {
    fn available(&self) -> bool;
    fn request(&mut self, req: &SnapshotRequest) -> Result<(), ExportError>;
    fn poll(&mut self) -> Option<Result<RgbaImage, ExportError>>;
}

#[derive(Debug, Default)]
pub struct ImageExport {
    phase: ExportPhase,
    pending: Option<SnapshotRequest>,
}

impl ImageExport {
    pub fn phase(&self) -> ExportPhase { self.phase }
    pub fn is_busy(&self) -> bool { self.phase == ExportPhase::Busy }

    pub fn start(&mut self, snap: &mut dyn Snapshot, req: SnapshotRequest) -> Result<(), ExportError> {
        if self.is_busy() {
            logd!("Export: Clicked while busy, ignoring");
            return Err(ExportError::InFlight);
        }
        if !snap.available() {
            loge!("Export: Snapshot capability unavailable");
            return Err(ExportError::Unavailable);
        }
        if req.options.allow_cross_origin {
            loge!("Export: Refusing snapshot that may fetch remote resources");
            return Err(ExportError::Capture(s!("remote resource fetching is not supported")));
        }
        if let Err(e) = snap.request(&req) {
            loge!("Export: Snapshot request failed: {}", e);
            self.phase = ExportPhase::Failed;
            return Err(e);
        }
        logf!(
            "Export: Begin stem={} region={:?} target={}x{}",
            req.stem, req.region, req.options.target_w, req.options.target_h
        );
        self.phase = ExportPhase::Busy;
        self.pending = Some(req);
        Ok(())
    }

    /// Record an export that failed before a snapshot was requested.
    pub fn reject(&mut self, e: &ExportError) {
        loge!("Export: Rejected: {}", e);
        self.phase = ExportPhase::Failed;
    }

    /// Drive an in-flight export. Some(..) exactly once per started export.
    pub fn poll(
        &mut self,
        snap: &mut dyn Snapshot,
        opts: &ExportOptions,
    ) -> Option<Result<PathBuf, ExportError>> {
        self.pending.as_ref()?;
        let captured = snap.poll()?;
        let req = self.pending.take()?;

        let result = captured.and_then(|img| save_snapshot(&img, &req, opts));
        match &result {
            Ok(path) => {
                logf!("Export: OK → {}", path.display());
                self.phase = ExportPhase::Ready;
            }
            Err(e) => {
                loge!("Export: Error: {}", e);
                self.phase = ExportPhase::Failed;
            }
        }
        Some(result)
    }
}

/// Crop the captured frame to the card, scale to the target size and
/// flatten onto the background.
pub fn render(frame: &RgbaImage, req: &SnapshotRequest) -> Result<RgbaImage, ExportError> {
    let (fw, fh) = frame.dimensions();
    let r = req.region;
    if r.x >= fw || r.y >= fh {
        return Err(ExportError::Render(format!(
            "region {:?} outside captured frame {}x{}", r, fw, fh
        )));
    }
    if r.w == 0 || r.h == 0 {
        return Err(ExportError::Render(s!("empty capture region")));
    }
    if r.w > fw - r.x || r.h > fh - r.y {
        return Err(ExportError::Render(format!(
            "region {:?} runs past captured frame {}x{}", r, fw, fh
        )));
    }
    let (w, h) = (r.w, r.h);

    let cropped = imageops::crop_imm(frame, r.x, r.y, w, h).to_image();
    let o = &req.options;
    let mut scaled = if (o.target_w, o.target_h) == (w, h) {
        cropped
    } else {
        imageops::resize(&cropped, o.target_w.max(1), o.target_h.max(1), FilterType::Triangle)
    };

    let [br, bg, bb] = o.background;
    for px in scaled.pixels_mut() {
        let Rgba([r, g, b, a]) = *px;
        let a = a as u32;
        let mix = |c: u8, back: u8| ((c as u32 * a + back as u32 * (255 - a) + 127) / 255) as u8;
        *px = Rgba([mix(r, br), mix(g, bg), mix(b, bb), 255]);
    }
    Ok(scaled)
}

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(|e| ExportError::Render(e.to_string()))?;
    Ok(out.into_inner())
}

pub fn save_snapshot(
    frame: &RgbaImage,
    req: &SnapshotRequest,
    opts: &ExportOptions,
) -> Result<PathBuf, ExportError> {
    let img = render(frame, req)?;
    let bytes = encode_png(&img)?;
    file::write_unique(opts.out_dir(), &req.stem, "png", &bytes)
        .map_err(|e| ExportError::Write(e.to_string()))
}
