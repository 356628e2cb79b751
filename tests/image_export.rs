// tests/image_export.rs
//
// Export state machine with a fake snapshot capability, plus the PNG step.

use std::fs;
use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use result_card::config::options::ExportOptions;
use result_card::export::{
    self, ExportError, ExportPhase, ImageExport, PixelRect, Snapshot, SnapshotOptions,
    SnapshotRequest,
};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("result_card_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn opts_in(dir: &PathBuf) -> ExportOptions {
    let mut opts = ExportOptions::default();
    opts.set_out_dir(dir.to_str().unwrap());
    opts
}

/// Captures a solid 40x30 frame on the poll after `request`.
struct FakeSnapshot {
    available: bool,
    fail_capture: bool,
    requested: bool,
}

impl FakeSnapshot {
    fn new() -> Self { Self { available: true, fail_capture: false, requested: false } }
}

impl Snapshot for FakeSnapshot {
    fn available(&self) -> bool { self.available }
    fn request(&mut self, _req: &SnapshotRequest) -> Result<(), ExportError> {
        self.requested = true;
        Ok(())
    }
    fn poll(&mut self) -> Option<Result<RgbaImage, ExportError>> {
        if !self.requested { return None; }
        self.requested = false;
        if self.fail_capture {
            Some(Err(ExportError::Capture("tainted".into())))
        } else {
            Some(Ok(RgbaImage::from_pixel(40, 30, Rgba([10, 20, 30, 255]))))
        }
    }
}

fn request(opts: &ExportOptions, stem: &str) -> SnapshotRequest {
    SnapshotRequest {
        region: PixelRect { x: 5, y: 5, w: 20, h: 10 },
        options: SnapshotOptions::for_region(opts, 20.0, 10.0),
        stem: stem.into(),
    }
}

#[test]
fn unavailable_capability_aborts_without_state_change() {
    let opts = ExportOptions::default();
    let mut snap = FakeSnapshot::new();
    snap.available = false;
    let mut ex = ImageExport::default();

    let err = ex.start(&mut snap, request(&opts, "result_x")).unwrap_err();
    assert_eq!(err, ExportError::Unavailable);
    assert!(err.alert().is_some());
    assert_eq!(ex.phase(), ExportPhase::Ready);
    assert!(ex.poll(&mut snap, &opts).is_none());
}

#[test]
fn success_writes_png_and_returns_to_ready() {
    let dir = tmp_dir("ok");
    let opts = opts_in(&dir);
    let mut snap = FakeSnapshot::new();
    let mut ex = ImageExport::default();

    ex.start(&mut snap, request(&opts, &export::file_stem_for("Ali"))).unwrap();
    assert_eq!(ex.phase(), ExportPhase::Busy);
    assert!(!ex.phase().clickable());

    // re-entrant click while busy is refused quietly
    let again = ex.start(&mut snap, request(&opts, "other")).unwrap_err();
    assert_eq!(again, ExportError::InFlight);
    assert!(again.alert().is_none());

    let path = ex.poll(&mut snap, &opts).expect("finished").unwrap();
    assert_eq!(ex.phase(), ExportPhase::Ready);
    assert_eq!(path.file_name().unwrap(), "result_Ali.png");

    let img = image::open(&path).unwrap().to_rgba8();
    // scale 2 → 40x20 target
    assert_eq!(img.dimensions(), (40, 20));

    // nothing left to poll
    assert!(ex.poll(&mut snap, &opts).is_none());
}

#[test]
fn repeated_exports_do_not_overwrite() {
    let dir = tmp_dir("collide");
    let opts = opts_in(&dir);
    let mut snap = FakeSnapshot::new();
    let mut ex = ImageExport::default();

    let mut names = Vec::new();
    for _ in 0..3 {
        ex.start(&mut snap, request(&opts, "result_student")).unwrap();
        let p = ex.poll(&mut snap, &opts).unwrap().unwrap();
        names.push(p.file_name().unwrap().to_string_lossy().into_owned());
    }
    assert_eq!(names, vec!["result_student.png", "result_student (2).png", "result_student (3).png"]);
}

#[test]
fn capture_failure_marks_failed_and_allows_retry() {
    let dir = tmp_dir("fail");
    let opts = opts_in(&dir);
    let mut snap = FakeSnapshot::new();
    snap.fail_capture = true;
    let mut ex = ImageExport::default();

    ex.start(&mut snap, request(&opts, "result_x")).unwrap();
    let err = ex.poll(&mut snap, &opts).unwrap().unwrap_err();
    assert!(matches!(err, ExportError::Capture(_)));
    assert!(err.alert().unwrap().contains("Print"));
    assert_eq!(ex.phase(), ExportPhase::Failed);
    assert!(ex.phase().clickable());

    snap.fail_capture = false;
    ex.start(&mut snap, request(&opts, "result_x")).unwrap();
    assert!(ex.poll(&mut snap, &opts).unwrap().is_ok());
    assert_eq!(ex.phase(), ExportPhase::Ready);
}

#[test]
fn region_outside_frame_fails_render() {
    let dir = tmp_dir("outside");
    let opts = opts_in(&dir);
    let frame = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
    let mut req = request(&opts, "result_x");
    req.region = PixelRect { x: 50, y: 0, w: 5, h: 5 };
    assert!(matches!(export::render(&frame, &req), Err(ExportError::Render(_))));
}

#[test]
fn transparent_pixels_land_on_background() {
    let mut opts = ExportOptions::default();
    opts.scale = 1.0;
    let frame = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
    let req = SnapshotRequest {
        region: PixelRect { x: 0, y: 0, w: 4, h: 4 },
        options: SnapshotOptions::for_region(&opts, 4.0, 4.0),
        stem: "x".into(),
    };
    let out = export::render(&frame, &req).unwrap();
    assert_eq!(out.dimensions(), (4, 4));
    assert!(out.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
}

#[test]
fn region_running_past_frame_is_not_stretched() {
    let mut opts = ExportOptions::default();
    opts.scale = 1.0;
    let frame = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
    let req = SnapshotRequest {
        region: PixelRect { x: 0, y: 5, w: 10, h: 10 },
        options: SnapshotOptions::for_region(&opts, 10.0, 10.0),
        stem: "x".into(),
    };
    assert!(matches!(export::render(&frame, &req), Err(ExportError::Render(_))));

    // the same region fully inside a taller frame is fine
    let tall = RgbaImage::from_pixel(10, 20, Rgba([0, 0, 0, 255]));
    assert_eq!(export::render(&tall, &req).unwrap().dimensions(), (10, 10));
}

#[test]
fn clipped_capture_fails_the_export() {
    let dir = tmp_dir("clipped");
    let opts = opts_in(&dir);
    let mut snap = FakeSnapshot::new();
    let mut ex = ImageExport::default();

    // fake frame is 40x30; this card runs 10px past the bottom
    let mut req = request(&opts, "result_x");
    req.region = PixelRect { x: 0, y: 20, w: 20, h: 20 };
    ex.start(&mut snap, req).unwrap();
    let err = ex.poll(&mut snap, &opts).unwrap().unwrap_err();
    assert!(matches!(err, ExportError::Render(_)));
    assert_eq!(ex.phase(), ExportPhase::Failed);
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
}

#[test]
fn card_above_the_window_is_rejected() {
    let err = PixelRect::from_points(0.0, -40.0, 200.0, 300.0, 1.0).unwrap_err();
    assert!(err.alert().is_some());

    let mut ex = ImageExport::default();
    ex.reject(&err);
    assert_eq!(ex.phase(), ExportPhase::Failed);
    assert!(ex.phase().clickable());
}

#[test]
fn remote_fetching_snapshot_is_refused() {
    let opts = ExportOptions::default();
    let mut snap = FakeSnapshot::new();
    let mut ex = ImageExport::default();

    let mut req = request(&opts, "result_x");
    req.options.allow_cross_origin = true;
    let err = ex.start(&mut snap, req).unwrap_err();
    assert!(matches!(err, ExportError::Capture(_)));
    assert!(!snap.requested);
    assert_eq!(ex.phase(), ExportPhase::Ready);
}
