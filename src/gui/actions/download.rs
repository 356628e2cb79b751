// src/gui/actions/download.rs
//
// The screenshot only holds what is on screen, so a card that is partly
// scrolled away is brought into view first and captured a few frames later.

use eframe::egui;

use crate::{
    config::consts::EXPORT_SCROLL_WAIT_FRAMES,
    export::{file_stem_for, PixelRect, SnapshotOptions, SnapshotRequest},
    gui::app::App,
};

fn card_in_view(app: &App) -> bool {
    match (app.card_rect, app.card_view) {
        (Some(rect), Some(view)) => view.contains_rect(rect),
        _ => false,
    }
}

pub fn download(app: &mut App, ctx: &egui::Context) {
    if app.card.is_none() || app.card_rect.is_none() {
        logd!("Export: Clicked, but there's no card on screen");
        app.status("Nothing to export");
        return;
    }
    if app.export_wait.is_some() {
        logd!("Export: Already waiting for the card to scroll into view");
        return;
    }
    if card_in_view(app) {
        begin(app, ctx);
        return;
    }

    logd!("Export: Card partly off screen, scrolling before capture");
    if let Some(shown) = app.card.as_mut() {
        shown.scroll_pending = true;
    }
    app.export_wait = Some(EXPORT_SCROLL_WAIT_FRAMES);
    app.status("Processing…");
    ctx.request_repaint();
}

/// Called once per frame after the card is drawn.
pub fn resume_download(app: &mut App, ctx: &egui::Context) {
    let Some(left) = app.export_wait else { return };
    if card_in_view(app) || left == 0 {
        app.export_wait = None;
        begin(app, ctx);
    } else {
        app.export_wait = Some(left - 1);
        ctx.request_repaint();
    }
}

fn begin(app: &mut App, ctx: &egui::Context) {
    let (Some(shown), Some(rect)) = (app.card.as_ref(), app.card_rect) else { return };

    let region = PixelRect::from_points(
        rect.min.x,
        rect.min.y,
        rect.width(),
        rect.height(),
        ctx.pixels_per_point(),
    );
    let result = region.and_then(|region| {
        let req = SnapshotRequest {
            region,
            options: SnapshotOptions::for_region(&app.state.options.export, rect.width(), rect.height()),
            stem: file_stem_for(&shown.card.name),
        };
        app.export.start(&mut app.snapshot, req)
    });

    match result {
        Ok(()) => app.status("Processing…"),
        Err(e) => {
            if matches!(e, crate::export::ExportError::Render(_)) {
                app.export.reject(&e);
            }
            app.status(format!("Export error: {e}"));
            if let Some(msg) = e.alert() {
                app.alert = Some(s!(msg));
            }
        }
    }
}
