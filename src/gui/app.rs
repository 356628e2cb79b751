// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    thread,
    time::{Duration, Instant},
};

use eframe::egui;

use crate::{
    card::{ReportCard, Total},
    config::state::AppState,
    count_up::{CountUp, TickClock},
    dataset::{self, DatasetState},
    export::ImageExport,
    validate::{Field, FieldError},
};

use super::{anim, snapshot::ViewportSnapshot};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Result Card",
        options,
        Box::new(move |cc| {
            let can_snapshot = cc.gl.is_some();
            let snapshot = ViewportSnapshot::new(cc.egui_ctx.clone(), can_snapshot);
            Ok(Box::new(App::new(state, snapshot, &cc.egui_ctx)))
        }),
    )?;
    Ok(())
}

/// Inline message under a form field; shakes for a moment after it appears.
#[derive(Clone, Debug)]
pub struct InlineError {
    pub error: FieldError,
    pub since: Instant,
}

/// The card currently on screen plus its animation clocks.
pub struct ShownCard {
    pub card: ReportCard,
    pub count_up: Option<CountUp>,
    pub clock: TickClock,
    pub shown_at: Instant,
    pub last_tick: Instant,
    pub scroll_pending: bool,
}

impl ShownCard {
    pub fn new(card: ReportCard, now: Instant) -> Self {
        let count_up = match card.total {
            Total::Score(t) => Some(CountUp::new(t)),
            _ => None,
        };
        Self {
            card,
            count_up,
            clock: TickClock::default(),
            shown_at: now,
            last_tick: now,
            scroll_pending: true,
        }
    }

    pub fn total_text(&self) -> String {
        match &self.count_up {
            Some(cu) => cu.text(),
            None => self.card.total.final_text(),
        }
    }

    /// Advance the count-up by the ticks owed since last frame.
    /// Returns true while more frames are needed.
    fn tick(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        let rows_moving = !anim::rows_settled(now - self.shown_at, self.card.rows.len());
        match self.count_up.as_mut() {
            Some(cu) if !cu.is_done() => {
                let n = self.clock.due(elapsed);
                cu.advance(n);
                !cu.is_done() || rows_moving
            }
            _ => rows_moving,
        }
    }
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // dataset: filled once by the loader thread, then moved here
    pub dataset: DatasetState,
    pub loading: bool,
    loaded_slot: Arc<Mutex<Option<DatasetState>>>,

    // search form feedback
    pub errors: Vec<InlineError>,

    // result panel
    pub card: Option<ShownCard>,
    pub card_rect: Option<egui::Rect>,
    pub card_view: Option<egui::Rect>,

    // export
    pub export: ImageExport,
    /// Frames left to wait for the card to come into view before capture
    pub export_wait: Option<u8>,
    pub snapshot: ViewportSnapshot,
    pub alert: Option<String>,

    // status line (loader thread writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState, snapshot: ViewportSnapshot, ctx: &egui::Context) -> Self {
        let status = Arc::new(Mutex::new(s!("Loading data…")));
        let loaded_slot = Arc::new(Mutex::new(None));

        spawn_load(
            state.options.data_source.clone(),
            loaded_slot.clone(),
            status.clone(),
            ctx.clone(),
        );

        logf!("Init: data={} grades(fixed)={}", state.options.data_source, state.options.grades.len());

        Self {
            state,
            dataset: DatasetState::NotLoaded,
            loading: true,
            loaded_slot,
            errors: Vec::new(),
            card: None,
            card_rect: None,
            card_view: None,
            export: ImageExport::default(),
            export_wait: None,
            snapshot,
            alert: None,
            status,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn show_error(&mut self, error: FieldError) {
        self.errors.push(InlineError { error, since: Instant::now() });
    }

    pub fn errors_for(&self, field: Field) -> impl Iterator<Item = &InlineError> {
        self.errors.iter().filter(move |e| e.error.field() == field)
    }

    pub fn show_card(&mut self, card: ReportCard) {
        self.card = Some(ShownCard::new(card, Instant::now()));
    }

    pub fn hide_card(&mut self) {
        self.card = None;
        self.card_rect = None;
        self.card_view = None;
        self.export_wait = None;
    }

    /// Grade selector entries (placeholder not included).
    pub fn grade_options(&self) -> Vec<String> {
        if !self.state.options.grades.is_empty() {
            return self.state.options.grades.clone();
        }
        self.dataset.dataset()
            .map(|ds| ds.grade_keys().map(String::from).collect())
            .unwrap_or_default()
    }

    /// Move the loader's result in, once.
    fn take_loaded(&mut self) {
        if !self.loading { return; }
        let loaded = self.loaded_slot.lock().unwrap().take();
        if let Some(state) = loaded {
            self.dataset = state;
            self.loading = false;
        }
    }

    fn drive_export(&mut self) {
        if let Some(result) = self.export.poll(&mut self.snapshot, &self.state.options.export) {
            match result {
                Ok(path) => self.status(format!("Saved {}", path.display())),
                Err(e) => {
                    self.status(format!("Export error: {e}"));
                    if let Some(msg) = e.alert() {
                        self.alert = Some(s!(msg));
                    }
                }
            }
        }
    }

    fn drive_animations(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let mut again = false;
        if let Some(shown) = self.card.as_mut() {
            again |= shown.tick(now);
        }
        again |= self.errors.iter().any(|e| anim::shake_active(now - e.since));
        if again {
            ctx.request_repaint_after(Duration::from_millis(crate::config::consts::COUNT_UP_TICK_MS));
        }
    }
}

fn spawn_load(
    source: String,
    slot: Arc<Mutex<Option<DatasetState>>>,
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
) {
    thread::spawn(move || {
        let state = dataset::load_state(&source);
        let msg = match state.dataset() {
            Some(ds) => format!("Ready: {} grade(s), {} record(s)", ds.grade_count(), ds.record_count()),
            None => format!("Could not load data from {}", source),
        };
        *slot.lock().unwrap() = Some(state);
        *status.lock().unwrap() = msg;
        ctx.request_repaint();
    });
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.take_loaded();
        self.drive_export();
        self.drive_animations(ctx);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let status = self.status.lock().unwrap().clone();
            ui.label(format!("Status: {status}"));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    super::components::search_form::draw(ui, self);

                    ui.separator();

                    if self.card.is_some() {
                        super::components::result_card::draw(ui, self);
                        ui.add_space(8.0);
                        super::components::action_buttons::draw(ui, self);
                    }
                });
        });

        super::actions::resume_download(self, ctx);
        super::components::alert::draw(ctx, self);
    }
}
