// src/gui/components/search_form.rs
//
// Grade selector + ID field + search button, with inline field errors.

use std::time::Instant;

use eframe::egui::{self, Color32, RichText};

use crate::{
    config::consts::{GRADE_PLACEHOLDER, SHAKE_AMPLITUDE},
    gui::{actions, anim, app::App},
    validate::Field,
};

const ERROR_RED: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Student results");
    ui.add_space(6.0);

    let grades = app.grade_options();

    // --- Grade ---
    ui.label("Grade");
    egui::ComboBox::from_id_salt("grade_select")
        .width(260.0)
        .selected_text(app.state.gui.grade.clone())
        .show_ui(ui, |ui| {
            let gui = &mut app.state.gui;
            ui.selectable_value(&mut gui.grade, s!(GRADE_PLACEHOLDER), GRADE_PLACEHOLDER);
            for g in &grades {
                if ui.selectable_value(&mut gui.grade, g.clone(), g.as_str()).changed() {
                    logd!("UI: Grade → {}", g);
                }
            }
        });
    draw_errors(ui, app, Field::Grade);

    ui.add_space(6.0);

    // --- Seating number ---
    ui.label("Seating number");
    let id_resp = ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.id_text)
            .hint_text("e.g. 1024")
            .desired_width(260.0),
    );
    draw_errors(ui, app, Field::Id);

    ui.add_space(8.0);

    let enter = id_resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    let search_btn = egui::Button::new(RichText::new("🔍 Search").strong())
        .min_size(egui::vec2(120.0, 28.0));
    if ui.add(search_btn).clicked() || enter {
        actions::search(app);
    }

    if app.loading {
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new());
            ui.label("Loading data…");
        });
    }
}

fn draw_errors(ui: &mut egui::Ui, app: &App, field: Field) {
    let now = Instant::now();
    for e in app.errors_for(field) {
        let dx = anim::shake_offset(now - e.since);
        ui.horizontal(|ui| {
            ui.add_space(SHAKE_AMPLITUDE + dx);
            ui.label(RichText::new(e.error.to_string()).color(ERROR_RED).small());
        });
    }
}
