// src/gui/components/action_buttons.rs

use eframe::egui::{self, widgets::Spinner, RichText};

use crate::{export::ExportPhase, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let phase = app.export.phase();

    ui.horizontal(|ui| {
        // Download as image
        let text = RichText::new(format!("{} {}", phase.glyph(), phase.label()));
        let text = if phase == ExportPhase::Failed {
            text.color(egui::Color32::from_rgb(0xDC, 0x61, 0x49))
        } else {
            text
        };
        let resp = ui.add_enabled(phase.clickable(), egui::Button::new(text));
        if phase == ExportPhase::Busy {
            ui.add(Spinner::new());
        }
        if resp.clicked() {
            actions::download(app, ui.ctx());
        }

        // Print
        if ui.button("🖨 Print").clicked() {
            actions::print(app);
        }
    });
}
