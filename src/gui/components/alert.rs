// src/gui/components/alert.rs
//
// Blocking alert: a modal over the whole window until dismissed.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(msg) = app.alert.clone() else { return };

    let mut dismissed = false;
    let modal = egui::Modal::new(egui::Id::new("alert_modal")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.label(egui::RichText::new("Notice").strong());
        ui.add_space(6.0);
        ui.label(msg.as_str());
        ui.add_space(10.0);
        if ui.button("OK").clicked() {
            dismissed = true;
        }
    });

    if dismissed || modal.should_close() {
        logd!("UI: Alert dismissed");
        app.alert = None;
    }
}
