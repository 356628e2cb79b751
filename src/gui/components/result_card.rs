// src/gui/components/result_card.rs
//
// The report card: name, one row per subject, total.
// Purely a view; records its screen rect for image export.

use std::time::Instant;

use eframe::egui::{self, Align, Color32, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::{anim, app::App};

const ACCENT: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(shown) = app.card.as_mut() else { return };
    let since = Instant::now() - shown.shown_at;
    let total_text = shown.total_text();
    let card = &shown.card;
    let view = ui.clip_rect();

    let frame = egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .corner_radius(12.0)
        .inner_margin(16.0);

    let resp = frame.show(ui, |ui| {
        ui.set_max_width(520.0);

        ui.label(RichText::new("Student").small());
        ui.heading(RichText::new(&card.name).strong());
        ui.add_space(8.0);

        TableBuilder::new(ui)
            .id_salt("subjects_table")
            .striped(true)
            .vscroll(false)
            .column(Column::remainder().at_least(220.0).clip(true))
            .column(Column::exact(90.0))
            .header(24.0, |mut header| {
                header.col(|ui| { ui.strong("Subject"); });
                header.col(|ui| {
                    ui.centered_and_justified(|ui| { ui.strong("Score"); });
                });
            })
            .body(|mut body| {
                for (i, row) in card.rows.iter().enumerate() {
                    let alpha = anim::row_opacity(since, i);
                    let slide = anim::row_slide(since, i);
                    body.row(30.0, |mut tr| {
                        tr.col(|ui| {
                            ui.set_opacity(alpha);
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                ui.add_space(slide);
                                ui.label(RichText::new(row.icon.glyph()).color(ACCENT));
                                ui.label(RichText::new(&row.label).strong());
                            });
                        });
                        tr.col(|ui| {
                            ui.set_opacity(alpha);
                            ui.centered_and_justified(|ui| {
                                ui.label(RichText::new(&row.value).size(20.0).strong());
                            });
                        });
                    });
                }
            });

        ui.separator();
        ui.horizontal(|ui| {
            ui.label(RichText::new("Total").size(18.0).strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(&total_text).size(26.0).strong().color(ACCENT));
            });
        });
    });

    let rect = resp.response.rect;
    app.card_rect = Some(rect);
    app.card_view = Some(view);

    if shown.scroll_pending {
        resp.response.scroll_to_me(Some(Align::TOP));
        shown.scroll_pending = false;
    }
}
