// src/gui/components/records_table.rs
//
// Read-only table of captured rows, in export column order.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::EXPORT_HEADERS, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.records.is_empty() {
        ui.label(egui::RichText::new("No rows captured yet").weak());
        return;
    }

    egui::ScrollArea::horizontal()
        .id_salt("records_scroll")
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .columns(Column::auto().at_least(60.0).clip(true), EXPORT_HEADERS.len())
                .header(20.0, |mut header| {
                    for h in EXPORT_HEADERS {
                        header.col(|ui| { ui.strong(h); });
                    }
                })
                .body(|mut body| {
                    for r in &app.records {
                        body.row(18.0, |mut row| {
                            for cell in r.cells() {
                                row.col(|ui| {
                                    ui.add(egui::Label::new(cell).truncate());
                                });
                            }
                        });
                    }
                });
        });
}
