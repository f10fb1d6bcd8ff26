// src/gui/components/control_panel.rs
//
// Phase-appropriate controls: start screen, progress screen, done screen.
// Purely reactive; every button defers to gui::actions.

use eframe::egui::{self, Color32, RichText};

use crate::{gui::{actions, app::App}, job::Phase};

const BLUE: Color32 = Color32::from_rgb(0, 123, 255);
const GREEN: Color32 = Color32::from_rgb(40, 167, 69);

fn hint(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).small().color(Color32::GRAY));
}

fn reset_button(ui: &mut egui::Ui, app: &mut App) {
    if ui.small_button("Reset state").clicked() {
        actions::reset(app);
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("Google Maps Scraper");
        if ui.small_button("⟳").on_hover_text("Reload job from disk").clicked() {
            app.refresh();
        }
    });

    match app.view.phase {
        Phase::Idle => draw_start(ui, app),
        Phase::Active => draw_progress(ui, app),
        Phase::Complete => draw_done(ui, app),
    }
}

fn draw_start(ui: &mut egui::Ui, app: &mut App) {
    ui.label("Paste Google Maps business URLs (one per line):");
    ui.add(
        egui::TextEdit::multiline(&mut app.state.gui.targets_text)
            .desired_rows(8)
            .desired_width(f32::INFINITY)
            .font(egui::TextStyle::Monospace),
    );

    ui.horizontal(|ui| {
        let start = egui::Button::new(RichText::new("Start sequence").color(Color32::WHITE)).fill(BLUE);
        if ui.add(start).clicked() {
            actions::start(app);
        }
        reset_button(ui, app);
    });

    hint(ui, "Workflow: paste URLs → Start sequence. The browser goes to the first URL.");
    hint(ui, "On each page: save it (Ctrl+S), enter the file below, then Capture.");
}

fn draw_progress(ui: &mut egui::Ui, app: &mut App) {
    let v = app.view;
    ui.label(format!("Progress: {} collected out of {} URLs.", v.collected, v.total));
    hint(ui, &format!("Current URL index: {} / {}", v.cursor + 1, v.total));

    ui.horizontal(|ui| {
        ui.label("Saved page:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.page_path_text)
                .hint_text("path/to/page.html")
                .desired_width(f32::INFINITY),
        );
    });
    ui.horizontal(|ui| {
        ui.label("Page URL:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.page_url_text)
                .hint_text("optional, read from the file when blank")
                .desired_width(f32::INFINITY),
        );
    });

    ui.horizontal(|ui| {
        let capture = egui::Button::new(RichText::new("Capture page").color(Color32::WHITE)).fill(BLUE);
        if ui.add(capture).clicked() {
            actions::capture(app);
        }
        reset_button(ui, app);
    });

    hint(ui, "Capture each loaded business page to record it and move to the next one.");
}

fn draw_done(ui: &mut egui::Ui, app: &mut App) {
    let v = app.view;
    ui.label(
        RichText::new(format!("✅ Done! Collected {} rows from {} URLs.", v.collected, v.total))
            .strong(),
    );

    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.state.gui.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.state.gui.out_path_text);
        }
        if ui.button("📁").on_hover_text("Open output folder").clicked() {
            actions::open_output_folder(app);
        }
    });

    ui.horizontal(|ui| {
        let download = egui::Button::new(RichText::new("Download CSV").color(Color32::WHITE)).fill(GREEN);
        if ui.add(download).clicked() {
            actions::export(app);
        }
        if ui.button("Copy").clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }
        reset_button(ui, app);
    });

    hint(ui, "Tip: if something looks off, reset state and run again.");
}
