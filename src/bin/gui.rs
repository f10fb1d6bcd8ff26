// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use gmaps_scrape::gui;
use eframe::egui::ViewportBuilder;

fn main() {
    let options = eframe::NativeOptions {
        // Small always-on-top panel next to the browser, like an overlay
        viewport: ViewportBuilder::default()
            .with_inner_size([460.0, 560.0])
            .with_always_on_top(),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
