// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    controller::{Controller, Status},
    job::Record,
    store::FileStore,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let state = AppState::default();
    crate::log::init(&state.options.store_dir, false);

    eframe::run_native(
        "Google Maps Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // options + text fields (UI thread only)
    pub state: AppState,

    // the state machine over the on-disk job
    pub ctl: Controller<FileStore>,

    // snapshot of the stored job, refreshed after every action
    pub view: Status,
    pub records: Vec<Record>,

    // status line (progress sink writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let store = FileStore::new(&state.options.store_dir);
        let ctl = Controller::new(store).with_nav_delay(state.options.nav_delay);

        state.gui.out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        let mut app = Self {
            state,
            ctl,
            view: Status::IDLE,
            records: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
        };
        app.refresh();

        logf!(
            "Init: store={}, phase={:?}, {}/{}",
            app.state.options.store_dir.display(),
            app.view.phase,
            app.view.collected,
            app.view.total
        );
        app
    }

    /// Re-read the stored job. Another process (the CLI) may have moved it.
    pub fn refresh(&mut self) {
        self.view = self.ctl.status();
        self.records = self.ctl.records();
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::control_panel::draw(ui, self);

            ui.separator();

            crate::gui::components::records_table::draw(ui, self);
        });
    }
}
