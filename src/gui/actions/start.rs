// src/gui/actions/start.rs
use crate::{gui::app::App, gui::progress::GuiProgress, progress::Progress};

pub fn start(app: &mut App) {
    let text = app.state.gui.targets_text.clone();

    match app.ctl.start(&text) {
        Ok(intent) => {
            app.refresh();
            GuiProgress::new(app.status.clone()).begin(app.view.total);
            app.state.gui.page_path_text.clear();
            app.state.gui.page_url_text.clear();
            super::navigate(app, intent);
        }
        Err(e) => {
            logd!("Start: {}", e);
            app.status(e.to_string());
            // the view may be stale if the CLI started a job meanwhile
            app.refresh();
        }
    }
}
