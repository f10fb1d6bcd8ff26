// src/gui/actions/capture.rs
use std::path::PathBuf;

use crate::{
    controller::Outcome,
    extract::GmapsExtractor,
    gui::{app::App, progress::GuiProgress},
    page::PageContext,
};

/// The GUI's "run one step": read the saved page, let the controller consume it.
pub fn capture(app: &mut App) {
    let path_text = app.state.gui.page_path_text.trim().to_string();
    if path_text.is_empty() {
        app.status("Save the loaded page, then enter its file path");
        return;
    }

    let explicit = Some(app.state.gui.page_url_text.as_str());

    let page = match PageContext::from_file(&PathBuf::from(&path_text), explicit) {
        Ok(p) => p,
        Err(e) => {
            loge!("Capture: {}", e);
            app.status(format!("Error: {e}"));
            return;
        }
    };

    let mut prog = GuiProgress::new(app.status.clone());
    let outcome = app.ctl.step(&page, &GmapsExtractor::new(), Some(&mut prog));
    app.refresh();

    match outcome {
        Ok(Outcome::Idle) => app.status("No sequence in progress"),
        Ok(Outcome::Advanced { recorded, next, summary }) => {
            app.state.gui.page_path_text.clear();
            app.state.gui.page_url_text.clear();
            if !recorded {
                app.status(format!(
                    "Page already captured ({}/{}); moving on",
                    summary.collected, summary.total
                ));
            }
            super::navigate(app, next);
        }
        Ok(Outcome::Completed { .. }) => {
            app.state.gui.page_path_text.clear();
            app.state.gui.page_url_text.clear();
        }
        Ok(Outcome::AlreadyComplete(s)) => {
            app.status(format!("Done! Collected {} rows from {} URLs.", s.collected, s.total));
        }
        Err(e) => {
            loge!("Capture: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
