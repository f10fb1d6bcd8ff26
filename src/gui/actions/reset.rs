// src/gui/actions/reset.rs
use crate::gui::app::App;

pub fn reset(app: &mut App) {
    match app.ctl.reset() {
        Ok(()) => app.status("Google Maps Scraper state has been reset."),
        Err(e) => {
            loge!("Reset: {}", e);
            app.status(format!("Reset failed: {e}"));
        }
    }
    app.refresh();
}
