// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Each action runs one controller call, refreshes the view and sets status.

mod capture;   // src/gui/actions/capture.rs
mod export;    // src/gui/actions/export.rs
mod reset;     // src/gui/actions/reset.rs
mod start;     // src/gui/actions/start.rs

pub use capture::capture;
pub use export::{copy, export, open_output_folder};
pub use reset::reset;
pub use start::start;

use crate::{controller::NavIntent, gui::app::App, nav::{self, SystemBrowser}};

/// Hand a navigation intent to the browser without blocking the UI.
pub(super) fn navigate(app: &App, intent: NavIntent) {
    if app.state.options.open_browser {
        logd!("Nav: Scheduled {} in {:?}", intent.url, intent.delay);
        nav::follow_detached(intent, SystemBrowser);
    } else {
        app.status(format!("Next: {}", intent.url));
    }
}
