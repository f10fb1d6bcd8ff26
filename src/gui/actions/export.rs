// src/gui/actions/export.rs
use eframe::egui;

use crate::{csv, file, gui::app::App, nav};

/// "Download CSV": write the export file to the path in the text box.
pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.state.gui.out_path_dirty {
        let text = app.state.gui.out_path_text.clone();
        app.state.options.export.set_path(&text);
        app.state.gui.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        app.state.gui.out_path_dirty = false;
        logf!("Export: Out path set → {}", app.state.options.export.out_path().display());
    }

    let path = app.state.options.export.out_path().to_path_buf();
    let msg = match file::write_export(&path, &app.records) {
        Ok(p) => format!("Exported {} row(s) → {}", app.records.len(), p.display()),
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}

/// Same CSV text, onto the clipboard.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.records.is_empty() {
        logd!("Copy: Clicked, but there's nothing to copy");
        app.status("Nothing to copy");
        return;
    }
    ui_ctx.copy_text(csv::to_export_string(&app.records));
    logf!("Copy: rows={}", app.records.len());
    app.status("Copied to clipboard");
}

/// Open the export folder (or its closest existing parent).
pub fn open_output_folder(app: &App) {
    let out = app.state.options.export.out_path();
    let folder = out.parent().unwrap_or(std::path::Path::new("."));
    let folder = file::find_nearest_existing_parent(folder);

    let absolute = match std::fs::canonicalize(&folder) {
        Ok(p) => p,
        Err(e) => {
            let msg = format!("Cannot resolve folder path: {}", e);
            loge!("{}", msg);
            app.status(msg);
            return;
        }
    };

    if let Err(e) = nav::open_external(&absolute.to_string_lossy()) {
        loge!("Failed to open folder: {}", e);
        app.status(format!("Failed to open folder: {}", e));
    } else {
        logf!("Opened folder: {}", absolute.display());
    }
}
