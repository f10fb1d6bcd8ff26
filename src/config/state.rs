// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug, Default)]
pub struct GuiState {
    /// Start screen textarea (one URL per line)
    pub targets_text: String,

    /// Path of the saved page to capture on the next step
    pub page_path_text: String,

    /// Optional location override for the saved page
    pub page_url_text: String,

    /// Export path text box (mapped onto ExportOptions on download)
    pub out_path_text: String,
    pub out_path_dirty: bool,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
