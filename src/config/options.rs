// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Directory holding the job record and the debug log.
    pub store_dir: PathBuf,
    /// Pause between recording a page and opening the next target.
    pub nav_delay: Duration,
    /// Open targets in the system browser. When off, the URL is only shown.
    pub open_browser: bool,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        let store_dir = std::env::var_os(STORE_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(STORE_DIR));

        Self {
            store_dir,
            nav_delay: Duration::from_millis(NAV_DELAY_MS),
            open_browser: true,
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_path: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_EXPORT_FILE) }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Parse user text into a file path. Blank keeps the default; a directory
    /// (existing, or ending in a separator) gets the default filename appended.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = ExportOptions::default().out_path;
            return;
        }
        let p = PathBuf::from(crate::file::normalize_separators(s));
        self.out_path = if crate::file::looks_like_dir_hint(s) || p.is_dir() {
            p.join(DEFAULT_EXPORT_FILE)
        } else {
            p
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_export_path_uses_fixed_filename() {
        let export = ExportOptions::default();
        assert!(export.out_path().ends_with(DEFAULT_EXPORT_FILE));
    }

    #[test]
    fn dir_hint_gets_default_filename() {
        let mut export = ExportOptions::default();
        export.set_path("some/where/");
        assert!(export.out_path().ends_with(DEFAULT_EXPORT_FILE));
        assert!(export.out_path().starts_with("some"));
    }

    #[test]
    fn blank_text_restores_default() {
        let mut export = ExportOptions::default();
        export.set_path("custom.csv");
        assert_eq!(export.out_path(), Path::new("custom.csv"));
        export.set_path("   ");
        assert_eq!(export, ExportOptions::default());
    }
}
