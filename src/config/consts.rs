// src/config/consts.rs

// Local store (the "browser profile" the job lives in)
pub const STORE_DIR: &str = ".store";
pub const STORE_DIR_ENV: &str = "GMAPS_SCRAPE_STORE";
pub const STORE_EXT: &str = "json";

// Job record key + older layouts we only ever delete
pub const JOB_KEY: &str = "gmaps_scraper_state_v2";
pub const LEGACY_JOB_KEYS: &[&str] = &["gmaps_scraper_state_v1"];

// Let the progress screen render before the browser jumps away
pub const NAV_DELAY_MS: u64 = 1000;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_EXPORT_FILE: &str = "google_maps_scraper_results.csv";
pub const EXPORT_MIME: &str = "text/csv;charset=utf-8;";
pub const EXPORT_SEP: char = ',';
pub const EXPORT_ROW_SEP: &str = "\r\n";
pub const EXPORT_HEADERS: [&str; 6] = [
    "Opportunity Name",
    "Business Name",
    "Website URL",
    "Phone",
    "Email",
    "Source URL",
];
