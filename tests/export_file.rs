// tests/export_file.rs
//
// CSV export: escaping scenarios, determinism, file writing.
//
use std::fs;
use std::path::PathBuf;

use gmaps_scrape::config::consts::DEFAULT_EXPORT_FILE;
use gmaps_scrape::config::options::ExportOptions;
use gmaps_scrape::csv::to_export_string;
use gmaps_scrape::file::write_export;
use gmaps_scrape::job::Record;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("gmaps_export_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn named(name: &str, url: &str) -> Record {
    Record {
        primary_name: name.into(),
        secondary_name: name.into(),
        ..Record::empty(url)
    }
}

#[test]
fn comma_and_quote_values_are_escaped() {
    let out = to_export_string(&[named("Acme, Inc.", "https://a"), named("\"Quote\" Co", "https://b")]);
    let lines: Vec<&str> = out.split("\r\n").collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], r#""Acme, Inc.","Acme, Inc.",,,,https://a"#);
    assert_eq!(lines[2], r#""""Quote"" Co","""Quote"" Co",,,,https://b"#);
}

#[test]
fn export_is_deterministic() {
    let records = vec![named("A", "https://a"), named("B\nline", "https://b")];
    assert_eq!(to_export_string(&records), to_export_string(&records));
}

#[test]
fn zero_records_writes_header_only() {
    let dir = tmp_dir("empty");
    let path = dir.join("out.csv");
    write_export(&path, &[]).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Opportunity Name,Business Name,Website URL,Phone,Email,Source URL"
    );
}

#[test]
fn directory_target_gets_default_filename() {
    let dir = tmp_dir("dir");
    let mut export = ExportOptions::default();
    export.set_path(dir.to_str().unwrap());
    assert!(export.out_path().ends_with(DEFAULT_EXPORT_FILE));

    let written = write_export(export.out_path(), &[named("A", "https://a")]).unwrap();
    assert!(fs::read_to_string(written).unwrap().ends_with("A,A,,,,https://a"));
}

#[test]
fn missing_parent_dirs_are_created() {
    let dir = tmp_dir("nested");
    let path = dir.join("x").join("y").join("rows.csv");
    write_export(&path, &[named("A", "https://a")]).unwrap();
    assert!(path.exists());
}
