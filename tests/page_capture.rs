// tests/page_capture.rs
//
// Saved page files stepped through the on-disk controller with the real
// Google Maps extractor.
//
use std::fs;
use std::path::PathBuf;

use gmaps_scrape::controller::{Controller, Outcome};
use gmaps_scrape::extract::GmapsExtractor;
use gmaps_scrape::page::PageContext;
use gmaps_scrape::store::FileStore;
use gmaps_scrape::Error;

const SAVED_PLACE: &str = r#"<!DOCTYPE html>
<!-- saved from url=(0045)https://www.google.com/maps/place/Acme+Bakery -->
<html><body>
<div role="main">
  <h1 class="DUwDvf"><span>Acme Bakery, Inc.</span></h1>
  <a data-item-id="authority" href="https://acme-bakery.test/">acme-bakery.test</a>
  <button data-item-id="phone:tel:+15551234567"><span>&#xe0b0;</span>
    <div>+1 555-123-4567</div></button>
  <a href="mailto:hello@acme-bakery.test">hello@acme-bakery.test</a>
</div>
</body></html>"#;

const BARE_PLACE: &str = "<html><body><h1>Acme</h1></body></html>";

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("gmaps_capture_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn saved_page_is_recorded_under_its_own_location() {
    let dir = tmp_dir("saved");
    let page_path = dir.join("Acme Bakery.html");
    fs::write(&page_path, SAVED_PLACE).unwrap();

    let mut c = Controller::new(FileStore::new(dir.join("store")));
    c.start("https://www.google.com/maps/place/Acme+Bakery\nhttps://www.google.com/maps/place/Other")
        .unwrap();

    let page = PageContext::from_file(&page_path, None).unwrap();
    let out = c.step(&page, &GmapsExtractor::new(), None).unwrap();
    assert!(matches!(out, Outcome::Advanced { recorded: true, .. }));

    let records = c.records();
    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.source_url, "https://www.google.com/maps/place/Acme+Bakery");
    assert_eq!(r.primary_name, "Acme Bakery, Inc.");
    assert_eq!(r.secondary_name, "Acme Bakery, Inc.");
    assert_eq!(r.website, "https://acme-bakery.test/");
    assert_eq!(r.phone, "+1 555-123-4567");
    assert_eq!(r.email, "hello@acme-bakery.test");
}

#[test]
fn missing_page_file_is_a_read_error() {
    let dir = tmp_dir("missing");
    let err = PageContext::from_file(&dir.join("nope.html"), None).unwrap_err();
    match err {
        Error::PageRead { path, source } => {
            assert!(path.ends_with("nope.html"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected PageRead, got {other:?}"),
    }
}

#[test]
fn page_without_location_is_never_recorded() {
    let dir = tmp_dir("bare");
    let page_path = dir.join("page.html");
    fs::write(&page_path, BARE_PLACE).unwrap();

    let mut c = Controller::new(FileStore::new(dir.join("store")));
    c.start("https://a\nhttps://b\nhttps://c").unwrap();

    // the same snapshot captured twice must not turn into two rows
    for _ in 0..2 {
        let page = PageContext::from_file(&page_path, None).unwrap();
        let err = c.step(&page, &GmapsExtractor::new(), None).unwrap_err();
        assert!(matches!(err, Error::UnknownLocation));
    }
    let status = c.status();
    assert_eq!(status.cursor, 0);
    assert_eq!(status.collected, 0);

    // with the URL given, repeats hit the dedup guard
    let page = PageContext::from_file(&page_path, Some("https://a")).unwrap();
    let first = c.step(&page, &GmapsExtractor::new(), None).unwrap();
    let second = c.step(&page, &GmapsExtractor::new(), None).unwrap();
    assert!(matches!(first, Outcome::Advanced { recorded: true, .. }));
    assert!(matches!(second, Outcome::Advanced { recorded: false, .. }));

    let records = c.records();
    assert_eq!(records.len(), 1);
    assert_eq!((records[0].source_url.as_str(), records[0].primary_name.as_str()), ("https://a", "Acme"));
}
