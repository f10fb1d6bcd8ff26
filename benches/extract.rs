// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use gmaps_scrape::{
    csv::to_export_string,
    extract::{Extractor, GmapsExtractor},
    job::Record,
    page::PageContext,
};

const PLACE: &str = r#"<!DOCTYPE html>
<html><head>
<link rel="canonical" href="https://www.google.com/maps/place/Acme+Bakery">
</head><body>
<div role="main">
  <h1 class="DUwDvf"><span>Acme Bakery, Inc.</span></h1>
  <div class="rogA2c">
    <a data-item-id="authority" href="https://acme-bakery.test/">acme-bakery.test</a>
    <button data-item-id="phone:tel:+15551234567"><span>&#xe0b0;</span><div>+1 555-123-4567</div></button>
    <a href="mailto:hello@acme-bakery.test">hello@acme-bakery.test</a>
  </div>
</div>
</body></html>"#;

fn bench_extract(c: &mut Criterion) {
    let page = PageContext::from_html(PLACE.to_string(), None);
    let extractor = GmapsExtractor::new();

    c.bench_function("extract_place", |b| {
        b.iter(|| {
            let rec = extractor.extract(black_box(&page));
            black_box(rec.primary_name.len())
        })
    });

    let base = extractor.extract(&page);
    let records: Vec<Record> = (0..500)
        .map(|i| Record { source_url: format!("{}?n={i}", base.source_url), ..base.clone() })
        .collect();

    c.bench_function("export_500_rows", |b| {
        b.iter(|| black_box(to_export_string(black_box(&records)).len()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
