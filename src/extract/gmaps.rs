//! Lookup rules for a Google Maps place page.
//!
//! Where the values live (as of writing):
//! - Name: the place title `h1` (sometimes wrapped in a `span`), or an ARIA heading.
//! - Website: the "authority" action link.
//! - Phone: the `phone:tel:…` action button; its text carries an icon glyph.
//! - Email: Maps rarely shows one; any `mailto:` link on the page.
//!
//! The name fills both the opportunity and business columns.

use scraper::Html;

use super::{Extractor, Field, FieldRule, Lookup, RuleExtractor};
use crate::job::Record;
use crate::page::PageContext;

pub static RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::Name,
        lookups: &[
            Lookup::Text("h1 span"),
            Lookup::Text("h1"),
            Lookup::Text("[role='heading'] span"),
        ],
    },
    FieldRule {
        field: Field::Website,
        lookups: &[Lookup::Attr("a[data-item-id='authority']", "href")],
    },
    FieldRule {
        field: Field::Phone,
        lookups: &[Lookup::Text("button[data-item-id^='phone:tel']")],
    },
    FieldRule {
        field: Field::Email,
        lookups: &[Lookup::AttrStripPrefix("a[href^='mailto:']", "href", "mailto:")],
    },
];

pub struct GmapsExtractor {
    inner: RuleExtractor,
}

impl Default for GmapsExtractor {
    fn default() -> Self {
        Self { inner: RuleExtractor::new(RULES) }
    }
}

impl GmapsExtractor {
    pub fn new() -> Self { Self::default() }

    pub fn field(&self, doc: &Html, field: Field) -> String {
        self.inner.field(doc, field)
    }
}

impl Extractor for GmapsExtractor {
    fn extract(&self, page: &PageContext) -> Record {
        self.inner.extract(page)
    }
}
