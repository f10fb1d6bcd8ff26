//! # Field extraction
//!
//! Turns a rendered page into a best-effort [`Record`]. Every field is looked
//! up on its own; a miss leaves that field empty and never aborts the step.
//!
//! ## Rules
//! A [`FieldRule`] is an ordered list of [`Lookup`]s. Each lookup either binds
//! a value or reports [`Binding::Unbound`]; the first bound value wins. Bad
//! selectors are just another way of being unbound, so a typo in one rule can
//! only blank its own field.
//!
//! ## Drift
//! Rules are tied to the third-party markup of the day (see [`gmaps`]). They
//! are expected to rot quietly as that markup changes. Fail soft, not hard.

pub mod gmaps;

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::{clean_text, strip_prefix_ci};
use crate::job::Record;
use crate::page::PageContext;

pub use gmaps::GmapsExtractor;

/// Anything that can read a record off the current page.
pub trait Extractor {
    fn extract(&self, page: &PageContext) -> Record;
}

impl<F> Extractor for F
where
    F: Fn(&PageContext) -> Record,
{
    fn extract(&self, page: &PageContext) -> Record {
        self(page)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Website,
    Phone,
    Email,
}

/// One way of finding a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// Visible text of the first matching element.
    Text(&'static str),
    /// Attribute of the first matching element that carries it.
    Attr(&'static str, &'static str),
    /// Like `Attr`, with a case-insensitive prefix removed (`mailto:`).
    AttrStripPrefix(&'static str, &'static str, &'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Binding {
    Bound(String),
    Unbound,
}

impl Binding {
    pub fn into_value(self) -> Option<String> {
        match self {
            Binding::Bound(v) => Some(v),
            Binding::Unbound => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub field: Field,
    pub lookups: &'static [Lookup],
}

fn bound(v: String) -> Binding {
    if v.is_empty() { Binding::Unbound } else { Binding::Bound(v) }
}

fn first_match<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(sel) => doc.select(&sel).next(),
        Err(e) => {
            logd!("Extract: Bad selector {:?} ({:?})", css, e);
            None
        }
    }
}

fn first_attr(doc: &Html, css: &str, attr: &str) -> Option<String> {
    let sel = Selector::parse(css).ok()?;
    doc.select(&sel)
        .filter_map(|el| el.value().attr(attr))
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(|v| s!(v))
}

impl Lookup {
    pub fn run(&self, doc: &Html) -> Binding {
        match *self {
            Lookup::Text(css) => match first_match(doc, css) {
                Some(el) => bound(clean_text(&el.text().collect::<String>())),
                None => Binding::Unbound,
            },
            Lookup::Attr(css, attr) => match first_attr(doc, css, attr) {
                Some(v) => bound(v),
                None => Binding::Unbound,
            },
            Lookup::AttrStripPrefix(css, attr, prefix) => match first_attr(doc, css, attr) {
                Some(v) => bound(s!(strip_prefix_ci(&v, prefix).trim())),
                None => Binding::Unbound,
            },
        }
    }
}

impl FieldRule {
    /// First bound lookup, or `Unbound` if none hit.
    pub fn resolve(&self, doc: &Html) -> Binding {
        for (i, lookup) in self.lookups.iter().enumerate() {
            if let Binding::Bound(v) = lookup.run(doc) {
                if i > 0 {
                    logd!("Extract: {:?} matched fallback #{} {:?}", self.field, i, lookup);
                }
                return Binding::Bound(v);
            }
        }
        Binding::Unbound
    }
}

/// Extractor driven by a static rule table.
pub struct RuleExtractor {
    rules: &'static [FieldRule],
}

impl RuleExtractor {
    pub const fn new(rules: &'static [FieldRule]) -> Self {
        Self { rules }
    }

    /// Value for one field, empty when nothing bound.
    pub fn field(&self, doc: &Html, field: Field) -> String {
        self.rules
            .iter()
            .filter(|r| r.field == field)
            .find_map(|r| r.resolve(doc).into_value())
            .unwrap_or_default()
    }
}

impl Extractor for RuleExtractor {
    fn extract(&self, page: &PageContext) -> Record {
        let doc = Html::parse_document(&page.html);
        let name = self.field(&doc, Field::Name);
        let record = Record {
            source_url: page.location.clone(),
            primary_name: name.clone(),
            secondary_name: name,
            website: self.field(&doc, Field::Website),
            phone: self.field(&doc, Field::Phone),
            email: self.field(&doc, Field::Email),
        };

        let missing: Vec<&str> = [
            ("name", &record.primary_name),
            ("website", &record.website),
            ("phone", &record.phone),
            ("email", &record.email),
        ]
        .iter()
        .filter(|(_, v)| v.is_empty())
        .map(|(k, _)| *k)
        .collect();
        if !missing.is_empty() {
            logd!("Extract: {} missing {:?}", page.location, missing);
        }
        record
    }
}
