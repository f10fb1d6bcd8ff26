// src/job.rs
//! The single persisted unit of work: ordered targets, a cursor, and the
//! records captured so far. Phase is always derived, never stored.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One captured row, tied to the page it came from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    pub source_url: String,
    pub primary_name: String,
    pub secondary_name: String,
    pub website: String,
    pub phone: String,
    pub email: String,
}

impl Record {
    /// A record with nothing found but the page it came from.
    pub fn empty(source_url: impl Into<String>) -> Self {
        Self { source_url: source_url.into(), ..Self::default() }
    }

    /// Cells in export column order.
    pub fn cells(&self) -> [&str; 6] {
        [
            &self.primary_name,
            &self.secondary_name,
            &self.website,
            &self.phone,
            &self.email,
            &self.source_url,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active,
    Complete,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    targets: Vec<String>,
    #[serde(default)]
    cursor: usize,
    #[serde(default)]
    records: Vec<Record>,
}

impl Job {
    /// Fresh job over `targets`. Empty input is refused.
    pub fn new(targets: Vec<String>) -> Result<Self> {
        if targets.is_empty() {
            return Err(Error::EmptyTargets);
        }
        Ok(Self { targets, cursor: 0, records: Vec::new() })
    }

    pub fn phase(&self) -> Phase {
        if self.targets.is_empty() {
            Phase::Idle
        } else if self.cursor >= self.targets.len() {
            Phase::Complete
        } else {
            Phase::Active
        }
    }

    /// Cursor inside `[0, len(targets)]`. Anything else did not come from us.
    pub fn is_well_formed(&self) -> bool {
        self.cursor <= self.targets.len()
    }

    pub fn targets(&self) -> &[String] { &self.targets }
    pub fn cursor(&self) -> usize { self.cursor }
    pub fn records(&self) -> &[Record] { &self.records }
    pub fn total(&self) -> usize { self.targets.len() }
    pub fn collected(&self) -> usize { self.records.len() }

    /// Target the cursor points at, if any remain.
    pub fn current_target(&self) -> Option<&str> {
        self.targets.get(self.cursor).map(String::as_str)
    }

    pub fn has_record_for(&self, source_url: &str) -> bool {
        self.records.iter().any(|r| r.source_url == source_url)
    }

    /// Append unless a record for the same source URL already exists.
    /// Returns whether the record was kept.
    pub fn record(&mut self, record: Record) -> bool {
        if self.has_record_for(&record.source_url) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Move to the next target. Never runs past the end.
    pub fn advance(&mut self) {
        if self.cursor < self.targets.len() {
            self.cursor += 1;
        }
    }
}

/// Split free text into targets: one per line, trimmed, blanks dropped, order kept.
pub fn parse_targets(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| s!(l))
        .collect()
}
