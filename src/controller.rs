// src/controller.rs
//! The sequence state machine.
//!
//! Each call is one invocation: load the job, do at most one unit of work,
//! persist, and hand back what the caller should do next. Nothing here sleeps
//! or navigates; the delay travels inside [`NavIntent`] and the caller runs it.
//!
//! ```text
//!   Idle ──start(urls)──▶ Active ──step()×N──▶ Complete
//!    ▲                                            │
//!    └──────────────── reset() ◀──────────────────┘   (from any phase)
//! ```

use std::time::Duration;

use crate::config::consts::NAV_DELAY_MS;
use crate::error::{Error, Result};
use crate::extract::Extractor;
use crate::job::{parse_targets, Job, Phase, Record};
use crate::page::PageContext;
use crate::progress::Progress;
use crate::store::JobStore;

/// "Open this URL after this long."
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavIntent {
    pub url: String,
    pub delay: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub collected: usize,
    pub total: usize,
}

/// What one `step` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No usable job; show the start screen.
    Idle,
    /// Page consumed, more targets remain.
    Advanced { recorded: bool, next: NavIntent, summary: Summary },
    /// Page consumed and it was the last one.
    Completed { recorded: bool, summary: Summary },
    /// Nothing left to do; re-report the totals.
    AlreadyComplete(Summary),
}

/// Read-only snapshot for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status {
    pub phase: Phase,
    pub cursor: usize,
    pub total: usize,
    pub collected: usize,
}

impl Status {
    pub const IDLE: Status = Status { phase: Phase::Idle, cursor: 0, total: 0, collected: 0 };

    fn of(job: &Job) -> Self {
        Self {
            phase: job.phase(),
            cursor: job.cursor(),
            total: job.total(),
            collected: job.collected(),
        }
    }
}

fn summary(job: &Job) -> Summary {
    Summary { collected: job.collected(), total: job.total() }
}

pub struct Controller<S: JobStore> {
    store: S,
    nav_delay: Duration,
}

impl<S: JobStore> Controller<S> {
    pub fn new(store: S) -> Self {
        Self { store, nav_delay: Duration::from_millis(NAV_DELAY_MS) }
    }

    pub fn with_nav_delay(mut self, delay: Duration) -> Self {
        self.nav_delay = delay;
        self
    }

    pub fn store(&self) -> &S { &self.store }

    fn intent(&self, url: &str) -> NavIntent {
        NavIntent { url: s!(url), delay: self.nav_delay }
    }

    /// Job as stored, only if it has targets (empty target lists count as Idle).
    pub fn job(&self) -> Option<Job> {
        self.store.load().filter(|j| j.phase() != Phase::Idle)
    }

    pub fn status(&self) -> Status {
        self.job().as_ref().map(Status::of).unwrap_or(Status::IDLE)
    }

    pub fn records(&self) -> Vec<Record> {
        self.job().map(|j| j.records().to_vec()).unwrap_or_default()
    }

    /// Idle → Active. Refused while a job exists (Active or Complete);
    /// only `reset` destroys a job. Blank input is refused too.
    /// Either refusal leaves the store untouched.
    pub fn start(&mut self, input: &str) -> Result<NavIntent> {
        if let Some(job) = self.job() {
            logd!("Start: Refused, job in progress ({}/{})", job.collected(), job.total());
            return Err(Error::JobInProgress { collected: job.collected(), total: job.total() });
        }
        let targets = parse_targets(input);
        if targets.is_empty() {
            logd!("Start: Refused, no targets in input");
            return Err(Error::EmptyTargets);
        }
        let job = Job::new(targets)?;
        self.store.save(&job)?;
        logf!("Start: {} target(s), first={}", job.total(), job.targets()[0]);
        Ok(self.intent(&job.targets()[0]))
    }

    /// One invocation against the page currently loaded.
    pub fn step(
        &mut self,
        page: &PageContext,
        extractor: &dyn Extractor,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<Outcome> {
        let Some(mut job) = self.job() else {
            logd!("Step: No job, staying idle");
            return Ok(Outcome::Idle);
        };

        if job.phase() == Phase::Complete {
            let s = summary(&job);
            logd!("Step: Already complete ({}/{})", s.collected, s.total);
            return Ok(Outcome::AlreadyComplete(s));
        }

        if !page.has_location() {
            logd!("Step: Page has no location, nothing recorded");
            return Err(Error::UnknownLocation);
        }

        let index = job.cursor();
        let record = extractor.extract(page);
        let source = record.source_url.clone();
        let recorded = job.record(record);
        if recorded {
            logf!("Step: Recorded #{} {}", index + 1, source);
        } else {
            logf!("Step: Duplicate page ignored {}", source);
        }

        job.advance();
        self.store.save(&job)?;

        let s = summary(&job);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(index, s.total);
        }

        match job.current_target() {
            None => {
                logf!("Step: Complete, collected {} of {}", s.collected, s.total);
                if let Some(p) = progress.as_deref_mut() {
                    p.finish(s.collected, s.total);
                }
                Ok(Outcome::Completed { recorded, summary: s })
            }
            Some(next) => {
                let next = self.intent(next);
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Next: {}", next.url));
                }
                Ok(Outcome::Advanced { recorded, next, summary: s })
            }
        }
    }

    /// Any phase → Idle. Also drops legacy records.
    pub fn reset(&mut self) -> Result<()> {
        self.store.clear()?;
        logf!("Reset: Job cleared");
        Ok(())
    }
}
