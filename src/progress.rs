// src/progress.rs
/// Lightweight progress reporting for a capture run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called when a run starts, with the number of targets.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when the target at `index` (0-based) has been consumed.
    fn item_done(&mut self, _index: usize, _total: usize) {}

    /// Called once the last target has been consumed.
    fn finish(&mut self, _collected: usize, _total: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Collects every call; handy for asserting what a run reported.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub began: Option<usize>,
    pub lines: Vec<String>,
    pub done: Vec<usize>,
    pub finished: Option<(usize, usize)>,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.began = Some(total); }
    fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
    fn item_done(&mut self, index: usize, _total: usize) { self.done.push(index); }
    fn finish(&mut self, collected: usize, total: usize) { self.finished = Some((collected, total)); }
}
