// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.set_status(format!(
            "Sequence started ({total} URLs). The browser will now go to the first URL."
        ));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, index: usize, total: usize) {
        self.set_status(format!("Captured {}/{}", index + 1, total));
    }
    fn finish(&mut self, collected: usize, total: usize) {
        self.set_status(format!(
            "Sequence complete! Collected {collected} rows from {total} URLs."
        ));
    }
}
