// src/store.rs
//! Single-slot persistence for the job record.
//!
//! `load` is tolerant: unreadable, unparseable or structurally invalid data
//! is reported as "no job" so the caller falls back to the start screen.
//! `save` replaces the record in one rename, so a later invocation sees either
//! the previous job or the new one. `clear` also removes legacy keys.

use std::{
    collections::HashMap,
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::config::consts::{JOB_KEY, LEGACY_JOB_KEYS, STORE_EXT};
use crate::error::Result;
use crate::job::Job;

pub trait JobStore {
    /// Current job, or `None` when absent or unusable.
    fn load(&self) -> Option<Job>;

    /// Overwrite the stored job.
    fn save(&mut self, job: &Job) -> Result<()>;

    /// Remove the job and every recognized legacy record.
    fn clear(&mut self) -> Result<()>;
}

/// Parse a stored record. Any failure means absent.
pub fn decode(raw: &str) -> Option<Job> {
    match serde_json::from_str::<Job>(raw) {
        Ok(job) if job.is_well_formed() => Some(job),
        Ok(job) => {
            logd!(
                "Store: Ignoring job with cursor {} past {} targets",
                job.cursor(),
                job.total()
            );
            None
        }
        Err(e) => {
            logd!("Store: Ignoring unreadable job record ({})", e);
            None
        }
    }
}

pub fn encode(job: &Job) -> Result<String> {
    Ok(serde_json::to_string(job)?)
}

/* ---------------- On-disk store ---------------- */

/// One `<key>.json` file per record inside `dir`.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
    key: String,
    legacy: Vec<String>,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            key: s!(JOB_KEY),
            legacy: LEGACY_JOB_KEYS.iter().map(|k| s!(*k)).collect(),
        }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    pub fn path(&self) -> PathBuf {
        self.path_for(&self.key)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(join!(key, ".", STORE_EXT))
    }

    fn tmp_path(&self) -> PathBuf {
        self.dir.join(join!(&self.key, ".", STORE_EXT, ".tmp"))
    }
}

fn remove_if_present(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

impl JobStore for FileStore {
    fn load(&self) -> Option<Job> {
        let path = self.path();
        match fs::read_to_string(&path) {
            Ok(raw) => decode(&raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                loge!("Store: Read failed {}: {}", path.display(), e);
                None
            }
        }
    }

    fn save(&mut self, job: &Job) -> Result<()> {
        crate::file::ensure_directory(&self.dir)?;
        let raw = encode(job)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, self.path())?;
        logd!(
            "Store: Saved cursor={}/{} records={}",
            job.cursor(),
            job.total(),
            job.collected()
        );
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let mut removed = 0usize;
        let keys = std::iter::once(&self.key).chain(self.legacy.iter());
        for key in keys {
            if remove_if_present(&self.path_for(key))? {
                removed += 1;
            }
        }
        remove_if_present(&self.tmp_path())?;
        logf!("Store: Cleared {} record(s) in {}", removed, self.dir.display());
        Ok(())
    }
}

/* ---------------- In-memory store ---------------- */

/// Raw string slots keyed like the file store. Shares the same decoder,
/// so corrupted contents behave exactly as they would on disk.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    key: String,
    legacy: Vec<String>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            key: s!(JOB_KEY),
            legacy: LEGACY_JOB_KEYS.iter().map(|k| s!(*k)).collect(),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    /// Seed a slot with raw text, valid or not.
    pub fn with_raw(mut self, key: &str, raw: &str) -> Self {
        self.slots.insert(s!(key), s!(raw));
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool { self.slots.is_empty() }
}

impl JobStore for MemoryStore {
    fn load(&self) -> Option<Job> {
        self.slots.get(&self.key).and_then(|raw| decode(raw))
    }

    fn save(&mut self, job: &Job) -> Result<()> {
        let raw = encode(job)?;
        self.slots.insert(self.key.clone(), raw);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.slots.remove(&self.key);
        for key in &self.legacy {
            self.slots.remove(key);
        }
        Ok(())
    }
}
