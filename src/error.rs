// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Start was given nothing but blank lines.
    #[error("Please paste at least one URL")]
    EmptyTargets,

    /// Start while a job exists; only reset destroys a job.
    #[error("A sequence is already in progress ({collected}/{total}); reset it first")]
    JobInProgress { collected: usize, total: usize },

    /// The snapshot carries no location and none was given.
    #[error("Cannot tell which page this is; give its URL (--url, or the Page URL field)")]
    UnknownLocation,

    #[error("store I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("could not encode job record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("could not read page {}: {source}", .path.display())]
    PageRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
