// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod progress;

pub mod job;
pub mod page;
pub mod store;
pub mod extract;
pub mod controller;
pub mod nav;

pub mod csv;
pub mod file;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;

pub use error::{Error, Result};
