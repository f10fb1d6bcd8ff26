// src/log.rs
//
// logf!/logd!/loge! forward to the `log` facade. `init` installs env_logger
// piped into `<store>/debug.log` with elapsed-time stamps.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::{Builder, Env, Target};

pub const LOG_FILE: &str = "debug.log";

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Install the file logger. Safe to call more than once; only the first call wins.
/// Failing to open the log file is not fatal, logging just goes to stderr.
pub fn init(store_dir: &Path, verbose: bool) {
    let _ = start();
    let default_level = if verbose { "debug" } else { "info" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));

    builder.format(|buf, record| {
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
    });

    let opened = fs::create_dir_all(store_dir).and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(store_dir.join(LOG_FILE))
    });
    match opened {
        Ok(file) => { builder.target(Target::Pipe(Box::new(file))); }
        Err(e) => eprintln!("Logging to stderr ({}: {e})", store_dir.display()),
    }

    let _ = builder.try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::fmt_elapsed;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }
}
