// src/cli.rs
use std::{
    fs,
    io::{self, IsTerminal, Read},
    path::PathBuf,
    time::Duration,
};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::options::AppOptions,
    controller::{Controller, NavIntent, Outcome, Status},
    extract::GmapsExtractor,
    job::Phase,
    nav::{self, Navigator, PrintOnly, SystemBrowser},
    page::PageContext,
    progress::Progress,
    store::FileStore,
};

/// Capture Google Maps place pages one at a time into a CSV file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    /// Directory holding the job record and debug.log.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
    /// Delay before opening the next target, in milliseconds.
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,
    /// Print the next URL instead of opening it in the browser.
    #[arg(long, global = true)]
    pub no_open: bool,
    /// Debug-level logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a new sequence. Refused while one exists; `reset` first.
    Start {
        /// Read targets from a file, one URL per line.
        #[arg(short, long, conflicts_with = "urls")]
        file: Option<PathBuf>,
        /// Target URLs. With neither this nor --file, stdin is read.
        urls: Vec<String>,
    },
    /// Capture the page that is loaded now, then move to the next target.
    /// Needs a location: a saved-from or canonical marker in the file, or --url.
    Step {
        /// Saved HTML of the rendered page.
        #[arg(short, long)]
        page: PathBuf,
        /// Location of the page, when the snapshot does not carry one.
        #[arg(short, long)]
        url: Option<String>,
    },
    /// Show where the sequence stands.
    Status,
    /// Forget the current job.
    Reset,
    /// Write collected rows as CSV.
    Export {
        /// Output file or directory.
        #[arg(short, long)]
        out: Option<String>,
    },
}

/// Progress on stderr, so stdout stays clean for URLs.
pub struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Sequence started: {total} URL(s).");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, index: usize, total: usize) {
        eprintln!("Captured {}/{}", index + 1, total);
    }
    fn finish(&mut self, collected: usize, total: usize) {
        eprintln!("Sequence complete! Collected {collected} row(s) from {total} URL(s).");
    }
}

fn options_from(cli: &Cli) -> AppOptions {
    let mut opts = AppOptions::default();
    if let Some(dir) = &cli.store {
        opts.store_dir = dir.clone();
    }
    if let Some(ms) = cli.delay_ms {
        opts.nav_delay = Duration::from_millis(ms);
    }
    opts.open_browser = !cli.no_open;
    opts
}

fn follow(opts: &AppOptions, intent: &NavIntent) -> Result<()> {
    let mut nav: Box<dyn Navigator> = if opts.open_browser {
        Box::new(SystemBrowser)
    } else {
        Box::new(PrintOnly)
    };
    nav::follow(intent, nav.as_mut()).wrap_err_with(|| format!("could not open {}", intent.url))
}

fn read_targets(file: Option<PathBuf>, urls: Vec<String>) -> Result<String> {
    if let Some(path) = file {
        return fs::read_to_string(&path)
            .wrap_err_with(|| format!("could not read {}", path.display()));
    }
    if !urls.is_empty() {
        return Ok(urls.join("\n"));
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Paste URLs (one per line), then Ctrl-D:");
    }
    let mut buf = String::new();
    stdin.lock().read_to_string(&mut buf).wrap_err("could not read stdin")?;
    Ok(buf)
}

fn print_status(status: &Status) {
    match status.phase {
        Phase::Idle => println!("Idle: no sequence in progress."),
        Phase::Active => {
            println!("Progress: {} collected out of {} URLs.", status.collected, status.total);
            println!("Current URL index: {} / {}", status.cursor + 1, status.total);
        }
        Phase::Complete => println!(
            "Done! Collected {} rows from {} URLs.",
            status.collected, status.total
        ),
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let opts = options_from(&cli);
    crate::log::init(&opts.store_dir, cli.verbose);

    let store = FileStore::new(&opts.store_dir);
    let mut ctl = Controller::new(store).with_nav_delay(opts.nav_delay);

    match cli.command {
        Command::Start { file, urls } => {
            let text = read_targets(file, urls)?;
            let intent = ctl.start(&text)?;
            CliProgress.begin(ctl.status().total);
            follow(&opts, &intent)?;
        }

        Command::Step { page, url } => {
            if ctl.job().is_none() {
                println!("No sequence in progress. Start one with `start`.");
                return Ok(());
            }
            let ctx = PageContext::from_file(&page, url.as_deref())?;
            let extractor = GmapsExtractor::new();

            match ctl.step(&ctx, &extractor, Some(&mut CliProgress))? {
                Outcome::Idle => {
                    println!("No sequence in progress. Start one with `start`.");
                }
                Outcome::Advanced { recorded, next, summary } => {
                    if !recorded {
                        eprintln!("Page already captured; not counted twice.");
                    }
                    println!(
                        "Progress: {} collected out of {} URLs.",
                        summary.collected, summary.total
                    );
                    follow(&opts, &next)?;
                }
                Outcome::Completed { recorded, .. } => {
                    if !recorded {
                        eprintln!("Page already captured; not counted twice.");
                    }
                    println!("Run `export` to write the CSV.");
                }
                Outcome::AlreadyComplete(s) => {
                    println!("Done! Collected {} rows from {} URLs.", s.collected, s.total);
                }
            }
        }

        Command::Status => print_status(&ctl.status()),

        Command::Reset => {
            ctl.reset()?;
            println!("Google Maps Scraper state has been reset.");
        }

        Command::Export { out } => {
            let mut export = opts.export.clone();
            if let Some(text) = out.as_deref() {
                export.set_path(text);
            }
            let records = ctl.records();
            let path = crate::file::write_export(export.out_path(), &records)
                .wrap_err_with(|| format!("could not write {}", export.out_path().display()))?;
            println!("Wrote {} row(s) to {}", records.len(), path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_store(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("gmaps_cli_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&p);
        p
    }

    #[test]
    fn step_when_idle_ignores_the_page_path() {
        let store = tmp_store("idle_step");
        let cli = Cli::parse_from([
            "cli",
            "--store",
            store.to_str().unwrap(),
            "step",
            "--page",
            "no_such_page.html",
        ]);
        assert!(run(cli).is_ok());
    }

    #[test]
    fn step_when_active_reports_a_bad_page_path() {
        let store = tmp_store("active_step");
        let dir = store.to_str().unwrap();
        run(Cli::parse_from(["cli", "--store", dir, "--no-open", "--delay-ms", "0", "start", "https://a"]))
            .unwrap();
        let err = run(Cli::parse_from(["cli", "--store", dir, "step", "--page", "no_such_page.html"]))
            .unwrap_err();
        assert!(err.to_string().contains("no_such_page.html"));
    }
}
