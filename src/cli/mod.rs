// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v2.0
// Date Modified: 2026-10-16
// Author: Lukas Bower

//! CLI module for termfolio. Exports the argument parser and main entry.

pub mod args;

use std::fs::OpenOptions;
use std::io::Write;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};

use crate::config::TermConfig;
use crate::content::Content;
use crate::download::Downloader;
use crate::shell::{Effect, Terminal};

pub use args::Cli;

/// Entry point for the binary. Parses arguments, loads config and content,
/// then runs scripted commands or the interactive UI.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut cfg = TermConfig::resolve(cli.config.as_deref())?;
    cli.apply(&mut cfg)?;
    init_logging(&cli, &cfg)?;

    let content = load_content(&cfg)?;
    let downloader = Downloader::new(&cfg.download_dir);
    let mut term = Terminal::new(content, cfg.terminal_options());

    if !cli.exec.is_empty() {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        return exec_script(&mut term, &cli.exec, &downloader, &mut out);
    }
    crate::ui::run(term, &cfg, downloader)
}

pub fn load_content(cfg: &TermConfig) -> anyhow::Result<Content> {
    match &cfg.data_dir {
        Some(dir) => Content::load_dir(dir)
            .with_context(|| format!("loading content from {}", dir.display())),
        None => Ok(Content::builtin()?),
    }
}

/// Scripted mode logs to stderr; the full-screen UI logs to a file.
fn init_logging(cli: &Cli, cfg: &TermConfig) -> anyhow::Result<()> {
    let env = env_logger::Env::default().default_filter_or(cli.log_level());
    let mut builder = env_logger::Builder::from_env(env);
    if cli.exec.is_empty() {
        let path = cfg
            .log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("termfolio.log"));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    // A logger may already be installed when embedded; keep it.
    let _ = builder.try_init();
    Ok(())
}

/// Run `commands` in order, writing every line they append to `out`.
///
/// Modals and the history view are printed as text and closed; downloads
/// are saved through `downloader`; sound cues are dropped. Stops after `exit`.
pub fn exec_script<W: Write>(
    term: &mut Terminal,
    commands: &[String],
    downloader: &Downloader,
    out: &mut W,
) -> anyhow::Result<()> {
    term.settle();
    for cmd in commands {
        let before = term.output().to_vec();
        term.execute(cmd);
        term.settle();

        let after = term.output();
        let fresh = if after.len() >= before.len() && after[..before.len()] == before[..] {
            &after[before.len()..]
        } else {
            after
        };
        for line in fresh {
            writeln!(out, "{}", line)?;
        }

        if let Some(modal) = term.modal() {
            for line in modal.describe() {
                writeln!(out, "{}", line)?;
            }
            term.close_modal();
        }
        if term.history_view().is_some() {
            for (i, entry) in term.history().entries().iter().enumerate() {
                writeln!(out, "{:>4}  {}", i + 1, entry)?;
            }
            term.close_history_view();
        }

        for effect in term.drain_effects() {
            if let Effect::Download(req) = effect {
                match downloader.save(&req, term.content()) {
                    Ok(path) => info!("wrote {}", path.display()),
                    Err(err) => warn!("download of {} failed: {}", req.file_name, err),
                }
            }
        }
        if term.exit_requested() {
            break;
        }
    }
    out.flush()?;
    Ok(())
}
