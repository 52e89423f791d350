// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v2.0
// Date Modified: 2026-10-16
// Author: Lukas Bower

//! Root library for termfolio, a portfolio presented as a terminal.

/// CLI interface and binary entry
pub mod cli;

/// Layered runtime configuration
pub mod config;

/// Static portfolio content and its loader
pub mod content;

/// Download side channel
pub mod download;

/// Read-only virtual filesystem
pub mod fs;

/// Dialog overlays opened by commands
pub mod modal;

/// Typewriter and about-sequence timing
pub mod render;

/// The command interpreter
pub mod shell;

/// SQL simulator engine seam
pub mod sql;

/// ratatui front end
pub mod ui;

pub use content::Content;
pub use shell::{Terminal, TerminalOptions};
