// CLASSIFICATION: COMMUNITY
// Filename: main.rs v2.0
// Date Modified: 2026-10-16
// Author: Lukas Bower

//! Entry point for the termfolio binary.

use termfolio::cli;

fn main() {
    // Logging is set up inside `cli::run` once the log target is known.
    if let Err(err) = cli::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
