// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-16

#![allow(dead_code)]

use std::time::Duration;

use termfolio::shell::Effect;
use termfolio::{Content, Terminal, TerminalOptions};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A terminal over the built-in content with instant typing.
pub fn terminal() -> Terminal {
    init_logging();
    let content = Content::builtin().expect("builtin content");
    let mut term = Terminal::new(
        content,
        TerminalOptions {
            typing_interval: Duration::ZERO,
            seed: Some(7),
            ..TerminalOptions::default()
        },
    );
    term.drain_effects();
    term
}

/// Run `cmd` and return the lines it appended.
pub fn run(term: &mut Terminal, cmd: &str) -> Vec<String> {
    let before = term.output().len();
    term.execute(cmd);
    term.output()[before..].to_vec()
}

pub fn cd(term: &mut Terminal, dirs: &[&str]) {
    for dir in dirs {
        term.execute(&format!("cd {}", dir));
    }
}

pub fn downloads(effects: &[Effect]) -> Vec<&termfolio::shell::Download> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Download(d) => Some(d),
            _ => None,
        })
        .collect()
}
