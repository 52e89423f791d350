// CLASSIFICATION: COMMUNITY
// Filename: test_about_sequence.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-16

mod common;

use std::time::Duration;

use common::{init_logging, terminal};
use termfolio::render::Stage;
use termfolio::shell::{Cue, Effect, Key};
use termfolio::{Content, Terminal, TerminalOptions};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn stage(term: &Terminal) -> Option<Stage> {
    term.about().map(|a| a.stage())
}

#[test]
fn stages_follow_fixed_delays() {
    let mut term = terminal();
    term.execute("open about.txt");
    assert!(term.output().is_empty(), "open about.txt clears without echo");
    assert_eq!(stage(&term), Some(Stage::Initial));
    assert_eq!(term.about().map(|a| a.display()), Some("Loading..."));

    term.tick(ms(499));
    assert_eq!(stage(&term), Some(Stage::Initial));
    term.drain_effects();
    term.tick(ms(1));
    assert_eq!(stage(&term), Some(Stage::AccessGranted));
    assert_eq!(term.drain_effects(), [Effect::Sound(Cue::Glitch)]);
    assert_eq!(term.about().map(|a| a.display()), Some("ACCESS GRANTED"));

    term.tick(ms(999));
    assert_eq!(stage(&term), Some(Stage::AccessGranted));
    term.tick(ms(1));
    assert_eq!(stage(&term), Some(Stage::Typing));

    term.tick(ms(150));
    assert_eq!(term.about().map(|a| a.display()), Some("Ale"));
    assert_eq!(term.drain_effects().len(), 3);
}

#[test]
fn completion_leaves_exactly_the_about_text() {
    let mut term = terminal();
    let text = term.content().about_text();
    term.execute("help");
    term.execute("open about.txt");
    let chars = text.chars().count() as u64;
    term.tick(ms(1500 + 50 * chars + 50));
    assert!(term.about().is_none());
    assert_eq!(term.output(), [text.clone()]);
    assert!(!term.is_revealing());
    assert_eq!(term.visible_output(), [text.as_str()]);
}

#[test]
fn about_text_layout() {
    let content = Content::builtin().unwrap();
    assert_eq!(
        content.about_text(),
        "Alex Kimani\n\
         I build data-driven web products, from the model to the dashboard.\n\
         \n\
         Education:\n\
         BSc Computer Science - University of Nairobi (2018 - 2022)\n\
         Data Science Nanodegree - Udacity (2023)\n\
         \n\
         Target Roles:\n\
         Data Scientist\n\
         Fullstack Engineer\n\
         Machine Learning Engineer"
    );
}

#[test]
fn keys_are_ignored_while_running() {
    let mut term = terminal();
    term.execute("open about.txt");
    term.handle_key(Key::Char('l'));
    term.handle_key(Key::Enter);
    assert_eq!(term.input(), "");
    assert_eq!(term.history().len(), 1);
    term.settle();
    assert!(term.about().is_none());
    term.handle_key(Key::Char('l'));
    assert_eq!(term.input(), "l");
}

#[test]
fn about_works_from_any_directory() {
    let mut term = terminal();
    term.execute("cd projects");
    term.execute("open about.txt");
    assert_eq!(stage(&term), Some(Stage::Initial));
}

#[test]
fn typewriter_reveals_newest_line() {
    init_logging();
    let mut term = Terminal::new(
        Content::builtin().unwrap(),
        TerminalOptions {
            typing_interval: ms(50),
            ..TerminalOptions::default()
        },
    );
    term.settle();
    term.execute("theme");
    // "> theme" is complete, the newest line is still hidden
    let visible = term.visible_output();
    assert_eq!(visible[visible.len() - 2], "> theme");
    assert_eq!(visible[visible.len() - 1], "");

    term.tick(ms(200));
    assert_eq!(term.visible_output().last().copied(), Some("Them"));

    // a new command snaps the old line and restarts on the new newest
    term.execute("theme");
    let visible = term.visible_output();
    assert_eq!(visible[visible.len() - 3], "Theme switched to light mode.");
    assert_eq!(visible[visible.len() - 1], "");
    assert!(term.is_revealing());

    term.settle();
    assert_eq!(
        term.visible_output().last().copied(),
        Some("Theme switched to dark mode.")
    );
}
