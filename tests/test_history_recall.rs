// CLASSIFICATION: COMMUNITY
// Filename: test_history_recall.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-16

mod common;

use common::terminal;
use termfolio::shell::Key;
use termfolio::Terminal;

fn type_line(term: &mut Terminal, line: &str) {
    for c in line.chars() {
        term.handle_key(Key::Char(c));
    }
    term.handle_key(Key::Enter);
}

#[test]
fn up_and_down_walk_history() {
    let mut term = terminal();
    for cmd in ["ls", "help", "stats"] {
        type_line(&mut term, cmd);
    }
    term.handle_key(Key::Up);
    assert_eq!(term.input(), "stats");
    term.handle_key(Key::Up);
    assert_eq!(term.input(), "help");
    term.handle_key(Key::Down);
    assert_eq!(term.input(), "stats");
    term.handle_key(Key::Down);
    assert_eq!(term.input(), "");
}

#[test]
fn recall_clamps_at_oldest() {
    let mut term = terminal();
    type_line(&mut term, "ls");
    type_line(&mut term, "help");
    for _ in 0..5 {
        term.handle_key(Key::Up);
    }
    assert_eq!(term.input(), "ls");
}

#[test]
fn down_on_a_fresh_line_keeps_typed_text() {
    let mut term = terminal();
    type_line(&mut term, "ls");
    term.set_input("he");
    term.handle_key(Key::Down);
    assert_eq!(term.input(), "he");
}

#[test]
fn running_a_command_resets_the_cursor() {
    let mut term = terminal();
    type_line(&mut term, "ls");
    type_line(&mut term, "help");
    term.handle_key(Key::Up);
    term.handle_key(Key::Up);
    term.handle_key(Key::Enter);
    assert_eq!(term.history().entries(), ["ls", "help", "ls"]);
    term.handle_key(Key::Up);
    assert_eq!(term.input(), "ls");
    term.handle_key(Key::Up);
    assert_eq!(term.input(), "help");
}

#[test]
fn tab_completes_first_match() {
    let mut term = terminal();
    term.set_input("da");
    term.handle_key(Key::Tab);
    assert_eq!(term.input(), "dashboard");
    term.set_input("zz");
    term.handle_key(Key::Tab);
    assert_eq!(term.input(), "zz");
}

#[test]
fn backspace_edits_the_line() {
    let mut term = terminal();
    type_line(&mut term, "");
    term.handle_key(Key::Char('l'));
    term.handle_key(Key::Char('x'));
    term.handle_key(Key::Backspace);
    term.handle_key(Key::Char('s'));
    assert_eq!(term.input(), "ls");
    assert!(term.history().is_empty());
}

#[test]
fn history_view_opens_and_clamps() {
    let mut term = terminal();
    type_line(&mut term, "ls");
    type_line(&mut term, "history");
    assert!(term.history_view().is_some());

    // typing goes nowhere while the view is open
    term.handle_key(Key::Char('x'));
    assert_eq!(term.input(), "");

    for _ in 0..4 {
        term.handle_key(Key::Down);
    }
    assert_eq!(term.history_view().and_then(|v| v.focus()), Some(1));
    term.handle_key(Key::Esc);
    assert!(term.history_view().is_none());
}
