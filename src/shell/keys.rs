// CLASSIFICATION: COMMUNITY
// Filename: keys.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-10

/// Keys the interpreter reacts to, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    Esc,
    Up,
    Down,
    Left,
    Right,
}
