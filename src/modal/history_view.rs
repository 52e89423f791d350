// CLASSIFICATION: COMMUNITY
// Filename: history_view.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-13

/// Overlay listing past commands. Focus clamps at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryView {
    focus: Option<usize>,
}

impl HistoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.focus = Some(match self.focus {
            Some(i) if i > 0 => i - 1,
            _ => 0,
        });
    }

    pub fn down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.focus = Some(match self.focus {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => len - 1,
            None => 0,
        });
    }
}
