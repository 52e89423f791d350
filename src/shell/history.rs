// CLASSIFICATION: COMMUNITY
// Filename: history.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-10-10

//! Append-only command history with cursor recall.

/// Recorded commands plus a recall cursor counted back from the newest entry.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a command and return the cursor to the fresh line.
    pub fn push(&mut self, cmd: impl Into<String>) {
        self.entries.push(cmd.into());
        self.cursor = None;
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Step one entry older. `None` when already at the oldest entry.
    pub fn older(&mut self) -> Option<&str> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next >= self.entries.len() {
            return None;
        }
        self.cursor = Some(next);
        Some(&self.entries[self.entries.len() - 1 - next])
    }

    /// Step one entry newer. Leaving the newest entry yields `""`;
    /// `None` when already on the fresh line.
    pub fn newer(&mut self) -> Option<&str> {
        match self.cursor? {
            0 => {
                self.cursor = None;
                Some("")
            }
            c => {
                self.cursor = Some(c - 1);
                Some(&self.entries[self.entries.len() - c])
            }
        }
    }
}
