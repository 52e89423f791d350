// CLASSIFICATION: COMMUNITY
// Filename: typewriter.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-10-12

//! Character-by-character reveal of the newest output entry.
//!
//! The renderer never owns the log. It tracks how many entries it has seen
//! and how far into the newest one it is; callers hand the log back in for
//! [`Typewriter::visible`]. Growth restarts the reveal on the new newest
//! entry and shows everything before it in full.

use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct Typewriter {
    interval: Duration,
    seen: usize,
    /// Characters of the newest entry revealed so far; `None` once settled.
    revealed: Option<usize>,
    pending: Duration,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl Typewriter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            seen: 0,
            revealed: None,
            pending: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Observe the current log. Call after every mutation.
    pub fn sync(&mut self, output: &[String]) {
        let len = output.len();
        if len > self.seen {
            self.seen = len;
            self.revealed = if self.interval.is_zero() { None } else { Some(0) };
            self.pending = Duration::ZERO;
        } else if len < self.seen {
            self.settle(output);
        }
    }

    /// Show the current log in full with no reveal in progress.
    pub fn settle(&mut self, output: &[String]) {
        self.seen = output.len();
        self.revealed = None;
        self.pending = Duration::ZERO;
    }

    /// Advance the reveal by `dt`, at most one character per interval.
    pub fn advance(&mut self, dt: Duration, output: &[String]) {
        let Some(revealed) = self.revealed else {
            return;
        };
        let total = output.last().map(|l| l.chars().count()).unwrap_or(0);
        self.pending += dt;
        let mut shown = revealed;
        while shown < total && self.pending >= self.interval {
            self.pending -= self.interval;
            shown += 1;
        }
        if shown >= total {
            self.revealed = None;
            self.pending = Duration::ZERO;
        } else {
            self.revealed = Some(shown);
        }
    }

    pub fn is_revealing(&self) -> bool {
        self.revealed.is_some()
    }

    /// The log as it should currently be drawn.
    pub fn visible<'a>(&self, output: &'a [String]) -> Vec<&'a str> {
        let mut lines: Vec<&str> = output.iter().map(String::as_str).collect();
        if let (Some(n), Some(last)) = (self.revealed, lines.last_mut()) {
            let cut = last.char_indices().nth(n).map(|(i, _)| i).unwrap_or(last.len());
            *last = &last[..cut];
        }
        lines
    }
}
