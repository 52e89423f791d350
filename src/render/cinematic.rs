// CLASSIFICATION: COMMUNITY
// Filename: cinematic.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-12

//! The staged `open about.txt` sequence.
//!
//! `Initial -> AccessGranted -> Typing -> Complete`, each transition gated by
//! a fixed delay rather than by the previous stage finishing its drawing.

use std::time::Duration;

use crate::shell::effect::Cue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Initial,
    AccessGranted,
    Typing,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CinematicTimings {
    pub initial: Duration,
    pub access: Duration,
    pub per_char: Duration,
}

impl Default for CinematicTimings {
    fn default() -> Self {
        Self {
            initial: Duration::from_millis(500),
            access: Duration::from_millis(1000),
            per_char: Duration::from_millis(50),
        }
    }
}

pub const LOADING_TEXT: &str = "Loading...";
pub const ACCESS_TEXT: &str = "ACCESS GRANTED";

#[derive(Debug, Clone)]
pub struct AboutSequence {
    text: String,
    timings: CinematicTimings,
    stage: Stage,
    in_stage: Duration,
    revealed: usize,
    total: usize,
}

impl AboutSequence {
    pub fn new(text: String, timings: CinematicTimings) -> Self {
        let total = text.chars().count();
        Self {
            text,
            timings,
            stage: Stage::Initial,
            in_stage: Duration::ZERO,
            revealed: 0,
            total,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn is_complete(&self) -> bool {
        self.stage == Stage::Complete
    }

    /// Advance by `dt`; returns the sound cues fired along the way.
    pub fn advance(&mut self, dt: Duration) -> Vec<Cue> {
        let mut cues = Vec::new();
        self.in_stage += dt;
        loop {
            match self.stage {
                Stage::Initial if self.in_stage >= self.timings.initial => {
                    self.in_stage -= self.timings.initial;
                    self.stage = Stage::AccessGranted;
                    cues.push(Cue::Glitch);
                }
                Stage::AccessGranted if self.in_stage >= self.timings.access => {
                    self.in_stage -= self.timings.access;
                    self.stage = Stage::Typing;
                }
                Stage::Typing if self.revealed >= self.total => {
                    self.stage = Stage::Complete;
                    self.in_stage = Duration::ZERO;
                }
                Stage::Typing if self.in_stage >= self.timings.per_char => {
                    self.in_stage -= self.timings.per_char;
                    self.revealed += 1;
                    cues.push(Cue::Blip);
                }
                Stage::Typing if self.timings.per_char.is_zero() => {
                    self.revealed = self.total;
                }
                _ => break,
            }
        }
        cues
    }

    /// Jump straight to the end.
    pub fn skip(&mut self) {
        self.stage = Stage::Complete;
        self.revealed = self.total;
        self.in_stage = Duration::ZERO;
    }

    /// What the stage currently shows.
    pub fn display(&self) -> &str {
        match self.stage {
            Stage::Initial => LOADING_TEXT,
            Stage::AccessGranted => ACCESS_TEXT,
            Stage::Typing => {
                let cut = self
                    .text
                    .char_indices()
                    .nth(self.revealed)
                    .map(|(i, _)| i)
                    .unwrap_or(self.text.len());
                &self.text[..cut]
            }
            Stage::Complete => &self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn stages_follow_fixed_delays() {
        let mut seq = AboutSequence::new("hey".into(), CinematicTimings::default());
        assert_eq!(seq.display(), LOADING_TEXT);
        assert!(seq.advance(ms(499)).is_empty());
        assert_eq!(seq.stage(), Stage::Initial);
        assert_eq!(seq.advance(ms(1)), [Cue::Glitch]);
        assert_eq!(seq.display(), ACCESS_TEXT);
        seq.advance(ms(1000));
        assert_eq!(seq.stage(), Stage::Typing);
        assert_eq!(seq.display(), "");
        assert_eq!(seq.advance(ms(100)), [Cue::Blip, Cue::Blip]);
        assert_eq!(seq.display(), "he");
        seq.advance(ms(50));
        assert!(seq.is_complete());
        assert_eq!(seq.display(), "hey");
    }

    #[test]
    fn large_step_runs_to_completion() {
        let mut seq = AboutSequence::new("ab".into(), CinematicTimings::default());
        let cues = seq.advance(ms(10_000));
        assert!(seq.is_complete());
        assert_eq!(cues, [Cue::Glitch, Cue::Blip, Cue::Blip]);
    }
}
