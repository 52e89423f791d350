// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.4
// Author: Lukas Bower
// Date Modified: 2026-10-16

//! The portfolio command interpreter.
//!
//! [`Terminal`] owns every piece of session state: the output log, the
//! current path, history, the open modal, theme, and queued effects. It is
//! single threaded and time is injected through [`Terminal::tick`], so a
//! front end only has to forward keys, advance the clock and draw.

pub mod commands;
pub mod complete;
pub mod effect;
pub mod format;
pub mod history;
pub mod keys;
pub mod theme;

use std::collections::VecDeque;
use std::time::Duration;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::content::Content;
use crate::fs::FsPath;
use crate::modal::{HistoryView, Modal, ModalAction};
use crate::render::{AboutSequence, CinematicTimings, Typewriter};

pub use effect::{Asset, Cue, Download, Effect};
pub use history::History;
pub use keys::Key;
pub use theme::Theme;

pub const AUDIO_FAILED: &str = "Background audio failed to load. Proceeding without sound.";

/// Construction-time knobs, usually derived from [`crate::config::TermConfig`].
#[derive(Debug, Clone)]
pub struct TerminalOptions {
    pub typing_interval: Duration,
    pub theme: Theme,
    /// Overrides the `<name>@portfolio:~$ ` prompt.
    pub prompt: Option<String>,
    /// Seed for `fortune`; entropy when absent.
    pub seed: Option<u64>,
    pub cinematic: CinematicTimings,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            typing_interval: crate::render::typewriter::DEFAULT_INTERVAL,
            theme: Theme::Dark,
            prompt: None,
            seed: None,
            cinematic: CinematicTimings::default(),
        }
    }
}

pub struct Terminal {
    content: Content,
    path: FsPath,
    output: Vec<String>,
    input: String,
    history: History,
    modal: Option<Modal>,
    history_view: Option<HistoryView>,
    theme: Theme,
    about: Option<AboutSequence>,
    cinematic: CinematicTimings,
    typewriter: Typewriter,
    effects: VecDeque<Effect>,
    rng: SmallRng,
    prompt: String,
    exit_requested: bool,
}

impl Terminal {
    pub fn new(content: Content, opts: TerminalOptions) -> Self {
        let prompt = opts
            .prompt
            .unwrap_or_else(|| format!("{}@portfolio:~$ ", content.about.handle()));
        let rng = match opts.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let mut term = Self {
            output: content.greeting(),
            content,
            path: FsPath::home(),
            input: String::new(),
            history: History::new(),
            modal: None,
            history_view: None,
            theme: opts.theme,
            about: None,
            cinematic: opts.cinematic,
            typewriter: Typewriter::new(opts.typing_interval),
            effects: VecDeque::new(),
            rng,
            prompt,
            exit_requested: false,
        };
        term.typewriter.sync(&term.output);
        term.effects.push_back(Effect::Sound(Cue::AmbientHum));
        term
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// The output log as the typewriter currently reveals it.
    pub fn visible_output(&self) -> Vec<&str> {
        self.typewriter.visible(&self.output)
    }

    pub fn is_revealing(&self) -> bool {
        self.typewriter.is_revealing()
    }

    pub fn path(&self) -> &FsPath {
        &self.path
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn history_view(&self) -> Option<&HistoryView> {
        self.history_view.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Theme change outside the `theme` command (the welcome splash).
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The running about sequence, if any. Input is ignored while it runs.
    pub fn about(&self) -> Option<&AboutSequence> {
        self.about.as_ref()
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    /// Take every queued effect, oldest first.
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        self.effects.drain(..).collect()
    }

    /// Called by the front end when the ambient hum could not be played.
    pub fn report_audio_failure(&mut self) {
        self.append(vec![AUDIO_FAILED.to_string()]);
    }

    pub fn close_modal(&mut self) {
        if let Some(modal) = self.modal.take() {
            debug!("closed {} modal", modal.kind());
        }
    }

    pub fn close_history_view(&mut self) {
        self.history_view = None;
    }

    /// Show `project` in the chart modal, replacing whatever is open.
    pub fn open_project(&mut self, project: crate::content::Project) {
        self.open_modal(Modal::Chart(project));
    }

    /// Command-bar click: put `cmd` on the input line and run it.
    pub fn click_command(&mut self, cmd: &str) {
        self.input = cmd.to_string();
        self.execute(cmd);
        self.input.clear();
    }

    pub fn handle_key(&mut self, key: Key) {
        if self.about.is_some() {
            return;
        }
        if self.history_view.is_some() {
            let len = self.history.len();
            match key {
                Key::Esc => self.history_view = None,
                Key::Up => self.history_view.iter_mut().for_each(|v| v.up(len)),
                Key::Down => self.history_view.iter_mut().for_each(|v| v.down(len)),
                _ => {}
            }
            return;
        }
        if self.modal.is_some() {
            if key == Key::Esc {
                self.close_modal();
                return;
            }
            let action = match self.modal.as_mut() {
                Some(modal) => modal.handle_key(key, &self.content.assistant),
                None => ModalAction::None,
            };
            if let ModalAction::OpenProject(project) = action {
                self.open_project(project);
            }
            return;
        }
        match key {
            Key::Enter => {
                let line = std::mem::take(&mut self.input);
                self.execute(&line);
            }
            Key::Up => {
                if let Some(entry) = self.history.older() {
                    self.input = entry.to_string();
                }
            }
            Key::Down => {
                if let Some(entry) = self.history.newer() {
                    self.input = entry.to_string();
                }
            }
            Key::Tab => {
                if let Some(cmd) = complete::complete(&self.input) {
                    self.input = cmd.to_string();
                }
            }
            Key::Char(c) => {
                self.input.push(c);
                self.effects.push_back(Effect::Sound(Cue::Blip));
            }
            Key::Backspace => {
                self.input.pop();
            }
            Key::Esc | Key::Left | Key::Right => {}
        }
    }

    /// Advance timed presentation state by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(seq) = self.about.as_mut() {
            for cue in seq.advance(dt) {
                self.effects.push_back(Effect::Sound(cue));
            }
            if seq.is_complete() {
                self.finish_about();
            }
        }
        self.typewriter.advance(dt, &self.output);
    }

    /// Finish any running reveal or about sequence immediately.
    pub fn settle(&mut self) {
        if let Some(seq) = self.about.as_mut() {
            seq.skip();
            self.finish_about();
        }
        self.typewriter.settle(&self.output);
    }

    fn append(&mut self, lines: Vec<String>) {
        if lines.is_empty() {
            return;
        }
        self.output.extend(lines);
        self.typewriter.sync(&self.output);
    }

    fn clear_output(&mut self) {
        self.output.clear();
        self.typewriter.settle(&self.output);
    }

    fn open_modal(&mut self, modal: Modal) {
        info!("opened {} modal: {}", modal.kind(), modal.title());
        self.modal = Some(modal);
    }

    fn queue(&mut self, effect: Effect) {
        self.effects.push_back(effect);
    }

    fn start_about(&mut self) {
        self.clear_output();
        let text = self.content.about_text();
        self.about = Some(AboutSequence::new(text, self.cinematic));
        info!("about sequence started");
    }

    fn finish_about(&mut self) {
        if let Some(seq) = self.about.take() {
            self.output = vec![seq.into_text()];
            self.typewriter.settle(&self.output);
            info!("about sequence complete");
        }
    }
}
