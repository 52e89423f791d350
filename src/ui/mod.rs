// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-10-16

//! Full-screen front end: welcome splash, then the terminal loop.
//!
//! Keys are forwarded to [`Terminal::handle_key`], the clock advances by the
//! measured frame time, and queued effects are drained after every frame.

pub mod draw;

use std::io::{self, IsTerminal, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::{info, warn};
use ratatui::backend::CrosstermBackend;

use crate::config::TermConfig;
use crate::download::Downloader;
use crate::shell::{Cue, Effect, Key, Terminal};

type Backend = ratatui::Terminal<CrosstermBackend<Stdout>>;

const MIN_TICK: Duration = Duration::from_millis(16);
const IDLE_TICK: Duration = Duration::from_millis(50);

/// Restores the host terminal even when the loop bails out.
struct ScreenGuard;

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        disable_raw_mode().ok();
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen).ok();
    }
}

pub fn run(term: Terminal, cfg: &TermConfig, downloader: Downloader) -> anyhow::Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("the interactive UI needs a TTY; use --exec for scripted runs");
    }

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    let guard = ScreenGuard;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alternate screen")?;
    let mut screen = ratatui::Terminal::new(CrosstermBackend::new(stdout)).context("create terminal")?;
    screen.clear().ok();

    let mut session = Session {
        term,
        downloader,
        sound: cfg.sound,
    };
    let res = if !cfg.welcome || session.welcome(&mut screen)? {
        session.run_loop(&mut screen, tick_interval(cfg))
    } else {
        Ok(())
    };

    drop(guard);
    screen.show_cursor().ok();
    info!("ui closed");
    res
}

fn tick_interval(cfg: &TermConfig) -> Duration {
    match cfg.typing_interval() {
        d if d.is_zero() => IDLE_TICK,
        d => d.max(MIN_TICK),
    }
}

struct Session {
    term: Terminal,
    downloader: Downloader,
    sound: bool,
}

impl Session {
    /// Returns false if the user quit from the splash.
    fn welcome(&mut self, screen: &mut Backend) -> anyhow::Result<bool> {
        loop {
            screen.draw(|f| draw::welcome(f, &self.term)).context("draw")?;
            if let Event::Key(k) = event::read().context("read event")? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match k.code {
                    KeyCode::Enter => return Ok(true),
                    KeyCode::Esc => return Ok(false),
                    KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(false)
                    }
                    KeyCode::Char('t') => {
                        let next = self.term.theme().toggled();
                        self.term.set_theme(next);
                    }
                    _ => {}
                }
            }
        }
    }

    fn run_loop(&mut self, screen: &mut Backend, tick: Duration) -> anyhow::Result<()> {
        let mut last = Instant::now();
        loop {
            self.drain_effects();
            screen.draw(|f| draw::terminal(f, &self.term)).context("draw")?;
            if self.term.exit_requested() {
                return Ok(());
            }

            if event::poll(tick).context("poll")? {
                match event::read().context("read event")? {
                    Event::Key(k) if k.kind == KeyEventKind::Press => {
                        if is_interrupt(&k) {
                            return Ok(());
                        }
                        if let Some(key) = map_key(&k) {
                            self.term.handle_key(key);
                        }
                    }
                    Event::Mouse(m) if m.kind == MouseEventKind::Down(MouseButton::Left) => {
                        let idle = self.term.modal().is_none()
                            && self.term.history_view().is_none()
                            && self.term.about().is_none();
                        if idle && m.row == draw::COMMAND_BAR_ROW {
                            if let Some(cmd) = draw::command_at(m.column) {
                                self.term.click_command(cmd);
                            }
                        }
                    }
                    _ => {}
                }
            }

            let now = Instant::now();
            self.term.tick(now - last);
            last = now;
        }
    }

    fn drain_effects(&mut self) {
        for effect in self.term.drain_effects() {
            match effect {
                Effect::Sound(Cue::AmbientHum) => {
                    if self.sound {
                        warn!("no looping audio output in a terminal");
                        self.term.report_audio_failure();
                    }
                }
                Effect::Sound(_) => {
                    if self.sound {
                        bell();
                    }
                }
                Effect::Download(req) => {
                    if let Err(err) = self.downloader.save(&req, self.term.content()) {
                        warn!("download of {} failed: {}", req.file_name, err);
                    }
                }
            }
        }
    }
}

fn bell() {
    let mut out = io::stdout();
    if let Err(err) = out.write_all(b"\x07").and_then(|_| out.flush()) {
        warn!("bell failed: {}", err);
    }
}

fn is_interrupt(k: &KeyEvent) -> bool {
    matches!(k.code, KeyCode::Char('c') | KeyCode::Char('d'))
        && k.modifiers.contains(KeyModifiers::CONTROL)
}

/// Translate a crossterm key; control chords other than Ctrl-C are dropped.
pub fn map_key(k: &KeyEvent) -> Option<Key> {
    if k.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    Some(match k.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::Esc => Key::Esc,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        _ => return None,
    })
}
