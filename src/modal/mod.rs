// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-10-14

//! Overlay surfaces opened by terminal commands.
//!
//! A [`Modal`] is a type tag plus its payload. It is visible while the
//! terminal holds it; `Esc` drops it. Keys other than `Esc` are routed here
//! while it is open.

pub mod assistant;
pub mod dashboard;
pub mod history_view;
pub mod sql_session;

use std::fmt;

use crate::content::{Certification, ChartKind, Project, QaPair};
use crate::shell::keys::Key;

pub use assistant::{ChatMessage, ChatSession, Sender};
pub use dashboard::{Dashboard, SortOrder};
pub use history_view::HistoryView;
pub use sql_session::{QueryOutcome, SqlSession};

pub const ANALYZE_TITLE: &str = "Analyze";
pub const ANALYZE_TEXT: &str =
    "Analysis tools coming soon! This will run the AI assistant for deeper insights.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Text,
    Chart,
    Image,
    Dashboard,
    AiAssistant,
    SqlSimulator,
}

impl ModalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ModalKind::Text => "text",
            ModalKind::Chart => "chart",
            ModalKind::Image => "image",
            ModalKind::Dashboard => "dashboard",
            ModalKind::AiAssistant => "ai_assistant",
            ModalKind::SqlSimulator => "sql_simulator",
        }
    }
}

impl fmt::Display for ModalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub enum Modal {
    Text { title: String, content: String },
    Chart(Project),
    Image(Certification),
    Dashboard(Dashboard),
    AiAssistant(ChatSession),
    SqlSimulator(SqlSession),
}

/// Follow-up requested by a modal key press.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalAction {
    None,
    /// Replace the current modal with this project's chart.
    OpenProject(Project),
}

impl Modal {
    pub fn kind(&self) -> ModalKind {
        match self {
            Modal::Text { .. } => ModalKind::Text,
            Modal::Chart(_) => ModalKind::Chart,
            Modal::Image(_) => ModalKind::Image,
            Modal::Dashboard(_) => ModalKind::Dashboard,
            Modal::AiAssistant(_) => ModalKind::AiAssistant,
            Modal::SqlSimulator(_) => ModalKind::SqlSimulator,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Modal::Text { title, .. } => title,
            Modal::Chart(p) => &p.title,
            Modal::Image(c) => &c.title,
            Modal::Dashboard(_) => "Project Dashboard",
            Modal::AiAssistant(_) => "AI Assistant",
            Modal::SqlSimulator(_) => "SQL Simulator",
        }
    }

    pub fn handle_key(&mut self, key: Key, answers: &[QaPair]) -> ModalAction {
        match self {
            Modal::Dashboard(d) => match key {
                Key::Down | Key::Right => d.focus_next(),
                Key::Up | Key::Left => d.focus_prev(),
                Key::Char('f') => d.cycle_filter(),
                Key::Char('s') => d.cycle_sort(),
                Key::Enter => {
                    if let Some(project) = d.focused() {
                        return ModalAction::OpenProject(project.clone());
                    }
                }
                _ => {}
            },
            Modal::AiAssistant(chat) => match key {
                Key::Char(c) => chat.input.push(c),
                Key::Backspace => {
                    chat.input.pop();
                }
                Key::Enter => {
                    chat.submit(answers);
                }
                _ => {}
            },
            Modal::SqlSimulator(session) => match key {
                Key::Char(c) => session.query.push(c),
                Key::Backspace => {
                    session.query.pop();
                }
                Key::Enter => {
                    session.run();
                }
                _ => {}
            },
            Modal::Text { .. } | Modal::Chart(_) | Modal::Image(_) => {}
        }
        ModalAction::None
    }

    /// Plain-text rendering used outside the full-screen UI.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = vec![format!("[{}] {}", self.kind(), self.title())];
        match self {
            Modal::Text { content, .. } => lines.extend(content.lines().map(String::from)),
            Modal::Chart(p) => {
                lines.push(p.description.clone());
                lines.push(format!("Chart: {}", chart_name(p.chart)));
                lines.extend(p.metrics.iter().map(|(k, v)| format!("{}: {}", k, v)));
            }
            Modal::Image(c) => {
                lines.push(c.issuer.clone());
                lines.push(format!("Image: {}", c.image));
            }
            Modal::Dashboard(d) => {
                let summary = d
                    .summary()
                    .iter()
                    .map(|(name, v)| format!("{}: {:.2}", name, v))
                    .collect::<Vec<_>>()
                    .join(" | ");
                lines.push(summary);
                lines.push(format!("Filter: {}  Sort: {}", d.filter(), d.sort().label()));
                for p in d.visible() {
                    lines.push(format!("- {} [{}]", p.title, p.tech.join(", ")));
                }
            }
            Modal::AiAssistant(chat) => {
                for m in chat.messages() {
                    let who = match m.sender {
                        Sender::Ai => "AI",
                        Sender::User => "You",
                    };
                    lines.push(format!("{}: {}", who, m.message));
                }
            }
            Modal::SqlSimulator(session) => {
                if let Some(err) = session.init_error() {
                    lines.push(err.to_string());
                }
                match session.outcome() {
                    Some(QueryOutcome::Error(err)) => lines.push(err.clone()),
                    Some(QueryOutcome::Rows(_)) => match session.first_result() {
                        Some(set) => {
                            lines.push(set.columns.join(" | "));
                            for row in &set.rows {
                                let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
                                lines.push(cells.join(" | "));
                            }
                        }
                        None => lines.push(sql_session::NO_RESULTS.to_string()),
                    },
                    None => {}
                }
            }
        }
        lines
    }
}

pub fn chart_name(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Line => "line",
        ChartKind::Bar => "bar",
        ChartKind::Scatter => "scatter",
    }
}
