// CLASSIFICATION: COMMUNITY
// Filename: draw.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-10-16

//! Frame rendering for the terminal, its modals and the welcome splash.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, BarChart, Block, Borders, Cell, Chart, Clear, Dataset, GraphType, List, ListItem,
    ListState, Paragraph, Row, Table, Wrap,
};
use ratatui::Frame;

use crate::modal::{chart_name, Modal, QueryOutcome, Sender};
use crate::content::{ChartKind, Project};
use crate::shell::complete::COMMAND_BAR;
use crate::shell::{Terminal, Theme};

/// Row of the clickable command bar.
pub const COMMAND_BAR_ROW: u16 = 1;
const COMMAND_GAP: u16 = 2;

#[derive(Debug, Clone, Copy)]
struct Palette {
    base: Style,
    accent: Style,
    dim: Style,
    focus: Style,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            base: Style::default().fg(Color::Green).bg(Color::Black),
            accent: Style::default().fg(Color::LightGreen).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::DarkGray),
            focus: Style::default().fg(Color::Black).bg(Color::Green),
        },
        Theme::Light => Palette {
            base: Style::default().fg(Color::Black).bg(Color::White),
            accent: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Gray),
            focus: Style::default().fg(Color::White).bg(Color::Blue),
        },
    }
}

/// Command-bar entry under `column`, if any.
pub fn command_at(column: u16) -> Option<&'static str> {
    let mut x = 1u16;
    for cmd in COMMAND_BAR {
        let width = cmd.len() as u16;
        if column >= x && column < x + width {
            return Some(cmd);
        }
        x += width + COMMAND_GAP;
    }
    None
}

pub fn welcome(frame: &mut Frame, term: &Terminal) {
    let p = palette(term.theme());
    let area = frame.area();
    let about = &term.content().about;
    let lines = vec![
        Line::from(Span::styled(about.name.clone(), p.accent)),
        Line::from(about.title.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: start   t: toggle theme   Esc: quit",
            p.dim,
        )),
    ];
    let height = lines.len() as u16;
    let top = area.height.saturating_sub(height) / 2;
    let inner = Rect::new(area.x, area.y + top, area.width, height.min(area.height));
    frame.render_widget(Block::default().style(p.base), area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).style(p.base),
        inner,
    );
}

pub fn terminal(frame: &mut Frame, term: &Terminal) {
    let p = palette(term.theme());
    let area = frame.area();
    frame.render_widget(Block::default().style(p.base), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let status = format!(
        " {}  {}  theme: {}  Esc closes dialogs, Ctrl-C quits",
        term.prompt().trim_end(),
        term.path(),
        term.theme()
    );
    frame.render_widget(Paragraph::new(status).style(p.dim), rows[0]);

    let mut bar = vec![Span::raw(" ")];
    for cmd in COMMAND_BAR {
        bar.push(Span::styled(*cmd, p.accent));
        bar.push(Span::raw(" ".repeat(COMMAND_GAP as usize)));
    }
    frame.render_widget(Paragraph::new(Line::from(bar)), rows[COMMAND_BAR_ROW as usize]);

    output_pane(frame, term, rows[2], p);

    let input = if term.about().is_some() {
        Line::from("")
    } else {
        Line::from(vec![
            Span::styled(term.prompt().to_string(), p.accent),
            Span::raw(term.input().to_string()),
            Span::raw("█"),
        ])
    };
    frame.render_widget(Paragraph::new(input), rows[3]);

    if let Some(modal) = term.modal() {
        modal_overlay(frame, modal, p);
    }
    if let Some(view) = term.history_view() {
        let popup = centered(area, 60, 60);
        frame.render_widget(Clear, popup);
        let items: Vec<ListItem> = term
            .history()
            .entries()
            .iter()
            .enumerate()
            .map(|(i, e)| ListItem::new(format!("{:>4}  {}", i + 1, e)))
            .collect();
        let mut state = ListState::default();
        state.select(view.focus());
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" History (Esc to close) "),
            )
            .style(p.base)
            .highlight_style(p.focus);
        frame.render_stateful_widget(list, popup, &mut state);
    }
}

fn output_pane(frame: &mut Frame, term: &Terminal, area: Rect, p: Palette) {
    let lines: Vec<Line> = match term.about() {
        Some(seq) => seq
            .display()
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), p.accent)))
            .collect(),
        None => term
            .visible_output()
            .iter()
            .flat_map(|entry| entry.split('\n'))
            .map(|l| Line::from(l.to_string()))
            .collect(),
    };
    let width = area.width.max(1) as usize;
    let rendered: usize = lines
        .iter()
        .map(|l| l.width().max(1).div_ceil(width))
        .sum();
    let offset = rendered.saturating_sub(area.height as usize) as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0)),
        area,
    );
}

fn modal_overlay(frame: &mut Frame, modal: &Modal, p: Palette) {
    let popup = centered(frame.area(), 75, 70);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", modal.title()))
        .title_bottom(Line::from(" Esc to close ").alignment(Alignment::Right))
        .style(p.base);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    match modal {
        Modal::Text { content, .. } => {
            frame.render_widget(Paragraph::new(content.as_str()).wrap(Wrap { trim: false }), inner);
        }
        Modal::Chart(project) => chart(frame, project, inner, p),
        Modal::Image(cert) => {
            let lines = vec![
                Line::from(Span::styled(cert.title.clone(), p.accent)),
                Line::from(cert.issuer.clone()),
                Line::from(""),
                Line::from(format!("Image: {}", cert.image)),
            ];
            frame.render_widget(Paragraph::new(lines), inner);
        }
        Modal::Dashboard(d) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(inner);
            let summary = d
                .summary()
                .iter()
                .map(|(name, v)| format!("{}: {:.2}", name, v))
                .collect::<Vec<_>>()
                .join("   ");
            frame.render_widget(Paragraph::new(Span::styled(summary, p.accent)), rows[0]);
            frame.render_widget(
                Paragraph::new(format!("Filter: {}   Sort: {}", d.filter(), d.sort().label())),
                rows[1],
            );
            let items: Vec<ListItem> = d
                .visible()
                .iter()
                .map(|pr| {
                    let date = pr.date.map(|day| day.to_string()).unwrap_or_default();
                    ListItem::new(format!("{:<28} {:<10} {}", pr.title, date, pr.tech.join(", ")))
                })
                .collect();
            let mut state = ListState::default();
            state.select(d.focus());
            frame.render_stateful_widget(List::new(items).highlight_style(p.focus), rows[2], &mut state);
            frame.render_widget(
                Paragraph::new(Span::styled("arrows move  f filter  s sort  Enter open", p.dim)),
                rows[3],
            );
        }
        Modal::AiAssistant(chat) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(inner);
            let lines: Vec<Line> = chat
                .messages()
                .iter()
                .map(|m| match m.sender {
                    Sender::Ai => Line::from(vec![Span::styled("AI: ", p.accent), Span::raw(m.message.clone())]),
                    Sender::User => Line::from(format!("You: {}", m.message)),
                })
                .collect();
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), rows[0]);
            frame.render_widget(Paragraph::new(format!("> {}█", chat.input)), rows[1]);
        }
        Modal::SqlSimulator(session) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
                .split(inner);
            frame.render_widget(Paragraph::new(format!("sql> {}█", session.query)), rows[0]);
            frame.render_widget(
                Paragraph::new(Span::styled("Enter runs the query", p.dim)),
                rows[1],
            );
            if let Some(err) = session.init_error() {
                frame.render_widget(Paragraph::new(err.to_string()), rows[2]);
                return;
            }
            match session.outcome() {
                Some(QueryOutcome::Error(err)) => {
                    frame.render_widget(Paragraph::new(err.clone()).wrap(Wrap { trim: false }), rows[2]);
                }
                Some(QueryOutcome::Rows(_)) => match session.first_result() {
                    Some(set) => {
                        let header = Row::new(set.columns.iter().map(|c| Cell::from(c.clone())))
                            .style(p.accent);
                        let body = set
                            .rows
                            .iter()
                            .map(|r| Row::new(r.iter().map(|v| Cell::from(v.to_string()))));
                        let widths = vec![Constraint::Min(8); set.columns.len().max(1)];
                        frame.render_widget(Table::new(body, widths).header(header), rows[2]);
                    }
                    None => frame.render_widget(
                        Paragraph::new(crate::modal::sql_session::NO_RESULTS),
                        rows[2],
                    ),
                },
                None => {}
            }
        }
    }
}

fn chart(frame: &mut Frame, project: &Project, area: Rect, p: Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);
    frame.render_widget(
        Paragraph::new(format!("{} ({} chart)", project.description, chart_name(project.chart)))
            .wrap(Wrap { trim: true }),
        rows[0],
    );

    match project.chart {
        ChartKind::Bar => {
            let bars: Vec<(&str, u64)> = project
                .metrics
                .iter()
                .map(|(name, v)| (name, (v * 100.0).round().max(0.0) as u64))
                .collect();
            let widget = BarChart::default()
                .data(bars.as_slice())
                .bar_width(9)
                .bar_gap(2)
                .bar_style(p.accent)
                .max(100);
            frame.render_widget(widget, rows[1]);
        }
        ChartKind::Line | ChartKind::Scatter => {
            let points: Vec<(f64, f64)> = project
                .metrics
                .values()
                .enumerate()
                .map(|(i, v)| (i as f64, *v))
                .collect();
            let graph = match project.chart {
                ChartKind::Scatter => GraphType::Scatter,
                _ => GraphType::Line,
            };
            let dataset = Dataset::default()
                .name(project.title.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(graph)
                .style(p.accent)
                .data(&points);
            let names: Vec<Span> = project
                .metrics
                .keys()
                .map(|k| Span::raw(k.to_string()))
                .collect();
            let x_max = points.len().saturating_sub(1).max(1) as f64;
            let widget = Chart::new(vec![dataset])
                .x_axis(Axis::default().bounds([0.0, x_max]).labels(names))
                .y_axis(
                    Axis::default()
                        .bounds([0.0, 1.0])
                        .labels(vec![Span::raw("0.0"), Span::raw("0.5"), Span::raw("1.0")]),
                );
            frame.render_widget(widget, rows[1]);
        }
    }
}

fn centered(area: Rect, pct_x: u16, pct_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - pct_y) / 2),
            Constraint::Percentage(pct_y),
            Constraint::Percentage((100 - pct_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - pct_x) / 2),
            Constraint::Percentage(pct_x),
            Constraint::Percentage((100 - pct_x) / 2),
        ])
        .split(vertical[1])[1]
}
