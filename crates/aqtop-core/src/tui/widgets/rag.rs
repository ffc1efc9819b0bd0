//! AI & RAG tab: index stats, reindex report, and query answers.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::api::{RagAnswer, RagStats, ReindexReport};
use crate::tui::state::AppState;
use crate::tui::style::Styles;

use super::panel::render_panel;

/// Renders the AI & RAG tab.
pub fn render_rag(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Form
        Constraint::Length(7), // Stats | Reindex
        Constraint::Min(8),    // Answer
    ])
    .split(area);

    let question = if state.ai.query_input.is_empty() {
        "<none>"
    } else {
        state.ai.query_input.as_str()
    };
    let form = Line::from(format!("Query: {}   k: {}", question, state.ai.k));
    frame.render_widget(
        Paragraph::new(form).block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    let cols =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(chunks[1]);
    render_panel(
        frame,
        cols[0],
        "Index Stats",
        &state.ai.stats,
        "press t to fetch",
        &state.base_url,
        state.spinner_frame,
        stats_content,
    );
    render_panel(
        frame,
        cols[1],
        "Reindex",
        &state.ai.reindex,
        "press x to reindex",
        &state.base_url,
        state.spinner_frame,
        reindex_content,
    );

    render_panel(
        frame,
        chunks[2],
        "Answer",
        &state.ai.answer,
        "press Enter to ask",
        &state.base_url,
        state.spinner_frame,
        answer_content,
    );
}

fn stats_content(frame: &mut Frame, area: Rect, stats: &RagStats) {
    let (chip, chip_style) = if stats.initialized {
        ("Initialized", Styles::ok().add_modifier(Modifier::BOLD))
    } else {
        ("Not Initialized", Styles::error().add_modifier(Modifier::BOLD))
    };
    let lines = vec![
        Line::from(vec![Span::raw("Status        "), Span::styled(chip, chip_style)]),
        Line::from(format!("Documents     {}", stats.document_count)),
        Line::from(format!(
            "Last Updated  {}",
            stats.last_updated.as_deref().unwrap_or("Never")
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn reindex_content(frame: &mut Frame, area: Rect, report: &ReindexReport) {
    let lines = vec![
        Line::from(vec![
            Span::raw("Status     "),
            Span::styled(report.status.clone(), Styles::ok()),
        ]),
        Line::from(format!("Documents  {}", report.document_count)),
        Line::from(report.message.clone()),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn answer_content(frame: &mut Frame, area: Rect, answer: &RagAnswer) {
    let mut lines = vec![Line::from(answer.answer.clone())];
    if !answer.sources.is_empty() {
        lines.push(Line::default());
        lines.push(Line::styled("Relevant Sources", Styles::heading()));
        for (i, source) in answer.sources.iter().enumerate() {
            lines.push(Line::styled(
                format!("{}. {}", i + 1, source),
                Styles::dim(),
            ));
        }
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
