//! Recommendations tab: profile selectors and three result panels.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::api::{Recommendations, SmartAdvice};
use crate::tui::state::AppState;
use crate::tui::style::Styles;

use super::panel::render_panel;

/// Renders the Recommendations tab.
pub fn render_recommendations(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Form
        Constraint::Min(8),    // General | Industrial
        Constraint::Min(7),    // Smart
    ])
    .split(area);

    let recs = &state.recommendations;
    let question = if recs.query_input.is_empty() {
        "<none>"
    } else {
        recs.query_input.as_str()
    };
    let form = Line::from(vec![
        Span::raw(format!(
            "User: {}   Industry: {}   Question: {}",
            recs.user_type.as_str(),
            recs.industry.as_str(),
            question
        )),
    ]);
    frame.render_widget(
        Paragraph::new(form).block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    let cols =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(chunks[1]);
    render_panel(
        frame,
        cols[0],
        "General",
        &recs.general,
        "press g to fetch",
        &state.base_url,
        state.spinner_frame,
        general_content,
    );
    render_panel(
        frame,
        cols[1],
        "Industrial",
        &recs.industrial,
        "press i to fetch",
        &state.base_url,
        state.spinner_frame,
        industrial_content,
    );

    render_panel(
        frame,
        chunks[2],
        "Smart Recommendations",
        &recs.smart,
        "press m to ask",
        &state.base_url,
        state.spinner_frame,
        smart_content,
    );
}

fn bullet_lines(items: &[String]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| Line::from(format!(" • {}", item)))
        .collect()
}

fn general_content(frame: &mut Frame, area: Rect, recs: &Recommendations) {
    let mut lines = Vec::new();
    if !recs.recommendations.is_empty() {
        lines.push(Line::styled("Recommendations", Styles::heading()));
        lines.extend(bullet_lines(&recs.recommendations));
    }
    if !recs.health_advice.is_empty() {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::styled("Health Advice", Styles::heading()));
        lines.extend(bullet_lines(&recs.health_advice));
    }
    if lines.is_empty() {
        lines.push(Line::styled("No recommendations", Styles::dim()));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn industrial_content(frame: &mut Frame, area: Rect, recs: &Recommendations) {
    let mut lines = Vec::new();
    for alert in &recs.industrial_alerts {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", alert.alert_type),
                Styles::error().add_modifier(Modifier::BOLD),
            ),
            Span::raw(alert.message.clone()),
        ]));
    }
    if !recs.recommendations.is_empty() {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::styled("Actions Required", Styles::heading()));
        lines.extend(bullet_lines(&recs.recommendations));
    }
    if lines.is_empty() {
        lines.push(Line::styled("No industrial alerts", Styles::dim()));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn smart_content(frame: &mut Frame, area: Rect, advice: &SmartAdvice) {
    let mut lines = vec![
        Line::styled("AI Response", Styles::heading()),
        Line::from(advice.answer().to_string()),
    ];
    if !advice.relevant_data.is_empty() {
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("Based on {} recent readings", advice.relevant_data.len()),
            Styles::dim(),
        ));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
