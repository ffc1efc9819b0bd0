//! Pollution Analysis tab: analysis window form and report panel.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::api::AnalysisReport;
use crate::fmt;
use crate::tui::state::AppState;
use crate::tui::style::Styles;

use super::panel::render_panel;

/// Renders the Pollution Analysis tab.
pub fn render_pollution(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(8)]).split(area);

    let form = Line::from(vec![
        Span::raw(format!("Analysis window: {} days", state.pollution.days())),
        Span::styled("   (e edit, Enter run)", Styles::dim()),
    ]);
    let form_block = Block::default().borders(Borders::ALL);
    frame.render_widget(Paragraph::new(form).block(form_block), chunks[0]);

    render_panel(
        frame,
        chunks[1],
        "Analysis",
        &state.pollution.report,
        "press Enter to analyze",
        &state.base_url,
        state.spinner_frame,
        report_content,
    );
}

fn report_content(frame: &mut Frame, area: Rect, report: &AnalysisReport) {
    let stats = &report.stats;
    let mut lines = vec![
        Line::styled("Statistics", Styles::heading()),
        Line::from(format!(
            "Average  {:>14}    Maximum  {:>14}",
            fmt::ppm2(stats.average),
            fmt::ppm2(stats.max)
        )),
        Line::from(format!(
            "Minimum  {:>14}    Trend    {:>14}",
            fmt::ppm2(stats.min),
            stats.trend
        )),
        Line::default(),
        Line::styled("Level Distribution", Styles::heading()),
    ];
    for (level, count) in &report.level_distribution {
        lines.push(Line::from(format!("{:<28} {:>6} readings", level, count)));
    }
    frame.render_widget(Paragraph::new(lines), area);
}
