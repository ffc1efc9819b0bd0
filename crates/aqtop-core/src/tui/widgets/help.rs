//! Help popup.

use ratatui::Frame;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::style::Styles;

use super::centered_rect;

/// Renders the help popup over the whole screen.
pub fn render_help(frame: &mut Frame, scroll: usize) {
    let area = centered_rect(56, 22, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::styled("Global", Styles::heading()),
        Line::from("  1-5        switch view"),
        Line::from("  Tab/S-Tab  next / previous view"),
        Line::from("  ?          toggle this help"),
        Line::from("  q          quit (with confirmation)"),
        Line::default(),
        Line::styled("Dashboard", Styles::heading()),
        Line::from("  r          re-probe API and health"),
        Line::from("  s          current pollution status"),
        Line::from("  a          active alerts"),
        Line::default(),
        Line::styled("Pollution Analysis", Styles::heading()),
        Line::from("  e          edit analysis window (days)"),
        Line::from("  Enter      run analysis"),
        Line::default(),
        Line::styled("Recommendations", Styles::heading()),
        Line::from("  u / y      cycle user / industry type"),
        Line::from("  g / i      general / industrial recommendations"),
        Line::from("  e, m       edit question, ask the AI"),
        Line::default(),
        Line::styled("Google Sheets Data", Styles::heading()),
        Line::from("  n / d      sheet info / rows"),
        Line::from("  l / e      edit limit / JSON filter"),
        Line::from("  f          run filter query"),
        Line::default(),
        Line::styled("AI & RAG System", Styles::heading()),
        Line::from("  t          index stats"),
        Line::from("  e / k      edit query / cycle neighbor count"),
        Line::from("  Enter / x  ask / rebuild index"),
        Line::default(),
        Line::from("While editing: Enter submits, Esc cancels."),
    ];

    let popup = Paragraph::new(lines)
        .scroll((scroll as u16, 0))
        .block(Block::default().borders(Borders::ALL).title(" Help "));
    frame.render_widget(popup, area);
}
