//! Footer widget with per-tab key hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, Tab};
use crate::tui::style::Styles;

/// Renders the one-line key hint bar.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let tab_hints = match state.current_tab {
        Tab::Dashboard => "r refresh  s status  a alerts",
        Tab::Pollution => "e days  Enter analyze",
        Tab::Recommendations => "u user  y industry  g general  i industrial  e question  m ask",
        Tab::Data => "n info  d rows  l limit  e filter  f query",
        Tab::Ai => "t stats  e query  k neighbors  Enter ask  x reindex",
    };
    let hints = format!(" {}  │  1-5 tabs  ? help  q quit", tab_hints);
    frame.render_widget(Paragraph::new(hints).style(Styles::dim()), area);
}
