//! Header widget showing time, tabs, page title, and the edit buffer.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode, Tab};
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(20), // Time
        Constraint::Min(26),    // Tabs
        Constraint::Length(22), // Page title
        Constraint::Length(34), // Edit input echo
    ])
    .split(area);

    // Time
    let time_str = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    frame.render_widget(Paragraph::new(time_str).style(Styles::header()), chunks[0]);

    // Tabs
    let tabs: Vec<Span> = Tab::all()
        .iter()
        .enumerate()
        .flat_map(|(i, tab)| {
            let style = if *tab == state.current_tab {
                Styles::tab_active()
            } else {
                Styles::tab_inactive()
            };
            let num = format!(" {}:", i + 1);
            let name = format!("{} ", tab.name());
            vec![Span::styled(num, Styles::dim()), Span::styled(name, style)]
        })
        .collect();
    let tabs_widget = Paragraph::new(Line::from(tabs)).style(Styles::header());
    frame.render_widget(tabs_widget, chunks[1]);

    // Page title
    let title = Paragraph::new(state.current_tab.title()).style(Styles::header());
    frame.render_widget(title, chunks[2]);

    // Edit input echo
    let (text, style) = match state.input_mode {
        InputMode::Edit(field) => (
            format!("{}: {}█", field.label(), state.edit_input),
            Styles::edit_input(),
        ),
        InputMode::Normal => (String::new(), Styles::header()),
    };
    frame.render_widget(Paragraph::new(text).style(style), chunks[3]);
}
