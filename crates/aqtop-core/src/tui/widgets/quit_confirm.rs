//! Quit confirmation dialog.

use ratatui::Frame;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::style::Styles;

use super::centered_rect;

/// Renders the quit confirmation popup.
pub fn render_quit_confirm(frame: &mut Frame) {
    let area = centered_rect(30, 5, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from("Quit aqtop?"),
        Line::styled("y: quit    n: stay", Styles::dim()),
    ];
    let popup = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Quit "))
        .centered();
    frame.render_widget(popup, area);
}
