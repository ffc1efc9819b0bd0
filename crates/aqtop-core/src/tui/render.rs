//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use super::state::{AppState, PopupState, Tab};
use super::widgets::{
    render_dashboard, render_footer, render_header, render_help, render_pollution,
    render_quit_confirm, render_rag, render_recommendations, render_sheets,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Main layout: header, content, footer
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(10),   // Content area
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_content(frame, chunks[1], state);
    render_footer(frame, chunks[2], state);

    // Popups (rendered last to overlay everything).
    match &state.popup {
        PopupState::Help { scroll } => render_help(frame, *scroll),
        PopupState::QuitConfirm => render_quit_confirm(frame),
        PopupState::None => {}
    }
}

/// Renders content based on current tab.
fn render_content(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.current_tab {
        Tab::Dashboard => render_dashboard(frame, area, state),
        Tab::Pollution => render_pollution(frame, area, state),
        Tab::Recommendations => render_recommendations(frame, area, state),
        Tab::Data => render_sheets(frame, area, state),
        Tab::Ai => render_rag(frame, area, state),
    }
}
