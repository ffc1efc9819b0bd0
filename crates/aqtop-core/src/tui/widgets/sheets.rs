//! Google Sheets Data tab: row table plus verbatim info/query panels.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use serde_json::Value;

use crate::api::SheetRows;
use crate::fmt;
use crate::tui::state::AppState;
use crate::tui::style::Styles;

use super::panel::render_panel;

/// At most this many columns are shown in the row table.
const MAX_COLUMNS: usize = 6;

/// At most this many rows are shown in the row table.
const MAX_ROWS: usize = 10;

/// Renders the Google Sheets Data tab.
pub fn render_sheets(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Form
        Constraint::Min(10),   // Rows
        Constraint::Min(8),    // Info | Query result
    ])
    .split(area);

    let form = Line::from(format!(
        "Limit: {}   Filter: {}",
        state.data.limit_input, state.data.filter_input
    ));
    frame.render_widget(
        Paragraph::new(form).block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    render_panel(
        frame,
        chunks[1],
        "Rows",
        &state.data.rows,
        "press d to fetch",
        &state.base_url,
        state.spinner_frame,
        rows_content,
    );

    let cols =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(chunks[2]);
    render_panel(
        frame,
        cols[0],
        "Sheet Info",
        &state.data.info,
        "press n to fetch",
        &state.base_url,
        state.spinner_frame,
        json_content,
    );
    render_panel(
        frame,
        cols[1],
        "Query Result",
        &state.data.query,
        "press f to query",
        &state.base_url,
        state.spinner_frame,
        json_content,
    );
}

fn rows_content(frame: &mut Frame, area: Rect, rows: &SheetRows) {
    let mut lines = vec![Line::from(format!("Retrieved: {} records", rows.count))];

    if let Some(first) = rows.data.first() {
        let headers: Vec<&String> = first.keys().take(MAX_COLUMNS).collect();
        let width = (area.width as usize / headers.len().max(1)).max(6);

        let header_row = headers
            .iter()
            .map(|h| format!("{:<w$.w$}", h, w = width))
            .collect::<String>();
        lines.push(Line::styled(header_row, Styles::heading()));

        for row in rows.data.iter().take(MAX_ROWS) {
            let cells = headers
                .iter()
                .map(|h| format!("{:<w$.w$}", fmt::cell(row.get(*h)), w = width))
                .collect::<String>();
            lines.push(Line::from(cells));
        }

        if rows.data.len() > MAX_ROWS {
            lines.push(Line::styled(
                format!("Showing first {} of {} records", MAX_ROWS, rows.data.len()),
                Styles::dim(),
            ));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Verbatim pretty-printed JSON, used by the info and query panels.
fn json_content(frame: &mut Frame, area: Rect, value: &Value) {
    frame.render_widget(
        Paragraph::new(fmt::pretty_json(value)).wrap(Wrap { trim: false }),
        area,
    );
}
