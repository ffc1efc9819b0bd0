//! Generic result panel frame.
//!
//! Every result panel renders through here so the loading / error / content
//! lifecycle looks the same everywhere. Only the Ready state differs per
//! panel, supplied as a closure drawing into the panel's inner area.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::fetch::PanelSlot;
use crate::tui::style::Styles;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// The spinner glyph for a given animation tick.
pub fn spinner_glyph(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Renders one result panel: bordered block plus whichever lifecycle state
/// the slot is in.
pub fn render_panel<T>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    slot: &PanelSlot<T>,
    idle_hint: &str,
    base_url: &str,
    spinner: usize,
    content: impl FnOnce(&mut Frame, Rect, &T),
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {} ", title), Styles::heading()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match slot {
        PanelSlot::Idle => {
            frame.render_widget(Paragraph::new(idle_hint).style(Styles::dim()), inner);
        }
        PanelSlot::Loading { .. } => {
            let line = Line::from(vec![
                Span::styled(spinner_glyph(spinner), Styles::loading()),
                Span::raw(" Loading..."),
            ]);
            frame.render_widget(Paragraph::new(line), inner);
        }
        PanelSlot::Failed { error, .. } => {
            let lines = vec![
                Line::styled("Error", Styles::error_title()),
                Line::styled(error.clone(), Styles::error()),
                Line::styled(
                    format!("Make sure the API is running on {}", base_url),
                    Styles::dim(),
                ),
            ];
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
        }
        PanelSlot::Ready { value, .. } => content(frame, inner, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    const BASE_URL: &str = "http://localhost:8000";

    fn draw(slot: &PanelSlot<String>) -> String {
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_panel(frame, area, "Panel", slot, "press x", BASE_URL, 0, |f, a, v| {
                    f.render_widget(Paragraph::new(v.as_str()), a);
                });
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn loading_state_shows_the_spinner_line() {
        let slot = PanelSlot::Loading { seq: 1 };
        assert!(draw(&slot).contains("Loading..."));
    }

    #[test]
    fn failed_state_shows_message_and_base_url() {
        let slot: PanelSlot<String> = PanelSlot::Failed {
            seq: 1,
            error: "server returned HTTP 503".to_string(),
        };
        let text = draw(&slot);
        assert!(text.contains("Error"));
        assert!(text.contains("server returned HTTP 503"));
        assert!(text.contains(BASE_URL));
    }

    #[test]
    fn ready_state_renders_the_content() {
        let slot = PanelSlot::Ready {
            seq: 1,
            value: "12.3 ppm".to_string(),
        };
        assert!(draw(&slot).contains("12.3 ppm"));
    }

    #[test]
    fn idle_state_shows_the_hint() {
        let slot: PanelSlot<String> = PanelSlot::Idle;
        assert!(draw(&slot).contains("press x"));
    }
}
