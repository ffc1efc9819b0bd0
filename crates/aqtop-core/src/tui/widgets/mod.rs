//! TUI widgets.

mod dashboard;
mod footer;
mod header;
mod help;
mod panel;
mod pollution;
mod quit_confirm;
mod rag;
mod recommendations;
mod sheets;

pub use dashboard::render_dashboard;
pub use footer::render_footer;
pub use header::render_header;
pub use help::render_help;
pub use pollution::render_pollution;
pub use quit_confirm::render_quit_confirm;
pub use rag::render_rag;
pub use recommendations::render_recommendations;
pub use sheets::render_sheets;

use ratatui::layout::Rect;

/// A popup rectangle of the given size, centered in `area` and clamped to
/// fit inside it.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
