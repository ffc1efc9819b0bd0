//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;

    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    pub const TAB_ACTIVE: Color = Color::Cyan;
    pub const TAB_INACTIVE: Color = Color::DarkGray;

    pub const OK: Color = Color::Green;
    pub const WARN: Color = Color::Yellow;
    pub const ERR: Color = Color::Red;
    pub const INFO: Color = Color::Blue;
    pub const ACCENT: Color = Color::Cyan;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Dimmed text (hints, placeholders).
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Active tab in the tab bar.
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::TAB_ACTIVE)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive tab in the tab bar.
    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::TAB_INACTIVE).bg(Theme::HEADER_BG)
    }

    /// Field editing echo in the header.
    pub fn edit_input() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Theme::WARN)
            .add_modifier(Modifier::BOLD)
    }

    /// Panel titles and section headings.
    pub fn heading() -> Style {
        Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD)
    }

    /// "Everything fine" markers.
    pub fn ok() -> Style {
        Style::default().fg(Theme::OK)
    }

    /// Error text.
    pub fn error() -> Style {
        Style::default().fg(Theme::ERR)
    }

    /// Bold error heading.
    pub fn error_title() -> Style {
        Style::default().fg(Theme::ERR).add_modifier(Modifier::BOLD)
    }

    /// Loading spinner line.
    pub fn loading() -> Style {
        Style::default().fg(Theme::ACCENT)
    }
}

/// Color for a pollution level id.
pub fn level_color(level: &str) -> Color {
    match level {
        "good" => Theme::OK,
        "moderate" => Theme::WARN,
        "unhealthy_for_sensitive" => Color::LightYellow,
        "unhealthy" => Color::LightRed,
        "very_unhealthy" => Color::Magenta,
        "hazardous" => Theme::ERR,
        _ => Theme::FG_DIM,
    }
}

/// Color for an alert severity.
pub fn severity_color(severity: &str) -> Color {
    match severity {
        "warning" => Theme::WARN,
        "danger" | "critical" | "high" => Theme::ERR,
        "info" => Theme::INFO,
        _ => Theme::FG_DIM,
    }
}
