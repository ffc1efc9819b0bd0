//! Dashboard tab: liveness chip, health summary, current status, alerts.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::api::{AlertList, CurrentStatus, HealthInfo};
use crate::fmt;
use crate::tui::fetch::PanelSlot;
use crate::tui::state::AppState;
use crate::tui::style::{Styles, level_color, severity_color};

use super::panel::{render_panel, spinner_glyph};

/// Renders the Dashboard tab.
pub fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // API chip
        Constraint::Min(10),   // Health | Current status
        Constraint::Min(7),    // Alerts
    ])
    .split(area);

    render_api_chip(frame, chunks[0], state);

    let cols =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(chunks[1]);
    render_panel(
        frame,
        cols[0],
        "Health",
        &state.dashboard.health,
        "press r to probe",
        &state.base_url,
        state.spinner_frame,
        health_content,
    );
    render_panel(
        frame,
        cols[1],
        "Current Status",
        &state.dashboard.current,
        "press s to fetch",
        &state.base_url,
        state.spinner_frame,
        current_content,
    );

    render_panel(
        frame,
        chunks[2],
        "Active Alerts",
        &state.dashboard.alerts,
        "press a to fetch",
        &state.base_url,
        state.spinner_frame,
        alerts_content,
    );
}

/// The liveness chip keeps the original's online/offline wording; the
/// failure detail is deliberately not shown here.
fn render_api_chip(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" API ", Styles::heading()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = match &state.dashboard.api_online {
        PanelSlot::Idle => Line::styled("● checking...", Styles::dim()),
        PanelSlot::Loading { .. } => Line::from(vec![
            Span::styled(spinner_glyph(state.spinner_frame), Styles::loading()),
            Span::raw(" checking..."),
        ]),
        PanelSlot::Ready { .. } => Line::styled("● API Online", Styles::ok()),
        PanelSlot::Failed { .. } => Line::styled("● API Offline", Styles::error()),
    };
    frame.render_widget(Paragraph::new(line), inner);
}

fn health_content(frame: &mut Frame, area: Rect, health: &HealthInfo) {
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Status       "),
            Span::styled(health.status.clone(), Styles::ok().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(format!("Environment  {}", health.environment)),
        Line::default(),
        Line::styled("Services", Styles::heading()),
    ];
    for (service, up) in &health.services {
        let style = if *up { Styles::ok() } else { Styles::error() };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", fmt::service_icon(*up)), style),
            Span::raw(service.clone()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn current_content(frame: &mut Frame, area: Rect, status: &CurrentStatus) {
    let level_style = Style::default()
        .fg(level_color(&status.pollution_level))
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::styled(fmt::level_label(&status.pollution_level), level_style),
        Line::from(status.description.clone()),
        Line::default(),
        Line::from(format!("Latest:    {}", fmt::ppm(status.latest_reading.gas_value))),
        Line::from(format!("Avg (7d):  {}", fmt::ppm2(status.stats.average))),
        Line::from(format!("Trend:     {}", status.stats.trend)),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn alerts_content(frame: &mut Frame, area: Rect, alerts: &AlertList) {
    if alerts.alerts.is_empty() {
        frame.render_widget(
            Paragraph::new("No active alerts").style(Styles::dim()),
            area,
        );
        return;
    }

    let mut lines = Vec::new();
    for alert in &alerts.alerts {
        let title_style = Style::default()
            .fg(severity_color(&alert.severity))
            .add_modifier(Modifier::BOLD);
        lines.push(Line::styled(alert.title.clone(), title_style));
        lines.push(Line::from(format!("  {}", alert.message)));
        lines.push(Line::styled(
            format!("  Priority: {}", fmt::scalar(&alert.priority)),
            Styles::dim(),
        ));
        lines.push(Line::default());
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
