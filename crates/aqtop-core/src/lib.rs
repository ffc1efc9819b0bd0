//! aqtop-core — shared library for the aqtop dashboard.
//!
//! Provides:
//! - `api` — typed HTTP client for the pollution-monitoring API
//! - `fmt` — shared formatting helpers (level labels, ppm, JSON cells)
//!
//! With `tui` feature (default):
//! - `tui` — TUI rendering (ratatui/crossterm), state, input, fetch dispatch

pub mod api;
pub mod fmt;

#[cfg(feature = "tui")]
pub mod tui;
