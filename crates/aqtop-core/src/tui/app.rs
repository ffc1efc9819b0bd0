//! Main TUI application.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::api::ApiClient;

use super::event::{Event, EventHandler};
use super::fetch::{self, FetchRequest};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    client: Arc<ApiClient>,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App talking to the given API.
    pub fn new(client: ApiClient) -> Self {
        let state = AppState::new(client.base_url().to_string());
        Self {
            client: Arc::new(client),
            state,
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Create event handler
        let events = EventHandler::new(tick_rate);

        // Startup probes: API reachability and health summary, once.
        info!("probing {}", self.client.base_url());
        self.dispatch(FetchRequest::Liveness, &events);
        self.dispatch(FetchRequest::Health, &events);

        // Main loop
        loop {
            terminal.draw(|frame| render(frame, &self.state))?;

            match events.next() {
                Ok(Event::Tick) => {
                    if self.state.any_loading() {
                        self.state.spinner_frame = self.state.spinner_frame.wrapping_add(1);
                    }
                }
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::Refresh => {
                        self.dispatch(FetchRequest::Liveness, &events);
                        self.dispatch(FetchRequest::Health, &events);
                    }
                    KeyAction::Fetch(request) => self.dispatch(request, &events),
                    KeyAction::None => {}
                },
                Ok(Event::Resize(_)) => {}
                Ok(Event::Fetch(event)) => self.state.apply_fetch(event),
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Marks the owning panel as loading and hands the request to a worker
    /// thread. The loading indicator is visible on the next draw, before
    /// any network activity completes.
    fn dispatch(&mut self, request: FetchRequest, events: &EventHandler) {
        let seq = self.state.begin_fetch(&request);
        fetch::spawn(Arc::clone(&self.client), events.sender(), seq, request);
    }
}
