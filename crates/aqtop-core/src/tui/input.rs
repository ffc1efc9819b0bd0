//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde_json::Value;

use crate::api::ApiError;

use super::fetch::FetchRequest;
use super::state::{AppState, EditField, InputMode, PopupState, Tab};

/// Result of handling a key event.
#[derive(Debug, PartialEq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Re-run the startup probes (liveness + health).
    Refresh,
    /// Dispatch one fetch.
    Fetch(FetchRequest),
}

/// Handles a key event, mutating state and returning the action for the
/// app loop.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match state.popup {
        PopupState::QuitConfirm => {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Enter => KeyAction::Quit,
                KeyCode::Char('n') | KeyCode::Char('q') | KeyCode::Esc => {
                    state.popup = PopupState::None;
                    KeyAction::None
                }
                _ => KeyAction::None,
            };
        }
        PopupState::Help { scroll } => {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    state.popup = PopupState::None;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    state.popup = PopupState::Help {
                        scroll: scroll.saturating_sub(1),
                    };
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    state.popup = PopupState::Help {
                        scroll: scroll.saturating_add(1),
                    };
                }
                _ => {}
            }
            return KeyAction::None;
        }
        PopupState::None => {}
    }

    if matches!(state.input_mode, InputMode::Edit(_)) {
        return handle_edit_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') => {
            state.popup = PopupState::QuitConfirm;
            KeyAction::None
        }
        KeyCode::Char('?') => {
            state.popup = PopupState::Help { scroll: 0 };
            KeyAction::None
        }
        KeyCode::Tab => {
            state.switch_tab(state.current_tab.next());
            KeyAction::None
        }
        KeyCode::BackTab => {
            state.switch_tab(state.current_tab.prev());
            KeyAction::None
        }
        KeyCode::Char(c @ '1'..='5') => {
            let idx = (c as usize) - ('1' as usize);
            state.switch_tab(Tab::all()[idx]);
            KeyAction::None
        }
        _ => match state.current_tab {
            Tab::Dashboard => handle_dashboard_key(key),
            Tab::Pollution => handle_pollution_key(state, key),
            Tab::Recommendations => handle_recommendations_key(state, key),
            Tab::Data => handle_data_key(state, key),
            Tab::Ai => handle_ai_key(state, key),
        },
    }
}

fn handle_dashboard_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('r') | KeyCode::Enter => KeyAction::Refresh,
        KeyCode::Char('s') => KeyAction::Fetch(FetchRequest::CurrentStatus),
        KeyCode::Char('a') => KeyAction::Fetch(FetchRequest::Alerts),
        _ => KeyAction::None,
    }
}

fn handle_pollution_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('e') => {
            state.begin_edit(EditField::AnalysisDays);
            KeyAction::None
        }
        KeyCode::Enter => KeyAction::Fetch(FetchRequest::Analysis {
            days: state.pollution.days(),
        }),
        _ => KeyAction::None,
    }
}

fn handle_recommendations_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('u') => {
            state.recommendations.user_type = state.recommendations.user_type.next();
            KeyAction::None
        }
        KeyCode::Char('y') => {
            state.recommendations.industry = state.recommendations.industry.next();
            KeyAction::None
        }
        KeyCode::Char('g') => KeyAction::Fetch(FetchRequest::GeneralRecs {
            user_type: state.recommendations.user_type.as_str().to_string(),
        }),
        KeyCode::Char('i') => KeyAction::Fetch(FetchRequest::IndustrialRecs {
            industry_type: state.recommendations.industry.as_str().to_string(),
        }),
        KeyCode::Char('e') => {
            state.begin_edit(EditField::SmartQuery);
            KeyAction::None
        }
        KeyCode::Char('m') | KeyCode::Enter => smart_request(state),
        _ => KeyAction::None,
    }
}

fn handle_data_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('n') => KeyAction::Fetch(FetchRequest::SheetsInfo),
        KeyCode::Char('d') => KeyAction::Fetch(FetchRequest::SheetsData {
            limit: state.data.limit(),
        }),
        KeyCode::Char('l') => {
            state.begin_edit(EditField::DataLimit);
            KeyAction::None
        }
        KeyCode::Char('e') => {
            state.begin_edit(EditField::DataFilter);
            KeyAction::None
        }
        KeyCode::Char('f') | KeyCode::Enter => submit_filter(state),
        _ => KeyAction::None,
    }
}

fn handle_ai_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('t') => KeyAction::Fetch(FetchRequest::RagStats),
        KeyCode::Char('e') => {
            state.begin_edit(EditField::RagQuery);
            KeyAction::None
        }
        KeyCode::Char('k') => {
            state.ai.cycle_k();
            KeyAction::None
        }
        KeyCode::Char('x') => KeyAction::Fetch(FetchRequest::Reindex),
        KeyCode::Enter => rag_request(state),
        _ => KeyAction::None,
    }
}

/// Keys while editing a form field: type into the buffer, Enter commits and
/// submits the field's action, Esc discards.
fn handle_edit_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            state.cancel_edit();
            KeyAction::None
        }
        KeyCode::Enter => match state.commit_edit() {
            Some(EditField::AnalysisDays) => KeyAction::Fetch(FetchRequest::Analysis {
                days: state.pollution.days(),
            }),
            Some(EditField::SmartQuery) => smart_request(state),
            Some(EditField::DataLimit) => KeyAction::Fetch(FetchRequest::SheetsData {
                limit: state.data.limit(),
            }),
            Some(EditField::DataFilter) => submit_filter(state),
            Some(EditField::RagQuery) => rag_request(state),
            None => KeyAction::None,
        },
        KeyCode::Backspace => {
            state.edit_input.pop();
            KeyAction::None
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.edit_input.push(c);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn smart_request(state: &AppState) -> KeyAction {
    KeyAction::Fetch(FetchRequest::SmartRecs {
        query: state.recommendations.query_input.clone(),
        user_type: state.recommendations.user_type.as_str().to_string(),
    })
}

fn rag_request(state: &AppState) -> KeyAction {
    KeyAction::Fetch(FetchRequest::RagQuery {
        query: state.ai.query_input.clone(),
        k: state.ai.k,
    })
}

/// Parses the filter input. A parse failure never issues a request: the
/// query panel shows the error, stamped with a fresh sequence number so it
/// supersedes any in-flight query.
fn submit_filter(state: &mut AppState) -> KeyAction {
    match serde_json::from_str::<Value>(&state.data.filter_input) {
        Ok(filter) => KeyAction::Fetch(FetchRequest::SheetsQuery { filter }),
        Err(err) => {
            let seq = state.next_seq();
            let error = ApiError::BadFilter(err.to_string()).to_string();
            state.data.query.fail(seq, error);
            KeyAction::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::fetch::PanelSlot;
    use crossterm::event::{KeyEvent, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn digit_keys_switch_tabs() {
        let mut state = AppState::new("http://localhost:8000");
        assert_eq!(state.current_tab, Tab::Dashboard);

        let action = handle_key(&mut state, key(KeyCode::Char('3')));
        assert_eq!(action, KeyAction::None);
        assert_eq!(state.current_tab, Tab::Recommendations);

        let action = handle_key(&mut state, key(KeyCode::Char('5')));
        assert_eq!(action, KeyAction::None);
        assert_eq!(state.current_tab, Tab::Ai);
    }

    #[test]
    fn quit_requires_confirmation() {
        let mut state = AppState::new("http://localhost:8000");
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q'))), KeyAction::None);
        assert_eq!(state.popup, PopupState::QuitConfirm);

        assert_eq!(handle_key(&mut state, key(KeyCode::Char('n'))), KeyAction::None);
        assert_eq!(state.popup, PopupState::None);

        handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('y'))), KeyAction::Quit);
    }

    #[test]
    fn dashboard_keys_map_to_fetches() {
        let mut state = AppState::new("http://localhost:8000");
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('r'))), KeyAction::Refresh);
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('s'))),
            KeyAction::Fetch(FetchRequest::CurrentStatus)
        );
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('a'))),
            KeyAction::Fetch(FetchRequest::Alerts)
        );
    }

    #[test]
    fn analysis_reads_days_fresh_at_dispatch() {
        let mut state = AppState::new("http://localhost:8000");
        state.switch_tab(Tab::Pollution);

        // Edit the window, commit with Enter: dispatches with the new value.
        handle_key(&mut state, key(KeyCode::Char('e')));
        handle_key(&mut state, key(KeyCode::Backspace));
        handle_key(&mut state, key(KeyCode::Char('3')));
        handle_key(&mut state, key(KeyCode::Char('0')));
        let action = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(action, KeyAction::Fetch(FetchRequest::Analysis { days: 30 }));
        assert_eq!(state.pollution.days_input, "30");
    }

    #[test]
    fn escape_discards_the_edit_buffer() {
        let mut state = AppState::new("http://localhost:8000");
        state.switch_tab(Tab::Pollution);
        handle_key(&mut state, key(KeyCode::Char('e')));
        handle_key(&mut state, key(KeyCode::Char('9')));
        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.pollution.days_input, "7");
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn bad_filter_fails_locally_without_a_request() {
        let mut state = AppState::new("http://localhost:8000");
        state.switch_tab(Tab::Data);
        state.data.filter_input = "not json".to_string();

        let action = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(action, KeyAction::None);
        match &state.data.query {
            PanelSlot::Failed { error, .. } => {
                assert!(error.starts_with("invalid filter JSON"), "got: {}", error)
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn valid_filter_dispatches_the_parsed_value() {
        let mut state = AppState::new("http://localhost:8000");
        state.switch_tab(Tab::Data);
        state.data.filter_input = r#"{"status": "Bahaya"}"#.to_string();

        let action = handle_key(&mut state, key(KeyCode::Char('f')));
        assert_eq!(
            action,
            KeyAction::Fetch(FetchRequest::SheetsQuery {
                filter: serde_json::json!({"status": "Bahaya"}),
            })
        );
    }

    #[test]
    fn user_type_cycles_and_is_sent_with_smart_query() {
        let mut state = AppState::new("http://localhost:8000");
        state.switch_tab(Tab::Recommendations);
        handle_key(&mut state, key(KeyCode::Char('u')));
        state.recommendations.query_input = "can I exercise outside?".to_string();

        let action = handle_key(&mut state, key(KeyCode::Char('m')));
        assert_eq!(
            action,
            KeyAction::Fetch(FetchRequest::SmartRecs {
                query: "can I exercise outside?".to_string(),
                user_type: "sensitive".to_string(),
            })
        );
    }

    #[test]
    fn rag_query_uses_cycled_k() {
        let mut state = AppState::new("http://localhost:8000");
        state.switch_tab(Tab::Ai);
        handle_key(&mut state, key(KeyCode::Char('k')));
        state.ai.query_input = "summarize last week".to_string();

        let action = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(
            action,
            KeyAction::Fetch(FetchRequest::RagQuery {
                query: "summarize last week".to_string(),
                k: 5,
            })
        );
    }
}
