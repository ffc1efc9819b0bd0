//! Main application state.

use crate::tui::fetch::{FetchEvent, FetchRequest, FetchResponse};

use super::{
    AiTabState, DashboardTabState, DataTabState, EditField, InputMode, PollutionTabState,
    PopupState, RecommendationsTabState, Tab,
};

/// Main application state.
///
/// Owned and mutated by the render loop only; fetch workers communicate
/// through events.
#[derive(Debug)]
pub struct AppState {
    /// Current active tab.
    pub current_tab: Tab,
    /// Input mode.
    pub input_mode: InputMode,
    /// Shared text buffer for the field being edited.
    pub edit_input: String,
    /// Active popup state. Only one popup can be open at a time.
    pub popup: PopupState,
    /// Dashboard tab state.
    pub dashboard: DashboardTabState,
    /// Pollution Analysis tab state.
    pub pollution: PollutionTabState,
    /// Recommendations tab state.
    pub recommendations: RecommendationsTabState,
    /// Google Sheets Data tab state.
    pub data: DataTabState,
    /// AI & RAG tab state.
    pub ai: AiTabState,
    /// Spinner animation frame, advanced on tick while anything loads.
    pub spinner_frame: usize,
    /// Base URL shown in error hints.
    pub base_url: String,
    /// Sequence counter for fetch dispatch. Monotonic across all panels.
    next_seq: u64,
}

impl AppState {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            current_tab: Tab::Dashboard,
            input_mode: InputMode::Normal,
            edit_input: String::new(),
            popup: PopupState::None,
            dashboard: DashboardTabState::default(),
            pollution: PollutionTabState::default(),
            recommendations: RecommendationsTabState::default(),
            data: DataTabState::default(),
            ai: AiTabState::default(),
            spinner_frame: 0,
            base_url: base_url.into(),
            next_seq: 0,
        }
    }

    /// Switches to a new tab. Leaves edit mode; form inputs and panel
    /// contents of the old tab are kept.
    pub fn switch_tab(&mut self, new_tab: Tab) {
        if self.current_tab != new_tab {
            self.cancel_edit();
            self.current_tab = new_tab;
        }
    }

    /// Issues the next fetch sequence number.
    pub fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Marks the panel owning `request` as loading and returns the sequence
    /// number to stamp the dispatch with. The loading indicator is visible
    /// from this point on, before any network activity.
    pub fn begin_fetch(&mut self, request: &FetchRequest) -> u64 {
        let seq = self.next_seq();
        match request {
            FetchRequest::Liveness => self.dashboard.api_online.begin(seq),
            FetchRequest::Health => self.dashboard.health.begin(seq),
            FetchRequest::CurrentStatus => self.dashboard.current.begin(seq),
            FetchRequest::Alerts => self.dashboard.alerts.begin(seq),
            FetchRequest::Analysis { .. } => self.pollution.report.begin(seq),
            FetchRequest::GeneralRecs { .. } => self.recommendations.general.begin(seq),
            FetchRequest::IndustrialRecs { .. } => self.recommendations.industrial.begin(seq),
            FetchRequest::SmartRecs { .. } => self.recommendations.smart.begin(seq),
            FetchRequest::SheetsInfo => self.data.info.begin(seq),
            FetchRequest::SheetsData { .. } => self.data.rows.begin(seq),
            FetchRequest::SheetsQuery { .. } => self.data.query.begin(seq),
            FetchRequest::RagStats => self.ai.stats.begin(seq),
            FetchRequest::RagQuery { .. } => self.ai.answer.begin(seq),
            FetchRequest::Reindex => self.ai.reindex.begin(seq),
        }
        seq
    }

    /// Routes a completed fetch to its panel. Stale completions are dropped
    /// by the slot's sequence guard.
    pub fn apply_fetch(&mut self, event: FetchEvent) {
        let FetchEvent { seq, response } = event;
        let _ = match response {
            FetchResponse::Liveness(r) => self.dashboard.api_online.resolve(seq, r),
            FetchResponse::Health(r) => self.dashboard.health.resolve(seq, r),
            FetchResponse::CurrentStatus(r) => self.dashboard.current.resolve(seq, r),
            FetchResponse::Alerts(r) => self.dashboard.alerts.resolve(seq, r),
            FetchResponse::Analysis(r) => self.pollution.report.resolve(seq, r),
            FetchResponse::GeneralRecs(r) => self.recommendations.general.resolve(seq, r),
            FetchResponse::IndustrialRecs(r) => self.recommendations.industrial.resolve(seq, r),
            FetchResponse::SmartRecs(r) => self.recommendations.smart.resolve(seq, r),
            FetchResponse::SheetsInfo(r) => self.data.info.resolve(seq, r),
            FetchResponse::SheetsData(r) => self.data.rows.resolve(seq, r),
            FetchResponse::SheetsQuery(r) => self.data.query.resolve(seq, r),
            FetchResponse::RagStats(r) => self.ai.stats.resolve(seq, r),
            FetchResponse::RagQuery(r) => self.ai.answer.resolve(seq, r),
            FetchResponse::Reindex(r) => self.ai.reindex.resolve(seq, r),
        };
    }

    /// True while any panel has a request in flight.
    pub fn any_loading(&self) -> bool {
        self.dashboard.api_online.is_loading()
            || self.dashboard.health.is_loading()
            || self.dashboard.current.is_loading()
            || self.dashboard.alerts.is_loading()
            || self.pollution.report.is_loading()
            || self.recommendations.general.is_loading()
            || self.recommendations.industrial.is_loading()
            || self.recommendations.smart.is_loading()
            || self.data.info.is_loading()
            || self.data.rows.is_loading()
            || self.data.query.is_loading()
            || self.ai.stats.is_loading()
            || self.ai.answer.is_loading()
            || self.ai.reindex.is_loading()
    }

    /// Enters edit mode for `field`, seeding the buffer with its current
    /// value.
    pub fn begin_edit(&mut self, field: EditField) {
        self.edit_input = self.field_value(field).to_string();
        self.input_mode = InputMode::Edit(field);
    }

    /// Writes the buffer back into the edited field and leaves edit mode.
    /// Returns the field that was edited.
    pub fn commit_edit(&mut self) -> Option<EditField> {
        let InputMode::Edit(field) = self.input_mode else {
            return None;
        };
        let value = std::mem::take(&mut self.edit_input);
        match field {
            EditField::AnalysisDays => self.pollution.days_input = value,
            EditField::SmartQuery => self.recommendations.query_input = value,
            EditField::DataLimit => self.data.limit_input = value,
            EditField::DataFilter => self.data.filter_input = value,
            EditField::RagQuery => self.ai.query_input = value,
        }
        self.input_mode = InputMode::Normal;
        Some(field)
    }

    /// Leaves edit mode, discarding the buffer.
    pub fn cancel_edit(&mut self) {
        self.edit_input.clear();
        self.input_mode = InputMode::Normal;
    }

    fn field_value(&self, field: EditField) -> &str {
        match field {
            EditField::AnalysisDays => &self.pollution.days_input,
            EditField::SmartQuery => &self.recommendations.query_input,
            EditField::DataLimit => &self.data.limit_input,
            EditField::DataFilter => &self.data.filter_input,
            EditField::RagQuery => &self.ai.query_input,
        }
    }
}
