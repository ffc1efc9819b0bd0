//! Per-tab state: form inputs and result panel slots.
//!
//! Form values live here as the user typed them and are read fresh when an
//! action is dispatched — nothing is captured earlier. Each result panel is
//! one [`PanelSlot`].

use serde_json::Value;

use crate::api::{
    AlertList, AnalysisReport, CurrentStatus, HealthInfo, RagAnswer, RagStats, Recommendations,
    ReindexReport, SheetRows, SmartAdvice,
};
use crate::tui::fetch::PanelSlot;

use super::{IndustryType, UserType};

/// Default analysis window in days.
pub const DEFAULT_ANALYSIS_DAYS: u32 = 7;

/// Default row limit for the sheets data panel.
pub const DEFAULT_DATA_LIMIT: u32 = 20;

/// Default neighbor count for RAG queries.
pub const DEFAULT_RAG_K: u32 = 3;

/// State for the Dashboard tab: startup probes plus on-demand panels.
#[derive(Debug, Default)]
pub struct DashboardTabState {
    /// Liveness probe (`GET /`). Ready means online, Failed means offline.
    pub api_online: PanelSlot<()>,
    pub health: PanelSlot<HealthInfo>,
    pub current: PanelSlot<CurrentStatus>,
    pub alerts: PanelSlot<AlertList>,
}

/// State for the Pollution Analysis tab.
#[derive(Debug)]
pub struct PollutionTabState {
    /// Analysis window input, as typed.
    pub days_input: String,
    pub report: PanelSlot<AnalysisReport>,
}

impl Default for PollutionTabState {
    fn default() -> Self {
        Self {
            days_input: DEFAULT_ANALYSIS_DAYS.to_string(),
            report: PanelSlot::Idle,
        }
    }
}

impl PollutionTabState {
    /// The analysis window, falling back to the default when the input
    /// is empty or not a number.
    pub fn days(&self) -> u32 {
        self.days_input.trim().parse().unwrap_or(DEFAULT_ANALYSIS_DAYS)
    }
}

/// State for the Recommendations tab.
#[derive(Debug, Default)]
pub struct RecommendationsTabState {
    pub user_type: UserType,
    pub industry: IndustryType,
    /// Free-text question for smart recommendations, as typed.
    pub query_input: String,
    pub general: PanelSlot<Recommendations>,
    pub industrial: PanelSlot<Recommendations>,
    pub smart: PanelSlot<SmartAdvice>,
}

/// State for the Google Sheets Data tab.
#[derive(Debug)]
pub struct DataTabState {
    /// Row limit input, as typed. Empty means no limit parameter.
    pub limit_input: String,
    /// JSON filter input, as typed. Parsed only at submit time.
    pub filter_input: String,
    pub info: PanelSlot<Value>,
    pub rows: PanelSlot<SheetRows>,
    pub query: PanelSlot<Value>,
}

impl Default for DataTabState {
    fn default() -> Self {
        Self {
            limit_input: DEFAULT_DATA_LIMIT.to_string(),
            filter_input: "{}".to_string(),
            info: PanelSlot::Idle,
            rows: PanelSlot::Idle,
            query: PanelSlot::Idle,
        }
    }
}

impl DataTabState {
    /// The row limit, or None when the input is empty or not a number.
    pub fn limit(&self) -> Option<u32> {
        self.limit_input.trim().parse().ok()
    }
}

/// State for the AI & RAG tab.
#[derive(Debug)]
pub struct AiTabState {
    /// RAG question, as typed.
    pub query_input: String,
    /// Neighbor count for the RAG query, cycled with `k`.
    pub k: u32,
    pub stats: PanelSlot<RagStats>,
    pub answer: PanelSlot<RagAnswer>,
    pub reindex: PanelSlot<ReindexReport>,
}

impl Default for AiTabState {
    fn default() -> Self {
        Self {
            query_input: String::new(),
            k: DEFAULT_RAG_K,
            stats: PanelSlot::Idle,
            answer: PanelSlot::Idle,
            reindex: PanelSlot::Idle,
        }
    }
}

impl AiTabState {
    /// Cycles the neighbor count through 1, 3, 5, 10.
    pub fn cycle_k(&mut self) {
        self.k = match self.k {
            1 => 3,
            3 => 5,
            5 => 10,
            _ => 1,
        };
    }
}
