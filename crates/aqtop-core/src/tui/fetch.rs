//! Fetch dispatch and the panel request lifecycle.
//!
//! Every user action maps to one [`FetchRequest`], carrying the form values
//! read at dispatch time. Dispatch stamps the request with a sequence number
//! from a global counter, flips the owning panel to `Loading`, and spawns a
//! worker thread that performs the HTTP call and sends a [`FetchEvent`] back
//! over the main event channel.
//!
//! Requests are never cancelled. A superseded worker runs to completion and
//! its result is dropped on arrival: a panel only accepts a completion whose
//! sequence number matches the latest one issued for it.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use serde_json::Value;
use tracing::debug;

use crate::api::{
    AlertList, AnalysisReport, ApiClient, ApiError, CurrentStatus, HealthInfo, RagAnswer,
    RagRequest, RagStats, Recommendations, RecommendationRequest, ReindexReport, SheetRows,
    SmartAdvice, SmartRequest,
};

use super::event::Event;

/// One user action, with its inputs captured at dispatch time.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchRequest {
    Liveness,
    Health,
    CurrentStatus,
    Alerts,
    Analysis { days: u32 },
    GeneralRecs { user_type: String },
    IndustrialRecs { industry_type: String },
    SmartRecs { query: String, user_type: String },
    SheetsInfo,
    SheetsData { limit: Option<u32> },
    SheetsQuery { filter: Value },
    RagStats,
    RagQuery { query: String, k: u32 },
    Reindex,
}

/// Completion payload for one request. The variant identifies the panel.
#[derive(Debug)]
pub enum FetchResponse {
    Liveness(Result<(), ApiError>),
    Health(Result<HealthInfo, ApiError>),
    CurrentStatus(Result<CurrentStatus, ApiError>),
    Alerts(Result<AlertList, ApiError>),
    Analysis(Result<AnalysisReport, ApiError>),
    GeneralRecs(Result<Recommendations, ApiError>),
    IndustrialRecs(Result<Recommendations, ApiError>),
    SmartRecs(Result<SmartAdvice, ApiError>),
    SheetsInfo(Result<Value, ApiError>),
    SheetsData(Result<SheetRows, ApiError>),
    SheetsQuery(Result<Value, ApiError>),
    RagStats(Result<RagStats, ApiError>),
    RagQuery(Result<RagAnswer, ApiError>),
    Reindex(Result<ReindexReport, ApiError>),
}

/// A completed fetch, as delivered over the event channel.
#[derive(Debug)]
pub struct FetchEvent {
    pub seq: u64,
    pub response: FetchResponse,
}

/// Spawns a worker thread for `request`. The send fails only when the UI
/// is already shutting down, in which case the result is irrelevant.
pub fn spawn(client: Arc<ApiClient>, tx: Sender<Event>, seq: u64, request: FetchRequest) {
    thread::spawn(move || {
        let response = run(&client, request);
        let _ = tx.send(Event::Fetch(FetchEvent { seq, response }));
    });
}

fn run(client: &ApiClient, request: FetchRequest) -> FetchResponse {
    match request {
        FetchRequest::Liveness => FetchResponse::Liveness(client.liveness()),
        FetchRequest::Health => FetchResponse::Health(client.health()),
        FetchRequest::CurrentStatus => FetchResponse::CurrentStatus(client.current_status()),
        FetchRequest::Alerts => FetchResponse::Alerts(client.alerts()),
        FetchRequest::Analysis { days } => FetchResponse::Analysis(client.analyze(days)),
        FetchRequest::GeneralRecs { user_type } => {
            FetchResponse::GeneralRecs(client.recommendations(&RecommendationRequest {
                user_type,
                industry_type: None,
            }))
        }
        FetchRequest::IndustrialRecs { industry_type } => {
            FetchResponse::IndustrialRecs(client.recommendations(&RecommendationRequest {
                user_type: "industrial".to_string(),
                industry_type: Some(industry_type),
            }))
        }
        FetchRequest::SmartRecs { query, user_type } => {
            FetchResponse::SmartRecs(client.smart_recommendations(&SmartRequest {
                query,
                user_type,
            }))
        }
        FetchRequest::SheetsInfo => FetchResponse::SheetsInfo(client.sheets_info()),
        FetchRequest::SheetsData { limit } => FetchResponse::SheetsData(client.sheets_data(limit)),
        FetchRequest::SheetsQuery { filter } => {
            FetchResponse::SheetsQuery(client.sheets_query(&filter))
        }
        FetchRequest::RagStats => FetchResponse::RagStats(client.rag_stats()),
        FetchRequest::RagQuery { query, k } => {
            FetchResponse::RagQuery(client.rag_query(&RagRequest { query, k }))
        }
        FetchRequest::Reindex => FetchResponse::Reindex(client.rag_reindex()),
    }
}

/// Display state of one result panel.
///
/// Exactly one variant at a time; transitions are unconditional overwrites.
/// Every non-idle variant remembers the sequence number of the request that
/// produced it, which doubles as the stale-response guard.
#[derive(Debug)]
pub enum PanelSlot<T> {
    /// Nothing fetched yet.
    Idle,
    /// A request is in flight.
    Loading { seq: u64 },
    /// Last accepted request succeeded.
    Ready { seq: u64, value: T },
    /// Last accepted request failed (or was rejected before dispatch).
    Failed { seq: u64, error: String },
}

impl<T> Default for PanelSlot<T> {
    fn default() -> Self {
        PanelSlot::Idle
    }
}

impl<T> PanelSlot<T> {
    /// Marks a newly dispatched request. Overwrites whatever was displayed.
    pub fn begin(&mut self, seq: u64) {
        *self = PanelSlot::Loading { seq };
    }

    /// Records a failure that happened before any request was issued
    /// (e.g. unparseable filter input). Supersedes in-flight requests.
    pub fn fail(&mut self, seq: u64, error: String) {
        *self = PanelSlot::Failed { seq, error };
    }

    /// Applies a completed fetch. Returns false if the completion was stale
    /// (a newer request has been issued for this panel) and was dropped.
    pub fn resolve(&mut self, seq: u64, result: Result<T, ApiError>) -> bool {
        if self.seq() != Some(seq) {
            debug!(seq, "dropping stale fetch result");
            return false;
        }
        *self = match result {
            Ok(value) => PanelSlot::Ready { seq, value },
            Err(err) => PanelSlot::Failed {
                seq,
                error: err.to_string(),
            },
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PanelSlot::Loading { .. })
    }

    fn seq(&self) -> Option<u64> {
        match self {
            PanelSlot::Idle => None,
            PanelSlot::Loading { seq }
            | PanelSlot::Ready { seq, .. }
            | PanelSlot::Failed { seq, .. } => Some(*seq),
        }
    }
}
