//! Request and response types for the monitoring API.
//!
//! Response structs mirror the documented JSON shapes one-to-one. A missing
//! required field fails deserialization and surfaces as a decode error;
//! fields the API may legitimately omit are `Option` or defaulted. Unknown
//! extra fields are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response body from `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthInfo {
    pub status: String,
    pub environment: String,
    /// Service name -> up/down. BTreeMap keeps render order stable.
    pub services: BTreeMap<String, bool>,
}

/// Latest sensor reading embedded in [`CurrentStatus`].
#[derive(Debug, Clone, Deserialize)]
pub struct LatestReading {
    pub gas_value: f64,
}

/// Rolling statistics embedded in [`CurrentStatus`].
#[derive(Debug, Clone, Deserialize)]
pub struct StatusStats {
    pub average: f64,
    pub trend: String,
}

/// Response body from `GET /api/pollution/current-status`.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentStatus {
    pub pollution_level: String,
    pub description: String,
    pub latest_reading: LatestReading,
    pub stats: StatusStats,
}

/// A single active alert.
///
/// `priority` has no documented type (observed as both string and number),
/// so it is kept as a raw JSON scalar and rendered verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct Alert {
    pub severity: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub priority: Value,
}

/// Response body from `GET /api/pollution/alerts`.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertList {
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

/// Statistics block of an analysis report.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisStats {
    pub average: f64,
    pub max: f64,
    pub min: f64,
    pub trend: String,
}

/// Response body from `GET /api/pollution/analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisReport {
    pub stats: AnalysisStats,
    /// Pollution level -> number of readings at that level.
    #[serde(default)]
    pub level_distribution: BTreeMap<String, u64>,
}

/// An alert specific to industrial operators.
#[derive(Debug, Clone, Deserialize)]
pub struct IndustrialAlert {
    pub alert_type: String,
    pub message: String,
}

/// Response body from `POST /api/pollution/recommendations`.
///
/// The API omits sections that do not apply to the requested user type,
/// so every list defaults to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub health_advice: Vec<String>,
    #[serde(default)]
    pub industrial_alerts: Vec<IndustrialAlert>,
}

/// Response body from `POST /api/pollution/smart-recommendations`.
///
/// Depending on whether the AI backend was reachable, the answer arrives in
/// `ai_response` or in `recommendation`.
#[derive(Debug, Clone, Deserialize)]
pub struct SmartAdvice {
    #[serde(default)]
    pub ai_response: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub relevant_data: Vec<Value>,
}

impl SmartAdvice {
    /// The answer text, wherever the API put it.
    pub fn answer(&self) -> &str {
        self.ai_response
            .as_deref()
            .or(self.recommendation.as_deref())
            .unwrap_or("")
    }
}

/// Response body from `GET /api/data/sheets/data`.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetRows {
    pub count: u64,
    #[serde(default)]
    pub data: Vec<serde_json::Map<String, Value>>,
}

/// Response body from `GET /api/ai/rag/stats`.
#[derive(Debug, Clone, Deserialize)]
pub struct RagStats {
    pub initialized: bool,
    pub document_count: u64,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Response body from `POST /api/ai/rag/query`.
#[derive(Debug, Clone, Deserialize)]
pub struct RagAnswer {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Response body from `POST /api/ai/rag/reindex`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReindexReport {
    pub status: String,
    pub document_count: u64,
    pub message: String,
}

/// Request body for `POST /api/pollution/recommendations`.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationRequest {
    pub user_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_type: Option<String>,
}

/// Request body for `POST /api/pollution/smart-recommendations`.
#[derive(Debug, Clone, Serialize)]
pub struct SmartRequest {
    pub query: String,
    pub user_type: String,
}

/// Request body for `POST /api/ai/rag/query`.
#[derive(Debug, Clone, Serialize)]
pub struct RagRequest {
    pub query: String,
    pub k: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_decodes_documented_shape() {
        let body = r#"{"status":"ok","environment":"dev","services":{"db":true,"cache":false}}"#;
        let health: HealthInfo = serde_json::from_str(body).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.environment, "dev");
        assert_eq!(health.services.get("db"), Some(&true));
        assert_eq!(health.services.get("cache"), Some(&false));
    }

    #[test]
    fn current_status_decodes_nested_fields() {
        let body = r#"{
            "pollution_level": "good",
            "description": "Air is clean",
            "latest_reading": {"gas_value": 12.3},
            "stats": {"average": 15.0, "trend": "stable"}
        }"#;
        let status: CurrentStatus = serde_json::from_str(body).unwrap();
        assert_eq!(status.pollution_level, "good");
        assert_eq!(status.latest_reading.gas_value, 12.3);
        assert_eq!(status.stats.trend, "stable");
    }

    #[test]
    fn missing_required_field_is_a_decode_error() {
        // `description` is required; a payload without it must not decode.
        let body = r#"{
            "pollution_level": "good",
            "latest_reading": {"gas_value": 12.3},
            "stats": {"average": 15.0, "trend": "stable"}
        }"#;
        assert!(serde_json::from_str::<CurrentStatus>(body).is_err());
    }

    #[test]
    fn unknown_extra_fields_are_tolerated() {
        let body = r#"{"initialized":true,"document_count":3,"vector_dim":768}"#;
        let stats: RagStats = serde_json::from_str(body).unwrap();
        assert!(stats.initialized);
        assert_eq!(stats.document_count, 3);
        assert_eq!(stats.last_updated, None);
    }

    #[test]
    fn recommendations_sections_default_to_empty() {
        let recs: Recommendations = serde_json::from_str(r#"{"recommendations":["stay inside"]}"#).unwrap();
        assert_eq!(recs.recommendations, vec!["stay inside"]);
        assert!(recs.health_advice.is_empty());
        assert!(recs.industrial_alerts.is_empty());
    }

    #[test]
    fn smart_advice_answer_prefers_ai_response() {
        let advice: SmartAdvice =
            serde_json::from_str(r#"{"ai_response":"a","recommendation":"b"}"#).unwrap();
        assert_eq!(advice.answer(), "a");

        let advice: SmartAdvice = serde_json::from_str(r#"{"recommendation":"b"}"#).unwrap();
        assert_eq!(advice.answer(), "b");

        let advice: SmartAdvice = serde_json::from_str("{}").unwrap();
        assert_eq!(advice.answer(), "");
    }

    #[test]
    fn alert_priority_accepts_string_and_number() {
        let alert: Alert = serde_json::from_str(
            r#"{"severity":"warning","title":"t","message":"m","priority":"high"}"#,
        )
        .unwrap();
        assert_eq!(alert.priority, Value::String("high".into()));

        let alert: Alert =
            serde_json::from_str(r#"{"severity":"danger","title":"t","message":"m","priority":2}"#)
                .unwrap();
        assert_eq!(alert.priority, Value::from(2));
    }

    #[test]
    fn industry_type_is_omitted_when_absent() {
        let req = RecommendationRequest {
            user_type: "general".to_string(),
            industry_type: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"user_type":"general"}"#);
    }
}
