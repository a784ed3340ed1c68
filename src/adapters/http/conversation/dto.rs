//! HTTP DTOs for conversation endpoints.
//!
//! Required fields are optional at the wire level so their absence maps to
//! a validation error rather than a body-parse rejection. Every request may
//! carry a `session_id`; without one the shared default session is used.

use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_SESSION;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body for POST /start.
#[derive(Debug, Clone, Deserialize)]
pub struct StartRequest {
    pub user_input: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Body for POST /select. The index is taken as a signed integer so a
/// negative value reaches the handler and gets a taxonomy error instead
/// of an extractor rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectRequest {
    pub selected_index: Option<i64>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Body for POST /stop (optional; the route also accepts no body).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Resolves the session a request targets.
pub fn session_or_default(session_id: Option<String>) -> String {
    session_id.unwrap_or_else(|| DEFAULT_SESSION.to_string())
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for POST /start.
#[derive(Debug, Clone, Serialize)]
pub struct StartResponse {
    pub responses: Vec<String>,
    pub message: String,
}

/// Response for POST /select.
#[derive(Debug, Clone, Serialize)]
pub struct SelectResponse {
    pub message: String,
    pub chosen_response: String,
}

/// Response for POST /stop.
#[derive(Debug, Clone, Serialize)]
pub struct StopResponse {
    pub message: String,
    pub mongo_id: String,
}

/// Response for POST /continue.
#[derive(Debug, Clone, Serialize)]
pub struct ContinueResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_request_tolerates_missing_fields() {
        let request: StartRequest = serde_json::from_str("{}").unwrap();
        assert!(request.user_input.is_none());
        assert!(request.session_id.is_none());
    }

    #[test]
    fn select_request_parses_index_and_session() {
        let request: SelectRequest =
            serde_json::from_str(r#"{"selected_index": 1, "session_id": "alice"}"#).unwrap();
        assert_eq!(request.selected_index, Some(1));
        assert_eq!(request.session_id.as_deref(), Some("alice"));
    }

    #[test]
    fn select_request_accepts_a_negative_index_for_later_validation() {
        let request: SelectRequest = serde_json::from_str(r#"{"selected_index": -1}"#).unwrap();
        assert_eq!(request.selected_index, Some(-1));
    }

    #[test]
    fn missing_session_falls_back_to_default() {
        assert_eq!(session_or_default(None), DEFAULT_SESSION);
        assert_eq!(session_or_default(Some("alice".to_string())), "alice");
    }
}
