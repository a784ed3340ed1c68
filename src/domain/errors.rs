//! Error taxonomy for request handling.
//!
//! Every store or provider failure is translated into one of these variants
//! before it reaches the transport layer, so handlers never format errors
//! ad hoc.

use thiserror::Error;

use crate::ports::CompletionError;

/// Errors surfaced by the prompt and conversation services.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required input field is missing or empty.
    #[error("{0}")]
    Validation(String),

    /// No record matches the given identity.
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// The operation is invalid given the current conversation state.
    #[error("{0}")]
    State(String),

    /// A selection index fell outside the stored response options.
    #[error("selected_index {index} is out of range for {len} options")]
    InvalidIndex { index: usize, len: usize },

    /// The completion provider failed; the provider message is echoed.
    #[error("completion failed: {0}")]
    Completion(#[from] CompletionError),

    /// The document store failed; the store message is echoed.
    #[error("storage failed: {0}")]
    Storage(String),
}

impl ApiError {
    /// Creates a validation error for a missing required field.
    pub fn missing_field(field: &str) -> Self {
        ApiError::Validation(format!("{} is required.", field))
    }

    /// Creates a not-found error.
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        ApiError::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Stable machine-readable code for the HTTP error body.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::State(_) => "STATE_ERROR",
            ApiError::InvalidIndex { .. } => "INVALID_INDEX",
            ApiError::Completion(_) => "COMPLETION_ERROR",
            ApiError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_matches_wire_message() {
        let err = ApiError::missing_field("user_input");
        assert_eq!(err.to_string(), "user_input is required.");
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn not_found_names_resource_and_id() {
        let err = ApiError::not_found("Prompt", "abc-123");
        assert_eq!(err.to_string(), "Prompt not found: abc-123");
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn invalid_index_reports_bounds() {
        let err = ApiError::InvalidIndex { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "selected_index 5 is out of range for 3 options"
        );
    }

    #[test]
    fn storage_error_echoes_message() {
        let err = ApiError::Storage("connection reset".to_string());
        assert_eq!(err.to_string(), "storage failed: connection reset");
        assert_eq!(err.code(), "STORAGE_ERROR");
    }
}
