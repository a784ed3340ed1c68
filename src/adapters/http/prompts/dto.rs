//! HTTP DTOs for prompt endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::SystemPrompt;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body for creating or updating a prompt. `content` is optional at the
/// wire level so its absence maps to a validation error, not a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptBody {
    pub content: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One prompt with its identity.
#[derive(Debug, Clone, Serialize)]
pub struct PromptDto {
    pub id: String,
    pub content: String,
}

impl From<SystemPrompt> for PromptDto {
    fn from(prompt: SystemPrompt) -> Self {
        Self {
            id: prompt.id,
            content: prompt.content,
        }
    }
}

/// Response for GET /prompts.
#[derive(Debug, Clone, Serialize)]
pub struct PromptListResponse {
    pub prompts: Vec<PromptDto>,
}

/// Response for POST /prompts.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePromptResponse {
    pub message: String,
    pub prompt: PromptDto,
}

/// Response for PUT /prompts/{id}.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePromptResponse {
    pub message: String,
    pub id: String,
    pub content: String,
}

/// Response for DELETE /prompts/{id}.
#[derive(Debug, Clone, Serialize)]
pub struct DeletePromptResponse {
    pub message: String,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_body_tolerates_missing_content() {
        let body: PromptBody = serde_json::from_str("{}").unwrap();
        assert!(body.content.is_none());

        let body: PromptBody = serde_json::from_str(r#"{"content": "Be kind"}"#).unwrap();
        assert_eq!(body.content.as_deref(), Some("Be kind"));
    }

    #[test]
    fn list_response_serializes_expected_shape() {
        let response = PromptListResponse {
            prompts: vec![SystemPrompt::new("abc123", "Be helpful").into()],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["prompts"][0]["id"], "abc123");
        assert_eq!(json["prompts"][0]["content"], "Be helpful");
    }
}
