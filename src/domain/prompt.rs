//! System prompt entity and the fixed seed set.

use serde::{Deserialize, Serialize};

use super::errors::ApiError;

/// A stored instruction string prepended to every completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemPrompt {
    /// Store-assigned identity (hex ObjectId for the Mongo adapter).
    pub id: String,
    /// Free-form text steering the completion model's behavior.
    pub content: String,
}

impl SystemPrompt {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// Validates prompt content at write time. Whitespace-only content is
/// treated the same as absent content.
pub fn validate_content(content: &str) -> Result<(), ApiError> {
    if content.trim().is_empty() {
        return Err(ApiError::missing_field("content"));
    }
    Ok(())
}

/// The three prompts inserted when the collection is empty at bootstrap.
/// Seeding is count-gated: a non-empty collection is never touched.
pub fn default_prompts() -> Vec<String> {
    vec![
        "You are an expert assistant capable of solving any problem efficiently, \
         providing clear, accurate, and concise information to achieve desired outcomes."
            .to_string(),
        "Act as a knowledgeable and versatile advisor, adapting to any scenario to \
         deliver actionable insights, solutions, and support."
            .to_string(),
        "Be a reliable, resourceful, and creative problem solver, equipped to handle \
         any task with clarity, precision, and professionalism."
            .to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prompts_are_exactly_three() {
        let prompts = default_prompts();
        assert_eq!(prompts.len(), 3);
        assert!(prompts[0].starts_with("You are an expert assistant"));
        assert!(prompts[1].starts_with("Act as a knowledgeable"));
        assert!(prompts[2].starts_with("Be a reliable"));
    }

    #[test]
    fn validate_content_rejects_empty() {
        assert!(validate_content("").is_err());
        assert!(validate_content("   ").is_err());
        assert!(validate_content("Be helpful").is_ok());
    }

    #[test]
    fn validation_message_matches_wire_format() {
        let err = validate_content("").unwrap_err();
        assert_eq!(err.to_string(), "content is required.");
    }
}
