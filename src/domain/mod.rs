//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `prompt` - System prompt entity, content validation, seed set
//! - `conversation` - Conversation buffer entries and selection rules
//! - `errors` - Error taxonomy shared by the services and the HTTP layer

pub mod conversation;
pub mod errors;
pub mod prompt;

pub use conversation::{
    join_system_prompts, ConversationEntry, ConversationLog, DEFAULT_SESSION, RESPONSE_OPTIONS,
};
pub use errors::ApiError;
pub use prompt::{default_prompts, validate_content, SystemPrompt};
