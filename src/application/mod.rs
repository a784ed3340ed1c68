//! Application layer - services orchestrating the ports.
//!
//! - `PromptService` - CRUD over the system prompt collection plus seeding
//! - `ConversationService` - start/select/stop over session buffers

mod conversation_service;
mod prompt_service;

pub use conversation_service::ConversationService;
pub use prompt_service::PromptService;
