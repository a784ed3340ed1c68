//! Completion provider adapters.
//!
//! - `groq_provider` - Production adapter for Groq's OpenAI-compatible API
//! - `mock_provider` - Scripted provider for tests and development

mod groq_provider;
mod mock_provider;

pub use groq_provider::GroqProvider;
pub use mock_provider::{MockCompletionProvider, MockFailure};
