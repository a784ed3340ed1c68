//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CompletionProvider` - Port for the external completion API
//! - `PromptRepository` - Persistence for the system prompt collection
//! - `ConversationRepository` - Append-only archive of finished transcripts
//! - `TranscriptMirror` - Optional local copy of the latest transcript

mod completion_provider;
mod conversation_repository;
mod prompt_repository;
mod transcript_mirror;

pub use completion_provider::{
    CompletionError, CompletionProvider, CompletionRequest, Message, MessageRole,
};
pub use conversation_repository::ConversationRepository;
pub use prompt_repository::{PromptRepository, RepositoryError};
pub use transcript_mirror::{MirrorError, TranscriptMirror};
