//! Prompt repository port - persistence interface for system prompts.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::SystemPrompt;

/// Persistence interface for the system prompt collection.
///
/// Identity uniqueness is enforced by the store; the application only
/// validates content.
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// Returns all prompts in store order.
    async fn list(&self) -> Result<Vec<SystemPrompt>, RepositoryError>;

    /// Inserts a new prompt and returns it with its assigned identity.
    async fn insert(&self, content: &str) -> Result<SystemPrompt, RepositoryError>;

    /// Inserts several prompts at once (bootstrap seeding).
    async fn insert_many(&self, contents: &[String]) -> Result<(), RepositoryError>;

    /// Replaces the content of the prompt with the given identity.
    /// Returns `NotFound` if nothing matched.
    async fn update(&self, id: &str, content: &str) -> Result<(), RepositoryError>;

    /// Removes the prompt with the given identity.
    /// Returns `NotFound` if nothing matched.
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;

    /// Number of stored prompts (gates seeding).
    async fn count(&self) -> Result<u64, RepositoryError>;
}

/// Repository errors shared by the prompt and conversation stores.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record matched the given identity.
    #[error("no record matched id {0}")]
    NotFound(String),

    /// Underlying store failure; the store message is carried verbatim.
    #[error("{0}")]
    Store(String),
}

impl RepositoryError {
    pub fn store(message: impl Into<String>) -> Self {
        RepositoryError::Store(message.into())
    }
}
