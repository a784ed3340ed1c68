//! Conversation repository port - archive storage for finished transcripts.

use async_trait::async_trait;

use crate::domain::ConversationEntry;

use super::prompt_repository::RepositoryError;

/// Append-only store for archived conversations.
///
/// Each stop produces one new document wrapping the full buffered sequence;
/// prior documents are never updated.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Persists one transcript and returns the store-assigned identity.
    async fn archive(
        &self,
        session_id: &str,
        entries: &[ConversationEntry],
    ) -> Result<String, RepositoryError>;
}
