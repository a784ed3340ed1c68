//! In-memory implementations of the persistence ports.
//!
//! Store prompts and archived conversations in process memory. Useful for
//! testing and development; identities keep the hex ObjectId shape so the
//! HTTP contract is indistinguishable from the Mongo adapters.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{ConversationEntry, SystemPrompt};
use crate::ports::{ConversationRepository, PromptRepository, RepositoryError};

/// In-memory prompt collection, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPromptRepository {
    prompts: Arc<RwLock<Vec<SystemPrompt>>>,
}

impl InMemoryPromptRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PromptRepository for InMemoryPromptRepository {
    async fn list(&self) -> Result<Vec<SystemPrompt>, RepositoryError> {
        Ok(self.prompts.read().await.clone())
    }

    async fn insert(&self, content: &str) -> Result<SystemPrompt, RepositoryError> {
        let prompt = SystemPrompt::new(ObjectId::new().to_hex(), content);
        self.prompts.write().await.push(prompt.clone());
        Ok(prompt)
    }

    async fn insert_many(&self, contents: &[String]) -> Result<(), RepositoryError> {
        let mut prompts = self.prompts.write().await;
        for content in contents {
            prompts.push(SystemPrompt::new(ObjectId::new().to_hex(), content.clone()));
        }
        Ok(())
    }

    async fn update(&self, id: &str, content: &str) -> Result<(), RepositoryError> {
        let mut prompts = self.prompts.write().await;
        let prompt = prompts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        prompt.content = content.to_string();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut prompts = self.prompts.write().await;
        let position = prompts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        prompts.remove(position);
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.prompts.read().await.len() as u64)
    }
}

/// One archived transcript as held by the in-memory store.
#[derive(Debug, Clone)]
pub struct ArchivedConversation {
    pub id: String,
    pub session_id: String,
    pub entries: Vec<ConversationEntry>,
}

/// In-memory append-only conversation archive.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationRepository {
    archived: Arc<RwLock<Vec<ArchivedConversation>>>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything archived so far (useful for tests)
    pub async fn archived(&self) -> Vec<ArchivedConversation> {
        self.archived.read().await.clone()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn archive(
        &self,
        session_id: &str,
        entries: &[ConversationEntry],
    ) -> Result<String, RepositoryError> {
        let id = ObjectId::new().to_hex();
        self.archived.write().await.push(ArchivedConversation {
            id: id.clone(),
            session_id: session_id.to_string(),
            entries: entries.to_vec(),
        });
        Ok(id)
    }
}
