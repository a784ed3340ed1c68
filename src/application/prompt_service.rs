//! PromptService - CRUD operations over the system prompt collection.

use std::sync::Arc;

use crate::domain::{default_prompts, validate_content, ApiError, SystemPrompt};
use crate::ports::{PromptRepository, RepositoryError};

/// Orchestrates prompt CRUD and bootstrap seeding.
pub struct PromptService {
    repository: Arc<dyn PromptRepository>,
}

impl PromptService {
    pub fn new(repository: Arc<dyn PromptRepository>) -> Self {
        Self { repository }
    }

    /// Returns all prompts with identity and content.
    pub async fn list(&self) -> Result<Vec<SystemPrompt>, ApiError> {
        self.repository.list().await.map_err(map_repo_error)
    }

    /// Persists a new prompt and returns it with its assigned identity.
    pub async fn create(&self, content: &str) -> Result<SystemPrompt, ApiError> {
        validate_content(content)?;
        self.repository.insert(content).await.map_err(map_repo_error)
    }

    /// Replaces the content of an existing prompt.
    pub async fn update(&self, id: &str, content: &str) -> Result<(), ApiError> {
        validate_content(content)?;
        self.repository
            .update(id, content)
            .await
            .map_err(map_repo_error)
    }

    /// Removes the prompt with the given identity.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.repository.delete(id).await.map_err(map_repo_error)
    }

    /// Inserts the three default prompts when the collection is empty.
    ///
    /// Seeding is count-gated only: any non-empty collection is left
    /// untouched, even if its contents differ from the defaults.
    /// Returns whether seeding happened.
    pub async fn seed_defaults(&self) -> Result<bool, ApiError> {
        let count = self.repository.count().await.map_err(map_repo_error)?;
        if count > 0 {
            return Ok(false);
        }

        let defaults = default_prompts();
        self.repository
            .insert_many(&defaults)
            .await
            .map_err(map_repo_error)?;
        tracing::info!(count = defaults.len(), "Seeded default system prompts");
        Ok(true)
    }
}

fn map_repo_error(err: RepositoryError) -> ApiError {
    match err {
        RepositoryError::NotFound(id) => ApiError::not_found("Prompt", id),
        RepositoryError::Store(message) => ApiError::Storage(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPromptRepository;
    use crate::domain::default_prompts;

    fn service() -> (PromptService, Arc<InMemoryPromptRepository>) {
        let repo = Arc::new(InMemoryPromptRepository::new());
        (PromptService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn create_then_list_shows_the_new_prompt() {
        let (service, _) = service();

        let created = service.create("Be concise").await.unwrap();
        let listed = service.list().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].content, "Be concise");
    }

    #[tokio::test]
    async fn create_rejects_empty_content() {
        let (service, repo) = service();

        let err = service.create("   ").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_unknown_identity_is_not_found() {
        let (service, _) = service();

        let err = service.update("missing", "new content").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[tokio::test]
    async fn update_requires_content() {
        let (service, _) = service();
        let created = service.create("original").await.unwrap();

        let err = service.update(&created.id, "").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let listed = service.list().await.unwrap();
        assert_eq!(listed[0].content, "original");
    }

    #[tokio::test]
    async fn delete_unknown_identity_is_not_found() {
        let (service, _) = service();

        let err = service.delete("missing").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[tokio::test]
    async fn seeding_fills_an_empty_collection_with_three_defaults() {
        let (service, _) = service();

        assert!(service.seed_defaults().await.unwrap());

        let listed = service.list().await.unwrap();
        let contents: Vec<String> = listed.into_iter().map(|p| p.content).collect();
        assert_eq!(contents, default_prompts());
    }

    #[tokio::test]
    async fn seeding_skips_a_non_empty_collection() {
        let (service, _) = service();
        service.create("custom").await.unwrap();

        assert!(!service.seed_defaults().await.unwrap());

        let listed = service.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].content, "custom");
    }
}
