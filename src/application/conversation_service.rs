//! ConversationService - start/select/stop orchestration.
//!
//! Owns the per-session conversation buffers. Buffers live in a lock-guarded
//! map keyed by a caller-supplied session identifier; callers that omit the
//! identifier share the reserved [`DEFAULT_SESSION`] buffer, which preserves
//! the original single-buffer client contract.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{
    join_system_prompts, ApiError, ConversationEntry, ConversationLog, RESPONSE_OPTIONS,
};
use crate::ports::{
    CompletionProvider, CompletionRequest, ConversationRepository, Message, MessageRole,
    PromptRepository, RepositoryError, TranscriptMirror,
};

/// Orchestrates response generation, selection, and transcript archival.
pub struct ConversationService {
    prompts: Arc<dyn PromptRepository>,
    provider: Arc<dyn CompletionProvider>,
    archive: Arc<dyn ConversationRepository>,
    mirror: Option<Arc<dyn TranscriptMirror>>,
    sessions: RwLock<HashMap<String, ConversationLog>>,
}

impl ConversationService {
    pub fn new(
        prompts: Arc<dyn PromptRepository>,
        provider: Arc<dyn CompletionProvider>,
        archive: Arc<dyn ConversationRepository>,
        mirror: Option<Arc<dyn TranscriptMirror>>,
    ) -> Self {
        Self {
            prompts,
            provider,
            archive,
            mirror,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Generates three candidate responses and appends one entry to the
    /// session's buffer.
    ///
    /// The three completions are sequential and use the identical
    /// two-message payload: one system message (all prompt contents joined
    /// with single spaces, in store order) and one user message. A failure
    /// on any call aborts the whole start; nothing is appended.
    pub async fn start(
        &self,
        session_id: &str,
        user_input: &str,
    ) -> Result<Vec<String>, ApiError> {
        if user_input.trim().is_empty() {
            return Err(ApiError::missing_field("user_input"));
        }

        let snapshot: Vec<String> = self
            .prompts
            .list()
            .await
            .map_err(map_repo_error)?
            .into_iter()
            .map(|p| p.content)
            .collect();
        let system_message = join_system_prompts(&snapshot);

        let mut responses = Vec::with_capacity(RESPONSE_OPTIONS);
        for _ in 0..RESPONSE_OPTIONS {
            let request = CompletionRequest {
                messages: vec![
                    Message::system(system_message.clone()),
                    Message::user(user_input),
                ],
            };
            responses.push(self.provider.complete(request).await?);
        }

        let entry = ConversationEntry::new(user_input, snapshot, responses.clone());
        let mut sessions = self.sessions.write().await;
        sessions.entry(session_id.to_string()).or_default().push(entry);

        tracing::debug!(
            session_id,
            options = responses.len(),
            "Appended conversation entry"
        );
        Ok(responses)
    }

    /// Records the chosen option on the session's latest entry and returns
    /// its text. Only the most recent entry can be selected against.
    pub async fn select(&self, session_id: &str, index: usize) -> Result<String, ApiError> {
        let mut sessions = self.sessions.write().await;
        let log = sessions.get_mut(session_id).ok_or_else(|| {
            ApiError::State("No responses available to select from.".to_string())
        })?;
        log.select(index)
    }

    /// Archives the session's full buffered sequence as one document,
    /// mirrors it if a mirror is configured, and returns the archived
    /// document's identity.
    ///
    /// The buffer is drained before the store call, so a turn appended
    /// while the insert is in flight lands in a fresh buffer and is never
    /// lost. If the store rejects the document the drained entries are put
    /// back in front of anything appended meanwhile; once the store has
    /// accepted it they stay cleared even if mirroring then fails.
    /// Stopping a session with no buffer archives an empty transcript.
    pub async fn stop(&self, session_id: &str) -> Result<String, ApiError> {
        let entries = {
            let mut sessions = self.sessions.write().await;
            sessions
                .get_mut(session_id)
                .map(|log| log.take_entries())
                .unwrap_or_default()
        };

        let archive_id = match self.archive.archive(session_id, &entries).await {
            Ok(id) => id,
            Err(err) => {
                let mut sessions = self.sessions.write().await;
                sessions
                    .entry(session_id.to_string())
                    .or_default()
                    .prepend(entries);
                return Err(map_repo_error(err));
            }
        };

        if let Some(mirror) = &self.mirror {
            mirror
                .write(&entries)
                .await
                .map_err(|e| ApiError::Storage(e.to_string()))?;
        }

        // Drop the session only if still empty; a concurrent start may
        // have begun refilling it.
        {
            let mut sessions = self.sessions.write().await;
            if sessions.get(session_id).map_or(false, |log| log.is_empty()) {
                sessions.remove(session_id);
            }
        }

        tracing::info!(session_id, archive_id = %archive_id, entries = entries.len(), "Archived conversation");
        Ok(archive_id)
    }

    /// Current buffered entries for a session (diagnostics and tests).
    pub async fn buffered_entries(&self, session_id: &str) -> Vec<ConversationEntry> {
        let sessions = self.sessions.read().await;
        sessions
            .get(session_id)
            .map(|log| log.entries().to_vec())
            .unwrap_or_default()
    }
}

fn map_repo_error(err: RepositoryError) -> ApiError {
    match err {
        RepositoryError::NotFound(id) => ApiError::not_found("Conversation", id),
        RepositoryError::Store(message) => ApiError::Storage(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::sync::Semaphore;

    use crate::adapters::ai::{MockCompletionProvider, MockFailure};
    use crate::adapters::memory::{InMemoryConversationRepository, InMemoryPromptRepository};
    use crate::domain::DEFAULT_SESSION;

    /// Archive double that refuses every insert.
    struct RejectingArchive;

    #[async_trait]
    impl ConversationRepository for RejectingArchive {
        async fn archive(
            &self,
            _session_id: &str,
            _entries: &[ConversationEntry],
        ) -> Result<String, RepositoryError> {
            Err(RepositoryError::store("insert refused"))
        }
    }

    /// Archive double that signals when an insert begins and holds it
    /// until the test releases it.
    struct GatedArchive {
        inner: InMemoryConversationRepository,
        started: Arc<Semaphore>,
        proceed: Arc<Semaphore>,
    }

    #[async_trait]
    impl ConversationRepository for GatedArchive {
        async fn archive(
            &self,
            session_id: &str,
            entries: &[ConversationEntry],
        ) -> Result<String, RepositoryError> {
            self.started.add_permits(1);
            self.proceed.acquire().await.expect("gate closed").forget();
            self.inner.archive(session_id, entries).await
        }
    }

    struct Fixture {
        service: ConversationService,
        provider: MockCompletionProvider,
        archive: Arc<InMemoryConversationRepository>,
    }

    async fn fixture_with_prompts(prompts: &[&str]) -> Fixture {
        let prompt_repo = Arc::new(InMemoryPromptRepository::new());
        for content in prompts {
            prompt_repo.insert(content).await.unwrap();
        }
        let provider = MockCompletionProvider::new();
        let archive = Arc::new(InMemoryConversationRepository::new());
        let service = ConversationService::new(
            prompt_repo,
            Arc::new(provider.clone()),
            archive.clone(),
            None,
        );
        Fixture {
            service,
            provider,
            archive,
        }
    }

    #[tokio::test]
    async fn start_generates_three_options_and_buffers_one_entry() {
        let fx = fixture_with_prompts(&["Be helpful", "Be concise"]).await;
        let provider = fx.provider.with_responses(["one", "two", "three"]);

        let responses = fx.service.start(DEFAULT_SESSION, "hello").await.unwrap();

        assert_eq!(responses, vec!["one", "two", "three"]);
        assert_eq!(provider.call_count(), 3);

        let buffered = fx.service.buffered_entries(DEFAULT_SESSION).await;
        assert_eq!(buffered.len(), 1);
        assert_eq!(buffered[0].user_input, "hello");
        assert_eq!(
            buffered[0].system_prompts,
            vec!["Be helpful".to_string(), "Be concise".to_string()]
        );
        assert!(buffered[0].chosen_response.is_none());
    }

    #[tokio::test]
    async fn start_sends_identical_two_message_payloads() {
        let fx = fixture_with_prompts(&["Be helpful", "Be concise"]).await;

        fx.service.start(DEFAULT_SESSION, "hello").await.unwrap();

        let calls = fx.provider.calls();
        assert_eq!(calls.len(), 3);
        for call in &calls {
            assert_eq!(call.messages.len(), 2);
            assert_eq!(call.messages[0].role, MessageRole::System);
            assert_eq!(call.messages[0].content, "Be helpful Be concise");
            assert_eq!(call.messages[1].role, MessageRole::User);
            assert_eq!(call.messages[1].content, "hello");
        }
    }

    #[tokio::test]
    async fn start_rejects_empty_user_input_without_buffering() {
        let fx = fixture_with_prompts(&["Be helpful"]).await;

        let err = fx.service.start(DEFAULT_SESSION, "  ").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(fx.provider.call_count(), 0);
        assert!(fx.service.buffered_entries(DEFAULT_SESSION).await.is_empty());
    }

    #[tokio::test]
    async fn start_failure_midway_buffers_nothing() {
        let fx = fixture_with_prompts(&["Be helpful"]).await;
        fx.provider
            .clone()
            .with_responses(["one"])
            .with_failure(MockFailure::Unavailable("down".to_string()));

        let err = fx.service.start(DEFAULT_SESSION, "hello").await.unwrap_err();
        assert!(matches!(err, ApiError::Completion(_)));
        // The first result is lost entirely; no partial buffering.
        assert!(fx.service.buffered_entries(DEFAULT_SESSION).await.is_empty());
    }

    #[tokio::test]
    async fn select_before_start_is_a_state_error() {
        let fx = fixture_with_prompts(&[]).await;

        let err = fx.service.select(DEFAULT_SESSION, 0).await.unwrap_err();
        assert!(matches!(err, ApiError::State(_)));
    }

    #[tokio::test]
    async fn select_records_choice_and_out_of_range_leaves_it_null() {
        let fx = fixture_with_prompts(&[]).await;
        fx.provider.clone().with_responses(["a", "b", "c"]);
        fx.service.start(DEFAULT_SESSION, "hello").await.unwrap();

        let err = fx.service.select(DEFAULT_SESSION, 7).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidIndex { .. }));
        assert!(fx.service.buffered_entries(DEFAULT_SESSION).await[0]
            .chosen_response
            .is_none());

        let chosen = fx.service.select(DEFAULT_SESSION, 1).await.unwrap();
        assert_eq!(chosen, "b");
        assert_eq!(
            fx.service.buffered_entries(DEFAULT_SESSION).await[0]
                .chosen_response
                .as_deref(),
            Some("b")
        );
    }

    #[tokio::test]
    async fn stop_archives_the_full_sequence_then_clears_the_buffer() {
        let fx = fixture_with_prompts(&[]).await;
        fx.provider
            .clone()
            .with_responses(["a", "b", "c", "d", "e", "f"]);
        fx.service.start(DEFAULT_SESSION, "first").await.unwrap();
        fx.service.start(DEFAULT_SESSION, "second").await.unwrap();
        fx.service.select(DEFAULT_SESSION, 0).await.unwrap();

        let archive_id = fx.service.stop(DEFAULT_SESSION).await.unwrap();
        assert!(!archive_id.is_empty());

        let archived = fx.archive.archived().await;
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].id, archive_id);
        assert_eq!(archived[0].entries.len(), 2);
        // Unselected entries are archived as-is.
        assert!(archived[0].entries[0].chosen_response.is_none());
        assert_eq!(archived[0].entries[1].chosen_response.as_deref(), Some("d"));

        assert!(fx.service.buffered_entries(DEFAULT_SESSION).await.is_empty());
    }

    #[tokio::test]
    async fn archival_failure_leaves_the_buffer_intact() {
        let service = ConversationService::new(
            Arc::new(InMemoryPromptRepository::new()),
            Arc::new(MockCompletionProvider::new()),
            Arc::new(RejectingArchive),
            None,
        );

        service.start(DEFAULT_SESSION, "hello").await.unwrap();
        let err = service.stop(DEFAULT_SESSION).await.unwrap_err();
        assert!(matches!(err, ApiError::Storage(_)));

        let buffered = service.buffered_entries(DEFAULT_SESSION).await;
        assert_eq!(buffered.len(), 1);
        assert_eq!(buffered[0].user_input, "hello");
    }

    #[tokio::test]
    async fn turn_arriving_during_archival_stays_buffered() {
        let inner = InMemoryConversationRepository::new();
        let started = Arc::new(Semaphore::new(0));
        let proceed = Arc::new(Semaphore::new(0));
        let service = Arc::new(ConversationService::new(
            Arc::new(InMemoryPromptRepository::new()),
            Arc::new(MockCompletionProvider::new()),
            Arc::new(GatedArchive {
                inner: inner.clone(),
                started: started.clone(),
                proceed: proceed.clone(),
            }),
            None,
        ));

        service.start(DEFAULT_SESSION, "first").await.unwrap();

        let stop = {
            let service = service.clone();
            tokio::spawn(async move { service.stop(DEFAULT_SESSION).await })
        };
        started.acquire().await.unwrap().forget();

        // A new turn lands while the archive insert is still in flight.
        service.start(DEFAULT_SESSION, "second").await.unwrap();
        proceed.add_permits(1);
        stop.await.unwrap().unwrap();

        let archived = inner.archived().await;
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].entries.len(), 1);
        assert_eq!(archived[0].entries[0].user_input, "first");

        let buffered = service.buffered_entries(DEFAULT_SESSION).await;
        assert_eq!(buffered.len(), 1);
        assert_eq!(buffered[0].user_input, "second");
    }

    #[tokio::test]
    async fn stop_on_an_idle_session_archives_an_empty_transcript() {
        let fx = fixture_with_prompts(&[]).await;

        let archive_id = fx.service.stop(DEFAULT_SESSION).await.unwrap();
        assert!(!archive_id.is_empty());
        assert!(fx.archive.archived().await[0].entries.is_empty());
    }

    #[tokio::test]
    async fn sessions_do_not_interfere_with_each_other() {
        let fx = fixture_with_prompts(&[]).await;
        fx.provider
            .clone()
            .with_responses(["a1", "a2", "a3", "b1", "b2", "b3"]);

        fx.service.start("alice", "hi from alice").await.unwrap();
        fx.service.start("bob", "hi from bob").await.unwrap();

        // Bob's select lands on Bob's entry, not Alice's.
        let chosen = fx.service.select("bob", 2).await.unwrap();
        assert_eq!(chosen, "b3");
        assert!(fx.service.buffered_entries("alice").await[0]
            .chosen_response
            .is_none());

        fx.service.stop("alice").await.unwrap();
        assert!(fx.service.buffered_entries("alice").await.is_empty());
        assert_eq!(fx.service.buffered_entries("bob").await.len(), 1);
    }
}
