//! Transcript mirror port - local copy of the latest archived transcript.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ConversationEntry;

/// Writes a local mirror of the most recently archived conversation.
///
/// The mirror is fully overwritten on every stop; only the latest
/// transcript is kept.
#[async_trait]
pub trait TranscriptMirror: Send + Sync {
    async fn write(&self, entries: &[ConversationEntry]) -> Result<(), MirrorError>;
}

/// Transcript mirror errors.
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("failed to serialize transcript: {0}")]
    Serialization(String),

    #[error("failed to write transcript: {0}")]
    Io(String),
}
