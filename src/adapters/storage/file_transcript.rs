//! File-based transcript mirror.
//!
//! Writes the latest archived conversation to a local JSON file, fully
//! overwriting any prior content. Only the most recent transcript is kept.

use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::ConversationEntry;
use crate::ports::{MirrorError, TranscriptMirror};

/// File shape, matching the archived store document.
#[derive(Serialize)]
struct TranscriptDocument<'a> {
    conversation: &'a [ConversationEntry],
}

/// Overwriting JSON file mirror of the latest transcript.
#[derive(Debug, Clone)]
pub struct FileTranscriptMirror {
    path: PathBuf,
}

impl FileTranscriptMirror {
    /// Create a mirror that writes to the given file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TranscriptMirror for FileTranscriptMirror {
    async fn write(&self, entries: &[ConversationEntry]) -> Result<(), MirrorError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| MirrorError::Io(e.to_string()))?;
            }
        }

        let json = serde_json::to_string_pretty(&TranscriptDocument {
            conversation: entries,
        })
        .map_err(|e| MirrorError::Serialization(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| MirrorError::Io(e.to_string()))
    }
}
