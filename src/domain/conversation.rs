//! Conversation buffer types and selection rules.
//!
//! A [`ConversationLog`] is the ordered sequence of entries accumulated for
//! one session between a `start` and the next `stop`. The log itself is
//! pure; the application layer owns the session map and its lock.

use serde::{Deserialize, Serialize};

use super::errors::ApiError;

/// Number of candidate responses generated per start call.
pub const RESPONSE_OPTIONS: usize = 3;

/// Session used when the caller does not supply a `session_id`. Clients
/// that never send one all share this single buffer.
pub const DEFAULT_SESSION: &str = "default";

/// One conversation turn: the user's input, the prompt snapshot used for
/// it, the generated options, and the eventually chosen option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub user_input: String,
    /// Snapshot of all prompt contents at the time the entry was created.
    pub system_prompts: Vec<String>,
    pub response_options: Vec<String>,
    pub chosen_response: Option<String>,
}

impl ConversationEntry {
    pub fn new(
        user_input: impl Into<String>,
        system_prompts: Vec<String>,
        response_options: Vec<String>,
    ) -> Self {
        Self {
            user_input: user_input.into(),
            system_prompts,
            response_options,
            chosen_response: None,
        }
    }
}

/// Ordered sequence of entries for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationLog {
    entries: Vec<ConversationEntry>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    /// Appends a new turn to the log.
    pub fn push(&mut self, entry: ConversationEntry) {
        self.entries.push(entry);
    }

    /// Records the chosen option on the latest entry and returns its text.
    ///
    /// Only the most recent entry can be selected against; selecting again
    /// overwrites the previous choice.
    pub fn select(&mut self, index: usize) -> Result<String, ApiError> {
        let last = self.entries.last_mut().ok_or_else(|| {
            ApiError::State("No responses available to select from.".to_string())
        })?;

        let chosen = last
            .response_options
            .get(index)
            .ok_or(ApiError::InvalidIndex {
                index,
                len: last.response_options.len(),
            })?
            .clone();

        last.chosen_response = Some(chosen.clone());
        Ok(chosen)
    }

    /// Drains the log, returning every buffered entry in order.
    /// Splices previously drained entries back in front of the current
    /// contents, restoring the original order.
    pub fn prepend(&mut self, mut entries: Vec<ConversationEntry>) {
        if entries.is_empty() {
            return;
        }
        entries.append(&mut self.entries);
        self.entries = entries;
    }

    pub fn take_entries(&mut self) -> Vec<ConversationEntry> {
        std::mem::take(&mut self.entries)
    }
}

/// Joins prompt contents into the single system message sent to the
/// completion API. Contents are concatenated with single-space separators.
pub fn join_system_prompts(prompts: &[String]) -> String {
    prompts.join(" ")
}
