//! MongoDB implementations of the persistence ports.
//!
//! Collections mirror the deployed store: `system_prompts` for the prompt
//! collection and `conversations` for archived transcripts, both in the
//! `task` database.

mod conversation_repository;
mod prompt_repository;

pub use conversation_repository::MongoConversationRepository;
pub use prompt_repository::MongoPromptRepository;

use mongodb::{Client, Database};

use crate::ports::RepositoryError;

/// Database holding both collections.
pub const DATABASE_NAME: &str = "task";

/// Opens a client against the given connection string and returns the
/// application database. No connection retry is attempted.
pub async fn connect(uri: &str) -> Result<Database, RepositoryError> {
    let client = Client::with_uri_str(uri)
        .await
        .map_err(|e| RepositoryError::store(format!("Failed to connect to MongoDB: {}", e)))?;
    Ok(client.database(DATABASE_NAME))
}
