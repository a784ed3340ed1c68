//! MongoDB implementation of ConversationRepository.
//!
//! Each stop inserts one new document wrapping the buffered entries; prior
//! documents are never touched.

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::domain::ConversationEntry;
use crate::ports::{ConversationRepository, RepositoryError};

const COLLECTION_NAME: &str = "conversations";

/// Stored shape of an archived conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConversationDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    conversation: Vec<ConversationEntry>,
    session_id: String,
    saved_at: DateTime,
}

/// MongoDB implementation of ConversationRepository.
#[derive(Clone)]
pub struct MongoConversationRepository {
    collection: Collection<ConversationDocument>,
}

impl MongoConversationRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION_NAME),
        }
    }
}

#[async_trait]
impl ConversationRepository for MongoConversationRepository {
    async fn archive(
        &self,
        session_id: &str,
        entries: &[ConversationEntry],
    ) -> Result<String, RepositoryError> {
        let doc = ConversationDocument {
            id: None,
            conversation: entries.to_vec(),
            session_id: session_id.to_string(),
            saved_at: DateTime::now(),
        };

        let result = self
            .collection
            .insert_one(&doc, None)
            .await
            .map_err(|e| RepositoryError::store(format!("Failed to archive conversation: {}", e)))?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| RepositoryError::store("Store returned a non-ObjectId identity"))?;

        Ok(id.to_hex())
    }
}
