//! MongoDB implementation of PromptRepository.
//!
//! Prompts are keyed by store-generated ObjectIds. A path identity that is
//! not valid ObjectId hex can never match a document, so it is reported as
//! not found rather than as a store failure.

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::domain::SystemPrompt;
use crate::ports::{PromptRepository, RepositoryError};

const COLLECTION_NAME: &str = "system_prompts";

/// Stored shape of a system prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PromptDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    content: String,
}

impl From<PromptDocument> for SystemPrompt {
    fn from(doc: PromptDocument) -> Self {
        SystemPrompt {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            content: doc.content,
        }
    }
}

/// MongoDB implementation of PromptRepository.
#[derive(Clone)]
pub struct MongoPromptRepository {
    collection: Collection<PromptDocument>,
}

impl MongoPromptRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION_NAME),
        }
    }

    fn parse_id(id: &str) -> Result<ObjectId, RepositoryError> {
        ObjectId::parse_str(id).map_err(|_| RepositoryError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl PromptRepository for MongoPromptRepository {
    async fn list(&self) -> Result<Vec<SystemPrompt>, RepositoryError> {
        let mut cursor = self
            .collection
            .find(None, None)
            .await
            .map_err(|e| RepositoryError::store(format!("Failed to list prompts: {}", e)))?;

        let mut prompts = Vec::new();
        while let Some(doc) = cursor
            .try_next()
            .await
            .map_err(|e| RepositoryError::store(format!("Failed to read prompt cursor: {}", e)))?
        {
            prompts.push(doc.into());
        }
        Ok(prompts)
    }

    async fn insert(&self, content: &str) -> Result<SystemPrompt, RepositoryError> {
        let doc = PromptDocument {
            id: None,
            content: content.to_string(),
        };

        let result = self
            .collection
            .insert_one(&doc, None)
            .await
            .map_err(|e| RepositoryError::store(format!("Failed to insert prompt: {}", e)))?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| RepositoryError::store("Store returned a non-ObjectId identity"))?;

        Ok(SystemPrompt::new(id.to_hex(), content))
    }

    async fn insert_many(&self, contents: &[String]) -> Result<(), RepositoryError> {
        let docs: Vec<PromptDocument> = contents
            .iter()
            .map(|content| PromptDocument {
                id: None,
                content: content.clone(),
            })
            .collect();

        self.collection
            .insert_many(docs, None)
            .await
            .map_err(|e| RepositoryError::store(format!("Failed to seed prompts: {}", e)))?;
        Ok(())
    }

    async fn update(&self, id: &str, content: &str) -> Result<(), RepositoryError> {
        let oid = Self::parse_id(id)?;

        let result = self
            .collection
            .update_one(
                doc! { "_id": oid },
                doc! { "$set": { "content": content } },
                None,
            )
            .await
            .map_err(|e| RepositoryError::store(format!("Failed to update prompt: {}", e)))?;

        if result.matched_count == 0 {
            return Err(RepositoryError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let oid = Self::parse_id(id)?;

        let result = self
            .collection
            .delete_one(doc! { "_id": oid }, None)
            .await
            .map_err(|e| RepositoryError::store(format!("Failed to delete prompt: {}", e)))?;

        if result.deleted_count == 0 {
            return Err(RepositoryError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        self.collection
            .count_documents(None, None)
            .await
            .map_err(|e| RepositoryError::store(format!("Failed to count prompts: {}", e)))
    }
}
