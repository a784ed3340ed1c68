//! HTTP handlers for prompt endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use crate::application::PromptService;
use crate::domain::ApiError;

use super::dto::{
    CreatePromptResponse, DeletePromptResponse, PromptBody, PromptListResponse,
    UpdatePromptResponse,
};

#[derive(Clone)]
pub struct PromptHandlers {
    service: Arc<PromptService>,
}

impl PromptHandlers {
    pub fn new(service: Arc<PromptService>) -> Self {
        Self { service }
    }
}

/// GET /prompts - Fetch all system prompts with their identities.
pub async fn list_prompts(
    State(handlers): State<PromptHandlers>,
) -> Result<Json<PromptListResponse>, ApiError> {
    let prompts = handlers.service.list().await?;
    Ok(Json(PromptListResponse {
        prompts: prompts.into_iter().map(Into::into).collect(),
    }))
}

/// POST /prompts - Add a new system prompt.
pub async fn create_prompt(
    State(handlers): State<PromptHandlers>,
    body: Result<Json<PromptBody>, JsonRejection>,
) -> Result<Json<CreatePromptResponse>, ApiError> {
    let Json(body) = body?;
    let content = body
        .content
        .ok_or_else(|| ApiError::missing_field("content"))?;
    let prompt = handlers.service.create(&content).await?;
    Ok(Json(CreatePromptResponse {
        message: "Prompt added.".to_string(),
        prompt: prompt.into(),
    }))
}

/// PUT /prompts/{id} - Edit an existing system prompt.
pub async fn update_prompt(
    State(handlers): State<PromptHandlers>,
    Path(id): Path<String>,
    body: Result<Json<PromptBody>, JsonRejection>,
) -> Result<Json<UpdatePromptResponse>, ApiError> {
    let Json(body) = body?;
    let content = body
        .content
        .ok_or_else(|| ApiError::missing_field("content"))?;
    handlers.service.update(&id, &content).await?;
    Ok(Json(UpdatePromptResponse {
        message: "Prompt updated.".to_string(),
        id,
        content,
    }))
}

/// DELETE /prompts/{id} - Delete a system prompt.
pub async fn delete_prompt(
    State(handlers): State<PromptHandlers>,
    Path(id): Path<String>,
) -> Result<Json<DeletePromptResponse>, ApiError> {
    handlers.service.delete(&id).await?;
    Ok(Json(DeletePromptResponse {
        message: "Prompt deleted.".to_string(),
        id,
    }))
}
