//! HTTP handlers for conversation endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::application::ConversationService;
use crate::domain::ApiError;

use super::dto::{
    session_or_default, ContinueResponse, SelectRequest, SelectResponse, StartRequest,
    StartResponse, StopRequest, StopResponse,
};

#[derive(Clone)]
pub struct ConversationHandlers {
    service: Arc<ConversationService>,
}

impl ConversationHandlers {
    pub fn new(service: Arc<ConversationService>) -> Self {
        Self { service }
    }
}

/// POST /start - Generate three candidate responses for the user input.
pub async fn start_conversation(
    State(handlers): State<ConversationHandlers>,
    body: Result<Json<StartRequest>, JsonRejection>,
) -> Result<Json<StartResponse>, ApiError> {
    let Json(body) = body?;
    let user_input = body
        .user_input
        .ok_or_else(|| ApiError::missing_field("user_input"))?;
    let session = session_or_default(body.session_id);

    let responses = handlers.service.start(&session, &user_input).await?;
    Ok(Json(StartResponse {
        responses,
        message: "Responses generated.".to_string(),
    }))
}

/// POST /select - Record the chosen response on the latest entry.
pub async fn select_response(
    State(handlers): State<ConversationHandlers>,
    body: Result<Json<SelectRequest>, JsonRejection>,
) -> Result<Json<SelectResponse>, ApiError> {
    let Json(body) = body?;
    let index = body
        .selected_index
        .ok_or_else(|| ApiError::missing_field("selected_index"))?;
    let index = usize::try_from(index).map_err(|_| {
        ApiError::Validation("selected_index must be a non-negative integer.".to_string())
    })?;
    let session = session_or_default(body.session_id);

    let chosen_response = handlers.service.select(&session, index).await?;
    Ok(Json(SelectResponse {
        message: "Response selected.".to_string(),
        chosen_response,
    }))
}

/// POST /stop - Archive the buffered conversation and clear the session.
pub async fn stop_conversation(
    State(handlers): State<ConversationHandlers>,
    body: Option<Json<StopRequest>>,
) -> Result<Json<StopResponse>, ApiError> {
    let session = session_or_default(body.and_then(|Json(b)| b.session_id));

    let mongo_id = handlers.service.stop(&session).await?;
    Ok(Json(StopResponse {
        message: "Conversation ended and saved to MongoDB as JSON.".to_string(),
        mongo_id,
    }))
}

/// POST /continue - Acknowledgment only; touches neither buffer nor store.
pub async fn continue_conversation() -> Json<ContinueResponse> {
    Json(ContinueResponse {
        message: "Conversation ongoing. You can send more user input.".to_string(),
    })
}
