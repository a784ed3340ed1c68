//! HTTP routes for conversation endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{
    continue_conversation, select_response, start_conversation, stop_conversation,
    ConversationHandlers,
};

/// Creates the conversation router with all endpoints.
pub fn conversation_routes(handlers: ConversationHandlers) -> Router {
    Router::new()
        .route("/start", post(start_conversation))
        .route("/select", post(select_response))
        .route("/stop", post(stop_conversation))
        .route("/continue", post(continue_conversation))
        .with_state(handlers)
}
