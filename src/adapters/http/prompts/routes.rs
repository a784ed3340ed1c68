//! HTTP routes for prompt endpoints.

use axum::routing::{delete, get, post, put};
use axum::Router;

use super::handlers::{create_prompt, delete_prompt, list_prompts, update_prompt, PromptHandlers};

/// Creates the prompt router with all endpoints.
pub fn prompt_routes(handlers: PromptHandlers) -> Router {
    Router::new()
        .route("/prompts", get(list_prompts))
        .route("/prompts", post(create_prompt))
        .route("/prompts/:id", put(update_prompt))
        .route("/prompts/:id", delete(delete_prompt))
        .with_state(handlers)
}
