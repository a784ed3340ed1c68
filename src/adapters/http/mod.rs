//! HTTP adapters - axum routers, handlers, and DTOs.

pub mod conversation;
pub mod error;
pub mod health;
pub mod prompts;

pub use conversation::{conversation_routes, ConversationHandlers};
pub use error::ErrorResponse;
pub use prompts::{prompt_routes, PromptHandlers};

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Assembles the full application router.
///
/// Cross-origin requests are allowed from anywhere, matching the
/// deployment this API fronts (a browser frontend on another origin).
pub fn app_router(prompts: PromptHandlers, conversation: ConversationHandlers) -> Router {
    Router::new()
        .route("/", get(health::health_check))
        .merge(prompt_routes(prompts))
        .merge(conversation_routes(conversation))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
