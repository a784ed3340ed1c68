//! Prompt HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::PromptHandlers;
pub use routes::prompt_routes;
