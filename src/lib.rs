//! Prompt Relay - HTTP backend for prompt-steered completion generation.
//!
//! Forwards user prompts to an external completion API, persists system
//! prompts and finished conversation transcripts in MongoDB, and exposes
//! CRUD plus start/select/stop/continue endpoints over HTTP.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
