//! Adapters - Implementations of ports for external systems.
//!
//! # Module Organization
//!
//! - `ai` - Completion provider adapters (Groq, mock)
//! - `mongo` - MongoDB persistence adapters
//! - `memory` - In-memory persistence adapters (tests and development)
//! - `storage` - Local file transcript mirror
//! - `http` - axum routers, handlers, and DTOs

pub mod ai;
pub mod http;
pub mod memory;
pub mod mongo;
pub mod storage;
