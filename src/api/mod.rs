// src/api/mod.rs
// HTTP API: wire types, error contract, handlers and router

pub mod error;
pub mod http;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use http::http_router;
pub use types::{ChatReply, ChatRequest, MessageKind};
