// src/lib.rs

pub mod api;
pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod http;
pub mod llm;
pub mod repl;
pub mod router;
pub mod session;
pub mod state;
pub mod tools;

pub use config::HelperConfig;
pub use dispatcher::Dispatcher;
pub use error::{HelperError, Result};
