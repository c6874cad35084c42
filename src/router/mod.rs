// src/router/mod.rs
// Message routing: decides which responder handles a message

pub mod intent;

pub use intent::{classify, Intent};
