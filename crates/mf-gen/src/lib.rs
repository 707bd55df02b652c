//! Mockflow generation service.
//!
//! Talks to an OpenAI-compatible chat-completions endpoint (NVIDIA NIM by
//! default), streams the reply as server-sent events, and hands every delta
//! to the caller as it arrives. Turning the finished text into a document is
//! left to `mf_core::parse_mockup_response`.

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod sse;

pub use client::{GenerationService, NimClient};
pub use config::GenerationConfig;
pub use error::GenerationError;
pub use prompt::{ChatMessage, Role};
pub use sse::SseDecoder;
