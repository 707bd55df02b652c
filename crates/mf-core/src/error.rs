//! Error types for document loading and configuration.

use thiserror::Error;

/// Failures while turning external text into a `MockupDocument` or config.
///
/// Rendering never fails; these only surface at the load boundary, where the
/// caller keeps its previous document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("could not locate a JSON object in the response")]
    NoJson,

    #[error("malformed mockup JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid canvas config: {0}")]
    Config(String),
}
