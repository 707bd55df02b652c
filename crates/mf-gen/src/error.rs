//! Errors raised by the generation client.

use mf_core::DocumentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("API key is required. Set NIM_API_KEY or pass --api-key.")]
    MissingCredential,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenerationError {
    /// Build an `Api` error from a failed response body.
    ///
    /// Uses the provider's `error.message` when the body carries one,
    /// otherwise a generic `API error: <status>`.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .pointer("/error/message")
                    .and_then(|m| m.as_str())
                    .filter(|m| !m.is_empty())
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| format!("API error: {status}"));
        GenerationError::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn api_error_prefers_provider_message() {
        let err = GenerationError::from_response_body(
            401,
            r#"{"error":{"message":"Invalid API key","type":"auth"}}"#,
        );
        assert_eq!(err.to_string(), "Invalid API key");
        assert!(matches!(err, GenerationError::Api { status: 401, .. }));
    }

    #[test]
    fn api_error_falls_back_to_status() {
        let err = GenerationError::from_response_body(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "API error: 502");

        let err = GenerationError::from_response_body(500, r#"{"error":{}}"#);
        assert_eq!(err.to_string(), "API error: 500");
    }
}
