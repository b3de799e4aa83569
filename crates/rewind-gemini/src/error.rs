use rewind_core::AssistantError;
use thiserror::Error;

/// Errors returned by the Gemini client.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gemini answered with a non-2xx status.
    #[error("Gemini API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to encode prompt: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The envelope parsed but held no candidate text.
    #[error("Gemini response contained no candidate text")]
    EmptyResponse,

    /// The candidate text was not the expected ranking JSON.
    #[error("{reason}")]
    Output { reason: String, raw: String },
}

impl From<GeminiError> for AssistantError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Output { reason, raw } => AssistantError::Output { reason, raw },
            other => AssistantError::Transport(other.to_string()),
        }
    }
}
