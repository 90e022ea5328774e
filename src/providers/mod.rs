mod open_ai;

pub use open_ai::{OpenAiProvider, DEFAULT_MODEL};

use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single completion attempt.
///
/// One attempt, one error; recovery by retrying is the caller's concern
/// (see [`crate::retry::RetryPolicy`]).
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network-level failure (DNS, TLS, connect, body read).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status (auth failure,
    /// rate limit, bad request).
    #[error("provider returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The provider answered 200 but the envelope did not contain a
    /// usable completion.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

/// A completion provider: one prompt in, the model's raw text out.
///
/// Implementations perform exactly one call and must not retry
/// internally.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name for logging (e.g. "openai").
    fn provider_name(&self) -> &str;

    /// Send `prompt` and return the text of the first completion choice.
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}
