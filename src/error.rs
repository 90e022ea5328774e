use thiserror::Error;

/// Errors that can occur when setting up or running a suggestion flow
/// outside the per-request path.
#[derive(Error, Debug)]
pub enum SuggestError {
    /// A single provider call failed
    #[error("provider error: {0}")]
    Provider(#[from] crate::providers::ProviderError),

    /// The retried suggestion flow failed as a whole
    #[error(transparent)]
    Service(#[from] crate::service::ServiceError),

    /// Environment variable error
    #[error("environment variable error: {0}")]
    Env(#[from] std::env::VarError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// No API key in configuration or environment
    #[error("no API key configured: set OPENAI_API_KEY or RECIPE__API_KEY")]
    MissingApiKey,
}
