//! Recipe suggestion pipeline: prompt an LLM for recipes matching a set of
//! liked food genres and extract a structured `{title, url}` list from its
//! free-text answer, with a line-based fallback when the model ignores the
//! JSON instruction.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod prompt;
pub mod providers;
pub mod retry;
pub mod server;
pub mod service;

pub use error::SuggestError;
pub use model::{RecipeEntry, RecipeRequest, RecipeResult};
pub use providers::{CompletionProvider, OpenAiProvider, ProviderError};
pub use retry::RetryPolicy;
pub use service::{RecipeService, ServiceError};

/// One-shot suggestion flow wired from the environment.
///
/// Reads `OPENAI_API_KEY` (required) and `OPENAI_MODEL` (optional), then
/// runs the full prompt → retried completion → parse pipeline.
pub async fn suggest_recipes(
    liked_foods: &[String],
    limit: usize,
) -> Result<RecipeResult, SuggestError> {
    let api_key = std::env::var("OPENAI_API_KEY")?;
    let model =
        std::env::var("OPENAI_MODEL").unwrap_or_else(|_| providers::DEFAULT_MODEL.to_string());

    let provider = OpenAiProvider::new(api_key, model);
    let service = RecipeService::new(Box::new(provider));

    let request = RecipeRequest {
        liked_foods: liked_foods.to_vec(),
        limit,
    };
    Ok(service.handle(request).await?)
}
