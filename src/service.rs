//! Orchestration of one suggestion request: prompt, retried completion
//! call, parse.

use crate::model::{RecipeRequest, RecipeResult};
use crate::parser::parse_completion;
use crate::prompt::build_prompt;
use crate::providers::{CompletionProvider, ProviderError};
use crate::retry::RetryPolicy;
use log::debug;
use thiserror::Error;

/// Request-level failure surfaced to the HTTP boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Every completion attempt failed. Carries the last attempt's error;
    /// mapped to a 503 at the boundary, never retried further.
    #[error("provider unavailable after {attempts} attempts")]
    ProviderUnavailable {
        attempts: u32,
        #[source]
        source: ProviderError,
    },
}

/// Per-request orchestrator. Holds no request state; one instance serves
/// all requests concurrently.
pub struct RecipeService {
    provider: Box<dyn CompletionProvider>,
    retry: RetryPolicy,
}

impl RecipeService {
    pub fn new(provider: Box<dyn CompletionProvider>) -> Self {
        Self::with_retry(provider, RetryPolicy::default())
    }

    pub fn with_retry(provider: Box<dyn CompletionProvider>, retry: RetryPolicy) -> Self {
        RecipeService { provider, retry }
    }

    /// Build the prompt, obtain a completion with retry, parse it.
    ///
    /// A `limit` of 0 is not rejected; it produces an empty result. The
    /// parsed list is best-effort and may be shorter than `limit` when
    /// even the line tier cannot produce enough candidates.
    pub async fn handle(&self, request: RecipeRequest) -> Result<RecipeResult, ServiceError> {
        let prompt = build_prompt(&request.liked_foods, request.limit);

        let text = self
            .retry
            .run(|| self.provider.complete(&prompt))
            .await
            .map_err(|source| ServiceError::ProviderUnavailable {
                attempts: self.retry.max_attempts(),
                source,
            })?;

        debug!(
            "raw completion from {}:\n{text}",
            self.provider.provider_name()
        );

        let recipes = parse_completion(&text, request.limit);
        debug!("parsed {} recipes", recipes.len());

        Ok(RecipeResult { recipes })
    }
}
