//! HTTP boundary: routing, CORS, and error-to-status mapping.

use crate::model::{RecipeRequest, RecipeResult};
use crate::service::{RecipeService, ServiceError};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use log::error;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Message returned with a 503 when every completion attempt failed.
const UNAVAILABLE_MESSAGE: &str = "OpenAI API error / rate-limit exceeded";

/// Build the application router around a shared service instance.
pub fn router(service: Arc<RecipeService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/recipes", post(suggest_recipes))
        .layer(cors)
        .with_state(service)
}

async fn suggest_recipes(
    State(service): State<Arc<RecipeService>>,
    Json(request): Json<RecipeRequest>,
) -> Result<Json<RecipeResult>, ApiError> {
    let result = service.handle(request).await?;
    Ok(Json(result))
}

/// Boundary wrapper turning a [`ServiceError`] into an HTTP response.
#[derive(Debug)]
struct ApiError(ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError(err) = self;
        error!("suggestion request failed: {err}");

        match err {
            ServiceError::ProviderUnavailable { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "message": UNAVAILABLE_MESSAGE })),
            )
                .into_response(),
        }
    }
}
