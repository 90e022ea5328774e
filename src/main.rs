use log::info;
use recipe_suggest::config::AppConfig;
use recipe_suggest::error::SuggestError;
use recipe_suggest::providers::OpenAiProvider;
use recipe_suggest::server;
use recipe_suggest::service::RecipeService;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;
    let api_key = config.api_key.clone().ok_or(SuggestError::MissingApiKey)?;

    let provider = match &config.base_url {
        Some(base_url) => {
            OpenAiProvider::with_base_url(api_key, base_url.clone(), config.model.clone())
        }
        None => OpenAiProvider::new(api_key, config.model.clone()),
    };
    let service = Arc::new(RecipeService::new(Box::new(provider)));

    let app = server::router(service);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(
        "API server on http://localhost:{} (model={})",
        config.port, config.model
    );
    axum::serve(listener, app).await?;

    Ok(())
}
