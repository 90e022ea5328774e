use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// OpenAI API key. Required to start the server; also read from the
    /// plain `OPENAI_API_KEY` variable for compatibility.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model identifier, defaulting to a fast/cheap tier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// API base URL override, for proxies and tests.
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_model() -> String {
    crate::providers::DEFAULT_MODEL.to_string()
}

fn default_port() -> u16 {
    3001
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_key: None,
            model: default_model(),
            port: default_port(),
            base_url: None,
        }
    }
}

impl AppConfig {
    /// Load configuration, highest priority first:
    /// 1. Environment variables with RECIPE__ prefix
    ///    (e.g. RECIPE__API_KEY, RECIPE__MODEL, RECIPE__PORT)
    /// 2. config.toml file in the current directory
    /// 3. Plain OPENAI_API_KEY / OPENAI_MODEL / PORT variables
    /// 4. Defaults
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut loaded: AppConfig = settings.try_deserialize()?;

        if loaded.api_key.is_none() {
            loaded.api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        if loaded.model == default_model() {
            if let Ok(model) = std::env::var("OPENAI_MODEL") {
                if !model.is_empty() {
                    loaded.model = model;
                }
            }
        }
        if loaded.port == default_port() {
            if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
                loaded.port = port;
            }
        }

        Ok(loaded)
    }
}
