use serde::Deserialize;

use crate::services::prompt::DEFAULT_MAX_CANDIDATES;

/// Application configuration loaded from environment variables
///
/// Constructed once at startup and passed into the components that need it.
/// Nothing reads the environment after this point.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OpenAI API key
    pub openai_api_key: String,

    /// OpenAI-compatible API base URL
    #[serde(default = "default_openai_api_url")]
    pub openai_api_url: String,

    /// Chat completion model identifier
    #[serde(default = "default_model_name")]
    pub model_name: String,

    /// Maximum completion tokens per request
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature for the completion call
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Path to the product catalog JSON file
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Maximum number of candidate products included in a prompt
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_openai_api_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_model_name() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f64 {
    0.5
}

fn default_catalog_path() -> String {
    "data/products.json".to_string()
}

fn default_max_candidates() -> usize {
    DEFAULT_MAX_CANDIDATES
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
