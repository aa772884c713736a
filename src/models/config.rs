//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

fn default_page_size() -> usize {
    10
}

fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Settings shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the staff REST API, e.g. `https://api.example.com`.
    pub api_base_url: String,
    /// Bearer token sent with every backend request.
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Rows per page when a request does not ask for a size.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// JSON file with canned collections; when set the API is not contacted.
    #[serde(default)]
    pub fixtures_path: Option<String>,
}

impl ServerConfig {
    /// Layers `{dir}/default`, `{dir}/{app_env}` (optional) and `APP_*`
    /// environment variables.
    pub fn load(config_dir: &str, app_env: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(&format!("{config_dir}/default")))
            .add_source(File::with_name(&format!("{config_dir}/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?;

        let server_config = settings.try_deserialize::<ServerConfig>()?;
        if server_config.page_size == 0 {
            return Err(ConfigError::Message("page_size must be positive".to_string()));
        }
        Ok(server_config)
    }
}
