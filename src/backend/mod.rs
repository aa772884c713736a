//! Sources of the collections shown on each screen.
//!
//! The staff REST API owns all data; this layer only reads whole
//! collections so the list engine can work on them in memory.

use std::time::Duration;

use crate::domain::record::Record;
use crate::domain::screen::Screen;
use crate::models::config::ServerConfig;

pub mod errors;
pub mod http;
pub mod memory;

pub use errors::{BackendError, BackendResult};
pub use http::HttpBackend;
pub use memory::InMemoryBackend;

#[derive(Clone)]
pub enum Backend {
    Http(HttpBackend),
    InMemory(InMemoryBackend),
}

impl Backend {
    /// Uses the fixtures file when configured, the REST API otherwise.
    pub fn from_config(config: &ServerConfig) -> BackendResult<Self> {
        match &config.fixtures_path {
            Some(path) => {
                log::info!("Serving collections from fixtures file {path}");
                Ok(Backend::InMemory(InMemoryBackend::from_file(path)?))
            }
            None => Ok(Backend::Http(HttpBackend::new(
                config.api_base_url.clone(),
                config.api_token.clone(),
                Duration::from_secs(config.request_timeout_secs),
            )?)),
        }
    }

    pub async fn fetch_collection(&self, screen: Screen) -> BackendResult<Vec<Record>> {
        let endpoint = screen.spec().endpoint;
        match self {
            Backend::Http(backend) => backend.fetch(endpoint).await,
            Backend::InMemory(backend) => backend.fetch(endpoint),
        }
    }
}

impl From<InMemoryBackend> for Backend {
    fn from(backend: InMemoryBackend) -> Self {
        Backend::InMemory(backend)
    }
}
