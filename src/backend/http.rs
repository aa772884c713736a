use std::time::Duration;

use crate::backend::errors::{BackendError, BackendResult};
use crate::domain::record::Record;

/// Reads collections from the staff REST API.
#[derive(Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> BackendResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    /// GETs `endpoint`, expecting a JSON array of objects.
    pub async fn fetch(&self, endpoint: &str) -> BackendResult<Vec<Record>> {
        let url = self.url_for(endpoint);
        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        let records = serde_json::from_slice::<Vec<Record>>(&body)?;
        log::debug!("Fetched {} records from {url}", records.len());

        Ok(records)
    }
}
