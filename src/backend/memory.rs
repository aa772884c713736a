//! Canned collections for local demos and tests.

use std::collections::HashMap;
use std::path::Path;

use crate::backend::errors::{BackendError, BackendResult};
use crate::domain::record::Record;

/// Collections keyed by backend endpoint, e.g. `/staff/members`.
#[derive(Clone, Debug, Default)]
pub struct InMemoryBackend {
    collections: HashMap<String, Vec<Record>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, endpoint: impl Into<String>, records: Vec<Record>) -> Self {
        self.collections.insert(endpoint.into(), records);
        self
    }

    /// Parses a JSON object mapping endpoints to record arrays.
    pub fn from_json(json: &str) -> BackendResult<Self> {
        let collections = serde_json::from_str::<HashMap<String, Vec<Record>>>(json)?;
        Ok(Self { collections })
    }

    pub fn from_file(path: impl AsRef<Path>) -> BackendResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn fetch(&self, endpoint: &str) -> BackendResult<Vec<Record>> {
        self.collections
            .get(endpoint)
            .cloned()
            .ok_or_else(|| BackendError::UnknownCollection(endpoint.to_string()))
    }
}
