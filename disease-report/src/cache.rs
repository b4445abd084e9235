use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use crate::error::CacheError;

/// Trait for caching raw collaborator responses, keyed by the exact disease name.
///
/// Only the raw response string is cached, never the parsed report. The
/// cache lives for the process lifetime with no eviction.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    async fn get(&self, disease: &str) -> Result<Option<String>, CacheError>;
    async fn put(&self, disease: String, raw_response: String) -> Result<(), CacheError>;
}

/// In-memory implementation of [`ResponseCache`].
pub struct InMemoryResponseCache {
    entries: Arc<DashMap<String, String>>,
}

impl InMemoryResponseCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemoryResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseCache for InMemoryResponseCache {
    async fn get(&self, disease: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.get(disease).map(|entry| entry.clone()))
    }

    async fn put(&self, disease: String, raw_response: String) -> Result<(), CacheError> {
        // First write wins: a same-key race keeps the value every caller saw first.
        self.entries.entry(disease).or_insert(raw_response);
        Ok(())
    }
}
