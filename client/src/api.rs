use std::sync::RwLock;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use typedex_matchup::RelationTable;
use typedex_protocol::parse_resource;

use crate::cache::{Caches, ResourceCache};
use crate::config::ClientConfig;

/// PokeAPI v2 client
///
/// Holds the session caches and the relation table the matchup engine reads.
/// All methods take `&self`, so the client can be shared behind an `Arc`
/// and used from concurrent tasks.
pub struct PokeApiClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
    pub(crate) caches: Caches,
    pub(crate) relations: RwLock<RelationTable>,
}

impl PokeApiClient {
    /// Create a client with fresh session caches
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_caches(config, Caches::default())
    }

    /// Create a client reading through the given caches
    pub fn with_caches(config: ClientConfig, caches: Caches) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            config,
            caches,
            relations: RwLock::new(RelationTable::new()),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET an endpoint path relative to the base URL and decode the JSON body
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.endpoint(path);
        self.get_url(&url).await
    }

    /// GET an absolute URL and decode the JSON body
    pub(crate) async fn get_url<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url = %url, "Requesting");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Request to {} failed with status {}", url, status);
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {url}"))?;

        parse_resource(&body).with_context(|| format!("Failed to parse response from {url}"))
    }

    /// Serve from `cache` when possible, otherwise fetch `path` and store it under `key`
    pub(crate) async fn cached<T>(
        &self,
        cache: &dyn ResourceCache<String, T>,
        key: &str,
        path: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned + Clone,
    {
        if let Some(hit) = cache.get(&key.to_string()) {
            tracing::debug!(key = %key, "Cache hit");
            return Ok(hit);
        }

        let value: T = self.get(path).await?;
        cache.put(key.to_string(), value.clone());
        Ok(value)
    }
}
