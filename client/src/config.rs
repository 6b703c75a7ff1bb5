use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Settings for [`PokeApiClient`](crate::PokeApiClient)
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Type list entries that are not real elemental types
    pub excluded_types: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("typedex/{}", env!("CARGO_PKG_VERSION")),
            excluded_types: vec![
                "unknown".to_string(),
                "shadow".to_string(),
                "stellar".to_string(),
            ],
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `TYPEDEX_API_BASE` and `TYPEDEX_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base) = lookup("TYPEDEX_API_BASE") {
            config.base_url = base.trim_end_matches('/').to_string();
        }

        if let Some(secs) = lookup("TYPEDEX_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("Invalid TYPEDEX_TIMEOUT_SECS: {secs}"))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Absolute URL for an endpoint path (`"type/fire"`)
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn is_excluded_type(&self, name: &str) -> bool {
        self.excluded_types.iter().any(|t| t == name)
    }
}
