use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use typedex_protocol::{
    AbilityResource, ItemResource, MoveResource, clean_text, english_effect, english_flavor_text,
};

/// Shown when neither a translation nor English text exists
pub const MISSING_DESCRIPTION: &str = "Descrição não disponível";

/// Portuguese descriptions keyed by API name
///
/// Loaded from a flat JSON object such as `{"thunderbolt": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionCatalog {
    entries: HashMap<String, String>,
}

impl DescriptionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: HashMap<String, String> =
            serde_json::from_str(json).context("Failed to parse description catalog")?;
        Ok(Self { entries })
    }

    /// Read a catalog from disk
    ///
    /// A missing or malformed file yields an empty catalog, so descriptions
    /// fall back to English.
    pub async fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let loaded: Result<Self> = async {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Self::from_json(&json)
        }
        .await;

        match loaded {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), entries = catalog.len(), "Loaded description catalog");
                catalog
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Using English descriptions");
                Self::default()
            }
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.entries.insert(name.into(), description.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Translated description, or the cleaned English text
    pub fn describe(&self, name: &str, english: &str) -> String {
        match self.get(name) {
            Some(translated) => translated.to_string(),
            None => clean_text(english),
        }
    }

    pub fn move_description(&self, mv: &MoveResource) -> String {
        self.get(&mv.name)
            .map(str::to_string)
            .or_else(|| english_effect(&mv.effect_entries))
            .or_else(|| english_flavor_text(&mv.flavor_text_entries))
            .unwrap_or_else(|| MISSING_DESCRIPTION.to_string())
    }

    pub fn ability_description(&self, ability: &AbilityResource) -> String {
        self.get(&ability.name)
            .map(str::to_string)
            .or_else(|| english_effect(&ability.effect_entries))
            .or_else(|| english_flavor_text(&ability.flavor_text_entries))
            .unwrap_or_else(|| MISSING_DESCRIPTION.to_string())
    }
}

/// Items have no catalog; English short effect, then flavor text
pub fn item_description(item: &ItemResource) -> String {
    english_effect(&item.effect_entries)
        .or_else(|| english_flavor_text(&item.flavor_text_entries))
        .unwrap_or_else(|| MISSING_DESCRIPTION.to_string())
}
