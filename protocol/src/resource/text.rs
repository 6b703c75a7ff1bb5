use serde::{Deserialize, Serialize};

use super::NamedResource;
use super::moves::VerboseEffect;

/// Flavor text in one language
///
/// Items name the field `text`, everything else `flavor_text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorText {
    #[serde(alias = "text")]
    pub flavor_text: String,
    pub language: NamedResource,
}

/// Collapse newlines and runs of whitespace into single spaces
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// English effect text, preferring the short form
pub fn english_effect(entries: &[VerboseEffect]) -> Option<String> {
    entries
        .iter()
        .find(|e| e.language.name == "en")
        .map(|e| {
            if e.short_effect.is_empty() {
                &e.effect
            } else {
                &e.short_effect
            }
        })
        .filter(|text| !text.is_empty())
        .map(|text| clean_text(text))
}

/// First English flavor text entry
pub fn english_flavor_text(entries: &[FlavorText]) -> Option<String> {
    entries
        .iter()
        .find(|e| e.language.name == "en")
        .map(|e| clean_text(&e.flavor_text))
}
