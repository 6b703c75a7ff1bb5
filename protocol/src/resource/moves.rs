use serde::{Deserialize, Serialize};

use super::NamedResource;
use super::text::FlavorText;

/// `GET /move/{name|id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveResource {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub accuracy: Option<u32>,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default)]
    pub pp: Option<u32>,
    #[serde(default)]
    pub priority: i8,
    #[serde(rename = "type")]
    pub type_: NamedResource,
    #[serde(default)]
    pub damage_class: Option<NamedResource>,
    #[serde(default)]
    pub effect_entries: Vec<VerboseEffect>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
}

/// Effect text in one language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerboseEffect {
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub short_effect: String,
    pub language: NamedResource,
}
