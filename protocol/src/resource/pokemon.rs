use serde::{Deserialize, Serialize};

use super::NamedResource;

/// `GET /pokemon/{name|id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonResource {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbilitySlot>,
    #[serde(default)]
    pub moves: Vec<PokemonMoveEntry>,
    #[serde(default)]
    pub sprites: PokemonSprites,
}

impl PokemonResource {
    /// Type identifiers in slot order
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&PokemonTypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|s| s.slot);
        slots.into_iter().map(|s| s.type_.name.as_str()).collect()
    }

    /// Base stat by API stat name (`"special-attack"`, ...)
    pub fn base_stat(&self, stat: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.stat.name == stat)
            .map(|s| s.base_stat)
    }

    /// Sum of all base stats
    pub fn base_stat_total(&self) -> u32 {
        self.stats.iter().map(|s| s.base_stat).sum()
    }

    /// Official artwork, falling back to the default front sprite
    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites
            .other
            .official_artwork
            .front_default
            .as_deref()
            .or(self.sprites.front_default.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonAbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonMoveEntry {
    #[serde(rename = "move")]
    pub move_: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<VersionGroupDetail>,
}

impl PokemonMoveEntry {
    /// The most recent version group entry (the API lists them oldest first)
    pub fn latest_detail(&self) -> Option<&VersionGroupDetail> {
        self.version_group_details.last()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionGroupDetail {
    #[serde(default)]
    pub level_learned_at: u32,
    pub move_learn_method: NamedResource,
    #[serde(default)]
    pub version_group: Option<NamedResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: ArtworkSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
}
