mod moves;
mod pokemon;
mod text;
mod types;
mod wiki;

use crate::ParseError;
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use moves::{MoveResource, VerboseEffect};
pub use pokemon::{
    ArtworkSprites, OtherSprites, PokemonAbilitySlot, PokemonMoveEntry, PokemonResource,
    PokemonSprites, PokemonStat, PokemonTypeSlot, VersionGroupDetail,
};
pub use text::{FlavorText, clean_text, english_effect, english_flavor_text};
pub use types::{DamageRelationsPayload, TypePokemonSlot, TypeResource};
pub use wiki::{
    AbilityResource, ApiUrl, BerryFlavor, BerryResource, ChainLink, EvolutionChainResource,
    EvolutionDetail, ItemResource, NatureResource, SpeciesResource,
};

/// A `{ name, url }` reference to another API resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    /// Numeric id embedded at the end of the resource URL, if any
    pub fn id(&self) -> Option<u32> {
        resource_id_from_url(&self.url)
    }
}

/// Paginated listing returned by `GET /{endpoint}?limit=N`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Parse a JSON response body into a typed resource
pub fn parse_resource<T: DeserializeOwned>(body: &str) -> Result<T> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyPayload.into());
    }

    serde_json::from_str(body).map_err(|e| ParseError::InvalidFormat(e.to_string()).into())
}

/// Extract the trailing numeric id from a resource URL
///
/// `https://pokeapi.co/api/v2/pokemon/25/` yields `Some(25)`.
pub fn resource_id_from_url(url: &str) -> Option<u32> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}
