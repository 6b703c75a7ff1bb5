use serde::{Deserialize, Serialize};
use typedex_matchup::{TypeCombination, format_name};
use typedex_protocol::PokemonResource;

use crate::error::TeamError;
use crate::moveset::MoveSet;

/// One roster slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// National dex id, unique within a team
    pub id: u32,
    pub name: String,
    pub types: TypeCombination,
    #[serde(default)]
    pub sprite: Option<String>,
    #[serde(default)]
    pub moves: MoveSet,
}

impl TeamMember {
    pub fn new(id: u32, name: impl Into<String>, types: TypeCombination) -> Self {
        Self {
            id,
            name: name.into(),
            types,
            sprite: None,
            moves: MoveSet::new(),
        }
    }

    /// Build a member from a `/pokemon/{id}` response
    pub fn from_pokemon(pokemon: &PokemonResource) -> Result<Self, TeamError> {
        let names = pokemon.type_names();
        let types =
            TypeCombination::from_api_names(&names).ok_or_else(|| TeamError::InvalidTypes {
                name: pokemon.name.clone(),
                types: names.iter().map(|n| n.to_string()).collect(),
            })?;

        Ok(Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            types,
            sprite: pokemon.artwork_url().map(str::to_string),
            moves: MoveSet::new(),
        })
    }

    pub fn display_name(&self) -> String {
        format_name(&self.name)
    }
}
