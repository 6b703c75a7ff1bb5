use serde::{Deserialize, Serialize};

use super::NamedResource;

/// `GET /type/{name}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeResource {
    pub id: u32,
    pub name: String,
    pub damage_relations: DamageRelationsPayload,
    #[serde(default)]
    pub pokemon: Vec<TypePokemonSlot>,
}

impl TypeResource {
    /// Names of every pokemon listed under this type
    pub fn pokemon_names(&self) -> Vec<&str> {
        self.pokemon.iter().map(|p| p.pokemon.name.as_str()).collect()
    }
}

/// Damage relations as the API sends them, one list of references per relation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageRelationsPayload {
    pub double_damage_from: Vec<NamedResource>,
    pub double_damage_to: Vec<NamedResource>,
    pub half_damage_from: Vec<NamedResource>,
    pub half_damage_to: Vec<NamedResource>,
    pub no_damage_from: Vec<NamedResource>,
    pub no_damage_to: Vec<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypePokemonSlot {
    pub pokemon: NamedResource,
    #[serde(default)]
    pub slot: u8,
}
