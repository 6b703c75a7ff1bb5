use serde::{Deserialize, Serialize};

use super::NamedResource;
use super::moves::VerboseEffect;
use super::text::FlavorText;

/// `GET /ability/{name|id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityResource {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub effect_entries: Vec<VerboseEffect>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
}

/// `GET /item/{name|id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResource {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub cost: u32,
    #[serde(default)]
    pub category: Option<NamedResource>,
    #[serde(default)]
    pub effect_entries: Vec<VerboseEffect>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
}

/// `GET /berry/{name|id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BerryResource {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub growth_time: u32,
    #[serde(default)]
    pub max_harvest: u32,
    #[serde(default)]
    pub natural_gift_power: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub smoothness: u32,
    #[serde(default)]
    pub firmness: Option<NamedResource>,
    #[serde(default)]
    pub flavors: Vec<BerryFlavor>,
    #[serde(default)]
    pub natural_gift_type: Option<NamedResource>,
}

impl BerryResource {
    /// Flavor with the highest potency, if any flavor is non-zero
    pub fn dominant_flavor(&self) -> Option<&str> {
        self.flavors
            .iter()
            .filter(|f| f.potency > 0)
            .max_by_key(|f| f.potency)
            .map(|f| f.flavor.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BerryFlavor {
    pub potency: u32,
    pub flavor: NamedResource,
}

/// `GET /nature/{name|id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatureResource {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub increased_stat: Option<NamedResource>,
    #[serde(default)]
    pub decreased_stat: Option<NamedResource>,
    #[serde(default)]
    pub likes_flavor: Option<NamedResource>,
    #[serde(default)]
    pub hates_flavor: Option<NamedResource>,
}

/// `GET /pokemon-species/{name|id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesResource {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub evolution_chain: Option<ApiUrl>,
    #[serde(default)]
    pub generation: Option<NamedResource>,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
}

/// A bare `{ url }` reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUrl {
    pub url: String,
}

/// `GET /evolution-chain/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionChainResource {
    pub id: u32,
    pub chain: ChainLink,
}

/// One node of an evolution tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl ChainLink {
    /// Species names with their depth in the tree, depth-first
    pub fn flatten(&self) -> Vec<(usize, &str)> {
        let mut out = Vec::new();
        self.walk(0, &mut out);
        out
    }

    fn walk<'a>(&'a self, depth: usize, out: &mut Vec<(usize, &'a str)>) {
        out.push((depth, self.species.name.as_str()));
        for next in &self.evolves_to {
            next.walk(depth + 1, out);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    #[serde(default)]
    pub min_level: Option<u32>,
    #[serde(default)]
    pub trigger: Option<NamedResource>,
    #[serde(default)]
    pub item: Option<NamedResource>,
}
