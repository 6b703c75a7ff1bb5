use thiserror::Error;

pub mod resource;

pub use resource::{
    AbilityResource, BerryResource, ChainLink, DamageRelationsPayload, EvolutionChainResource,
    ItemResource, MoveResource, NamedResource, NatureResource, PokemonResource,
    ResourceList, SpeciesResource, TypeResource, clean_text, english_effect, english_flavor_text,
    parse_resource, resource_id_from_url,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid payload format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty payload")]
    EmptyPayload,
}
