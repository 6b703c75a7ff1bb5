//! Async PokeAPI client for typedex
//!
//! [`PokeApiClient`] fetches PokeAPI v2 resources through injectable session
//! caches and fills the relation table that the matchup engine reads.
//!
//! ```no_run
//! use typedex_client::{ClientConfig, PokeApiClient, TypeCombination, TypeName};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = PokeApiClient::new(ClientConfig::from_env()?)?;
//! client.preload_relations().await;
//!
//! let result = client.matchups(&TypeCombination::dual(TypeName::Water, TypeName::Ground));
//! assert_eq!(result.immunities, vec![TypeName::Electric]);
//! # Ok(())
//! # }
//! ```

mod api;
mod cache;
mod config;
mod relations;
mod search;
mod translations;
mod wiki;

pub use api::PokeApiClient;
pub use cache::{Caches, ResourceCache, SessionCache};
pub use config::{ClientConfig, DEFAULT_API_BASE};
pub use relations::PreloadReport;
pub use search::{PokedexEntry, SortOrder, intersect_names, sort_results};
pub use translations::{DescriptionCatalog, MISSING_DESCRIPTION, item_description};

pub use typedex_matchup::{
    MatchupResult, RelationTable, RelationsLookup, TeamAggregate, TypeCombination, TypeName,
};
pub use typedex_team::{
    Learnset, MoveFilter, SelectedMove, Team, TeamAnalysis, TeamError, TeamMember,
};
