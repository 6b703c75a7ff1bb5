//! Type matchup calculation and team weakness aggregation.
//!
//! # Overview
//!
//! `typedex-matchup` sits between `typedex-protocol` (PokeAPI wire format) and
//! the team builder and client:
//!
//! ```text
//! typedex-protocol (wire format)
//!        │
//!        ▼
//! typedex-matchup (domain types + matchup engine) ← THIS CRATE
//!        │
//!        ├─> typedex-team (roster, move sets, analysis)
//!        └─> typedex-client (fetches relations, feeds the engine)
//! ```
//!
//! # Main Types
//!
//! - [`TypeName`] - the 18 canonical types, with display names and colors
//! - [`TypeCombination`] - a 1- or 2-type typing
//! - [`DamageRelations`] - double/half/no damage lists for one type
//! - [`RelationsLookup`] - read access to resident relations ([`RelationTable`])
//! - [`MatchupResult`] / [`TeamAggregate`] - query outputs
//! - [`Stat`], [`Nature`], [`Flavor`], [`DamageClass`] - fixed vocabularies
//!
//! # Missing relations
//!
//! A member type whose relations are not in the lookup contributes nothing:
//! its multipliers stay at 1 and it adds no strengths. Queries never fail,
//! they just become more complete as relations arrive.
//!
//! # Example Usage
//!
//! ```
//! use typedex_matchup::{RelationTable, TypeCombination, TypeName, calculate_matchups};
//!
//! let table = RelationTable::from_chart();
//! let swampert = TypeCombination::dual(TypeName::Water, TypeName::Ground);
//!
//! let result = calculate_matchups(&swampert, &table);
//! assert_eq!(result.weaknesses, vec![TypeName::Grass]);
//! assert_eq!(result.immunities, vec![TypeName::Electric]);
//! ```

pub mod display;
pub mod lookup;
pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use display::{dex_number, format_name};
pub use lookup::{RelationTable, RelationsLookup};
pub use query::{
    MatchupResult, TeamAggregate, TypeCounts, TypeMultipliers, aggregate_team,
    calculate_matchups, type_multipliers,
};
pub use types::{
    DamageClass, DamageRelations, Flavor, Nature, NatureEffect, Stat, TYPE_CHART,
    TypeCombination, TypeName, stat_color,
};
