//! Matchup queries over resident damage relations
//!
//! Every query here is pure: it reads the lookup and returns a value.

mod matchup;
mod team;

pub use matchup::{
    MatchupResult,
    TypeMultipliers,
    calculate_matchups,
    // Single-typing helpers
    is_immune_to,
    is_weak_to_any,
    resists_all,
    type_multipliers,
};
pub use team::{TeamAggregate, TypeCounts, aggregate_team};
