//! Team building on top of the matchup engine.
//!
//! A [`Team`] holds up to six [`TeamMember`]s, each with its own [`MoveSet`]
//! of up to four moves. [`Team::analyze`] runs the roster through
//! [`typedex_matchup::aggregate_team`] and keeps the ranked view the team
//! panel displays. [`Learnset`] groups a pokemon's learnable moves for the
//! move picker.

mod analysis;
mod error;
mod learnset;
mod member;
mod moveset;
mod roster;

pub use analysis::{ANALYSIS_TOP, TeamAnalysis};
pub use error::TeamError;
pub use learnset::{LearnMethod, LearnableMove, Learnset, MAX_LOADED_MOVES, MoveFilter};
pub use member::TeamMember;
pub use moveset::{MAX_MOVES, MoveSet, MoveToggle, SelectedMove};
pub use roster::{MAX_TEAM_SIZE, Team};
