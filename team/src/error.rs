use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Team is full ({0} members)")]
    TeamFull(usize),

    #[error("Pokemon {0} is already in the team")]
    AlreadyInTeam(u32),

    #[error("Pokemon {0} is not in the team")]
    NotInTeam(u32),

    #[error("Invalid typing for {name}: {types:?}")]
    InvalidTypes { name: String, types: Vec<String> },

    #[error("Too many moves for pokemon {0}")]
    TooManyMoves(u32),

    #[error("Team serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
