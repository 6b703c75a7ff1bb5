use typedex_protocol::PokemonResource;

/// Move details fetched per picker view
pub const MAX_LOADED_MOVES: usize = 50;

/// How a move is learned, from the most recent version group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LearnMethod {
    LevelUp,
    Machine,
    Tutor,
    Other,
}

impl LearnMethod {
    pub fn from_api(s: &str) -> Self {
        match s {
            "level-up" => LearnMethod::LevelUp,
            "machine" => LearnMethod::Machine,
            "tutor" => LearnMethod::Tutor,
            _ => LearnMethod::Other,
        }
    }

    /// Portuguese filter label
    pub fn display_name(&self) -> &'static str {
        match self {
            LearnMethod::LevelUp => "Level Up",
            LearnMethod::Machine => "TM/HM",
            LearnMethod::Tutor => "Tutor",
            LearnMethod::Other => "Outros",
        }
    }
}

/// Move picker filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveFilter {
    #[default]
    All,
    Method(LearnMethod),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnableMove {
    pub name: String,
    pub url: String,
    pub method: LearnMethod,
    pub level: u32,
}

/// A pokemon's moves grouped by learn method
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Learnset {
    level_up: Vec<LearnableMove>,
    machine: Vec<LearnableMove>,
    tutor: Vec<LearnableMove>,
    other: Vec<LearnableMove>,
}

impl Learnset {
    /// Group by the latest version group entry; level-up moves sorted by level
    pub fn from_pokemon(pokemon: &PokemonResource) -> Self {
        let mut learnset = Self::default();

        for entry in &pokemon.moves {
            let Some(detail) = entry.latest_detail() else {
                continue;
            };

            let mv = LearnableMove {
                name: entry.move_.name.clone(),
                url: entry.move_.url.clone(),
                method: LearnMethod::from_api(&detail.move_learn_method.name),
                level: detail.level_learned_at,
            };

            match mv.method {
                LearnMethod::LevelUp => learnset.level_up.push(mv),
                LearnMethod::Machine => learnset.machine.push(mv),
                LearnMethod::Tutor => learnset.tutor.push(mv),
                LearnMethod::Other => learnset.other.push(mv),
            }
        }

        learnset.level_up.sort_by_key(|m| m.level);
        learnset
    }

    pub fn method(&self, method: LearnMethod) -> &[LearnableMove] {
        match method {
            LearnMethod::LevelUp => &self.level_up,
            LearnMethod::Machine => &self.machine,
            LearnMethod::Tutor => &self.tutor,
            LearnMethod::Other => &self.other,
        }
    }

    /// Moves matching a filter; `All` lists level-up, machine, tutor, then other
    pub fn filtered(&self, filter: MoveFilter) -> Vec<&LearnableMove> {
        match filter {
            MoveFilter::All => self
                .level_up
                .iter()
                .chain(&self.machine)
                .chain(&self.tutor)
                .chain(&self.other)
                .collect(),
            MoveFilter::Method(method) => self.method(method).iter().collect(),
        }
    }

    /// The slice of [`filtered`](Self::filtered) whose details get fetched
    pub fn to_load(&self, filter: MoveFilter) -> Vec<&LearnableMove> {
        let mut moves = self.filtered(filter);
        moves.truncate(MAX_LOADED_MOVES);
        moves
    }

    pub fn len(&self) -> usize {
        self.level_up.len() + self.machine.len() + self.tutor.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
