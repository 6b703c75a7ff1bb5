//! The closed set of elemental types and the built-in effectiveness chart

/// Pokemon types (18 types as of Gen 6+)
///
/// Declaration order is the canonical order used for every classification
/// and tie-break in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum TypeName {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl TypeName {
    /// All 18 types in canonical order
    pub const ALL: [TypeName; 18] = [
        TypeName::Normal,
        TypeName::Fire,
        TypeName::Water,
        TypeName::Electric,
        TypeName::Grass,
        TypeName::Ice,
        TypeName::Fighting,
        TypeName::Poison,
        TypeName::Ground,
        TypeName::Flying,
        TypeName::Psychic,
        TypeName::Bug,
        TypeName::Rock,
        TypeName::Ghost,
        TypeName::Dragon,
        TypeName::Dark,
        TypeName::Steel,
        TypeName::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [TypeName] {
        &Self::ALL
    }

    /// Position in the canonical order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Chart effectiveness of this type attacking a single defending type
    pub fn effectiveness(&self, defender: TypeName) -> f32 {
        TYPE_CHART[*self as usize][defender as usize]
    }

    /// Parse from an API identifier (case-insensitive)
    ///
    /// Returns `None` for non-canonical types such as `unknown`, `shadow` or `stellar`.
    pub fn from_api(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(TypeName::Normal),
            "fire" => Some(TypeName::Fire),
            "water" => Some(TypeName::Water),
            "electric" => Some(TypeName::Electric),
            "grass" => Some(TypeName::Grass),
            "ice" => Some(TypeName::Ice),
            "fighting" => Some(TypeName::Fighting),
            "poison" => Some(TypeName::Poison),
            "ground" => Some(TypeName::Ground),
            "flying" => Some(TypeName::Flying),
            "psychic" => Some(TypeName::Psychic),
            "bug" => Some(TypeName::Bug),
            "rock" => Some(TypeName::Rock),
            "ghost" => Some(TypeName::Ghost),
            "dragon" => Some(TypeName::Dragon),
            "dark" => Some(TypeName::Dark),
            "steel" => Some(TypeName::Steel),
            "fairy" => Some(TypeName::Fairy),
            _ => None,
        }
    }

    /// API identifier (`"fire"`), also used for endpoint paths
    pub fn as_api(&self) -> &'static str {
        match self {
            TypeName::Normal => "normal",
            TypeName::Fire => "fire",
            TypeName::Water => "water",
            TypeName::Electric => "electric",
            TypeName::Grass => "grass",
            TypeName::Ice => "ice",
            TypeName::Fighting => "fighting",
            TypeName::Poison => "poison",
            TypeName::Ground => "ground",
            TypeName::Flying => "flying",
            TypeName::Psychic => "psychic",
            TypeName::Bug => "bug",
            TypeName::Rock => "rock",
            TypeName::Ghost => "ghost",
            TypeName::Dragon => "dragon",
            TypeName::Dark => "dark",
            TypeName::Steel => "steel",
            TypeName::Fairy => "fairy",
        }
    }

    /// English label
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeName::Normal => "Normal",
            TypeName::Fire => "Fire",
            TypeName::Water => "Water",
            TypeName::Electric => "Electric",
            TypeName::Grass => "Grass",
            TypeName::Ice => "Ice",
            TypeName::Fighting => "Fighting",
            TypeName::Poison => "Poison",
            TypeName::Ground => "Ground",
            TypeName::Flying => "Flying",
            TypeName::Psychic => "Psychic",
            TypeName::Bug => "Bug",
            TypeName::Rock => "Rock",
            TypeName::Ghost => "Ghost",
            TypeName::Dragon => "Dragon",
            TypeName::Dark => "Dark",
            TypeName::Steel => "Steel",
            TypeName::Fairy => "Fairy",
        }
    }

    /// Portuguese display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TypeName::Normal => "Normal",
            TypeName::Fire => "Fogo",
            TypeName::Water => "Água",
            TypeName::Electric => "Elétrico",
            TypeName::Grass => "Planta",
            TypeName::Ice => "Gelo",
            TypeName::Fighting => "Lutador",
            TypeName::Poison => "Veneno",
            TypeName::Ground => "Terra",
            TypeName::Flying => "Voador",
            TypeName::Psychic => "Psíquico",
            TypeName::Bug => "Inseto",
            TypeName::Rock => "Pedra",
            TypeName::Ghost => "Fantasma",
            TypeName::Dragon => "Dragão",
            TypeName::Dark => "Sombrio",
            TypeName::Steel => "Aço",
            TypeName::Fairy => "Fada",
        }
    }

    /// Badge color as a CSS hex string
    pub fn color(&self) -> &'static str {
        match self {
            TypeName::Normal => "#A8A878",
            TypeName::Fire => "#F08030",
            TypeName::Water => "#6890F0",
            TypeName::Electric => "#F8D030",
            TypeName::Grass => "#78C850",
            TypeName::Ice => "#98D8D8",
            TypeName::Fighting => "#C03028",
            TypeName::Poison => "#A040A0",
            TypeName::Ground => "#E0C068",
            TypeName::Flying => "#A890F0",
            TypeName::Psychic => "#F85888",
            TypeName::Bug => "#A8B820",
            TypeName::Rock => "#B8A038",
            TypeName::Ghost => "#705898",
            TypeName::Dragon => "#7038F8",
            TypeName::Dark => "#705848",
            TypeName::Steel => "#B8B8D0",
            TypeName::Fairy => "#EE99AC",
        }
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TypeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeName::from_api(s).ok_or_else(|| format!("unknown type: {s}"))
    }
}

/// 18x18 type effectiveness chart
/// Row = attacking type, Column = defending type
/// Values: 0.0 = immune, 0.5 = not very effective, 1.0 = neutral, 2.0 = super effective
///
/// Order: Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground,
///        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy
#[rustfmt::skip]
pub static TYPE_CHART: [[f32; 18]; 18] = [
    // Normal attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 1.0, 1.0, 0.5, 1.0],
    // Fire attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 2.0, 1.0],
    // Water attacking
    [1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // Electric attacking
    [1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // Grass attacking
    [1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 0.5, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 0.5, 1.0],
    // Ice attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0],
    // Fighting attacking
    [2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5, 0.5, 0.5, 2.0, 0.0, 1.0, 2.0, 2.0, 0.5],
    // Poison attacking
    [1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 0.0, 2.0],
    // Ground attacking
    [1.0, 2.0, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0],
    // Flying attacking
    [1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0],
    // Psychic attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.0, 0.5, 1.0],
    // Bug attacking
    [1.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.5, 0.5, 1.0, 0.5, 2.0, 1.0, 1.0, 0.5, 1.0, 2.0, 0.5, 0.5],
    // Rock attacking
    [1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0],
    // Ghost attacking
    [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0],
    // Dragon attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 0.0],
    // Dark attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5],
    // Steel attacking
    [1.0, 0.5, 0.5, 0.5, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0],
    // Fairy attacking
    [1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 0.5, 1.0],
];
