//! Base stats and their display vocabulary

/// The six base stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Parse from API identifier ("hp", "attack", "special-attack", ...)
    pub fn from_api(s: &str) -> Option<Self> {
        match s {
            "hp" => Some(Stat::Hp),
            "attack" => Some(Stat::Attack),
            "defense" => Some(Stat::Defense),
            "special-attack" => Some(Stat::SpecialAttack),
            "special-defense" => Some(Stat::SpecialDefense),
            "speed" => Some(Stat::Speed),
            _ => None,
        }
    }

    pub fn as_api(&self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::SpecialAttack => "special-attack",
            Stat::SpecialDefense => "special-defense",
            Stat::Speed => "speed",
        }
    }

    /// Compact label for stat bars
    pub fn short_label(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "ATK",
            Stat::Defense => "DEF",
            Stat::SpecialAttack => "SP.ATK",
            Stat::SpecialDefense => "SP.DEF",
            Stat::Speed => "SPD",
        }
    }

    /// Portuguese display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Ataque",
            Stat::Defense => "Defesa",
            Stat::SpecialAttack => "Ataque Esp.",
            Stat::SpecialDefense => "Defesa Esp.",
            Stat::Speed => "Velocidade",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_label())
    }
}

/// Bar color for a base stat value
pub fn stat_color(value: u32) -> &'static str {
    match value {
        0..=49 => "#e63946",
        50..=79 => "#f4a261",
        80..=99 => "#e9c46a",
        100..=119 => "#2a9d8f",
        _ => "#1d3557",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_from_api() {
        assert_eq!(Stat::from_api("special-defense"), Some(Stat::SpecialDefense));
        assert_eq!(Stat::from_api("accuracy"), None);
        for stat in Stat::ALL {
            assert_eq!(Stat::from_api(stat.as_api()), Some(stat));
        }
    }

    #[test]
    fn test_stat_labels() {
        assert_eq!(Stat::SpecialAttack.short_label(), "SP.ATK");
        assert_eq!(Stat::Speed.display_name(), "Velocidade");
    }

    #[test]
    fn test_stat_color_bands() {
        assert_eq!(stat_color(49), "#e63946");
        assert_eq!(stat_color(50), "#f4a261");
        assert_eq!(stat_color(99), "#e9c46a");
        assert_eq!(stat_color(100), "#2a9d8f");
        assert_eq!(stat_color(120), "#1d3557");
    }
}
