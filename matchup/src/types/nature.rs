//! Natures, berry flavors and the nature stat calculator

use super::stats::Stat;

/// Berry flavors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Flavor {
    Spicy,
    Dry,
    Sweet,
    Bitter,
    Sour,
}

impl Flavor {
    pub fn from_api(s: &str) -> Option<Self> {
        match s {
            "spicy" => Some(Flavor::Spicy),
            "dry" => Some(Flavor::Dry),
            "sweet" => Some(Flavor::Sweet),
            "bitter" => Some(Flavor::Bitter),
            "sour" => Some(Flavor::Sour),
            _ => None,
        }
    }

    /// Portuguese display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Flavor::Spicy => "Picante",
            Flavor::Dry => "Seco",
            Flavor::Sweet => "Doce",
            Flavor::Bitter => "Amargo",
            Flavor::Sour => "Azedo",
        }
    }

    /// Display color for flavor badges
    pub fn color(&self) -> &'static str {
        match self {
            Flavor::Spicy => "#F08030",
            Flavor::Dry => "#6890F0",
            Flavor::Sweet => "#F85888",
            Flavor::Bitter => "#78C850",
            Flavor::Sour => "#F8D030",
        }
    }

    /// The flavor a nature raising `stat` likes
    pub fn for_stat(stat: Stat) -> Option<Self> {
        match stat {
            Stat::Attack => Some(Flavor::Spicy),
            Stat::Defense => Some(Flavor::Sour),
            Stat::SpecialAttack => Some(Flavor::Dry),
            Stat::SpecialDefense => Some(Flavor::Bitter),
            Stat::Speed => Some(Flavor::Sweet),
            Stat::Hp => None,
        }
    }
}

/// The 25 natures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    pub const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Lonely,
        Nature::Brave,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Bold,
        Nature::Docile,
        Nature::Relaxed,
        Nature::Impish,
        Nature::Lax,
        Nature::Timid,
        Nature::Hasty,
        Nature::Serious,
        Nature::Jolly,
        Nature::Naive,
        Nature::Modest,
        Nature::Mild,
        Nature::Quiet,
        Nature::Bashful,
        Nature::Rash,
        Nature::Calm,
        Nature::Gentle,
        Nature::Sassy,
        Nature::Careful,
        Nature::Quirky,
    ];

    pub fn from_api(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|n| n.as_api() == s)
    }

    pub fn as_api(&self) -> &'static str {
        match self {
            Nature::Hardy => "hardy",
            Nature::Lonely => "lonely",
            Nature::Brave => "brave",
            Nature::Adamant => "adamant",
            Nature::Naughty => "naughty",
            Nature::Bold => "bold",
            Nature::Docile => "docile",
            Nature::Relaxed => "relaxed",
            Nature::Impish => "impish",
            Nature::Lax => "lax",
            Nature::Timid => "timid",
            Nature::Hasty => "hasty",
            Nature::Serious => "serious",
            Nature::Jolly => "jolly",
            Nature::Naive => "naive",
            Nature::Modest => "modest",
            Nature::Mild => "mild",
            Nature::Quiet => "quiet",
            Nature::Bashful => "bashful",
            Nature::Rash => "rash",
            Nature::Calm => "calm",
            Nature::Gentle => "gentle",
            Nature::Sassy => "sassy",
            Nature::Careful => "careful",
            Nature::Quirky => "quirky",
        }
    }

    /// Portuguese display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Nature::Hardy => "Firme",
            Nature::Lonely => "Solitário",
            Nature::Brave => "Bravo",
            Nature::Adamant => "Adamante",
            Nature::Naughty => "Travesso",
            Nature::Bold => "Ousado",
            Nature::Docile => "Dócil",
            Nature::Relaxed => "Relaxado",
            Nature::Impish => "Sagaz",
            Nature::Lax => "Relaxado",
            Nature::Timid => "Tímido",
            Nature::Hasty => "Apressado",
            Nature::Serious => "Sério",
            Nature::Jolly => "Alegre",
            Nature::Naive => "Ingênuo",
            Nature::Modest => "Modesto",
            Nature::Mild => "Suave",
            Nature::Quiet => "Quieto",
            Nature::Bashful => "Acanhado",
            Nature::Rash => "Impetuoso",
            Nature::Calm => "Calmo",
            Nature::Gentle => "Gentil",
            Nature::Sassy => "Atrevido",
            Nature::Careful => "Cuidadoso",
            Nature::Quirky => "Peculiar",
        }
    }

    /// (increased, decreased) stats; `None` for the five neutral natures
    pub fn modifiers(&self) -> Option<(Stat, Stat)> {
        use Stat::*;

        match self {
            Nature::Lonely => Some((Attack, Defense)),
            Nature::Brave => Some((Attack, Speed)),
            Nature::Adamant => Some((Attack, SpecialAttack)),
            Nature::Naughty => Some((Attack, SpecialDefense)),
            Nature::Bold => Some((Defense, Attack)),
            Nature::Relaxed => Some((Defense, Speed)),
            Nature::Impish => Some((Defense, SpecialAttack)),
            Nature::Lax => Some((Defense, SpecialDefense)),
            Nature::Timid => Some((Speed, Attack)),
            Nature::Hasty => Some((Speed, Defense)),
            Nature::Jolly => Some((Speed, SpecialAttack)),
            Nature::Naive => Some((Speed, SpecialDefense)),
            Nature::Modest => Some((SpecialAttack, Attack)),
            Nature::Mild => Some((SpecialAttack, Defense)),
            Nature::Quiet => Some((SpecialAttack, Speed)),
            Nature::Rash => Some((SpecialAttack, SpecialDefense)),
            Nature::Calm => Some((SpecialDefense, Attack)),
            Nature::Gentle => Some((SpecialDefense, Defense)),
            Nature::Sassy => Some((SpecialDefense, Speed)),
            Nature::Careful => Some((SpecialDefense, SpecialAttack)),
            Nature::Hardy | Nature::Docile | Nature::Serious | Nature::Bashful | Nature::Quirky => {
                None
            }
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.modifiers().is_none()
    }

    pub fn increased_stat(&self) -> Option<Stat> {
        self.modifiers().map(|(up, _)| up)
    }

    pub fn decreased_stat(&self) -> Option<Stat> {
        self.modifiers().map(|(_, down)| down)
    }

    pub fn likes_flavor(&self) -> Option<Flavor> {
        self.increased_stat().and_then(Flavor::for_stat)
    }

    pub fn hates_flavor(&self) -> Option<Flavor> {
        self.decreased_stat().and_then(Flavor::for_stat)
    }

    /// Apply this nature to a base stat value
    ///
    /// Neutral natures return `None`.
    pub fn effect_on(&self, base: u32) -> Option<NatureEffect> {
        let (increased_stat, decreased_stat) = self.modifiers()?;
        Some(NatureEffect {
            base,
            increased_stat,
            increased: (u64::from(base) * 11 / 10).min(u64::from(u32::MAX)) as u32,
            decreased_stat,
            decreased: (u64::from(base) * 9 / 10) as u32,
        })
    }
}

/// Result of the nature calculator: the base value boosted by 10% or cut by 10%, floored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NatureEffect {
    pub base: u32,
    pub increased_stat: Stat,
    pub increased: u32,
    pub decreased_stat: Stat,
    pub decreased: u32,
}

impl NatureEffect {
    pub fn increase_delta(&self) -> i64 {
        i64::from(self.increased) - i64::from(self.base)
    }

    pub fn decrease_delta(&self) -> i64 {
        i64::from(self.decreased) - i64::from(self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_natures() {
        let neutral: Vec<Nature> = Nature::ALL.iter().copied().filter(|n| n.is_neutral()).collect();
        assert_eq!(
            neutral,
            vec![Nature::Hardy, Nature::Docile, Nature::Serious, Nature::Bashful, Nature::Quirky]
        );
        assert_eq!(Nature::Hardy.effect_on(100), None);
    }

    #[test]
    fn test_every_stat_pair_appears_once() {
        let mut pairs: Vec<(Stat, Stat)> = Nature::ALL.iter().filter_map(|n| n.modifiers()).collect();
        pairs.sort();
        pairs.dedup();
        assert_eq!(pairs.len(), 20);
    }

    #[test]
    fn test_flavors() {
        assert_eq!(Nature::Adamant.likes_flavor(), Some(Flavor::Spicy));
        assert_eq!(Nature::Adamant.hates_flavor(), Some(Flavor::Dry));
        assert_eq!(Nature::Timid.likes_flavor(), Some(Flavor::Sweet));
        assert_eq!(Nature::Serious.likes_flavor(), None);
    }

    #[test]
    fn test_nature_calculator_floors() {
        let effect = Nature::Modest.effect_on(95).unwrap();
        assert_eq!(effect.increased_stat, Stat::SpecialAttack);
        assert_eq!(effect.increased, 104);
        assert_eq!(effect.decreased_stat, Stat::Attack);
        assert_eq!(effect.decreased, 85);
        assert_eq!(effect.increase_delta(), 9);
        assert_eq!(effect.decrease_delta(), -10);
    }

    #[test]
    fn test_nature_calculator_large_base() {
        let effect = Nature::Modest.effect_on(u32::MAX).unwrap();
        assert_eq!(effect.increased, u32::MAX);
        assert_eq!(effect.decreased, 3_865_470_565);
    }

    #[test]
    fn test_nature_from_api() {
        assert_eq!(Nature::from_api("jolly"), Some(Nature::Jolly));
        assert_eq!(Nature::from_api("grumpy"), None);
        assert_eq!(Nature::Jolly.display_name(), "Alegre");
    }
}
