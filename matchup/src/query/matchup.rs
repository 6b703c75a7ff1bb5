//! Defensive multipliers and offensive strengths for a typing

use crate::lookup::RelationsLookup;
use crate::types::{TypeCombination, TypeName};

/// Final damage multiplier of every attacking type against one typing
///
/// Values are always one of 0, 0.25, 0.5, 1, 2 or 4.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeMultipliers {
    values: [f32; 18],
}

impl TypeMultipliers {
    fn neutral() -> Self {
        Self { values: [1.0; 18] }
    }

    /// Multiplier for an attacking type
    pub fn get(&self, attacker: TypeName) -> f32 {
        self.values[attacker.index()]
    }

    /// `(attacker, multiplier)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (TypeName, f32)> + '_ {
        TypeName::all().iter().map(|t| (*t, self.values[t.index()]))
    }
}

/// Classification of the 18 types against one typing
///
/// `weaknesses`, `resistances` and `immunities` are disjoint and listed in
/// canonical order. `strengths` is computed from the offensive relations and
/// may overlap the other three.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchupResult {
    /// Types dealing 2x or more
    pub weaknesses: Vec<TypeName>,
    /// Types dealing more than 0x and less than 1x
    pub resistances: Vec<TypeName>,
    /// Types dealing exactly 0x
    pub immunities: Vec<TypeName>,
    /// Types this typing hits for 2x, first occurrence order across members
    pub strengths: Vec<TypeName>,
}

/// Compute the combined defensive multiplier of every type against `types`
///
/// Member types whose relations are not resident in `lookup` are skipped.
/// An immunity sets the multiplier to exactly 0 and no later factor moves it.
pub fn type_multipliers<L: RelationsLookup + ?Sized>(
    types: &TypeCombination,
    lookup: &L,
) -> TypeMultipliers {
    let mut multipliers = TypeMultipliers::neutral();

    for member in types.iter() {
        let Some(relations) = lookup.relations(member) else {
            continue;
        };

        for attacker in &relations.double_damage_from {
            multipliers.values[attacker.index()] *= 2.0;
        }
        for attacker in &relations.half_damage_from {
            multipliers.values[attacker.index()] *= 0.5;
        }
        for attacker in &relations.no_damage_from {
            multipliers.values[attacker.index()] = 0.0;
        }
    }

    multipliers
}

/// Classify all 18 types against a 1- or 2-type combination
pub fn calculate_matchups<L: RelationsLookup + ?Sized>(
    types: &TypeCombination,
    lookup: &L,
) -> MatchupResult {
    let multipliers = type_multipliers(types, lookup);
    let mut result = MatchupResult::default();

    for (attacker, multiplier) in multipliers.iter() {
        if multiplier >= 2.0 {
            result.weaknesses.push(attacker);
        } else if multiplier > 0.0 && multiplier < 1.0 {
            result.resistances.push(attacker);
        } else if multiplier == 0.0 {
            result.immunities.push(attacker);
        }
    }

    for member in types.iter() {
        let Some(relations) = lookup.relations(member) else {
            continue;
        };
        for target in &relations.double_damage_to {
            if !result.strengths.contains(target) {
                result.strengths.push(*target);
            }
        }
    }

    result
}

/// Check if defender is weak (>1x effectiveness) to any of the attacking types
pub fn is_weak_to_any<L: RelationsLookup + ?Sized>(
    defender: &TypeCombination,
    attacking_types: &[TypeName],
    lookup: &L,
) -> bool {
    let multipliers = type_multipliers(defender, lookup);
    attacking_types.iter().any(|t| multipliers.get(*t) > 1.0)
}

/// Check if defender resists (<1x effectiveness) all of the attacking types
pub fn resists_all<L: RelationsLookup + ?Sized>(
    defender: &TypeCombination,
    attacking_types: &[TypeName],
    lookup: &L,
) -> bool {
    if attacking_types.is_empty() {
        return false;
    }
    let multipliers = type_multipliers(defender, lookup);
    attacking_types.iter().all(|t| multipliers.get(*t) < 1.0)
}

/// Check if defender is immune (0x effectiveness) to a type
pub fn is_immune_to<L: RelationsLookup + ?Sized>(
    defender: &TypeCombination,
    attacking_type: TypeName,
    lookup: &L,
) -> bool {
    type_multipliers(defender, lookup).get(attacking_type) == 0.0
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::lookup::RelationTable;
    use crate::types::DamageRelations;

    fn chart() -> RelationTable {
        RelationTable::from_chart()
    }

    #[test]
    fn test_single_type_reproduces_relations() {
        let table = chart();

        for t in TypeName::all() {
            let relations = DamageRelations::from_chart(*t);
            let result = calculate_matchups(&TypeCombination::single(*t), &table);

            assert_eq!(result.weaknesses, relations.double_damage_from, "{t}");
            assert_eq!(result.resistances, relations.half_damage_from, "{t}");
            assert_eq!(result.immunities, relations.no_damage_from, "{t}");
            assert_eq!(result.strengths, relations.double_damage_to, "{t}");
        }
    }

    #[test]
    fn test_water_ground() {
        let table = chart();
        let swampert = TypeCombination::dual(TypeName::Water, TypeName::Ground);

        let multipliers = type_multipliers(&swampert, &table);
        assert_eq!(multipliers.get(TypeName::Grass), 4.0);
        assert_eq!(multipliers.get(TypeName::Electric), 0.0);

        let result = calculate_matchups(&swampert, &table);
        assert_eq!(result.weaknesses, vec![TypeName::Grass]);
        assert_eq!(result.immunities, vec![TypeName::Electric]);
        assert!(!result.weaknesses.contains(&TypeName::Electric));
    }

    #[test]
    fn test_shared_weakness_is_quad_but_plain_weakness() {
        let table = chart();
        // Grass/Bug: fire, flying are 4x
        let combo = TypeCombination::dual(TypeName::Grass, TypeName::Bug);

        let multipliers = type_multipliers(&combo, &table);
        assert_eq!(multipliers.get(TypeName::Fire), 4.0);
        assert_eq!(multipliers.get(TypeName::Flying), 4.0);

        let result = calculate_matchups(&combo, &table);
        assert!(result.weaknesses.contains(&TypeName::Fire));
        assert!(result.weaknesses.contains(&TypeName::Flying));
    }

    #[test]
    fn test_quarter_resistance_classified_as_resistance() {
        let table = chart();
        // Fire vs Water/Rock = 0.25x
        let combo = TypeCombination::dual(TypeName::Water, TypeName::Rock);

        assert_eq!(type_multipliers(&combo, &table).get(TypeName::Fire), 0.25);
        assert!(calculate_matchups(&combo, &table).resistances.contains(&TypeName::Fire));
    }

    #[test]
    fn test_immunity_wins_in_either_order() {
        let table = chart();

        let water_ground = TypeCombination::dual(TypeName::Water, TypeName::Ground);
        let ground_water = TypeCombination::dual(TypeName::Ground, TypeName::Water);

        assert_eq!(
            type_multipliers(&water_ground, &table),
            type_multipliers(&ground_water, &table)
        );
        assert_eq!(
            calculate_matchups(&water_ground, &table).immunities,
            calculate_matchups(&ground_water, &table).immunities
        );
    }

    #[test]
    fn test_immunity_overrides_later_double() {
        // Synthetic relations: A immune to X, B weak to X, applied in both orders
        let mut lookup = HashMap::new();
        lookup.insert(
            TypeName::Normal,
            DamageRelations {
                no_damage_from: vec![TypeName::Ghost],
                ..Default::default()
            },
        );
        lookup.insert(
            TypeName::Psychic,
            DamageRelations {
                double_damage_from: vec![TypeName::Ghost],
                ..Default::default()
            },
        );

        for combo in [
            TypeCombination::dual(TypeName::Normal, TypeName::Psychic),
            TypeCombination::dual(TypeName::Psychic, TypeName::Normal),
        ] {
            let multipliers = type_multipliers(&combo, &lookup);
            assert_eq!(multipliers.get(TypeName::Ghost), 0.0);
            assert!(multipliers.get(TypeName::Ghost).is_sign_positive());

            let result = calculate_matchups(&combo, &lookup);
            assert_eq!(result.immunities, vec![TypeName::Ghost]);
            assert!(result.weaknesses.is_empty());
        }
    }

    #[test]
    fn test_missing_relations_are_neutral() {
        let mut table = RelationTable::new();
        table.insert(TypeName::Water, DamageRelations::from_chart(TypeName::Water));

        // Ground not loaded: electric stays a weakness, grass only 2x
        let combo = TypeCombination::dual(TypeName::Water, TypeName::Ground);
        let multipliers = type_multipliers(&combo, &table);
        assert_eq!(multipliers.get(TypeName::Electric), 2.0);
        assert_eq!(multipliers.get(TypeName::Grass), 2.0);

        let result = calculate_matchups(&combo, &table);
        assert_eq!(result, calculate_matchups(&TypeCombination::single(TypeName::Water), &table));
    }

    #[test]
    fn test_nothing_loaded_is_empty_result() {
        let table = RelationTable::new();
        let result = calculate_matchups(&TypeCombination::single(TypeName::Fire), &table);
        assert_eq!(result, MatchupResult::default());
    }

    #[test]
    fn test_strengths_deduplicated_in_first_occurrence_order() {
        let table = chart();
        // Fire hits grass, ice, bug, steel; Rock hits fire, ice, flying, bug
        let combo = TypeCombination::dual(TypeName::Fire, TypeName::Rock);
        let result = calculate_matchups(&combo, &table);

        assert_eq!(
            result.strengths,
            vec![
                TypeName::Grass,
                TypeName::Ice,
                TypeName::Bug,
                TypeName::Steel,
                TypeName::Fire,
                TypeName::Flying,
            ]
        );
    }

    #[test]
    fn test_strengths_may_overlap_weaknesses() {
        let table = chart();
        // Dragon is weak to dragon and hits dragon for 2x
        let result = calculate_matchups(&TypeCombination::single(TypeName::Dragon), &table);
        assert!(result.weaknesses.contains(&TypeName::Dragon));
        assert!(result.strengths.contains(&TypeName::Dragon));
    }

    #[test]
    fn test_defensive_lists_disjoint() {
        let table = chart();
        for a in TypeName::all() {
            for b in TypeName::all() {
                let result = calculate_matchups(&TypeCombination::dual(*a, *b), &table);
                for t in &result.weaknesses {
                    assert!(!result.resistances.contains(t));
                    assert!(!result.immunities.contains(t));
                }
                for t in &result.resistances {
                    assert!(!result.immunities.contains(t));
                }
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let table = chart();
        let combo = TypeCombination::dual(TypeName::Steel, TypeName::Fairy);
        assert_eq!(calculate_matchups(&combo, &table), calculate_matchups(&combo, &table));
    }

    #[test]
    fn test_is_weak_to_any() {
        let table = chart();
        let water = TypeCombination::single(TypeName::Water);
        assert!(is_weak_to_any(&water, &[TypeName::Electric, TypeName::Grass], &table));
        assert!(!is_weak_to_any(&water, &[TypeName::Fire, TypeName::Ice], &table));
    }

    #[test]
    fn test_resists_all() {
        let table = chart();
        let steel = TypeCombination::single(TypeName::Steel);
        assert!(resists_all(&steel, &[TypeName::Normal, TypeName::Ice, TypeName::Fairy], &table));
        assert!(!resists_all(&steel, &[TypeName::Fire, TypeName::Ice], &table));
        assert!(!resists_all(&steel, &[], &table));
    }

    #[test]
    fn test_is_immune_to() {
        let table = chart();
        let ghost = TypeCombination::single(TypeName::Ghost);
        assert!(is_immune_to(&ghost, TypeName::Normal, &table));
        assert!(is_immune_to(&ghost, TypeName::Fighting, &table));
        assert!(!is_immune_to(&ghost, TypeName::Dark, &table));
    }
}
