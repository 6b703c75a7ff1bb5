//! Per-type damage relations

use typedex_protocol::{DamageRelationsPayload, NamedResource};

use super::type_name::{TYPE_CHART, TypeName};

/// Which types deal (or take) double, half or no damage relative to one type
///
/// The `*_from` lists describe this type defending; the `*_to` lists describe
/// it attacking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRelations {
    pub double_damage_from: Vec<TypeName>,
    pub half_damage_from: Vec<TypeName>,
    pub no_damage_from: Vec<TypeName>,
    pub double_damage_to: Vec<TypeName>,
    pub half_damage_to: Vec<TypeName>,
    pub no_damage_to: Vec<TypeName>,
}

impl DamageRelations {
    /// Derive the relations of `t` from the built-in chart
    pub fn from_chart(t: TypeName) -> Self {
        let from = |value: f32| -> Vec<TypeName> {
            TypeName::all()
                .iter()
                .copied()
                .filter(|attacker| TYPE_CHART[attacker.index()][t.index()] == value)
                .collect()
        };
        let to = |value: f32| -> Vec<TypeName> {
            TypeName::all()
                .iter()
                .copied()
                .filter(|defender| TYPE_CHART[t.index()][defender.index()] == value)
                .collect()
        };

        Self {
            double_damage_from: from(2.0),
            half_damage_from: from(0.5),
            no_damage_from: from(0.0),
            double_damage_to: to(2.0),
            half_damage_to: to(0.5),
            no_damage_to: to(0.0),
        }
    }

    /// Convert from the API payload, dropping names outside the canonical 18
    pub fn from_payload(payload: &DamageRelationsPayload) -> Self {
        Self {
            double_damage_from: known_types(&payload.double_damage_from),
            half_damage_from: known_types(&payload.half_damage_from),
            no_damage_from: known_types(&payload.no_damage_from),
            double_damage_to: known_types(&payload.double_damage_to),
            half_damage_to: known_types(&payload.half_damage_to),
            no_damage_to: known_types(&payload.no_damage_to),
        }
    }
}

impl From<&DamageRelationsPayload> for DamageRelations {
    fn from(payload: &DamageRelationsPayload) -> Self {
        Self::from_payload(payload)
    }
}

fn known_types(refs: &[NamedResource]) -> Vec<TypeName> {
    refs.iter().filter_map(|r| TypeName::from_api(&r.name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: String::new(),
        }
    }

    #[test]
    fn test_chart_relations_ground() {
        let ground = DamageRelations::from_chart(TypeName::Ground);

        assert_eq!(
            ground.double_damage_from,
            vec![TypeName::Water, TypeName::Grass, TypeName::Ice]
        );
        assert_eq!(ground.half_damage_from, vec![TypeName::Poison, TypeName::Rock]);
        assert_eq!(ground.no_damage_from, vec![TypeName::Electric]);
        assert_eq!(ground.no_damage_to, vec![TypeName::Flying]);
    }

    #[test]
    fn test_chart_relations_water() {
        let water = DamageRelations::from_chart(TypeName::Water);

        assert_eq!(water.double_damage_from, vec![TypeName::Electric, TypeName::Grass]);
        assert_eq!(
            water.double_damage_to,
            vec![TypeName::Fire, TypeName::Ground, TypeName::Rock]
        );
    }

    #[test]
    fn test_from_payload_drops_unknown_names() {
        let payload = DamageRelationsPayload {
            double_damage_from: vec![named("fighting"), named("stellar")],
            no_damage_from: vec![named("ghost")],
            ..Default::default()
        };

        let relations = DamageRelations::from_payload(&payload);

        assert_eq!(relations.double_damage_from, vec![TypeName::Fighting]);
        assert_eq!(relations.no_damage_from, vec![TypeName::Ghost]);
        assert!(relations.half_damage_from.is_empty());
    }
}
