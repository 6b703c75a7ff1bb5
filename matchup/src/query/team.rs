//! Roster-wide aggregation of matchup results

use std::collections::{BTreeMap, BTreeSet};

use super::matchup::calculate_matchups;
use crate::lookup::RelationsLookup;
use crate::types::{TypeCombination, TypeName};

/// Per-type member counts; types with a zero count are never stored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeCounts {
    counts: BTreeMap<TypeName, usize>,
}

impl TypeCounts {
    fn increment(&mut self, t: TypeName) {
        *self.counts.entry(t).or_insert(0) += 1;
    }

    /// Count for a type (0 if absent)
    pub fn get(&self, t: TypeName) -> usize {
        self.counts.get(&t).copied().unwrap_or(0)
    }

    /// Number of types with a non-zero count
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(type, count)` pairs in canonical type order
    pub fn iter(&self) -> impl Iterator<Item = (TypeName, usize)> + '_ {
        self.counts.iter().map(|(t, c)| (*t, *c))
    }

    /// Sorted by count descending, ties in canonical type order
    pub fn ranked(&self) -> Vec<(TypeName, usize)> {
        let mut ranked: Vec<(TypeName, usize)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The first `n` entries of [`ranked`](Self::ranked)
    pub fn top(&self, n: usize) -> Vec<(TypeName, usize)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

/// Shared weaknesses, resistances and immunities across a roster
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamAggregate {
    /// Members weak to each type, one per member regardless of quad weakness
    pub weakness_counts: TypeCounts,
    /// Members resisting each type
    pub resistance_counts: TypeCounts,
    /// Types at least one member is immune to
    pub immunity_union: BTreeSet<TypeName>,
}

/// Aggregate the matchups of every roster member
///
/// An empty roster yields an empty aggregate. The roster is expected to hold
/// at most six members but larger slices are processed the same way.
pub fn aggregate_team<L: RelationsLookup + ?Sized>(
    roster: &[TypeCombination],
    lookup: &L,
) -> TeamAggregate {
    let mut aggregate = TeamAggregate::default();

    for member in roster {
        let matchups = calculate_matchups(member, lookup);

        for t in matchups.weaknesses {
            aggregate.weakness_counts.increment(t);
        }
        for t in matchups.resistances {
            aggregate.resistance_counts.increment(t);
        }
        aggregate.immunity_union.extend(matchups.immunities);
    }

    aggregate
}
