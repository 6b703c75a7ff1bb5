use typedex_matchup::{TeamAggregate, TypeName};

/// Entries shown per ranked list in the team panel
pub const ANALYSIS_TOP: usize = 8;

/// Ranked team summary ready for display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamAnalysis {
    pub member_count: usize,
    /// Most shared weaknesses first, at most [`ANALYSIS_TOP`]
    pub weaknesses: Vec<(TypeName, usize)>,
    /// Most shared resistances first, at most [`ANALYSIS_TOP`]
    pub resistances: Vec<(TypeName, usize)>,
    /// Every type some member is immune to, canonical order
    pub immunities: Vec<TypeName>,
}

impl TeamAnalysis {
    pub fn from_aggregate(aggregate: &TeamAggregate, member_count: usize) -> Self {
        Self {
            member_count,
            weaknesses: aggregate.weakness_counts.top(ANALYSIS_TOP),
            resistances: aggregate.resistance_counts.top(ANALYSIS_TOP),
            immunities: aggregate.immunity_union.iter().copied().collect(),
        }
    }

    /// No members at all, as opposed to members with nothing in common
    pub fn is_empty_team(&self) -> bool {
        self.member_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typedex_matchup::{RelationTable, TypeCombination, aggregate_team};

    #[test]
    fn test_empty_team_distinct_from_no_shared_weakness() {
        let table = RelationTable::from_chart();
        let empty = TeamAnalysis::from_aggregate(&aggregate_team(&[], &table), 0);

        // Unloaded relations leave a real member with nothing to report
        let unloaded = RelationTable::new();
        let roster = [TypeCombination::single(TypeName::Fire)];
        let nothing_shared = TeamAnalysis::from_aggregate(&aggregate_team(&roster, &unloaded), 1);

        assert!(empty.is_empty_team());
        assert!(!nothing_shared.is_empty_team());
        assert_eq!(empty.weaknesses, nothing_shared.weaknesses);
    }

    #[test]
    fn test_lists_capped() {
        let table = RelationTable::from_chart();
        let roster = [
            TypeCombination::single(TypeName::Steel),
            TypeCombination::dual(TypeName::Water, TypeName::Ground),
        ];

        let analysis = TeamAnalysis::from_aggregate(&aggregate_team(&roster, &table), 2);

        assert!(analysis.resistances.len() <= ANALYSIS_TOP);
        assert_eq!(analysis.resistances[0].1, 2);
    }
}
