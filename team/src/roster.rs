use serde::{Deserialize, Serialize};
use typedex_matchup::{RelationsLookup, TypeCombination, aggregate_team};

use crate::analysis::TeamAnalysis;
use crate::error::TeamError;
use crate::member::TeamMember;
use crate::moveset::{MoveToggle, SelectedMove};

/// Maximum roster size
pub const MAX_TEAM_SIZE: usize = 6;

/// An ordered roster of up to six distinct pokemon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    members: Vec<TeamMember>,
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member
    pub fn add(&mut self, member: TeamMember) -> Result<(), TeamError> {
        if self.is_full() {
            return Err(TeamError::TeamFull(MAX_TEAM_SIZE));
        }
        if self.contains(member.id) {
            return Err(TeamError::AlreadyInTeam(member.id));
        }

        self.members.push(member);
        Ok(())
    }

    /// Remove a member by id, keeping the order of the rest
    pub fn remove(&mut self, id: u32) -> Result<TeamMember, TeamError> {
        let index = self
            .members
            .iter()
            .position(|m| m.id == id)
            .ok_or(TeamError::NotInTeam(id))?;
        Ok(self.members.remove(index))
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn get(&self, id: u32) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut TeamMember> {
        self.members.iter_mut().find(|m| m.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_TEAM_SIZE
    }

    /// Whether an "add to team" action should be offered for `id`
    pub fn can_add(&self, id: u32) -> bool {
        !self.is_full() && !self.contains(id)
    }

    /// Member typings in roster order
    pub fn typings(&self) -> Vec<TypeCombination> {
        self.members.iter().map(|m| m.types).collect()
    }

    /// Toggle a move on a member's move set
    pub fn toggle_move(&mut self, id: u32, mv: SelectedMove) -> Result<MoveToggle, TeamError> {
        let member = self.get_mut(id).ok_or(TeamError::NotInTeam(id))?;
        Ok(member.moves.toggle(mv))
    }

    /// Recompute the team-wide matchup summary from scratch
    pub fn analyze<L: RelationsLookup + ?Sized>(&self, lookup: &L) -> TeamAnalysis {
        let aggregate = aggregate_team(&self.typings(), lookup);
        TeamAnalysis::from_aggregate(&aggregate, self.len())
    }

    pub fn to_json(&self) -> Result<String, TeamError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a team exported with [`to_json`](Self::to_json), re-checking the roster rules
    pub fn from_json(json: &str) -> Result<Self, TeamError> {
        let imported: Team = serde_json::from_str(json)?;

        let mut team = Team::new();
        for member in imported.members {
            if !member.moves.is_valid() {
                return Err(TeamError::TooManyMoves(member.id));
            }
            team.add(member)?;
        }
        Ok(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typedex_matchup::{RelationTable, TypeName};

    fn member(id: u32, types: TypeCombination) -> TeamMember {
        TeamMember::new(id, format!("mon-{id}"), types)
    }

    #[test]
    fn test_add_until_full() {
        let mut team = Team::new();
        for id in 1..=6 {
            team.add(member(id, TypeName::Normal.into())).unwrap();
        }

        assert!(team.is_full());
        assert!(!team.can_add(7));
        let err = team.add(member(7, TypeName::Fire.into())).unwrap_err();
        assert!(matches!(err, TeamError::TeamFull(6)));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut team = Team::new();
        team.add(member(25, TypeName::Electric.into())).unwrap();

        let err = team.add(member(25, TypeName::Electric.into())).unwrap_err();
        assert!(matches!(err, TeamError::AlreadyInTeam(25)));
        assert_eq!(team.len(), 1);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut team = Team::new();
        for id in [1, 4, 7] {
            team.add(member(id, TypeName::Normal.into())).unwrap();
        }

        let removed = team.remove(4).unwrap();
        assert_eq!(removed.id, 4);

        let ids: Vec<u32> = team.members().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 7]);
        assert!(matches!(team.remove(4), Err(TeamError::NotInTeam(4))));
    }

    #[test]
    fn test_clear() {
        let mut team = Team::new();
        team.add(member(1, TypeName::Grass.into())).unwrap();
        team.clear();
        assert!(team.is_empty());
    }

    #[test]
    fn test_toggle_move_on_member() {
        let mut team = Team::new();
        team.add(member(260, (TypeName::Water, TypeName::Ground).into())).unwrap();

        assert_eq!(
            team.toggle_move(260, SelectedMove::named("earthquake")).unwrap(),
            MoveToggle::Added
        );
        assert!(team.get(260).unwrap().moves.contains("earthquake"));
        assert!(matches!(
            team.toggle_move(1, SelectedMove::named("earthquake")),
            Err(TeamError::NotInTeam(1))
        ));
    }

    #[test]
    fn test_analyze() {
        let mut team = Team::new();
        team.add(member(260, (TypeName::Water, TypeName::Ground).into())).unwrap();
        team.add(member(3, (TypeName::Grass, TypeName::Poison).into())).unwrap();

        let analysis = team.analyze(&RelationTable::from_chart());

        assert_eq!(analysis.member_count, 2);
        assert!(analysis.immunities.contains(&TypeName::Electric));
        assert!(analysis.weaknesses.iter().any(|(t, _)| *t == TypeName::Psychic));
    }

    #[test]
    fn test_json_round_trip() {
        let mut team = Team::new();
        team.add(member(260, (TypeName::Water, TypeName::Ground).into())).unwrap();
        team.toggle_move(260, SelectedMove::named("surf")).unwrap();

        let json = team.to_json().unwrap();
        let restored = Team::from_json(&json).unwrap();

        assert_eq!(restored, team);
    }

    #[test]
    fn test_import_rejects_duplicate_members() {
        let mut team = Team::new();
        team.add(member(1, TypeName::Grass.into())).unwrap();
        let json = team.to_json().unwrap();

        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = value["members"][0].clone();
        value["members"].as_array_mut().unwrap().push(first);

        let err = Team::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, TeamError::AlreadyInTeam(1)));
    }

    fn exported_with_moves(moves: &[&str]) -> serde_json::Value {
        let mut team = Team::new();
        team.add(member(260, (TypeName::Water, TypeName::Ground).into())).unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&team.to_json().unwrap()).unwrap();

        let moves: Vec<serde_json::Value> = moves
            .iter()
            .map(|name| serde_json::to_value(SelectedMove::named(*name)).unwrap())
            .collect();
        value["members"][0]["moves"]["moves"] = serde_json::Value::Array(moves);
        value
    }

    #[test]
    fn test_import_rejects_five_moves() {
        let value = exported_with_moves(&["surf", "earthquake", "ice-beam", "protect", "toxic"]);

        let err = Team::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, TeamError::TooManyMoves(260)));
    }

    #[test]
    fn test_import_rejects_repeated_move() {
        let value = exported_with_moves(&["surf", "earthquake", "surf"]);

        let err = Team::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, TeamError::TooManyMoves(260)));
    }

    #[test]
    fn test_import_accepts_four_moves() {
        let value = exported_with_moves(&["surf", "earthquake", "ice-beam", "protect"]);

        let team = Team::from_json(&value.to_string()).unwrap();
        assert_eq!(team.get(260).map(|m| m.moves.len()), Some(4));
    }

    #[test]
    fn test_import_rejects_invalid_json() {
        assert!(matches!(
            Team::from_json("{not json"),
            Err(TeamError::Serialization(_))
        ));
    }
}
