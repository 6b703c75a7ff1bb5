use serde::{Deserialize, Serialize};
use typedex_matchup::{DamageClass, TypeName, format_name};
use typedex_protocol::MoveResource;

/// Moves a member can carry
pub const MAX_MOVES: usize = 4;

/// A move chosen for a team member, with the details the move list shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedMove {
    pub name: String,
    pub display_name: String,
    pub move_type: Option<TypeName>,
    pub damage_class: Option<DamageClass>,
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    pub pp: Option<u32>,
}

impl SelectedMove {
    /// Bare move with only a name
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: format_name(&name),
            name,
            move_type: None,
            damage_class: None,
            power: None,
            accuracy: None,
            pp: None,
        }
    }

    pub fn from_resource(resource: &MoveResource) -> Self {
        Self {
            name: resource.name.clone(),
            display_name: format_name(&resource.name),
            move_type: TypeName::from_api(&resource.type_.name),
            damage_class: resource
                .damage_class
                .as_ref()
                .and_then(|c| DamageClass::from_api(&c.name)),
            power: resource.power,
            accuracy: resource.accuracy,
            pp: resource.pp,
        }
    }
}

/// Outcome of toggling a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveToggle {
    Added,
    Removed,
    /// The set already holds four moves
    Rejected,
}

/// Up to four distinct moves, in selection order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSet {
    moves: Vec<SelectedMove>,
}

impl MoveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the move if selected, otherwise add it if there is room
    pub fn toggle(&mut self, mv: SelectedMove) -> MoveToggle {
        if let Some(index) = self.position(&mv.name) {
            self.moves.remove(index);
            return MoveToggle::Removed;
        }

        if self.is_full() {
            return MoveToggle::Rejected;
        }

        self.moves.push(mv);
        MoveToggle::Added
    }

    pub fn remove(&mut self, name: &str) -> Option<SelectedMove> {
        let index = self.position(name)?;
        Some(self.moves.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn is_full(&self) -> bool {
        self.moves.len() >= MAX_MOVES
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[SelectedMove] {
        &self.moves
    }

    /// Whether the picker should still offer `name`
    pub fn can_select(&self, name: &str) -> bool {
        !self.contains(name) && !self.is_full()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.moves.iter().position(|m| m.name == name)
    }

    pub(crate) fn is_valid(&self) -> bool {
        if self.moves.len() > MAX_MOVES {
            return false;
        }
        self.moves
            .iter()
            .enumerate()
            .all(|(i, m)| self.position(&m.name) == Some(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typedex_protocol::parse_resource;

    #[test]
    fn test_toggle_add_and_remove() {
        let mut set = MoveSet::new();

        assert_eq!(set.toggle(SelectedMove::named("surf")), MoveToggle::Added);
        assert!(set.contains("surf"));
        assert_eq!(set.toggle(SelectedMove::named("surf")), MoveToggle::Removed);
        assert!(set.is_empty());
    }

    #[test]
    fn test_fifth_move_rejected() {
        let mut set = MoveSet::new();
        for name in ["surf", "earthquake", "ice-beam", "protect"] {
            assert_eq!(set.toggle(SelectedMove::named(name)), MoveToggle::Added);
        }

        assert!(set.is_full());
        assert_eq!(set.toggle(SelectedMove::named("toxic")), MoveToggle::Rejected);
        assert_eq!(set.len(), 4);
        assert!(!set.can_select("toxic"));

        // Removing still works on a full set
        assert_eq!(set.toggle(SelectedMove::named("protect")), MoveToggle::Removed);
        assert!(set.can_select("toxic"));
    }

    #[test]
    fn test_selection_order_kept() {
        let mut set = MoveSet::new();
        set.toggle(SelectedMove::named("b"));
        set.toggle(SelectedMove::named("a"));
        set.toggle(SelectedMove::named("c"));
        set.remove("a");

        let names: Vec<&str> = set.moves().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn test_from_resource() {
        let body = r#"{
            "id": 57,
            "name": "surf",
            "accuracy": 100,
            "power": 90,
            "pp": 15,
            "type": {"name": "water", "url": ""},
            "damage_class": {"name": "special", "url": ""}
        }"#;
        let resource: MoveResource = parse_resource(body).unwrap();

        let mv = SelectedMove::from_resource(&resource);

        assert_eq!(mv.display_name, "Surf");
        assert_eq!(mv.move_type, Some(TypeName::Water));
        assert_eq!(mv.damage_class, Some(DamageClass::Special));
        assert_eq!(mv.power, Some(90));
    }
}
