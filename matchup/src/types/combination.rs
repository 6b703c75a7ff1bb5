//! A creature's typing: one primary type and an optional secondary

use super::type_name::TypeName;

/// Ordered 1- or 2-element typing
///
/// Empty or 3+ element typings cannot be constructed. A repeated type
/// (`dual(Fire, Fire)`) is representable but real data never produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeCombination {
    primary: TypeName,
    secondary: Option<TypeName>,
}

impl TypeCombination {
    /// Single-typed combination
    pub fn single(primary: TypeName) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// Dual-typed combination
    pub fn dual(primary: TypeName, secondary: TypeName) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// Build from a slice of 1 or 2 types
    pub fn from_slice(types: &[TypeName]) -> Option<Self> {
        match types {
            [primary] => Some(Self::single(*primary)),
            [primary, secondary] => Some(Self::dual(*primary, *secondary)),
            _ => None,
        }
    }

    /// Build from API identifiers (`["water", "ground"]`)
    ///
    /// Returns `None` if the list has the wrong length or any name is not a canonical type.
    pub fn from_api_names<S: AsRef<str>>(names: &[S]) -> Option<Self> {
        let types: Option<Vec<TypeName>> = names
            .iter()
            .map(|n| TypeName::from_api(n.as_ref()))
            .collect();
        Self::from_slice(&types?)
    }

    pub fn primary(&self) -> TypeName {
        self.primary
    }

    pub fn secondary(&self) -> Option<TypeName> {
        self.secondary
    }

    pub fn is_dual(&self) -> bool {
        self.secondary.is_some()
    }

    pub fn contains(&self, t: TypeName) -> bool {
        self.primary == t || self.secondary == Some(t)
    }

    /// Member types in order
    pub fn iter(&self) -> impl Iterator<Item = TypeName> + '_ {
        std::iter::once(self.primary).chain(self.secondary)
    }

    pub fn to_vec(&self) -> Vec<TypeName> {
        self.iter().collect()
    }
}

impl From<TypeName> for TypeCombination {
    fn from(t: TypeName) -> Self {
        Self::single(t)
    }
}

impl From<(TypeName, TypeName)> for TypeCombination {
    fn from((a, b): (TypeName, TypeName)) -> Self {
        Self::dual(a, b)
    }
}

impl std::fmt::Display for TypeCombination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}/{}", self.primary, secondary),
            None => write!(f, "{}", self.primary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_lengths() {
        assert_eq!(TypeCombination::from_slice(&[]), None);
        assert_eq!(
            TypeCombination::from_slice(&[TypeName::Fire]),
            Some(TypeCombination::single(TypeName::Fire))
        );
        assert_eq!(
            TypeCombination::from_slice(&[TypeName::Water, TypeName::Ground]),
            Some(TypeCombination::dual(TypeName::Water, TypeName::Ground))
        );
        assert_eq!(
            TypeCombination::from_slice(&[TypeName::Water, TypeName::Ground, TypeName::Fire]),
            None
        );
    }

    #[test]
    fn test_from_api_names() {
        let combo = TypeCombination::from_api_names(&["water", "ground"]).unwrap();
        assert_eq!(combo.to_vec(), vec![TypeName::Water, TypeName::Ground]);

        assert_eq!(TypeCombination::from_api_names(&["water", "stellar"]), None);
    }

    #[test]
    fn test_order_is_preserved() {
        let combo = TypeCombination::dual(TypeName::Ground, TypeName::Water);
        assert_eq!(combo.primary(), TypeName::Ground);
        assert_eq!(combo.secondary(), Some(TypeName::Water));
        assert!(combo.contains(TypeName::Water));
        assert!(!combo.contains(TypeName::Fire));
        assert_eq!(combo.to_string(), "Ground/Water");
    }
}
