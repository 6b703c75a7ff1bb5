//! Read access to resident damage relations

use std::collections::HashMap;

use typedex_protocol::TypeResource;

use crate::types::{DamageRelations, TypeName};

/// Synchronous lookup of a type's damage relations
///
/// `None` means the relations are not loaded yet. The matchup queries treat
/// such a type as neutral rather than failing.
pub trait RelationsLookup {
    fn relations(&self, type_name: TypeName) -> Option<&DamageRelations>;
}

impl<L: RelationsLookup + ?Sized> RelationsLookup for &L {
    fn relations(&self, type_name: TypeName) -> Option<&DamageRelations> {
        (**self).relations(type_name)
    }
}

impl RelationsLookup for HashMap<TypeName, DamageRelations> {
    fn relations(&self, type_name: TypeName) -> Option<&DamageRelations> {
        self.get(&type_name)
    }
}

/// Fixed-size table with one slot per canonical type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationTable {
    entries: [Option<DamageRelations>; 18],
}

impl RelationTable {
    /// Empty table, every type unloaded
    pub fn new() -> Self {
        Self {
            entries: std::array::from_fn(|_| None),
        }
    }

    /// Fully populated table derived from the built-in chart
    pub fn from_chart() -> Self {
        Self {
            entries: std::array::from_fn(|i| {
                Some(DamageRelations::from_chart(TypeName::ALL[i]))
            }),
        }
    }

    /// Store relations for a type, returning the previous entry
    pub fn insert(
        &mut self,
        type_name: TypeName,
        relations: DamageRelations,
    ) -> Option<DamageRelations> {
        self.entries[type_name.index()].replace(relations)
    }

    /// Store the relations carried by a `/type/{name}` response
    ///
    /// Returns the type stored, or `None` if the resource names a non-canonical type.
    pub fn insert_resource(&mut self, resource: &TypeResource) -> Option<TypeName> {
        let type_name = TypeName::from_api(&resource.name)?;
        self.insert(
            type_name,
            DamageRelations::from_payload(&resource.damage_relations),
        );
        Some(type_name)
    }

    pub fn remove(&mut self, type_name: TypeName) -> Option<DamageRelations> {
        self.entries[type_name.index()].take()
    }

    pub fn contains(&self, type_name: TypeName) -> bool {
        self.entries[type_name.index()].is_some()
    }

    /// Number of loaded types
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether all 18 types are loaded
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(Option::is_some)
    }

    /// Types not loaded yet, in canonical order
    pub fn missing(&self) -> Vec<TypeName> {
        TypeName::all()
            .iter()
            .copied()
            .filter(|t| !self.contains(*t))
            .collect()
    }
}

impl Default for RelationTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RelationsLookup for RelationTable {
    fn relations(&self, type_name: TypeName) -> Option<&DamageRelations> {
        self.entries[type_name.index()].as_ref()
    }
}
