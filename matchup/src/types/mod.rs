//! Domain types for type matchups and the fixed vocabularies around them

mod combination;
mod damage_class;
mod nature;
mod relations;
mod stats;
mod type_name;

pub use combination::TypeCombination;
pub use damage_class::DamageClass;
pub use nature::{Flavor, Nature, NatureEffect};
pub use relations::DamageRelations;
pub use stats::{Stat, stat_color};
pub use type_name::{TYPE_CHART, TypeName};
