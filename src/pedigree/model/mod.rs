pub mod evidence;
pub mod loader;
pub mod objects;
pub mod tables;

pub use evidence::Evidence;
pub use objects::{Family, FamilyIndex, GeneCount, GenePartition, Person, World};
pub use tables::{ProbabilityTables, TraitRow};
