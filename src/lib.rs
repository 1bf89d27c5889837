#[macro_use]
pub mod pedigree;

pub use pedigree::{Family, HeredityError, Inferencer, PosteriorTable, ProbabilityTables};
