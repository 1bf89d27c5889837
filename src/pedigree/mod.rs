pub mod common;
pub mod inference;
pub mod model;
pub mod scenarios;

// Re-export color printing macros
pub use crate::print_blue;
pub use crate::print_green;
pub use crate::print_red;
pub use crate::print_yellow;

/// Exports the main types for easy access
pub use common::errors::HeredityError;
pub use inference::{Inferencer, PosteriorTable, infer};
pub use model::{Evidence, Family, GeneCount, Person, ProbabilityTables};
