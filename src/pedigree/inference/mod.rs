pub mod engine;
pub mod enumerate;
pub mod joint;
pub mod posterior;
pub mod report;

pub use engine::{InferenceStats, Inferencer, infer};
pub use posterior::{PosteriorTable, PersonPosterior};
