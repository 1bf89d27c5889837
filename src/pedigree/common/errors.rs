//! Error types for pedigree loading and inference.

use thiserror::Error;

/// Errors raised by the library. Binaries wrap these in `anyhow` with context.
#[derive(Debug, Error)]
pub enum HeredityError {
    /// Every enumerated world disagreed with the evidence, so a posterior could not be normalized.
    #[error("evidence is unsatisfiable: no consistent world assigns mass to '{person}'")]
    UnsatisfiableEvidence { person: String },

    /// The family records break a structural rule (missing parent, partial parentage, ...).
    #[error("malformed family data: {0}")]
    MalformedFamilyData(String),

    /// A name was used that does not belong to the family.
    #[error("unknown person: {0}")]
    UnknownPerson(String),

    /// Probability tables are out of range or do not sum to one.
    #[error("invalid probability tables: {0}")]
    InvalidTables(String),

    #[error("family has {size} people, exhaustive enumeration is limited to {limit}")]
    FamilyTooLarge { size: usize, limit: usize },

    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HeredityError>;
