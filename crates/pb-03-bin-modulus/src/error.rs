//! Error types for the bin modulus subsystem

use shared_types::TableSide;
use thiserror::Error;

use crate::domain::Subset;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Pad prime list exhausted for set{subset} after scanning {scanned} pads")]
    PadListExhausted { subset: Subset, scanned: usize },

    #[error("No valid generator after {attempts} draws")]
    GeneratorSearchExhausted { attempts: u32 },

    #[error("Invalid build configuration: {0}")]
    InvalidConfig(String),

    #[error("Bucket {index} of the {side} table failed: {source}")]
    Bucket {
        side: TableSide,
        index: usize,
        #[source]
        source: Box<BuildError>,
    },

    #[error("Built bucket {index} of the {side} table violates an invariant: {violation}")]
    Invariant {
        side: TableSide,
        index: usize,
        violation: InvariantViolation,
    },
}

/// A built bucket that does not satisfy the construction invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("factor {0} is not prime")]
    CompositeFactor(Subset),

    #[error("set{0} is not a factorisation of the factor minus one")]
    FactorShape(Subset),

    #[error("modulus does not equal P * Q")]
    ModulusMismatch,

    #[error("generator outside [2, N)")]
    GeneratorOutOfRange,

    #[error("generator order collapses for a member of set{0}")]
    OrderCollapse(Subset),
}
