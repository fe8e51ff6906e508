//! Error types for the table store

use shared_types::TableShapeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("No stored entry named {name}")]
    NotFound { name: String },

    #[error("I/O error on {name}: {message}")]
    Io { name: String, message: String },

    #[error("Codec error on {name}: {message}")]
    Codec { name: String, message: String },

    #[error("Stored table is malformed: {0}")]
    Shape(#[from] TableShapeError),
}
