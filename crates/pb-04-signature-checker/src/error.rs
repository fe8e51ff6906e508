//! Error types for the signature checker

use pb_06_table_store::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("Failed to load tables: {0}")]
    Store(#[from] StoreError),

    #[error("No tables to check")]
    NoTables,
}
