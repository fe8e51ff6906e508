//! # Outbound Ports (Driven Ports)
//!
//! Storage and encoding interfaces used by the table repository.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// Named blob storage.
///
/// Production: `FileTableStore`
/// Testing: `InMemoryTableStore`
pub trait TableStore: Send + Sync {
    /// Read the blob stored under `name`, if any.
    fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replace the blob stored under `name`.
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Check whether `name` exists.
    fn exists(&self, name: &str) -> Result<bool, StoreError>;
}

/// Record encoding.
pub trait TableCodec: Send + Sync {
    fn encode<T: Serialize>(&self, name: &str, value: &T) -> Result<Vec<u8>, StoreError>;

    fn decode<T: DeserializeOwned>(&self, name: &str, bytes: &[u8]) -> Result<T, StoreError>;
}

/// Default codec using bincode.
#[derive(Debug, Default, Clone, Copy)]
pub struct BincodeTableCodec;

impl TableCodec for BincodeTableCodec {
    fn encode<T: Serialize>(&self, name: &str, value: &T) -> Result<Vec<u8>, StoreError> {
        bincode::serialize(value).map_err(|e| StoreError::Codec {
            name: name.to_string(),
            message: e.to_string(),
        })
    }

    fn decode<T: DeserializeOwned>(&self, name: &str, bytes: &[u8]) -> Result<T, StoreError> {
        bincode::deserialize(bytes).map_err(|e| StoreError::Codec {
            name: name.to_string(),
            message: e.to_string(),
        })
    }
}
