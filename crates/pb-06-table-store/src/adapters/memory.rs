//! In-memory table store for tests

use std::collections::HashMap;

use crate::error::StoreError;
use crate::ports::TableStore;

/// In-memory store; contents are lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryTableStore {
    data: HashMap<String, Vec<u8>>,
}

impl InMemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl TableStore for InMemoryTableStore {
    fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.data.get(name).cloned())
    }

    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.data.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    fn exists(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.data.contains_key(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_replaces_previous_value() {
        let mut store = InMemoryTableStore::new();
        store.write("primes", b"first").unwrap();
        store.write("primes", b"second").unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.read("primes").unwrap(), Some(b"second".to_vec()));
        assert!(store.exists("primes").unwrap());
        assert!(!store.exists("leftTable").unwrap());
        assert_eq!(store.read("leftTable").unwrap(), None);
    }
}
