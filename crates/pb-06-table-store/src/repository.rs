//! Table repository
//!
//! Maps built tables and the pad-prime list onto named store entries:
//!
//! | Entry          | Contents                         |
//! |----------------|----------------------------------|
//! | `leftTable`    | `Vec<BucketRecord>` (g, N)       |
//! | `PQleftTable`  | `Vec<FactorRecord>` (P, Q, sets) |
//! | `rightTable`   | `Vec<BucketRecord>`              |
//! | `PQrightTable` | `Vec<FactorRecord>`              |
//! | `primes`       | `Vec<Prime>` pad list            |

use shared_types::{BucketRecord, BuiltTable, FactorRecord, Prime, TableSide};
use tracing::info;

use crate::error::StoreError;
use crate::ports::{BincodeTableCodec, TableCodec, TableStore};

pub const PAD_PRIMES_NAME: &str = "primes";

/// Name of the factor array stored alongside `side`'s table.
pub fn factor_table_name(side: TableSide) -> String {
    format!("PQ{}", side.table_name())
}

pub struct TableRepository<S: TableStore, C: TableCodec = BincodeTableCodec> {
    store: S,
    codec: C,
}

impl<S: TableStore> TableRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            codec: BincodeTableCodec,
        }
    }
}

impl<S: TableStore, C: TableCodec> TableRepository<S, C> {
    pub fn with_codec(store: S, codec: C) -> Self {
        Self { store, codec }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist both arrays of a built table.
    pub fn save_table(&mut self, table: &BuiltTable) -> Result<(), StoreError> {
        let side = table.side();
        let name = side.table_name();
        let factor_name = factor_table_name(side);

        let records = self.codec.encode(name, &table.buckets())?;
        let factors = self.codec.encode(&factor_name, &table.factors())?;
        self.store.write(name, &records)?;
        self.store.write(&factor_name, &factors)?;

        info!(%side, buckets = table.len(), "Saved table");
        Ok(())
    }

    /// Load one side, rejecting arrays of different lengths.
    pub fn load_table(&self, side: TableSide) -> Result<BuiltTable, StoreError> {
        let name = side.table_name();
        let factor_name = factor_table_name(side);

        let records: Vec<BucketRecord> = self.load(name)?;
        let factors: Vec<FactorRecord> = self.load(&factor_name)?;
        let table = BuiltTable::new(side, records, factors)?;

        info!(%side, buckets = table.len(), "Loaded table");
        Ok(table)
    }

    /// Load both sides, left first.
    pub fn load_tables(&self) -> Result<Vec<BuiltTable>, StoreError> {
        TableSide::ALL
            .iter()
            .map(|side| self.load_table(*side))
            .collect()
    }

    pub fn has_table(&self, side: TableSide) -> Result<bool, StoreError> {
        Ok(self.store.exists(side.table_name())? && self.store.exists(&factor_table_name(side))?)
    }

    pub fn save_pad_primes(&mut self, pads: &[Prime]) -> Result<(), StoreError> {
        let bytes = self.codec.encode(PAD_PRIMES_NAME, &pads)?;
        self.store.write(PAD_PRIMES_NAME, &bytes)?;
        info!(count = pads.len(), "Saved pad primes");
        Ok(())
    }

    pub fn load_pad_primes(&self) -> Result<Vec<Prime>, StoreError> {
        self.load(PAD_PRIMES_NAME)
    }

    fn load<T: serde::de::DeserializeOwned>(&self, name: &str) -> Result<T, StoreError> {
        let bytes = self.store.read(name)?.ok_or_else(|| StoreError::NotFound {
            name: name.to_string(),
        })?;
        self.codec.decode(name, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FileTableStore, InMemoryTableStore};
    use num_bigint_dig::BigUint;
    use shared_types::TableShapeError;

    fn nat(v: u64) -> BigUint {
        BigUint::from(v)
    }

    fn sample_table(side: TableSide) -> BuiltTable {
        // P = 2*3*5 + 1 = 31, Q = 2*11 + 1 = 23
        let factors = FactorRecord {
            factor_p: nat(31),
            factor_q: nat(23),
            set_p: vec![nat(3), nat(5)],
            set_q: vec![nat(11)],
        };
        let record = BucketRecord {
            generator: nat(4),
            modulus: nat(713),
        };
        BuiltTable::new(side, vec![record], vec![factors]).unwrap()
    }

    #[test]
    fn test_table_roundtrip_in_memory() {
        let mut repo = TableRepository::new(InMemoryTableStore::new());
        let table = sample_table(TableSide::Right);
        repo.save_table(&table).unwrap();

        assert!(repo.store().exists("rightTable").unwrap());
        assert!(repo.store().exists("PQrightTable").unwrap());
        assert!(repo.has_table(TableSide::Right).unwrap());
        assert!(!repo.has_table(TableSide::Left).unwrap());
        assert_eq!(repo.load_table(TableSide::Right).unwrap(), table);
    }

    #[test]
    fn test_large_integers_survive_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = TableRepository::new(FileTableStore::open(dir.path()).unwrap());

        let big = BigUint::parse_bytes(b"f".repeat(800).as_slice(), 16).unwrap();
        let pads = vec![nat(7), big.clone()];
        repo.save_pad_primes(&pads).unwrap();
        for side in TableSide::ALL {
            repo.save_table(&sample_table(side)).unwrap();
        }

        let reopened = TableRepository::new(FileTableStore::open(dir.path()).unwrap());
        assert_eq!(reopened.load_pad_primes().unwrap(), pads);
        let tables = reopened.load_tables().unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].side(), TableSide::Left);
        assert_eq!(tables[1], sample_table(TableSide::Right));
    }

    #[test]
    fn test_missing_table_is_not_found() {
        let repo = TableRepository::new(InMemoryTableStore::new());
        assert_eq!(
            repo.load_table(TableSide::Left),
            Err(StoreError::NotFound {
                name: "leftTable".to_string()
            })
        );
    }

    #[test]
    fn test_mismatched_arrays_rejected() {
        let mut store = InMemoryTableStore::new();
        let codec = BincodeTableCodec;
        let table = sample_table(TableSide::Left);

        let records = codec.encode("leftTable", &table.buckets()).unwrap();
        let no_factors: Vec<FactorRecord> = Vec::new();
        let factors = codec.encode("PQleftTable", &no_factors).unwrap();
        store.write("leftTable", &records).unwrap();
        store.write("PQleftTable", &factors).unwrap();

        let repo = TableRepository::new(store);
        assert!(matches!(
            repo.load_table(TableSide::Left),
            Err(StoreError::Shape(TableShapeError::ParallelLengthMismatch { .. }))
        ));
    }
}
