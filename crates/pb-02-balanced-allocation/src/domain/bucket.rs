//! Pre-build bucket

use serde::{Deserialize, Serialize};
use shared_types::Prime;

/// Primes assigned to one bucket, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    primes: Vec<Prime>,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, prime: Prime) {
        self.primes.push(prime);
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn primes(&self) -> &[Prime] {
        &self.primes
    }

    pub fn into_primes(self) -> Vec<Prime> {
        self.primes
    }
}

impl From<Vec<Prime>> for Bucket {
    fn from(primes: Vec<Prime>) -> Self {
        Self { primes }
    }
}
