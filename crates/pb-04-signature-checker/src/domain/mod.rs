//! Domain Layer - Pure membership arithmetic

pub mod exponent;
pub mod scan;

pub use exponent::cofactor_exponent;
pub use scan::{bucket_hits, subset_hits, BucketHits};
