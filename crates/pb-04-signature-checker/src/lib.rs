//! # PB-04 Signature Checker
//!
//! Read-only scan over every bucket of both built tables. For each member
//! `i` of `setP`, the checker raises `g` to the cofactor exponent
//! `2 * prod(setP without i)` modulo `P` and counts a hit when the result is
//! 1. `setQ` is scanned symmetrically against `Q`.
//!
//! A correctly built table produces zero hits: the generator search rejects
//! every `g` for which `g^((P-1)/p) mod P == 1`, which is exactly this test.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): exponent construction and per-bucket scan
//! - **Service Layer** (`service.rs`): `SignatureChecker` over in-memory or
//!   persisted tables, parallel across buckets

pub mod domain;
pub mod error;
pub mod service;

pub use domain::{bucket_hits, cofactor_exponent, subset_hits, BucketHits};
pub use error::CheckError;
pub use service::{CheckReport, SignatureChecker};
