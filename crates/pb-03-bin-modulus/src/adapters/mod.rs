//! Adapters Layer - sources of pad primes

pub mod pad_generator;

pub use pad_generator::generate_pad_primes;
