//! # Prime-Bins Test Suite
//!
//! Cross-crate flows that no single subsystem crate can exercise alone.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fixtures.rs           # Small tables and pad lists
//!     ├── construction_flow.rs  # allocate → build → persist → load → check
//!     ├── query_flow.rs         # query engine over random and built tables
//!     └── runtime_flow.rs       # CLI commands end to end
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pb-tests
//! cargo test -p pb-tests integration::query_flow
//! ```

pub mod integration;
