//! # Prime-Bins Runtime
//!
//! Command implementations behind the `prime-bins` binary.
//!
//! ## Commands
//!
//! | Command | Effect |
//! |---------|--------|
//! | `pads`  | Generate the pad-prime list and store it as `primes` |
//! | `build` | Hash a random signature set, place it, build and store both tables |
//! | `check` | Load both tables and count signature hits |
//! | `query` | Bounded query-engine run over random `(N, A)` pairs or a built table |
//! | `soak`  | Time-boxed query-engine run ending in cooperative cancellation |
//! | `sweep` | Bounded runs over a producer/consumer grid, results appended to a file |

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Command};
pub use config::{ConfigError, RuntimeConfig};
