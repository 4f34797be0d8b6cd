//! Shared value types: seeds, deterministic RNG, error types.

pub mod error;
pub mod rng;
pub mod seed;

pub use error::{ConfigError, SeedError, SolveError};
pub use rng::SessionRng;
pub use seed::Seed;
