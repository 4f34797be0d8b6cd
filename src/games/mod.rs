//! Puzzle backend implementations.

pub mod lights;
