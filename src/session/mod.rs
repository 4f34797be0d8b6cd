//! The session engine.
//!
//! Two layers:
//!
//! - [`GameCore`] is the minimal headless core: parameters, seed, linear
//!   history, undo/redo, move application. Embeddings that need no
//!   cosmetics (solvers, batch tools, tests) can use it alone.
//! - [`Session`] is the full interactive engine built strictly atop
//!   [`GameCore`]'s public contract, adding animation scheduling, the
//!   preset catalog, config editing, and frontend notifications.

mod core;
mod interactive;

pub use self::core::{GameCore, MoveOutcome};
pub use self::interactive::Session;
