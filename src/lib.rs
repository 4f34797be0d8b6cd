//! # puzzle-session
//!
//! A general-purpose interactive puzzle-session engine: the middle layer
//! between a platform frontend and a game-specific backend. It owns a
//! linear history of puzzle states, implements undo/redo, applies player
//! moves through a pluggable backend, and schedules the cosmetic timing
//! of move transitions and completion flashes.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: no puzzle logic lives here. Backends define
//!    their own parameter, state, and move types; the engine behaves
//!    uniformly across all of them.
//!
//! 2. **Immutable Snapshots**: states are never mutated after creation.
//!    History is append-only and truncatable; committing a move discards
//!    the redo tail, never merges it.
//!
//! 3. **Layered**: [`GameCore`] is a minimal headless core
//!    (params/history/undo/redo/move); [`Session`] adds animation,
//!    presets, and config editing strictly atop its public contract.
//!
//! 4. **Single-Threaded, Cooperative**: the host drives everything
//!    synchronously; animation is a presentational overlay, not
//!    background computation. Timer notifications are edge-triggered.
//!
//! ## Quick Start
//!
//! ```
//! use puzzle_session::games::lights::{Lights, Press};
//! use puzzle_session::{GameCore, Seed};
//!
//! let mut core = GameCore::with_seed(Lights, Seed::new("314159265358979")).unwrap();
//! let initial = core.current().clone();
//!
//! assert!(core.apply_move(&Press(0)).is_committed());
//! assert!(core.can_undo());
//!
//! core.undo();
//! assert_eq!(core.current(), &initial);
//! ```
//!
//! ## Modules
//!
//! - `core`: seeds, deterministic RNG, error types
//! - `backend`: the [`Backend`] trait puzzle variants implement
//! - `history`: linear snapshot history with undo/redo
//! - `anim`: move-transition and flash scheduling
//! - `presets`: lazily cached named parameter presets
//! - `config`: editable configuration fields
//! - `session`: the headless core and the full interactive session
//! - `frontend`: the redraw/timer collaborator seam
//! - `games`: backend implementations

pub mod anim;
pub mod backend;
pub mod config;
pub mod core;
pub mod frontend;
pub mod games;
pub mod history;
pub mod presets;
pub mod session;

// Re-export commonly used types
pub use crate::anim::{AnimationScheduler, Tick};
pub use crate::backend::Backend;
pub use crate::config::{ConfigField, ConfigValue, FieldList};
pub use crate::core::{ConfigError, Seed, SeedError, SessionRng, SolveError};
pub use crate::frontend::{Frame, Frontend, NullFrontend};
pub use crate::history::History;
pub use crate::presets::{PresetCatalog, PresetEntry};
pub use crate::session::{GameCore, MoveOutcome, Session};
