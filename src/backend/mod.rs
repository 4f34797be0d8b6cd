//! Backend trait for puzzle implementations.
//!
//! Each puzzle variant implements [`Backend`] to define:
//! - its parameter, state, and move-input types
//! - generation of an initial state from (params, seed)
//! - move validation and application
//! - cosmetic timing hints (move animation and completion flash)
//! - its preset menu and editable configuration fields
//!
//! The engine calls these methods synchronously; implementations are
//! expected to be fast and non-blocking relative to animation timescales.
//!
//! ## Implementation Notes
//!
//! - States are immutable snapshots: `apply_move` produces a fresh
//!   successor and never mutates its input. Duplication is `Clone` and
//!   disposal is `Drop`, so states that share structure (for example via
//!   `im` collections) make history snapshots cheap.
//! - `apply_move` returns `None` to reject an input with no legal effect;
//!   rejection is a silent no-op, not an error.
//! - `new_state` must be deterministic in (params, seed).

use crate::config::FieldList;
use crate::core::{ConfigError, Seed, SeedError, SessionRng, SolveError};
use crate::presets::PresetEntry;

/// Game-specific capability: generation, move validation, timing hints,
/// preset enumeration, and the config schema.
///
/// One implementing type per puzzle variant, chosen at composition time.
pub trait Backend {
    /// Backend-defined configuration. Replaced wholesale, never mutated
    /// in place.
    type Params: Clone;

    /// Immutable snapshot of the full puzzle state at one history point.
    type State: Clone;

    /// Player move input, before validation.
    type Move;

    /// Name of the puzzle, for diagnostics and preset labels.
    fn name(&self) -> &str;

    /// The parameters a fresh session starts with.
    fn default_params(&self) -> Self::Params;

    /// Check a candidate parameter set.
    fn validate_params(&self, params: &Self::Params) -> Result<(), ConfigError>;

    /// Derive the ordered list of editable fields from parameters.
    fn editable_fields(&self, params: &Self::Params) -> FieldList;

    /// Parse an edited field list into a candidate parameter set.
    ///
    /// Per-field parse failures are reported here; whole-set validation
    /// belongs in [`validate_params`](Self::validate_params).
    fn build_from_fields(&self, fields: &FieldList) -> Result<Self::Params, ConfigError>;

    /// Deterministically construct the initial state for (params, seed).
    ///
    /// Fails on malformed seed text; the session propagates this as a
    /// session-initialization failure.
    fn new_state(&self, params: &Self::Params, seed: &Seed) -> Result<Self::State, SeedError>;

    /// Apply a move input to a state.
    ///
    /// Returns `None` when the input has no legal effect, or the successor
    /// state when it does.
    fn apply_move(&self, state: &Self::State, input: &Self::Move) -> Option<Self::State>;

    /// Seconds the transition between two adjacent states should animate.
    ///
    /// Zero (or negative) means the transition is instantaneous.
    fn anim_length(&self, from: &Self::State, to: &Self::State) -> f64;

    /// Seconds of completion flash the transition should trigger.
    ///
    /// Zero (or negative) means no flash.
    fn flash_length(&self, from: &Self::State, to: &Self::State) -> f64;

    /// Enumerate the preset menu.
    ///
    /// Called with increasing indices from zero; `None` signals
    /// exhaustion.
    fn fetch_preset(&self, index: usize) -> Option<PresetEntry<Self::Params>>;

    /// Pixel size of the play area for a parameter set.
    fn display_size(&self, params: &Self::Params) -> (u32, u32);

    // === Provided Methods ===

    /// Produce a fresh seed for a new game under `params`.
    ///
    /// The default generates 15 decimal digits of seed text; backends
    /// with their own seed format may override.
    fn fresh_seed(&self, params: &Self::Params, rng: &mut SessionRng) -> Seed {
        let _ = params;
        Seed::random(rng)
    }

    /// Whether [`solve`](Self::solve) can ever succeed.
    fn can_solve(&self) -> bool {
        false
    }

    /// Produce a solved successor of `current`.
    ///
    /// `initial` is the state the game began from, for backends that
    /// derive the solution from the original generation.
    fn solve(
        &self,
        initial: &Self::State,
        current: &Self::State,
    ) -> Result<Self::State, SolveError> {
        let _ = (initial, current);
        Err(SolveError::Unsupported)
    }

    /// Status text for a state, if the puzzle reports any.
    fn status_text(&self, state: &Self::State) -> Option<String> {
        let _ = state;
        None
    }
}
