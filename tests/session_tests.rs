//! Session engine integration tests.
//!
//! Driven through a scripted counter backend so every timing hint and
//! rejection path is under the test's control: the state is a number,
//! a move adds a signed delta, anything leaving `0..=limit` is rejected,
//! and landing on a multiple of ten triggers a flash.

use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

use puzzle_session::{
    Backend, ConfigError, ConfigField, FieldList, Frame, Frontend, GameCore, MoveOutcome,
    PresetEntry, Seed, SeedError, Session, SessionRng, SolveError,
};

// =============================================================================
// Scripted backend and recording frontend
// =============================================================================

const ANIM_LENGTH: f64 = 0.2;
const FLASH_LENGTH: f64 = 0.4;

#[derive(Clone)]
struct Counter {
    limit: u64,
    animated: bool,
    fetches: Rc<Cell<usize>>,
}

impl Counter {
    fn new(limit: u64, animated: bool) -> Self {
        Self {
            limit,
            animated,
            fetches: Rc::new(Cell::new(0)),
        }
    }
}

impl Backend for Counter {
    type Params = u64;
    type State = u64;
    type Move = i64;

    fn name(&self) -> &str {
        "counter"
    }

    fn default_params(&self) -> u64 {
        self.limit
    }

    fn validate_params(&self, params: &u64) -> Result<(), ConfigError> {
        if *params == 0 {
            return Err(ConfigError::params("limit must be positive"));
        }
        Ok(())
    }

    fn editable_fields(&self, params: &u64) -> FieldList {
        let mut fields = FieldList::new();
        fields.push(ConfigField::text("Limit", params.to_string()));
        fields
    }

    fn build_from_fields(&self, fields: &FieldList) -> Result<u64, ConfigError> {
        let text = fields
            .first()
            .and_then(ConfigField::as_text)
            .ok_or_else(|| ConfigError::field("Limit", "missing"))?;
        text.parse()
            .map_err(|_| ConfigError::field("Limit", format!("`{text}` is not a number")))
    }

    fn new_state(&self, params: &u64, seed: &Seed) -> Result<u64, SeedError> {
        let start: u64 = seed
            .as_str()
            .parse()
            .map_err(|_| SeedError::new(seed.as_str(), "not a number"))?;
        Ok(start % (params + 1))
    }

    fn apply_move(&self, state: &u64, input: &i64) -> Option<u64> {
        let next = state.checked_add_signed(*input)?;
        (next <= self.limit).then_some(next)
    }

    fn anim_length(&self, _from: &u64, _to: &u64) -> f64 {
        if self.animated {
            ANIM_LENGTH
        } else {
            0.0
        }
    }

    fn flash_length(&self, _from: &u64, to: &u64) -> f64 {
        if *to % 10 == 0 {
            FLASH_LENGTH
        } else {
            0.0
        }
    }

    fn fetch_preset(&self, index: usize) -> Option<PresetEntry<u64>> {
        self.fetches.set(self.fetches.get() + 1);
        match index {
            0 => Some(PresetEntry::new("Ten", 10)),
            1 => Some(PresetEntry::new("Hundred", 100)),
            _ => None,
        }
    }

    fn display_size(&self, _params: &u64) -> (u32, u32) {
        (64, 16)
    }
}

/// Frontend that records everything the session tells it.
#[derive(Default)]
struct Recorder {
    redraws: usize,
    activations: usize,
    deactivations: usize,
    last_prior: Option<u64>,
    last_move_progress: f64,
    last_flash: Option<f64>,
}

impl Frontend<u64> for Recorder {
    fn redraw(&mut self, frame: Frame<'_, u64>) {
        self.redraws += 1;
        self.last_prior = frame.prior.copied();
        self.last_move_progress = frame.move_progress;
        self.last_flash = frame.flash_progress;
    }

    fn activate_timer(&mut self) {
        self.activations += 1;
    }

    fn deactivate_timer(&mut self) {
        self.deactivations += 1;
    }
}

fn session_at(start: &str, animated: bool) -> Session<Counter, Recorder> {
    Session::with_seed(Counter::new(100, animated), Seed::new(start), Recorder::default())
        .unwrap()
}

// =============================================================================
// History semantics
// =============================================================================

/// The concrete scenario: move, undo, conflicting move, stale redo.
#[test]
fn test_concrete_scenario() {
    let mut session = session_at("5", false);
    assert_eq!(session.core().history().len(), 1);
    assert_eq!(session.core().history().cursor(), 1);

    assert_eq!(session.apply_move(&1), MoveOutcome::Committed);
    assert_eq!(session.core().history().len(), 2);
    assert_eq!(session.core().history().cursor(), 2);
    assert_eq!(*session.current(), 6);

    assert!(session.undo());
    assert_eq!(session.core().history().cursor(), 1);
    assert_eq!(*session.current(), 5);

    assert_eq!(session.apply_move(&2), MoveOutcome::Committed);
    assert_eq!(session.core().history().len(), 2); // 6 was discarded
    assert_eq!(session.core().history().cursor(), 2);
    assert_eq!(*session.current(), 7);

    assert!(!session.redo()); // already at the end
    assert_eq!(*session.current(), 7);
}

#[test]
fn test_undo_redo_bounds_are_noops() {
    let mut session = session_at("5", false);

    assert!(!session.undo());
    assert!(!session.redo());
    assert_eq!(*session.current(), 5);

    session.apply_move(&1);
    assert!(session.undo());
    assert!(!session.undo());
    assert!(session.redo());
    assert!(!session.redo());
}

#[test]
fn test_move_after_undo_discards_all_future_states() {
    let mut session = session_at("0", false);
    for _ in 0..5 {
        assert!(session.apply_move(&1).is_committed());
    }

    for _ in 0..3 {
        session.undo();
    }
    assert_eq!(session.core().history().cursor(), 3);

    session.apply_move(&1);

    // History shrank to cursor + 1; none of the 3 futures survive.
    assert_eq!(session.core().history().len(), 4);
    assert!(!session.redo());
    assert_eq!(*session.current(), 3);
}

#[test]
fn test_restart_then_redo_is_noop() {
    let mut session = session_at("5", false);
    session.apply_move(&1);
    session.apply_move(&1);

    session.restart_game();

    assert_eq!(session.core().history().len(), 1);
    assert_eq!(session.core().history().cursor(), 1);
    assert_eq!(*session.current(), 5);
    assert!(!session.redo());
}

#[test]
fn test_rejected_move_is_a_silent_noop() {
    let mut session = session_at("5", false);
    session.force_redraw();
    let redraws = session.frontend_mut().redraws;

    assert_eq!(session.apply_move(&-1000), MoveOutcome::Rejected);

    assert_eq!(*session.current(), 5);
    assert_eq!(session.core().history().len(), 1);
    assert_eq!(session.frontend_mut().redraws, redraws);
}

// =============================================================================
// Animation and timer edges
// =============================================================================

#[test]
fn test_animated_move_retains_prior_snapshot() {
    let mut session = session_at("5", true);

    session.apply_move(&1);

    assert!(session.is_animating());
    assert_eq!(session.scheduler().retained(), Some(&5));
    assert_eq!(session.frontend_mut().last_prior, Some(5));
    assert_eq!(session.frontend_mut().last_move_progress, 0.0);

    session.tick(0.1);
    assert_eq!(session.frontend_mut().last_move_progress, 0.5);

    session.tick(0.15);
    assert!(!session.is_animating());
    assert_eq!(session.scheduler().retained(), None);
    assert_eq!(session.frontend_mut().last_prior, None);
    assert_eq!(session.frontend_mut().last_move_progress, 1.0);
}

#[test]
fn test_interrupting_move_commits_exactly_once() {
    let mut session = session_at("5", true);

    session.apply_move(&1);
    assert_eq!(session.scheduler().retained(), Some(&5));

    // Second move lands while the first is still animating.
    session.apply_move(&1);

    // Exactly one new committed state per move, and at most one retained
    // snapshot at any instant - the new animation runs from the state the
    // first move committed.
    assert_eq!(session.core().history().len(), 3);
    assert_eq!(*session.current(), 7);
    assert_eq!(session.scheduler().retained(), Some(&6));
}

#[test]
fn test_timer_notifications_are_edge_triggered() {
    let mut session = session_at("5", true);

    session.apply_move(&1);
    assert_eq!(session.frontend_mut().activations, 1);
    assert_eq!(session.frontend_mut().deactivations, 0);

    // Still running: no redundant activation across the collapse.
    session.apply_move(&1);
    assert_eq!(session.frontend_mut().activations, 1);
    assert_eq!(session.frontend_mut().deactivations, 0);

    session.tick(0.25);
    assert_eq!(session.frontend_mut().deactivations, 1);

    // Idle ticks signal nothing further.
    session.tick(0.25);
    assert_eq!(session.frontend_mut().activations, 1);
    assert_eq!(session.frontend_mut().deactivations, 1);
}

#[test]
fn test_undo_collapses_running_animation() {
    let mut session = session_at("5", true);
    session.apply_move(&1);
    assert!(session.is_animating());

    assert!(session.undo());

    assert!(!session.is_animating());
    assert_eq!(session.scheduler().retained(), None);
    assert_eq!(*session.current(), 5);
    assert_eq!(session.frontend_mut().last_prior, None);
    assert_eq!(session.frontend_mut().deactivations, 1);
}

#[test]
fn test_new_game_discards_animation_outright() {
    let mut session = session_at("5", true);
    session.apply_move(&1);
    assert!(session.is_animating());

    session.new_game(Some(Seed::new("42"))).unwrap();

    assert!(!session.is_animating());
    assert_eq!(session.core().history().len(), 1);
    assert_eq!(*session.current(), 42);
    assert_eq!(session.frontend_mut().deactivations, 1);
    assert_eq!(session.frontend_mut().last_prior, None);
}

// =============================================================================
// Flash overlay
// =============================================================================

#[test]
fn test_flash_starts_on_qualifying_move() {
    let mut session = session_at("9", false);

    session.apply_move(&1); // 10: flash
    assert_eq!(session.frontend_mut().last_flash, Some(0.0));
    assert_eq!(session.frontend_mut().activations, 1);

    session.tick(0.2);
    assert_eq!(session.frontend_mut().last_flash, Some(0.5));

    session.tick(0.2);
    assert_eq!(session.frontend_mut().last_flash, None);
    assert_eq!(session.frontend_mut().deactivations, 1);
}

#[test]
fn test_new_move_without_flash_clears_running_flash() {
    let mut session = session_at("9", false);

    session.apply_move(&1); // 10: flash starts
    session.tick(0.1);
    assert!(session.frontend_mut().last_flash.is_some());

    session.apply_move(&1); // 11: no flash of its own
    assert_eq!(session.frontend_mut().last_flash, None);
    assert!(!session.is_animating());
}

#[test]
fn test_new_move_with_flash_restarts_the_clock() {
    let mut session = session_at("9", false);

    session.apply_move(&1); // 10: flash starts
    session.tick(0.2);
    assert_eq!(session.frontend_mut().last_flash, Some(0.5));

    session.apply_move(&10); // 20: flash restarts
    assert_eq!(session.frontend_mut().last_flash, Some(0.0));
}

#[test]
fn test_flash_survives_undo() {
    let mut session = session_at("9", false);
    session.apply_move(&1); // 10: flash starts

    session.undo();

    // The flash overlays whatever is shown; only the move transition is
    // collapsed by undo.
    assert!(session.scheduler().flash_active());
    assert!(session.timer_active());
}

// =============================================================================
// Errors, config, presets
// =============================================================================

#[test]
fn test_malformed_seed_fails_session_start() {
    let result = Session::with_seed(
        Counter::new(100, false),
        Seed::new("not-a-number"),
        Recorder::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_new_game_failure_leaves_session_untouched() {
    let mut session = session_at("5", false);
    session.apply_move(&1);
    let redraws = session.frontend_mut().redraws;

    assert!(session.new_game(Some(Seed::new("bogus"))).is_err());

    assert_eq!(*session.current(), 6);
    assert_eq!(session.core().history().len(), 2);
    assert_eq!(session.frontend_mut().redraws, redraws);
}

#[test]
fn test_set_config_invalid_leaves_config_unchanged() {
    let mut session = session_at("5", false);
    let before = session.get_config();

    let mut bad = FieldList::new();
    bad.push(ConfigField::text("Limit", "banana"));
    assert!(session.set_config(&bad).is_err());
    assert_eq!(session.get_config(), before);

    let mut zero = FieldList::new();
    zero.push(ConfigField::text("Limit", "0"));
    assert_eq!(
        session.set_config(&zero),
        Err(ConfigError::params("limit must be positive"))
    );
    assert_eq!(session.get_config(), before);
}

#[test]
fn test_set_config_takes_effect_on_next_game() {
    let mut session = session_at("5", false);
    session.apply_move(&1);

    let mut fields = FieldList::new();
    fields.push(ConfigField::text("Limit", "7"));
    session.set_config(&fields).unwrap();

    // The game in progress is untouched.
    assert_eq!(*session.current(), 6);
    assert_eq!(session.core().history().len(), 2);

    session.new_game(Some(Seed::new("23"))).unwrap();
    assert_eq!(*session.current(), 23 % 8);
}

#[test]
fn test_presets_enumerate_once_and_stay_stable() {
    let backend = Counter::new(100, false);
    let fetches = Rc::clone(&backend.fetches);
    let mut session = Session::with_seed(backend, Seed::new("5"), Recorder::default()).unwrap();

    assert_eq!(session.preset_count(), 2);
    // Two entries plus the exhaustion probe.
    assert_eq!(fetches.get(), 3);

    let first = session.preset(0).clone();
    assert_eq!(session.preset(0), &first);
    assert_eq!(session.preset_count(), 2);
    assert_eq!(fetches.get(), 3);

    session.apply_preset(0);
    assert_eq!(*session.params(), 10);
}

#[test]
fn test_solve_unsupported_by_default() {
    let mut session = session_at("5", false);
    assert_eq!(session.solve(), Err(SolveError::Unsupported));
    assert_eq!(session.core().history().len(), 1);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// N successful moves, then N undos back to the initial state, then
    /// N redos back to the final state.
    #[test]
    fn prop_undo_redo_roundtrip(deltas in proptest::collection::vec(-5i64..=5, 1..40)) {
        let mut core = GameCore::with_seed(Counter::new(100, false), Seed::new("50")).unwrap();
        let initial = *core.current();

        let mut committed = 0usize;
        for delta in &deltas {
            if core.apply_move(delta).is_committed() {
                committed += 1;
            }
        }
        let final_state = *core.current();

        let mut undos = 0usize;
        while core.undo() {
            undos += 1;
        }
        prop_assert_eq!(undos, committed);
        prop_assert_eq!(*core.current(), initial);

        let mut redos = 0usize;
        while core.redo() {
            redos += 1;
        }
        prop_assert_eq!(redos, committed);
        prop_assert_eq!(*core.current(), final_state);
    }

    /// A fresh-seed game always parses back to a state within range.
    #[test]
    fn prop_fresh_seed_games_start(seed in 0u64..1_000_000) {
        let mut core = GameCore::with_rng(Counter::new(100, false), SessionRng::new(seed)).unwrap();
        prop_assert!(*core.current() <= 100);
        core.new_game(None).unwrap();
        prop_assert!(*core.current() <= 100);
        prop_assert_eq!(core.history().len(), 1);
    }
}
