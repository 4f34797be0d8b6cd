//! Full interactive session: animation, presets, config, frontend
//! notifications.

use tracing::{debug, trace};

use crate::anim::AnimationScheduler;
use crate::backend::Backend;
use crate::config::FieldList;
use crate::core::{ConfigError, Seed, SeedError, SolveError};
use crate::frontend::{Frame, Frontend};
use crate::presets::{PresetCatalog, PresetEntry};

use super::core::{GameCore, MoveOutcome};

/// Interactive puzzle session.
///
/// Composes a [`GameCore`] with the animation scheduler, the preset
/// catalog, and config editing, and is the sole entry point for
/// new-game, restart, move, undo, redo, and reconfigure. Drives exactly
/// one [`Frontend`], to which it reports repaints and edge-triggered
/// timer transitions.
///
/// Single-threaded and cooperative: the host drives it synchronously and
/// sequentially; no operation suspends.
pub struct Session<B: Backend, F: Frontend<B::State>> {
    core: GameCore<B>,
    anim: AnimationScheduler<B::State>,
    presets: PresetCatalog<B::Params>,
    frontend: F,
    timer_active: bool,
    last_status: Option<String>,
}

impl<B, F> Session<B, F>
where
    B: Backend,
    F: Frontend<B::State>,
{
    /// Start a session with default parameters and a fresh random seed.
    pub fn new(backend: B, frontend: F) -> Result<Self, SeedError> {
        Ok(Self::from_core(GameCore::new(backend)?, frontend))
    }

    /// Start a session with default parameters and the given seed.
    pub fn with_seed(backend: B, seed: Seed, frontend: F) -> Result<Self, SeedError> {
        Ok(Self::from_core(GameCore::with_seed(backend, seed)?, frontend))
    }

    /// Build the interactive layer around an existing core.
    pub fn from_core(core: GameCore<B>, frontend: F) -> Self {
        Self {
            core,
            anim: AnimationScheduler::new(),
            presets: PresetCatalog::new(),
            frontend,
            timer_active: false,
            last_status: None,
        }
    }

    /// The headless core underneath.
    ///
    /// Read-only: mutating operations go through the session so the
    /// animation state always matches the history.
    #[must_use]
    pub fn core(&self) -> &GameCore<B> {
        &self.core
    }

    /// The backend this session plays.
    #[must_use]
    pub fn backend(&self) -> &B {
        self.core.backend()
    }

    /// Current parameters.
    #[must_use]
    pub fn params(&self) -> &B::Params {
        self.core.params()
    }

    /// Seed of the game in progress.
    #[must_use]
    pub fn seed(&self) -> &Seed {
        self.core.seed()
    }

    /// The committed state at the history cursor.
    #[must_use]
    pub fn current(&self) -> &B::State {
        self.core.current()
    }

    /// The animation scheduler, for hosts that inspect progress directly.
    #[must_use]
    pub fn scheduler(&self) -> &AnimationScheduler<B::State> {
        &self.anim
    }

    /// The frontend collaborator.
    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    /// Whether either animation clock is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.anim.is_idle()
    }

    /// Whether the host timer should currently be armed.
    #[must_use]
    pub fn timer_active(&self) -> bool {
        self.timer_active
    }

    /// Pixel size of the play area under the current parameters.
    #[must_use]
    pub fn display_size(&self) -> (u32, u32) {
        self.backend().display_size(self.params())
    }

    /// Replace the parameters wholesale; validated by the caller
    /// beforehand. Takes effect on the next new game.
    pub fn set_params(&mut self, params: B::Params) {
        self.core.set_params(params);
    }

    /// Start a new game under the current parameters.
    ///
    /// Any in-flight animation is discarded without completing: the
    /// animated snapshot is meaningless once the whole game is replaced.
    /// On failure the previous game, and its animation, are untouched.
    pub fn new_game(&mut self, seed: Option<Seed>) -> Result<(), SeedError> {
        self.core.new_game(seed)?;
        self.anim.discard();
        self.redraw();
        self.sync_timer();
        Ok(())
    }

    /// Rewind to the initial state of the current game.
    pub fn restart_game(&mut self) {
        self.anim.discard();
        self.core.restart_game();
        self.redraw();
        self.sync_timer();
    }

    /// Move the cursor back one step.
    ///
    /// Collapses a running move animation first. No-op at the first
    /// entry.
    pub fn undo(&mut self) -> bool {
        let collapsed = self.anim.finish_move().is_some();
        let moved = self.core.undo();
        if moved || collapsed {
            self.redraw();
            self.sync_timer();
        }
        moved
    }

    /// Move the cursor forward one step.
    ///
    /// Collapses a running move animation first. No-op at the last
    /// entry.
    pub fn redo(&mut self) -> bool {
        let collapsed = self.anim.finish_move().is_some();
        let moved = self.core.redo();
        if moved || collapsed {
            self.redraw();
            self.sync_timer();
        }
        moved
    }

    /// Apply a move input: the principal state transition.
    ///
    /// A running move animation is collapsed to completion before the
    /// backend is consulted, so the visible committed state is always
    /// exactly one step ahead of the last fully-settled one, never a
    /// queued backlog of pending transitions. On acceptance the redo tail
    /// is discarded, the successor committed, and the move and flash
    /// timers started independently from the backend's timing hints.
    pub fn apply_move(&mut self, input: &B::Move) -> MoveOutcome {
        let collapsed = self.anim.finish_move().is_some();

        let from = self.core.current().clone();
        match self.core.apply_move(input) {
            MoveOutcome::Rejected => {
                // Silent no-op; but a collapsed animation still needs the
                // settled state painted.
                if collapsed {
                    self.redraw();
                    self.sync_timer();
                }
                MoveOutcome::Rejected
            }
            MoveOutcome::Committed => {
                let (anim_len, flash_len) = {
                    let to = self.core.current();
                    let backend = self.core.backend();
                    (backend.anim_length(&from, to), backend.flash_length(&from, to))
                };

                if anim_len > 0.0 {
                    self.anim.start_move(from, anim_len);
                }
                if flash_len > 0.0 {
                    self.anim.start_flash(flash_len);
                } else {
                    self.anim.clear_flash();
                }

                self.redraw();
                self.sync_timer();
                MoveOutcome::Committed
            }
        }
    }

    /// Commit a backend-produced solved state.
    ///
    /// A special commit: it never animates and never flashes, and any
    /// running move animation is collapsed.
    pub fn solve(&mut self) -> Result<(), SolveError> {
        self.core.solve()?;
        let _ = self.anim.finish_move();
        self.redraw();
        self.sync_timer();
        Ok(())
    }

    /// Advance animation time by `delta` seconds.
    ///
    /// Called by the host timer while it is armed. Completing the move
    /// transition releases the retained snapshot; completing the flash
    /// clears the overlay. Always repaints, and disarms the timer on the
    /// edge where both clocks go idle.
    pub fn tick(&mut self, delta: f64) {
        let tick = self.anim.tick(delta);
        trace!(
            delta,
            move_finished = tick.move_finished,
            flash_finished = tick.flash_finished,
            "tick"
        );
        self.redraw();
        self.sync_timer();
    }

    // === Presets ===

    /// Number of presets, populating the catalog on first access.
    pub fn preset_count(&mut self) -> usize {
        self.presets.count(self.core.backend())
    }

    /// Fetch a preset by index, populating the catalog on first access.
    ///
    /// ## Panics
    ///
    /// Panics on an index at or beyond [`preset_count`](Self::preset_count).
    pub fn preset(&mut self, index: usize) -> &PresetEntry<B::Params> {
        self.presets.count(self.core.backend());
        self.presets.fetch(index)
    }

    /// Adopt a preset's parameters. Takes effect on the next new game.
    pub fn apply_preset(&mut self, index: usize) {
        let params = self.preset(index).params.clone();
        debug!(game = self.core.backend().name(), index, "preset applied");
        self.core.set_params(params);
    }

    // === Configuration ===

    /// The editable field list for the current parameters.
    #[must_use]
    pub fn get_config(&self) -> FieldList {
        self.backend().editable_fields(self.params())
    }

    /// Parse and validate an edited field list, committing on success.
    ///
    /// Validate-before-commit: on any failure the session's parameters
    /// are untouched. Committed parameters take effect on the next new
    /// game.
    pub fn set_config(&mut self, fields: &FieldList) -> Result<(), ConfigError> {
        let candidate = self.core.backend().build_from_fields(fields)?;
        self.core.backend().validate_params(&candidate)?;

        debug!(game = self.core.backend().name(), "config committed");
        self.core.set_params(candidate);
        Ok(())
    }

    // === Output ===

    /// Force a repaint of the current state.
    pub fn force_redraw(&mut self) {
        self.redraw();
    }

    fn redraw(&mut self) {
        let frame = Frame {
            current: self.core.current(),
            prior: self.anim.retained(),
            move_progress: self.anim.move_progress().unwrap_or(1.0),
            flash_progress: self.anim.flash_progress(),
        };
        self.frontend.redraw(frame);

        let status = self.core.backend().status_text(self.core.current());
        if status != self.last_status {
            if let Some(text) = &status {
                self.frontend.status_text(text);
            }
            self.last_status = status;
        }
    }

    /// Recompute the timer edge and notify the frontend only on a
    /// transition, never redundantly.
    fn sync_timer(&mut self) {
        let should_run = !self.anim.is_idle();
        if should_run != self.timer_active {
            self.timer_active = should_run;
            if should_run {
                self.frontend.activate_timer();
            } else {
                self.frontend.deactivate_timer();
            }
        }
    }
}
