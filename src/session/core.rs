//! Minimal headless session core.

use tracing::debug;

use crate::backend::Backend;
use crate::core::{Seed, SeedError, SessionRng, SolveError};
use crate::history::History;

/// What a move application did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The backend accepted the input; a new state was committed.
    Committed,
    /// The input had no legal effect. Nothing changed; not an error.
    Rejected,
}

impl MoveOutcome {
    /// Whether a new state was committed.
    #[must_use]
    pub fn is_committed(self) -> bool {
        matches!(self, MoveOutcome::Committed)
    }
}

/// One puzzle game in progress: parameters, seed, and the snapshot
/// history.
///
/// Sole owner of its params and history; multiple independent cores can
/// coexist, one per game instance. Always holds at least one state, so a
/// core is constructed by starting its first game and construction fails
/// if the backend cannot build that state.
pub struct GameCore<B: Backend> {
    backend: B,
    params: B::Params,
    seed: Seed,
    history: History<B::State>,
    rng: SessionRng,
}

impl<B: Backend> GameCore<B> {
    /// Start a core with default parameters and a fresh random seed.
    pub fn new(backend: B) -> Result<Self, SeedError> {
        Self::build(backend, None, SessionRng::from_entropy())
    }

    /// Start a core with default parameters and the given seed.
    pub fn with_seed(backend: B, seed: Seed) -> Result<Self, SeedError> {
        Self::build(backend, Some(seed), SessionRng::from_entropy())
    }

    /// Start a core with a caller-supplied RNG for fresh-seed generation.
    ///
    /// Deterministic embeddings (and tests) seed the RNG themselves.
    pub fn with_rng(backend: B, rng: SessionRng) -> Result<Self, SeedError> {
        Self::build(backend, None, rng)
    }

    fn build(backend: B, seed: Option<Seed>, mut rng: SessionRng) -> Result<Self, SeedError> {
        let params = backend.default_params();
        let seed = seed.unwrap_or_else(|| backend.fresh_seed(&params, &mut rng));
        let initial = backend.new_state(&params, &seed)?;

        debug!(game = backend.name(), %seed, "session started");

        Ok(Self {
            backend,
            params,
            seed,
            history: History::new(initial),
            rng,
        })
    }

    /// The backend this core plays.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Current parameters.
    #[must_use]
    pub fn params(&self) -> &B::Params {
        &self.params
    }

    /// Seed of the game in progress.
    #[must_use]
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// The snapshot history.
    #[must_use]
    pub fn history(&self) -> &History<B::State> {
        &self.history
    }

    /// The state at the history cursor.
    #[must_use]
    pub fn current(&self) -> &B::State {
        self.history.current()
    }

    /// Whether undo would move the cursor.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether redo would move the cursor.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replace the parameters wholesale.
    ///
    /// Callers validate beforehand. The game in progress is untouched;
    /// the new parameters take effect on the next [`new_game`](Self::new_game).
    pub fn set_params(&mut self, params: B::Params) {
        self.params = params;
    }

    /// Start a new game, replacing the history with its initial state.
    ///
    /// With no seed given, asks the backend for a fresh one under the
    /// current parameters. On failure the previous game is untouched.
    pub fn new_game(&mut self, seed: Option<Seed>) -> Result<(), SeedError> {
        let seed = seed.unwrap_or_else(|| self.backend.fresh_seed(&self.params, &mut self.rng));
        let initial = self.backend.new_state(&self.params, &seed)?;

        debug!(game = self.backend.name(), %seed, "new game");

        self.seed = seed;
        self.history.reset(initial);
        Ok(())
    }

    /// Rewind to the initial state of the current game.
    ///
    /// History collapses to length 1; parameters and seed are unchanged.
    pub fn restart_game(&mut self) {
        debug!(game = self.backend.name(), "restart");
        self.history.reset_to_first();
    }

    /// Move the cursor back one step. No-op at the first entry.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Move the cursor forward one step. No-op at the last entry.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Apply a move input to the current state.
    ///
    /// On acceptance the redo tail is discarded, the successor committed,
    /// and the cursor advanced. Rejection leaves everything unchanged.
    pub fn apply_move(&mut self, input: &B::Move) -> MoveOutcome {
        let next = match self.backend.apply_move(self.history.current(), input) {
            Some(next) => next,
            None => {
                debug!(game = self.backend.name(), "move rejected");
                return MoveOutcome::Rejected;
            }
        };

        self.history.commit(next);
        debug!(
            game = self.backend.name(),
            cursor = self.history.cursor(),
            len = self.history.len(),
            "move committed"
        );
        MoveOutcome::Committed
    }

    /// Commit a solved state produced by the backend.
    ///
    /// Commits like a move (redo tail discarded, cursor advanced) but is
    /// special: the interactive layer never animates or flashes it.
    pub fn solve(&mut self) -> Result<(), SolveError> {
        if !self.backend.can_solve() {
            return Err(SolveError::Unsupported);
        }

        let solved = self
            .backend
            .solve(self.history.first(), self.history.current())?;

        self.history.commit(solved);
        debug!(game = self.backend.name(), "solve committed");
        Ok(())
    }
}
