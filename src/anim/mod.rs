//! Cosmetic animation scheduling.
//!
//! ## Model
//!
//! Two independent clocks:
//!
//! - The **move transition**: while a committed move is being animated, the
//!   scheduler retains the pre-move snapshot (the only copy outside the
//!   history) alongside a duration and elapsed time. Completion releases
//!   the snapshot.
//! - The **flash**: a timed highlight overlaying the already-committed
//!   state. It owns no snapshot.
//!
//! Animation is a presentational overlay, never background computation:
//! the host drives both clocks by calling [`AnimationScheduler::tick`]
//! from its timer. The host timer should run exactly while the scheduler
//! is not idle; the session layer turns that into edge-triggered
//! activate/deactivate notifications.

/// In-flight move transition. Owns the retained pre-move snapshot.
#[derive(Clone, Debug)]
struct Transition<S> {
    from: S,
    duration: f64,
    elapsed: f64,
}

/// In-flight flash overlay. Carries no owned resource.
#[derive(Clone, Copy, Debug)]
struct Flash {
    duration: f64,
    elapsed: f64,
}

/// What a single [`AnimationScheduler::tick`] call completed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tick {
    /// The move transition finished and its snapshot was released.
    pub move_finished: bool,
    /// The flash overlay finished and was cleared.
    pub flash_finished: bool,
}

/// Tracks move-transition and flash timers and the temporarily retained
/// pre-move snapshot.
#[derive(Clone, Debug)]
pub struct AnimationScheduler<S> {
    transition: Option<Transition<S>>,
    flash: Option<Flash>,
}

impl<S> AnimationScheduler<S> {
    /// Create an idle scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transition: None,
            flash: None,
        }
    }

    /// True when both clocks are idle.
    ///
    /// This is the condition under which the host timer may stop.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.transition.is_none() && self.flash.is_none()
    }

    /// Whether a move transition is running.
    #[must_use]
    pub fn move_active(&self) -> bool {
        self.transition.is_some()
    }

    /// Whether a flash is running.
    #[must_use]
    pub fn flash_active(&self) -> bool {
        self.flash.is_some()
    }

    /// Start a move transition, retaining the pre-move snapshot.
    ///
    /// ## Panics
    ///
    /// Panics if `duration` is not positive, or if a transition is already
    /// running: callers must collapse the previous one first, so the
    /// scheduler retains at most one snapshot at any instant.
    pub fn start_move(&mut self, from: S, duration: f64) {
        assert!(duration > 0.0, "move animation duration must be positive");
        assert!(
            self.transition.is_none(),
            "move animation started while another is in flight"
        );
        self.transition = Some(Transition {
            from,
            duration,
            elapsed: 0.0,
        });
    }

    /// Start (or restart) the flash overlay.
    ///
    /// ## Panics
    ///
    /// Panics if `duration` is not positive.
    pub fn start_flash(&mut self, duration: f64) {
        assert!(duration > 0.0, "flash duration must be positive");
        self.flash = Some(Flash {
            duration,
            elapsed: 0.0,
        });
    }

    /// Clear the flash overlay, if any.
    pub fn clear_flash(&mut self) {
        self.flash = None;
    }

    /// Collapse a running move transition to completion.
    ///
    /// Returns the released snapshot so the caller decides its fate
    /// (usually: drop it). Idempotent; returns `None` when no transition
    /// is running.
    pub fn finish_move(&mut self) -> Option<S> {
        self.transition.take().map(|t| t.from)
    }

    /// Discard both clocks without completing them.
    ///
    /// Used when the whole session state is being replaced and the
    /// animated snapshot is no longer meaningful.
    pub fn discard(&mut self) {
        self.transition = None;
        self.flash = None;
    }

    /// Advance both clocks independently by `delta` seconds.
    pub fn tick(&mut self, delta: f64) -> Tick {
        let mut result = Tick::default();

        if let Some(transition) = &mut self.transition {
            transition.elapsed += delta;
            if transition.elapsed >= transition.duration {
                self.transition = None;
                result.move_finished = true;
            }
        }

        if let Some(flash) = &mut self.flash {
            flash.elapsed += delta;
            if flash.elapsed >= flash.duration {
                self.flash = None;
                result.flash_finished = true;
            }
        }

        result
    }

    /// The retained pre-move snapshot, while a transition is running.
    #[must_use]
    pub fn retained(&self) -> Option<&S> {
        self.transition.as_ref().map(|t| &t.from)
    }

    /// Progress of the move transition in `[0, 1]`, if one is running.
    #[must_use]
    pub fn move_progress(&self) -> Option<f64> {
        self.transition
            .as_ref()
            .map(|t| (t.elapsed / t.duration).min(1.0))
    }

    /// Progress of the flash in `[0, 1]`, if one is running.
    #[must_use]
    pub fn flash_progress(&self) -> Option<f64> {
        self.flash
            .as_ref()
            .map(|f| (f.elapsed / f.duration).min(1.0))
    }
}

impl<S> Default for AnimationScheduler<S> {
    fn default() -> Self {
        Self::new()
    }
}
