//! Frontend seam: redraw and host-timer notifications.
//!
//! The session engine never draws. It hands the frontend everything a
//! repaint needs (the committed state, the optional pre-move snapshot
//! while a transition animates, and the two progress values) and tells
//! it, edge-triggered, when the host timer must start or stop.

/// Everything a single repaint needs.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a, S> {
    /// The committed state at the history cursor.
    pub current: &'a S,

    /// The pre-move snapshot, while a move transition is animating.
    /// `None` means draw `current` as settled.
    pub prior: Option<&'a S>,

    /// Move-transition progress in `[0, 1]`. Reported as 1.0 when no
    /// transition is running.
    pub move_progress: f64,

    /// Flash progress in `[0, 1]`, or `None` when no flash is running.
    pub flash_progress: Option<f64>,
}

/// Host collaborator consuming session output.
///
/// `activate_timer`/`deactivate_timer` are edge-triggered: the session
/// never signals them redundantly, so implementations may arm and disarm
/// a real timer without reference counting.
pub trait Frontend<S> {
    /// Repaint from the given frame.
    fn redraw(&mut self, frame: Frame<'_, S>);

    /// Start delivering periodic `tick` calls to the session.
    fn activate_timer(&mut self);

    /// Stop delivering `tick` calls.
    fn deactivate_timer(&mut self);

    /// Status text changed. Optional; the default ignores it.
    fn status_text(&mut self, text: &str) {
        let _ = text;
    }
}

/// Frontend that ignores everything.
///
/// For headless embeddings and tests that drive the session without
/// observing its output.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullFrontend;

impl<S> Frontend<S> for NullFrontend {
    fn redraw(&mut self, _frame: Frame<'_, S>) {}

    fn activate_timer(&mut self) {}

    fn deactivate_timer(&mut self) {}
}
