//! Linear snapshot history with undo/redo.
//!
//! ## Model
//!
//! A [`History`] is an append-only, truncatable sequence of immutable state
//! snapshots plus a cursor. Indices and the cursor are 1-based and the
//! cursor always lies in `[1, len]`. There is no branching: committing a
//! new state discards the redo tail, never merges it.
//!
//! Backed by [`im::Vector`] so snapshots of the history itself (and the
//! states inside it, when they use persistent structures too) are cheap.
//!
//! ```
//! use puzzle_session::history::History;
//!
//! let mut history = History::new("start");
//! history.commit("after move 1");
//! assert_eq!(history.cursor(), 2);
//! assert!(history.undo());
//! assert_eq!(*history.current(), "start");
//! ```

use im::Vector;

/// Ordered sequence of state snapshots with a cursor.
///
/// Never empty: constructed from an initial state and only ever replaced
/// wholesale, so `current()` is total.
#[derive(Clone, Debug)]
pub struct History<S: Clone> {
    states: Vector<S>,
    /// 1-based position in `[1, len]`.
    cursor: usize,
}

impl<S: Clone> History<S> {
    /// Create a history holding a single initial state, cursor at 1.
    #[must_use]
    pub fn new(initial: S) -> Self {
        Self {
            states: Vector::unit(initial),
            cursor: 1,
        }
    }

    /// Logical length of the history.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// A history is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Current cursor position, in `[1, len]`.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The state at the cursor.
    #[must_use]
    pub fn current(&self) -> &S {
        &self.states[self.cursor - 1]
    }

    /// The first (initial) state.
    #[must_use]
    pub fn first(&self) -> &S {
        &self.states[0]
    }

    /// The state at a 1-based index.
    ///
    /// Indices are produced only by the engine itself, so an out-of-range
    /// index is a caller bug.
    ///
    /// ## Panics
    ///
    /// Panics if `index` is outside `[1, len]`.
    #[must_use]
    pub fn at(&self, index: usize) -> &S {
        assert!(
            index >= 1 && index <= self.states.len(),
            "history index {index} out of range 1..={}",
            self.states.len()
        );
        &self.states[index - 1]
    }

    /// Whether the cursor can move backwards.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 1
    }

    /// Whether the cursor can move forwards.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.states.len()
    }

    /// Move the cursor back one step.
    ///
    /// Returns false (a no-op, not an error) at the first entry.
    pub fn undo(&mut self) -> bool {
        if self.cursor > 1 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor forward one step.
    ///
    /// Returns false (a no-op, not an error) at the last entry.
    pub fn redo(&mut self) -> bool {
        if self.cursor < self.states.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Release every entry at or beyond a 1-based index.
    ///
    /// Post-condition: `len() == at - 1`. Indices into the history are
    /// stable only until the next truncation.
    ///
    /// ## Panics
    ///
    /// Panics if `at` is outside `[1, len + 1]` or would drop the entry
    /// at the cursor.
    pub fn truncate(&mut self, at: usize) {
        assert!(
            at >= 1 && at <= self.states.len() + 1,
            "truncation index {at} out of range 1..={}",
            self.states.len() + 1
        );
        assert!(
            self.cursor < at,
            "truncation at {at} would drop the current state (cursor {})",
            self.cursor
        );
        self.states.truncate(at - 1);
    }

    /// Commit a successor of the current state.
    ///
    /// Discards the redo tail, appends `next`, and advances the cursor.
    pub fn commit(&mut self, next: S) {
        self.truncate(self.cursor + 1);
        self.states.push_back(next);
        self.cursor += 1;
    }

    /// Collapse the history back to its first entry, cursor at 1.
    pub fn reset_to_first(&mut self) {
        self.cursor = 1;
        if self.states.len() > 1 {
            self.truncate(2);
        }
    }

    /// Replace the history wholesale with a new initial state.
    pub fn reset(&mut self, initial: S) {
        self.states = Vector::unit(initial);
        self.cursor = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history() {
        let history = History::new(0);

        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 1);
        assert_eq!(*history.current(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_commit_advances_cursor() {
        let mut history = History::new(0);
        history.commit(1);
        history.commit(2);

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 3);
        assert_eq!(*history.current(), 2);
    }

    #[test]
    fn test_undo_redo_roundtrip() {
        let mut history = History::new(0);
        for i in 1..=5 {
            history.commit(i);
        }

        for _ in 0..5 {
            assert!(history.undo());
        }
        assert_eq!(*history.current(), 0);
        assert!(!history.undo()); // no-op at the first entry

        for _ in 0..5 {
            assert!(history.redo());
        }
        assert_eq!(*history.current(), 5);
        assert!(!history.redo()); // no-op at the last entry
    }

    #[test]
    fn test_commit_discards_redo_tail() {
        let mut history = History::new(0);
        history.commit(1);
        history.commit(2);
        history.commit(3);

        history.undo();
        history.undo();
        assert_eq!(history.cursor(), 2);

        history.commit(10);

        // 3 and 2 are gone; history is [0, 1, 10].
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 3);
        assert_eq!(*history.current(), 10);
        assert!(!history.redo());
    }

    #[test]
    fn test_truncate_postcondition() {
        let mut history = History::new(0);
        for i in 1..=4 {
            history.commit(i);
        }
        history.undo();
        history.undo();

        history.truncate(4);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_reset_to_first() {
        let mut history = History::new(0);
        history.commit(1);
        history.commit(2);

        history.reset_to_first();

        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 1);
        assert_eq!(*history.current(), 0);
        assert!(!history.redo());
    }

    #[test]
    fn test_reset_replaces_everything() {
        let mut history = History::new(0);
        history.commit(1);

        history.reset(100);

        assert_eq!(history.len(), 1);
        assert_eq!(*history.current(), 100);
    }

    #[test]
    fn test_at() {
        let mut history = History::new(0);
        history.commit(1);

        assert_eq!(*history.at(1), 0);
        assert_eq!(*history.at(2), 1);
    }

    #[test]
    #[should_panic(expected = "history index 3 out of range")]
    fn test_at_out_of_range() {
        let mut history = History::new(0);
        history.commit(1);
        let _ = history.at(3);
    }

    #[test]
    #[should_panic(expected = "would drop the current state")]
    fn test_truncate_cannot_drop_current() {
        let mut history = History::new(0);
        history.commit(1);
        history.truncate(2);
    }
}
