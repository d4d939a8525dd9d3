use std::collections::VecDeque;

use crate::error::EditError;

/// # Undo/redo model
///
/// `History` stores full copies of the buffer. `current` indexes the snapshot that matches the
/// buffer right now; undo and redo only move that index and lend out the snapshot at the new
/// position, they never rewrite stored entries.
///
/// - Committing while `current` is not the newest entry drops the redo tail first.
/// - Once more than `max_depth` entries exist, the oldest ones are evicted.
/// - The baseline captured at construction is the first entry. Undo stops there.
/// - A `max_depth` of 0 disables history: nothing is stored and undo/redo always fail.
#[derive(Clone, Debug)]
pub struct History {
    entries: VecDeque<String>,
    current: usize,
    max_depth: usize,
}

/// Storage for the next snapshot, allocated before an edit mutates anything.
#[derive(Debug)]
pub(crate) struct Snapshot(String);

impl History {
    /// `max_depth` counts the baseline.
    pub fn new(max_depth: usize, baseline: &str) -> Self {
        let mut entries = VecDeque::new();
        if max_depth > 0 {
            entries.push_back(baseline.to_owned());
        }
        Self {
            entries,
            current: 0,
            max_depth,
        }
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn is_enabled(&self) -> bool {
        self.max_depth > 0
    }

    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.entries.len()
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.current).map(String::as_str)
    }

    /// Snapshot that [`History::undo`] would move to, without moving.
    pub fn peek_undo(&self) -> Option<&str> {
        let idx = self.current.checked_sub(1)?;
        self.entries.get(idx).map(String::as_str)
    }

    /// Snapshot that [`History::redo`] would move to, without moving.
    pub fn peek_redo(&self) -> Option<&str> {
        self.entries.get(self.current + 1).map(String::as_str)
    }

    pub fn undo(&mut self) -> Option<&str> {
        if !self.can_undo() {
            return None;
        }
        self.current -= 1;
        self.current()
    }

    pub fn redo(&mut self) -> Option<&str> {
        if !self.can_redo() {
            return None;
        }
        self.current += 1;
        self.current()
    }

    /// Allocates room for a snapshot of up to `len` bytes plus its slot in the stack.
    pub(crate) fn stage(&mut self, len: usize) -> Result<Snapshot, EditError> {
        if !self.is_enabled() {
            return Ok(Snapshot(String::new()));
        }
        self.entries
            .try_reserve(1)
            .map_err(EditError::alloc("history entry"))?;
        let mut s = String::new();
        s.try_reserve_exact(len)
            .map_err(EditError::alloc("history snapshot"))?;
        Ok(Snapshot(s))
    }

    /// Records `text` as the newest snapshot in storage from [`History::stage`].
    pub(crate) fn commit(&mut self, slot: Snapshot, text: &str) {
        if !self.is_enabled() {
            return;
        }
        let Snapshot(mut s) = slot;
        s.push_str(text);
        self.entries.truncate(self.current + 1);
        self.entries.push_back(s);
        let mut evicted = 0usize;
        while self.entries.len() > self.max_depth {
            self.entries.pop_front();
            evicted += 1;
        }
        if evicted > 0 {
            tracing::trace!(
                evicted,
                max_depth = self.max_depth,
                "history evicted oldest snapshots"
            );
        }
        self.current = self.entries.len() - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(h: &mut History, text: &str) {
        let slot = h.stage(text.len()).unwrap();
        h.commit(slot, text);
    }

    #[test]
    fn undo_and_redo_walk_without_rewriting() {
        let mut h = History::new(10, "");
        record(&mut h, "a");
        record(&mut h, "ab");
        assert_eq!(h.undo(), Some("a"));
        assert_eq!(h.undo(), Some(""));
        assert_eq!(h.undo(), None);
        assert_eq!(h.redo(), Some("a"));
        assert_eq!(h.redo(), Some("ab"));
        assert_eq!(h.redo(), None);
        assert_eq!(h.depth(), 3);
    }

    #[test]
    fn commit_after_undo_drops_redo_tail() {
        let mut h = History::new(10, "");
        record(&mut h, "a");
        record(&mut h, "ab");
        h.undo();
        record(&mut h, "ax");
        assert!(!h.can_redo());
        assert_eq!(h.undo(), Some("a"));
        assert_eq!(h.depth(), 3);
    }

    #[test]
    fn depth_is_bounded_by_evicting_oldest() {
        let mut h = History::new(3, "0");
        for s in ["1", "2", "3", "4"] {
            record(&mut h, s);
        }
        assert_eq!(h.depth(), 3);
        assert_eq!(h.undo(), Some("3"));
        assert_eq!(h.undo(), Some("2"));
        assert_eq!(h.undo(), None);
    }

    #[test]
    fn peeking_does_not_move() {
        let mut h = History::new(4, "x");
        record(&mut h, "xy");
        assert_eq!(h.peek_undo(), Some("x"));
        assert_eq!(h.peek_redo(), None);
        assert_eq!(h.current(), Some("xy"));
    }

    #[test]
    fn depth_of_one_keeps_only_the_latest_snapshot() {
        let mut h = History::new(1, "");
        record(&mut h, "a");
        assert_eq!(h.depth(), 1);
        assert!(!h.can_undo());
        assert_eq!(h.current(), Some("a"));
    }

    #[test]
    fn zero_depth_disables_history() {
        let mut h = History::new(0, "base");
        assert!(!h.is_enabled());
        assert_eq!(h.depth(), 0);
        record(&mut h, "a");
        record(&mut h, "ab");
        assert_eq!(h.depth(), 0);
        assert_eq!(h.current(), None);
        assert_eq!(h.undo(), None);
        assert_eq!(h.redo(), None);
    }
}
