//! Linear undo/redo history over immutable snapshots.
//!
//! `entries[cursor]` is always the live value. A checkpoint after an undo discards the
//! redo branch.

/// Default number of snapshots kept
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Snapshot stack with a cursor
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: Vec<T>,
    cursor: usize,
    max_entries: usize,
}

impl<T: Clone> History<T> {
    pub fn new(initial: T) -> Self {
        Self::with_limit(initial, DEFAULT_HISTORY_LIMIT)
    }

    /// History keeping at most `max_entries` snapshots (at least one)
    pub fn with_limit(initial: T, max_entries: usize) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            max_entries: max_entries.max(1),
        }
    }

    /// Live snapshot
    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    /// Push a new snapshot after the cursor, dropping any redo entries and the oldest
    /// entries beyond the limit.
    pub fn checkpoint(&mut self, snapshot: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        let excess = self.entries.len().saturating_sub(self.max_entries);
        self.entries.drain(..excess);
        self.cursor = self.entries.len() - 1;
    }

    /// Replace the live snapshot without creating an entry. Redo entries are dropped.
    pub fn amend(&mut self, snapshot: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries[self.cursor] = snapshot;
    }

    /// Step back; `None` at the start of history
    pub fn undo(&mut self) -> Option<&T> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward; `None` at the end of history
    pub fn redo(&mut self) -> Option<&T> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Drop all history and start over from `initial`
    pub fn reset(&mut self, initial: T) {
        self.entries.clear();
        self.entries.push(initial);
        self.cursor = 0;
    }
}
