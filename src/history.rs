use crate::surface::Snapshot;

/// Linear undo/redo over whole-surface snapshots.
///
/// `entries[index]` is what the surface currently shows. Committing while
/// `index` is not at the end discards everything after it.
#[derive(Debug, Clone)]
pub struct SnapshotHistory<T = Snapshot> {
    entries: Vec<T>,
    index: usize,
}

impl<T> SnapshotHistory<T> {
    /// Creates a history whose only entry is `initial`
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// Record a new state, dropping the redo branch
    pub fn commit(&mut self, entry: T) {
        self.entries.truncate(self.index + 1);
        self.entries.push(entry);
        self.index = self.entries.len() - 1;
    }

    /// Step back, returning the entry to restore
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index)
    }

    /// Step forward, returning the entry to restore
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index)
    }

    /// The entry `undo` would step back to, without moving
    pub fn undo_target(&self) -> Option<&T> {
        self.index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// The entry `redo` would step forward to, without moving
    pub fn redo_target(&self) -> Option<&T> {
        self.entries.get(self.index + 1)
    }

    /// Returns true if there are entries that can be undone
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Returns true if there are entries that can be redone
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the initial entry is always kept
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current(&self) -> &T {
        &self.entries[self.index]
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }
}
