//! Append-only undo log of player edits.

use playdoku_core::{Digit, Position};

use crate::Board;

/// One recorded edit: the cell and the player value it held before.
///
/// Replaying `previous` values in reverse order from the current board
/// reconstructs every prior board state exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionEntry {
    /// The edited cell.
    pub pos: Position,
    /// The player value before the edit (`None` = the cell was empty).
    pub previous: Option<Digit>,
}

/// Outcome of an undo attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoResult {
    /// Nothing to undo, or the most recent entry's cell has since been
    /// locked by a hint. The board is unchanged.
    NoOp,
    /// The edit was reverted. `reselect` is the cell of the entry now on top
    /// of the log; `None` means the log emptied and the caller should clear
    /// all highlighting and selection.
    Undone {
        /// Cell to re-select after the revert.
        reselect: Option<Position>,
    },
}

/// A pure undo stack of player edits. No redo branch.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    entries: Vec<ActionEntry>,
}

impl ActionLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of recorded edits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an edit record. Callers skip no-op edits (value unchanged)
    /// before recording.
    pub fn record(&mut self, pos: Position, previous: Option<Digit>) {
        self.entries.push(ActionEntry { pos, previous });
    }

    /// Reverts the most recent edit on `board`.
    ///
    /// Lock state is re-checked at undo time, not record time: a hint that
    /// landed on the cell after the edit makes the entry (and everything
    /// beneath it at that cell) unrevertable, so the whole undo is a no-op.
    /// On success the reverted cell's violation flag is cleared.
    pub fn undo(&mut self, board: &mut Board) -> UndoResult {
        let Some(entry) = self.entries.last().copied() else {
            return UndoResult::NoOp;
        };
        if board.cell(entry.pos).is_locked() {
            log::debug!("undo skipped: {} is locked", entry.pos);
            return UndoResult::NoOp;
        }

        self.entries.pop();
        board.restore(entry.pos, entry.previous);

        UndoResult::Undone {
            reselect: self.entries.last().map(|top| top.pos),
        }
    }

    /// Empties the log. Used on new game, board reset, and exit.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
