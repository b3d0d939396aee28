//! The board store: cell values, lock metadata, and marks.

use playdoku_core::{Array9, Array81, Digit, DigitGrid, DigitSet, Position};

use crate::{BoardError, CellState, HighlightKind, Marks};

/// The 9×9 board owned by a single game session.
///
/// Values and marks are stored side by side: [`CellState`] is the durable
/// part (what the player and puzzle decided), [`Marks`] is the transient part
/// the highlight engine recomputes. Rule validation never happens here — the
/// board may hold duplicate values mid-play, and the violation detector flags
/// them separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array81<CellState>,
    marks: Array81<Marks>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board with no marks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: Array81::from_fn(|_| CellState::Empty),
            marks: Array81::default(),
        }
    }

    /// Replaces the board contents with a fresh puzzle.
    ///
    /// Every decided entry in `grid` becomes a locked given; empty entries
    /// become editable empty cells. All marks are cleared. History and
    /// selection resets are the session's job, not the board's.
    pub fn load(&mut self, grid: &DigitGrid) {
        self.cells = Array81::from_fn(|pos| match grid.get(pos) {
            Some(digit) => CellState::Given(digit),
            None => CellState::Empty,
        });
        self.marks = Array81::default();
        log::debug!("board loaded with {} givens", grid.decided_count());
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos]
    }

    /// Writes a player value at `pos`; `None` clears the cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CellLocked`] if the cell holds a given value.
    pub fn set_value(&mut self, pos: Position, value: Option<Digit>) -> Result<(), BoardError> {
        if self.cells[pos].is_locked() {
            return Err(BoardError::CellLocked);
        }
        self.cells[pos] = match value {
            Some(digit) => CellState::Filled(digit),
            None => CellState::Empty,
        };
        Ok(())
    }

    /// Writes a locked given value at `pos`, replacing any player input.
    ///
    /// This is the hint placement path; hints are irrevocable and immune to
    /// later edits and undo.
    pub fn place_locked(&mut self, pos: Position, digit: Digit) {
        self.cells[pos] = CellState::Given(digit);
    }

    /// Restores a player value without the lock check, clearing the cell's
    /// violation flag. Used by the undo log, which re-checks lock state
    /// itself before calling.
    pub(crate) fn restore(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos] = match value {
            Some(digit) => CellState::Filled(digit),
            None => CellState::Empty,
        };
        self.marks[pos].violation = false;
    }

    /// Returns an immutable value matrix of the current board.
    ///
    /// Lock state is board metadata and is not part of the snapshot.
    #[must_use]
    pub fn snapshot(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self.cells[pos].as_digit());
        }
        grid
    }

    /// Returns whether the board is complete: every cell decided and no cell
    /// carrying a violation flag.
    ///
    /// Derived on demand rather than stored, so it can never go stale. On top
    /// of the flags, every house is scanned for duplicates against live
    /// values, since the highlight pass only refreshes flags it visits.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let all_decided_and_clean = Position::ALL
            .into_iter()
            .all(|pos| self.cells[pos].as_digit().is_some() && !self.marks[pos].violation);
        all_decided_and_clean && !self.has_house_duplicate()
    }

    fn has_house_duplicate(&self) -> bool {
        let houses = (0..9).flat_map(|i| {
            [
                Position::new(0, i).row_positions().collect::<Vec<_>>(),
                Position::new(i, 0).column_positions().collect(),
                Position::from_box(i, 0).box_positions().collect(),
            ]
        });
        for house in houses {
            let mut seen = DigitSet::EMPTY;
            for pos in house {
                if let Some(digit) = self.cells[pos].as_digit() {
                    if seen.contains(digit) {
                        return true;
                    }
                    seen.insert(digit);
                }
            }
        }
        false
    }

    /// Returns how many cells currently hold each digit, givens included.
    #[must_use]
    pub fn decided_digit_count(&self) -> Array9<usize> {
        let mut counts = Array9::from_array([0; 9]);
        for pos in Position::ALL {
            if let Some(digit) = self.cells[pos].as_digit() {
                counts[digit] += 1;
            }
        }
        counts
    }

    /// Returns the highlight classification of the cell at `pos`.
    #[must_use]
    pub fn highlight(&self, pos: Position) -> HighlightKind {
        self.marks[pos].highlight
    }

    /// Returns whether the cell at `pos` carries a violation flag.
    #[must_use]
    pub fn has_violation(&self, pos: Position) -> bool {
        self.marks[pos].violation
    }

    /// Returns the currently selected cell, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|&pos| self.marks[pos].highlight.is_selected())
    }

    pub(crate) fn set_highlight(&mut self, pos: Position, kind: HighlightKind) {
        self.marks[pos].highlight = kind;
    }

    pub(crate) fn set_violation(&mut self, pos: Position, violation: bool) {
        self.marks[pos].violation = violation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    fn solved_grid() -> DigitGrid {
        SOLVED.parse().unwrap()
    }

    #[test]
    fn load_locks_givens_and_leaves_blanks_editable() {
        let grid: DigitGrid = format!("5.{}", ".".repeat(79)).parse().unwrap();
        let mut board = Board::new();
        board.load(&grid);

        assert_eq!(
            board.cell(Position::new(0, 0)),
            CellState::Given(Digit::D5)
        );
        assert_eq!(board.cell(Position::new(1, 0)), CellState::Empty);

        assert_eq!(
            board.set_value(Position::new(0, 0), Some(Digit::D1)),
            Err(BoardError::CellLocked)
        );
        assert!(board.set_value(Position::new(1, 0), Some(Digit::D1)).is_ok());
    }

    #[test]
    fn set_value_overwrites_and_clears() {
        let mut board = Board::new();
        let pos = Position::new(3, 3);

        board.set_value(pos, Some(Digit::D2)).unwrap();
        assert_eq!(board.cell(pos), CellState::Filled(Digit::D2));

        board.set_value(pos, Some(Digit::D7)).unwrap();
        assert_eq!(board.cell(pos), CellState::Filled(Digit::D7));

        board.set_value(pos, None).unwrap();
        assert_eq!(board.cell(pos), CellState::Empty);
    }

    #[test]
    fn place_locked_replaces_player_input() {
        let mut board = Board::new();
        let pos = Position::new(2, 5);

        board.set_value(pos, Some(Digit::D4)).unwrap();
        board.place_locked(pos, Digit::D9);

        assert_eq!(board.cell(pos), CellState::Given(Digit::D9));
        assert_eq!(
            board.set_value(pos, None),
            Err(BoardError::CellLocked)
        );
    }

    #[test]
    fn snapshot_reflects_values_only() {
        let grid: DigitGrid = format!("12{}", ".".repeat(79)).parse().unwrap();
        let mut board = Board::new();
        board.load(&grid);
        board
            .set_value(Position::new(2, 0), Some(Digit::D3))
            .unwrap();

        let snapshot = board.snapshot();
        assert_eq!(snapshot.get(Position::new(0, 0)), Some(Digit::D1));
        assert_eq!(snapshot.get(Position::new(2, 0)), Some(Digit::D3));
        assert_eq!(snapshot.decided_count(), 3);
    }

    #[test]
    fn complete_board_is_complete() {
        let mut board = Board::new();
        board.load(&solved_grid());
        assert!(board.is_complete());
    }

    #[test]
    fn perturbed_board_is_not_complete() {
        // Turn one cell into a duplicate of its row neighbor.
        let mut grid = solved_grid();
        let neighbor = grid.get(Position::new(0, 0));
        grid.set(Position::new(1, 0), None);

        let mut board = Board::new();
        board.load(&grid);
        board.set_value(Position::new(1, 0), neighbor).unwrap();

        assert!(!board.is_complete());
    }

    #[test]
    fn decided_digit_count_covers_givens_and_player_input() {
        let grid: DigitGrid = format!("11{}", ".".repeat(79)).parse().unwrap();
        let mut board = Board::new();
        board.load(&grid);
        board
            .set_value(Position::new(0, 1), Some(Digit::D1))
            .unwrap();
        board
            .set_value(Position::new(1, 1), Some(Digit::D2))
            .unwrap();

        let counts = board.decided_digit_count();
        assert_eq!(counts[Digit::D1], 3);
        assert_eq!(counts[Digit::D2], 1);
        assert_eq!(counts[Digit::D9], 0);
    }

    #[test]
    fn incomplete_board_is_not_complete() {
        let mut grid = solved_grid();
        grid.set(Position::new(4, 4), None);

        let mut board = Board::new();
        board.load(&grid);
        assert!(!board.is_complete());
    }
}
