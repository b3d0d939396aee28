//! Per-cell value and mark types.

use playdoku_core::Digit;

/// The value state of a single cell.
///
/// `Given` covers every locked value: puzzle pre-fills and hint placements.
/// `Filled` is player input and stays editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum CellState {
    /// No value.
    #[default]
    Empty,
    /// A locked value supplied by the puzzle or a hint.
    Given(Digit),
    /// A player-entered value.
    Filled(Digit),
}

impl CellState {
    /// Returns the decided digit, if any.
    #[must_use]
    pub fn as_digit(self) -> Option<Digit> {
        match self {
            CellState::Empty => None,
            CellState::Given(digit) | CellState::Filled(digit) => Some(digit),
        }
    }

    /// Returns whether the cell is immutable to direct input.
    #[must_use]
    pub fn is_locked(self) -> bool {
        self.is_given()
    }
}

/// The highlight classification of a cell, driven by the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum HighlightKind {
    /// Not part of the current highlight set.
    #[default]
    None,
    /// The selected cell itself. At most one cell carries this at a time.
    Selected,
    /// Shares the selected cell's row, column, or box.
    Related,
    /// Holds the same value as the selected cell.
    RelatedValue,
}

/// Transient per-cell visual marks, recomputed by the highlight engine.
///
/// Marks live in the board store, not on rendered elements; the view layer
/// projects them each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Marks {
    /// Highlight classification from the current selection.
    pub highlight: HighlightKind,
    /// Whether the cell's value duplicates another value in its row, column,
    /// or box. Set for locked cells too; their value still never changes.
    pub violation: bool,
}
