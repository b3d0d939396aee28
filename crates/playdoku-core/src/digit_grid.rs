//! An 81-cell grid of optional digits.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Digit, Position};

/// A 9×9 grid where every cell holds an optional digit.
///
/// This is the plain value matrix exchanged with the puzzle service and
/// returned by board snapshots; it carries no lock or highlight metadata.
///
/// The textual form is 81 characters in row-major order, `1`-`9` for digits
/// and `.` (or `0` on input) for empty cells.
///
/// # Examples
///
/// ```
/// use playdoku_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = format!("5{}", ".".repeat(80)).parse().unwrap();
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(1, 0)], None);
/// assert_eq!(grid.to_string().len(), 81);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Error parsing the 81-character textual grid form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input was not exactly 81 characters long.
    #[display("expected 81 cells, got {_0}")]
    BadLength(#[error(not(source))] usize),
    /// A character other than `1`-`9`, `0`, or `.` was found.
    #[display("invalid cell character {_0:?}")]
    BadCell(#[error(not(source))] char),
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets the cell at `pos`.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns the number of decided (non-empty) cells.
    #[must_use]
    pub fn decided_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Returns whether every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.decided_count() == 81
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl FromStr for DigitGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 81 {
            return Err(GridParseError::BadLength(len));
        }
        let mut grid = Self::new();
        for (pos, ch) in Position::ALL.into_iter().zip(s.chars()) {
            let cell = match ch {
                '.' | '0' => None,
                '1'..='9' => Digit::try_from_value(ch as u8 - b'0'),
                _ => return Err(GridParseError::BadCell(ch)),
            };
            grid.set(pos, cell);
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}
