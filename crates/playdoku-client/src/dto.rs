//! Wire shapes for the puzzle service endpoints.
//!
//! Grids travel as `[[u8; 9]; 9]` row-major matrices with `0` for an empty
//! cell. Hint responses address cells by box + in-box index; conversion to
//! row/column goes through [`Position::from_box`].

use playdoku_core::{Digit, DigitGrid, Position};
use serde::{Deserialize, Serialize};

use crate::ServiceError;

/// A wire-format 9×9 value matrix, `0` = empty.
pub type WireGrid = [[u8; 9]; 9];

/// Response of the fetch-puzzle endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardDto {
    /// Service-assigned board identifier, echoed back on solve/hint calls.
    pub id: i64,
    /// Puzzle grid; nonzero entries are givens.
    pub value: WireGrid,
    /// Difficulty label, absent when the service picked at random.
    pub difficulty: Option<String>,
}

/// Request body shared by the solve and hint endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStateDto {
    /// Identifier from the originating [`BoardDto`].
    pub board_id: i64,
    /// The player's current grid.
    pub board: WireGrid,
}

/// Response of the submit-solution endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponseDto {
    /// Whether the submitted grid is a valid solution.
    pub solved: bool,
}

/// Response of the hint endpoint, in box addressing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintResponseDto {
    /// Box index of the hinted cell (0-8).
    pub box_index: u8,
    /// Cell index within the box (0-8).
    pub in_box_index: u8,
    /// The digit to place (1-9).
    pub hint: u8,
}

/// Converts a wire grid into a [`DigitGrid`].
///
/// # Errors
///
/// Returns [`ServiceError::BadGrid`] when a cell value is above 9.
pub fn grid_from_wire(wire: &WireGrid) -> Result<DigitGrid, ServiceError> {
    let mut grid = DigitGrid::new();
    for (y, row) in (0u8..).zip(wire) {
        for (x, &value) in (0u8..).zip(row) {
            let cell = match value {
                0 => None,
                1..=9 => Digit::try_from_value(value),
                _ => return Err(ServiceError::BadGrid(value)),
            };
            grid.set(Position::new(x, y), cell);
        }
    }
    Ok(grid)
}

/// Converts a [`DigitGrid`] into the wire matrix, `0` for empty cells.
#[must_use]
pub fn grid_to_wire(grid: &DigitGrid) -> WireGrid {
    let mut wire = [[0u8; 9]; 9];
    for pos in Position::ALL {
        if let Some(digit) = grid.get(pos) {
            wire[pos.y() as usize][pos.x() as usize] = digit.value();
        }
    }
    wire
}

impl HintResponseDto {
    /// Resolves the box-addressed hint into a position and digit.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::BadHint`] when an index is out of range or the
    /// hinted digit is not 1-9.
    pub fn placement(&self) -> Result<(Position, Digit), ServiceError> {
        if self.box_index >= 9 || self.in_box_index >= 9 {
            return Err(ServiceError::BadHint);
        }
        let digit = Digit::try_from_value(self.hint).ok_or(ServiceError::BadHint)?;
        Ok((Position::from_box(self.box_index, self.in_box_index), digit))
    }
}
