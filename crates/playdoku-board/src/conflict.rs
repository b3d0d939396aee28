//! Rule-violation detection.
//!
//! A violation is a decided value that reappears somewhere in the cell's row,
//! column, or box. Detection is symmetric and order-independent: if A
//! duplicates B then B duplicates A, and neither cell is compared against
//! itself.

use playdoku_core::Position;

use crate::Board;

/// Returns whether the value at `pos` duplicates another value in its row,
/// column, or box.
///
/// An empty cell never has a duplicate. The check walks the cell's 20 house
/// peers, so it is cheap enough to run over the whole highlight set after
/// every edit without rescanning the board.
#[must_use]
pub fn has_duplicate(board: &Board, pos: Position) -> bool {
    let Some(digit) = board.cell(pos).as_digit() else {
        return false;
    };
    pos.house_peers()
        .any(|peer| board.cell(peer).as_digit() == Some(digit))
}
