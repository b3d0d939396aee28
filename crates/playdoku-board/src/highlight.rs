//! Selection & highlight propagation.
//!
//! Selecting a cell replaces the entire highlight set in one pass: the cell
//! itself, its house mates, and every cell sharing its value. Violation flags
//! are refreshed in the same pass — stale flags heal first, then the new
//! highlight set is re-checked against the live board.

use playdoku_core::Position;

use crate::{Board, HighlightKind, conflict};

/// Selects `pos`, replacing any prior highlight set.
///
/// Re-selecting the same cell is idempotent: the identical highlight and
/// violation set is produced. Selecting an empty cell skips same-value
/// marking entirely.
pub fn select(board: &mut Board, pos: Position) {
    for p in Position::ALL {
        board.set_highlight(p, HighlightKind::None);
    }

    board.set_highlight(pos, HighlightKind::Selected);
    for house_pos in pos.house_peers() {
        board.set_highlight(house_pos, HighlightKind::Related);
    }

    if let Some(digit) = board.cell(pos).as_digit() {
        for other in Position::ALL {
            if other != pos && board.cell(other).as_digit() == Some(digit) {
                board.set_highlight(other, HighlightKind::RelatedValue);
            }
        }
    }

    refresh_violations(board);
}

/// Removes every highlight mark.
///
/// Violation flags are kept when `keep_violations` is true; otherwise the
/// error overlay is wiped with the highlighting.
pub fn clear(board: &mut Board, keep_violations: bool) {
    for pos in Position::ALL {
        board.set_highlight(pos, HighlightKind::None);
        if !keep_violations {
            board.set_violation(pos, false);
        }
    }
}

/// Refreshes violation flags around the current highlight set.
///
/// Two passes: previously flagged cells are re-checked and healed when their
/// duplicate no longer exists (wherever they sit, so an erased value heals
/// flags beyond the highlight set), then every highlighted cell is checked
/// against the live board. Scanning flagged cells instead of the whole board
/// is an optimization; the flagged set is small in practice.
fn refresh_violations(board: &mut Board) {
    for pos in Position::ALL {
        if board.has_violation(pos) && !conflict::has_duplicate(board, pos) {
            board.set_violation(pos, false);
        }
    }
    for pos in Position::ALL {
        if !board.highlight(pos).is_none() {
            board.set_violation(pos, conflict::has_duplicate(board, pos));
        }
    }
}
