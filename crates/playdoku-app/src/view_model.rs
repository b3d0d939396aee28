//! Frame view models, built fresh from session state.
//!
//! The render layer is a pure projection: nothing here mutates the session,
//! and no visual state survives between frames outside the board's own marks.

use std::time::Duration;

use playdoku_board::HighlightKind;
use playdoku_client::Difficulty;
use playdoku_core::{Array9, Array81, Digit};

use crate::state::{Session, SessionStatus};

bitflags::bitflags! {
    /// Composite visual state of a rendered cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct CellVisual: u8 {
        /// The selected cell.
        const SELECTED = 1 << 0;
        /// Shares the selected cell's row, column, or box.
        const RELATED = 1 << 1;
        /// Holds the same value as the selected cell.
        const SAME_VALUE = 1 << 2;
        /// Duplicates another value in its row, column, or box.
        const CONFLICT = 1 << 3;
        /// A given (puzzle or hint) cell.
        const LOCKED = 1 << 4;
    }
}

/// One cell as the grid renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct GridCell {
    pub(crate) digit: Option<Digit>,
    pub(crate) visual: CellVisual,
}

/// Everything a frame needs to render the game screen.
#[derive(Debug)]
pub(crate) struct GameViewModel {
    pub(crate) grid: Array81<GridCell>,
    pub(crate) status: SessionStatus,
    pub(crate) elapsed: Duration,
    pub(crate) hints_remaining: u8,
    pub(crate) can_undo: bool,
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) reported_difficulty: Option<String>,
    pub(crate) digit_counts: Array9<usize>,
    pub(crate) notice: Option<String>,
}

/// Projects the session into this frame's view model.
pub(crate) fn build(session: &Session) -> GameViewModel {
    let board = session.board();
    let grid = Array81::from_fn(|pos| {
        let mut visual = CellVisual::empty();
        match board.highlight(pos) {
            HighlightKind::None => {}
            HighlightKind::Selected => visual |= CellVisual::SELECTED,
            HighlightKind::Related => visual |= CellVisual::RELATED,
            HighlightKind::RelatedValue => visual |= CellVisual::SAME_VALUE,
        }
        if board.has_violation(pos) {
            visual |= CellVisual::CONFLICT;
        }
        if board.cell(pos).is_locked() {
            visual |= CellVisual::LOCKED;
        }
        GridCell {
            digit: board.cell(pos).as_digit(),
            visual,
        }
    });

    GameViewModel {
        grid,
        status: session.status(),
        elapsed: session.elapsed(),
        hints_remaining: session.hints_remaining(),
        can_undo: session.can_undo(),
        difficulty: session.difficulty(),
        reported_difficulty: session.reported_difficulty().map(str::to_owned),
        digit_counts: board.decided_digit_count(),
        notice: session.notice().map(ToString::to_string),
    }
}

/// Formats an elapsed span as `m:ss` (or `h:mm:ss` past an hour).
pub(crate) fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let (hours, minutes, seconds) = (total / 3600, total % 3600 / 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use playdoku_core::Position;

    use super::*;
    use crate::state::{DEFAULT_HINT_BUDGET, test_support::puzzle};

    fn session_with(grid: &str) -> Session {
        let mut session = Session::new(None, DEFAULT_HINT_BUDGET);
        let dispatch = session.begin_start();
        session.apply_fetched(dispatch.generation, Ok(puzzle(1, grid)));
        session
    }

    #[test]
    fn view_model_projects_marks_and_lock_state() {
        let mut session = session_with(&format!("55{}", ".".repeat(79)));
        session.select(Position::new(0, 0));
        let vm = build(&session);

        let selected = vm.grid[Position::new(0, 0)];
        assert!(selected.visual.contains(CellVisual::SELECTED));
        assert!(selected.visual.contains(CellVisual::CONFLICT));
        assert!(selected.visual.contains(CellVisual::LOCKED));
        assert_eq!(selected.digit, Some(Digit::D5));

        let neighbor = vm.grid[Position::new(1, 0)];
        assert!(neighbor.visual.contains(CellVisual::RELATED));
        assert!(neighbor.visual.contains(CellVisual::CONFLICT));

        let far = vm.grid[Position::new(8, 8)];
        assert_eq!(far.visual, CellVisual::empty());
        assert_eq!(far.digit, None);
    }

    #[test]
    fn elapsed_formatting() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "0:00");
        assert_eq!(format_elapsed(Duration::from_secs(65)), "1:05");
        assert_eq!(format_elapsed(Duration::from_secs(3723)), "1:02:03");
    }
}
