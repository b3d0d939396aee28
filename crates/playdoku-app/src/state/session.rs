//! The game session state machine.
//!
//! A session moves through `Idle → Loading → Playing → Finished/Exited`, with
//! `Finished`/`Exited` re-entering `Loading` on a new game. All service calls
//! are asynchronous: the session hands out dispatch descriptors tagged with a
//! generation counter and later applies responses, discarding any whose
//! generation no longer matches (a superseding start or an exit happened in
//! between).

use std::time::{Duration, Instant};

use playdoku_board::{ActionLog, Board, CellState, UndoResult, highlight};
use playdoku_client::{Difficulty, FetchedPuzzle, HintPlacement, ServiceError};
use playdoku_core::{Digit, DigitGrid, Position};

use crate::action::MoveDirection;

/// Hints available per game unless overridden on the command line.
pub(crate) const DEFAULT_HINT_BUDGET: u8 = 5;

const DEFAULT_POSITION: Position = Position::new(0, 0);

/// Lifecycle phase of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum SessionStatus {
    /// No game; the start screen.
    Idle,
    /// A puzzle fetch is in flight.
    Loading,
    /// A game is in progress.
    Playing,
    /// The board was completed.
    Finished,
    /// The player left the game.
    Exited,
}

/// A transient user-visible signal, shown until dismissed or replaced.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub(crate) enum Notice {
    /// The hint budget is spent.
    #[display("no hints remaining")]
    HintExhausted,
    /// A service call failed; the triggering action can be retried.
    #[display("puzzle service error: {_0}")]
    ServiceFailure(String),
    /// The verification service judged the submitted solution.
    #[display("{}", if *solved { "solution verified" } else { "solution rejected by the service" })]
    Verified {
        /// Whether the service accepted the board.
        solved: bool,
    },
}

/// Errors surfaced by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum SessionError {
    /// The hint budget is 0. Soft failure; the board is untouched.
    #[display("no hints remaining")]
    HintExhausted,
    /// The session is not in the `Playing` state.
    #[display("no game in progress")]
    NotPlaying,
    /// A hint request is already in flight.
    #[display("a hint request is already in flight")]
    HintPending,
}

/// Outcome of a value entry (digit, erase, or applied hint).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryOutcome {
    /// Nothing changed (no selection, locked cell, or no-op edit).
    Ignored,
    /// The board changed and the game continues.
    Applied,
    /// The board changed and is now complete; the session is `Finished`.
    Completed,
}

/// Descriptor for a puzzle fetch the caller must dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StartDispatch {
    pub(crate) generation: u64,
    pub(crate) difficulty: Option<Difficulty>,
}

/// Descriptor for a solve/hint call the caller must dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BoardDispatch {
    pub(crate) generation: u64,
    pub(crate) board_id: i64,
    pub(crate) board: DigitGrid,
}

/// One player's game session: board, undo log, timer, hint budget, status.
#[derive(Debug)]
pub(crate) struct Session {
    board: Board,
    log: ActionLog,
    status: SessionStatus,
    difficulty: Option<Difficulty>,
    board_id: Option<i64>,
    reported_difficulty: Option<String>,
    hint_budget: u8,
    hints_remaining: u8,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
    generation: u64,
    hint_in_flight: bool,
    notice: Option<Notice>,
}

impl Session {
    pub(crate) fn new(difficulty: Option<Difficulty>, hint_budget: u8) -> Self {
        Self {
            board: Board::new(),
            log: ActionLog::new(),
            status: SessionStatus::Idle,
            difficulty,
            board_id: None,
            reported_difficulty: None,
            hint_budget,
            hints_remaining: hint_budget,
            started_at: None,
            finished_at: None,
            generation: 0,
            hint_in_flight: false,
            notice: None,
        }
    }

    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn status(&self) -> SessionStatus {
        self.status
    }

    pub(crate) fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub(crate) fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.difficulty = difficulty;
    }

    pub(crate) fn reported_difficulty(&self) -> Option<&str> {
        self.reported_difficulty.as_deref()
    }

    pub(crate) fn hints_remaining(&self) -> u8 {
        self.hints_remaining
    }

    pub(crate) fn can_undo(&self) -> bool {
        self.status.is_playing() && !self.log.is_empty()
    }

    pub(crate) fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub(crate) fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Time spent in the current game, derived from wall clock rather than
    /// accumulated per tick, so missed ticks and suspension cannot skew it.
    pub(crate) fn elapsed(&self) -> Duration {
        let Some(started_at) = self.started_at else {
            return Duration::ZERO;
        };
        match self.status {
            SessionStatus::Playing => started_at.elapsed(),
            SessionStatus::Finished => self
                .finished_at
                .map_or_else(|| started_at.elapsed(), |f| f.duration_since(started_at)),
            _ => Duration::ZERO,
        }
    }

    /// Begins a new game: resets board, history, timer, and hint budget, and
    /// returns the fetch to dispatch. Any in-flight response becomes stale.
    pub(crate) fn begin_start(&mut self) -> StartDispatch {
        self.generation += 1;
        self.status = SessionStatus::Loading;
        self.board = Board::new();
        self.log.clear();
        self.board_id = None;
        self.reported_difficulty = None;
        self.hints_remaining = self.hint_budget;
        self.started_at = None;
        self.finished_at = None;
        self.hint_in_flight = false;
        self.notice = None;
        log::debug!("session loading (generation {})", self.generation);
        StartDispatch {
            generation: self.generation,
            difficulty: self.difficulty,
        }
    }

    /// Applies a puzzle-fetch response. Stale responses are discarded.
    pub(crate) fn apply_fetched(
        &mut self,
        generation: u64,
        result: Result<FetchedPuzzle, ServiceError>,
    ) {
        if generation != self.generation || !self.status.is_loading() {
            log::debug!("discarding stale fetch response (generation {generation})");
            return;
        }
        match result {
            Ok(puzzle) => {
                self.board.load(&puzzle.grid);
                self.board_id = Some(puzzle.id);
                self.reported_difficulty = puzzle.difficulty;
                self.started_at = Some(Instant::now());
                self.status = SessionStatus::Playing;
                log::debug!("session playing board {}", puzzle.id);
            }
            Err(err) => {
                log::warn!("puzzle fetch failed: {err}");
                self.status = SessionStatus::Idle;
                self.notice = Some(Notice::ServiceFailure(err.to_string()));
            }
        }
    }

    /// Selects a cell, replacing the prior highlight set.
    pub(crate) fn select(&mut self, pos: Position) {
        if self.status.is_playing() {
            highlight::select(&mut self.board, pos);
        }
    }

    /// Drops the selection; violation flags stay put.
    pub(crate) fn clear_selection(&mut self) {
        if self.status.is_playing() {
            highlight::clear(&mut self.board, true);
        }
    }

    /// Moves the selection one cell, selecting the origin corner when nothing
    /// is selected yet. Movement stops at the board edge.
    pub(crate) fn move_selection(&mut self, direction: MoveDirection) {
        if !self.status.is_playing() {
            return;
        }
        let target = match self.board.selected() {
            None => DEFAULT_POSITION,
            Some(pos) => direction.apply_to(pos).unwrap_or(pos),
        };
        highlight::select(&mut self.board, target);
    }

    /// Enters a digit into the selected cell.
    ///
    /// Edits on locked cells and no-op edits are ignored silently. An
    /// accepted edit is logged, the highlight set is recomputed, and the
    /// completion check runs.
    pub(crate) fn enter_digit(&mut self, digit: Digit) -> EntryOutcome {
        if !self.status.is_playing() {
            return EntryOutcome::Ignored;
        }
        let Some(pos) = self.board.selected() else {
            return EntryOutcome::Ignored;
        };
        let previous = match self.board.cell(pos) {
            CellState::Given(_) => return EntryOutcome::Ignored,
            CellState::Filled(d) => Some(d),
            CellState::Empty => None,
        };
        if previous == Some(digit) {
            return EntryOutcome::Ignored;
        }
        if self.board.set_value(pos, Some(digit)).is_err() {
            return EntryOutcome::Ignored;
        }
        self.log.record(pos, previous);
        highlight::select(&mut self.board, pos);
        self.check_completion()
    }

    /// Erases the selected cell's player value.
    pub(crate) fn clear_cell(&mut self) -> EntryOutcome {
        if !self.status.is_playing() {
            return EntryOutcome::Ignored;
        }
        let Some(pos) = self.board.selected() else {
            return EntryOutcome::Ignored;
        };
        let CellState::Filled(previous) = self.board.cell(pos) else {
            return EntryOutcome::Ignored;
        };
        if self.board.set_value(pos, None).is_err() {
            return EntryOutcome::Ignored;
        }
        self.log.record(pos, Some(previous));
        highlight::select(&mut self.board, pos);
        EntryOutcome::Applied
    }

    /// Reverts the most recent edit and re-selects the edit now on top of the
    /// log, or clears the selection when the log emptied.
    pub(crate) fn undo(&mut self) {
        if !self.status.is_playing() {
            return;
        }
        match self.log.undo(&mut self.board) {
            UndoResult::NoOp => {}
            UndoResult::Undone {
                reselect: Some(pos),
            } => highlight::select(&mut self.board, pos),
            UndoResult::Undone { reselect: None } => highlight::clear(&mut self.board, true),
        }
    }

    /// Spends a hint and returns the request to dispatch.
    ///
    /// # Errors
    ///
    /// [`SessionError::HintExhausted`] when the budget is 0 (a notice is set,
    /// the board is untouched, and the budget never goes negative);
    /// [`SessionError::NotPlaying`] outside a game.
    pub(crate) fn begin_hint(&mut self) -> Result<BoardDispatch, SessionError> {
        if !self.status.is_playing() {
            return Err(SessionError::NotPlaying);
        }
        let Some(board_id) = self.board_id else {
            return Err(SessionError::NotPlaying);
        };
        if self.hint_in_flight {
            return Err(SessionError::HintPending);
        }
        if self.hints_remaining == 0 {
            self.notice = Some(Notice::HintExhausted);
            return Err(SessionError::HintExhausted);
        }
        self.hints_remaining -= 1;
        self.generation += 1;
        self.hint_in_flight = true;
        Ok(BoardDispatch {
            generation: self.generation,
            board_id,
            board: self.board.snapshot(),
        })
    }

    /// Applies a hint response: the hinted cell becomes a locked given and is
    /// selected. A failed request refunds the spent hint. Stale responses are
    /// discarded.
    pub(crate) fn apply_hint(
        &mut self,
        generation: u64,
        result: Result<HintPlacement, ServiceError>,
    ) -> EntryOutcome {
        if generation != self.generation || !self.status.is_playing() {
            log::debug!("discarding stale hint response (generation {generation})");
            return EntryOutcome::Ignored;
        }
        self.hint_in_flight = false;
        match result {
            Ok(placement) => {
                self.board.place_locked(placement.pos, placement.digit);
                highlight::select(&mut self.board, placement.pos);
                self.check_completion()
            }
            Err(err) => {
                log::warn!("hint request failed: {err}");
                self.hints_remaining = (self.hints_remaining + 1).min(self.hint_budget);
                self.notice = Some(Notice::ServiceFailure(err.to_string()));
                EntryOutcome::Ignored
            }
        }
    }

    /// Returns the final-board submission to dispatch, once per finish.
    pub(crate) fn begin_submit(&mut self) -> Option<BoardDispatch> {
        if !self.status.is_finished() {
            return None;
        }
        let board_id = self.board_id?;
        self.generation += 1;
        Some(BoardDispatch {
            generation: self.generation,
            board_id,
            board: self.board.snapshot(),
        })
    }

    /// Applies the verification verdict. Informational only.
    pub(crate) fn apply_verdict(&mut self, generation: u64, result: Result<bool, ServiceError>) {
        if generation != self.generation || !self.status.is_finished() {
            log::debug!("discarding stale verdict response (generation {generation})");
            return;
        }
        match result {
            Ok(solved) => self.notice = Some(Notice::Verified { solved }),
            Err(err) => {
                log::warn!("solution submission failed: {err}");
                self.notice = Some(Notice::ServiceFailure(err.to_string()));
            }
        }
    }

    /// Leaves the game, clearing board, history, timer, and hints. Any
    /// in-flight response becomes stale.
    pub(crate) fn exit(&mut self) {
        self.generation += 1;
        self.status = SessionStatus::Exited;
        self.board = Board::new();
        self.log.clear();
        self.board_id = None;
        self.reported_difficulty = None;
        self.hints_remaining = 0;
        self.started_at = None;
        self.finished_at = None;
        self.hint_in_flight = false;
        log::debug!("session exited");
    }

    fn check_completion(&mut self) -> EntryOutcome {
        if self.board.is_complete() {
            self.status = SessionStatus::Finished;
            self.finished_at = Some(Instant::now());
            log::debug!("board complete, session finished");
            EntryOutcome::Completed
        } else {
            EntryOutcome::Applied
        }
    }
}

#[cfg(test)]
mod tests {
    use playdoku_board::HighlightKind;
    use playdoku_client::HintPlacement;

    use super::*;
    use crate::state::test_support::{SOLVED, puzzle};

    fn playing_session(grid: &str) -> Session {
        let mut session = Session::new(None, DEFAULT_HINT_BUDGET);
        let dispatch = session.begin_start();
        session.apply_fetched(dispatch.generation, Ok(puzzle(1, grid)));
        assert!(session.status().is_playing());
        session
    }

    #[test]
    fn start_flow_loads_the_board_and_starts_the_timer() {
        let mut session = Session::new(Some(Difficulty::Hard), 5);
        assert!(session.status().is_idle());

        let dispatch = session.begin_start();
        assert!(session.status().is_loading());
        assert_eq!(dispatch.difficulty, Some(Difficulty::Hard));

        session.apply_fetched(dispatch.generation, Ok(puzzle(9, &format!("1{}", ".".repeat(80)))));
        assert!(session.status().is_playing());
        assert!(
            session
                .board()
                .cell(Position::new(0, 0))
                .is_locked()
        );
        assert_eq!(session.hints_remaining(), 5);
    }

    #[test]
    fn failed_fetch_returns_to_idle_with_a_notice() {
        let mut session = Session::new(None, 5);
        let dispatch = session.begin_start();
        session.apply_fetched(dispatch.generation, Err(ServiceError::BadStatus(503)));

        assert!(session.status().is_idle());
        assert!(matches!(session.notice(), Some(Notice::ServiceFailure(_))));
    }

    #[test]
    fn stale_fetch_response_is_discarded() {
        let mut session = Session::new(None, 5);
        let first = session.begin_start();
        let second = session.begin_start();

        // The superseded response arrives late and must not be applied.
        session.apply_fetched(first.generation, Ok(puzzle(1, &format!("1{}", ".".repeat(80)))));
        assert!(session.status().is_loading());

        session.apply_fetched(second.generation, Ok(puzzle(2, &format!("2{}", ".".repeat(80)))));
        assert!(session.status().is_playing());
        assert_eq!(
            session.board().cell(Position::new(0, 0)),
            CellState::Given(Digit::D2)
        );
    }

    #[test]
    fn response_after_exit_is_discarded() {
        let mut session = Session::new(None, 5);
        let dispatch = session.begin_start();
        session.exit();

        session.apply_fetched(dispatch.generation, Ok(puzzle(1, &format!("1{}", ".".repeat(80)))));
        assert!(session.status().is_exited());
        assert_eq!(session.board().cell(Position::new(0, 0)), CellState::Empty);
    }

    #[test]
    fn example_scenario_from_the_top_row() {
        // Row 1 is 8 _ _ 6 2 7 5 9 3; the solution continues 8 4 1.
        let mut session = playing_session(&format!("8..627593{}", ".".repeat(72)));

        session.select(Position::new(1, 0));
        assert_eq!(session.enter_digit(Digit::D4), EntryOutcome::Applied);
        session.select(Position::new(2, 0));
        assert_eq!(session.enter_digit(Digit::D1), EntryOutcome::Applied);
        assert!(Position::ALL
            .into_iter()
            .all(|pos| !session.board().has_violation(pos)));

        // An 8 in the same row as the locked 8 flags both cells.
        assert_eq!(session.enter_digit(Digit::D8), EntryOutcome::Applied);
        assert!(session.board().has_violation(Position::new(2, 0)));
        assert!(session.board().has_violation(Position::new(0, 0)));
        assert!(session.board().cell(Position::new(0, 0)).is_locked());
    }

    #[test]
    fn entering_the_last_digit_finishes_the_session() {
        let mut grid: DigitGrid = SOLVED.parse().unwrap();
        let last = grid.get(Position::new(0, 0));
        grid.set(Position::new(0, 0), None);
        let mut session = playing_session(&grid.to_string());

        session.select(Position::new(0, 0));
        assert_eq!(
            session.enter_digit(last.unwrap()),
            EntryOutcome::Completed
        );
        assert!(session.status().is_finished());

        let dispatch = session.begin_submit().unwrap();
        assert!(dispatch.board.is_full());
        session.apply_verdict(dispatch.generation, Ok(true));
        assert_eq!(session.notice(), Some(&Notice::Verified { solved: true }));
    }

    #[test]
    fn wrong_last_digit_does_not_finish() {
        let mut grid: DigitGrid = SOLVED.parse().unwrap();
        grid.set(Position::new(0, 0), None);
        let mut session = playing_session(&grid.to_string());

        session.select(Position::new(0, 0));
        // The solution digit is 1; an 8 duplicates the row entry at r1c2.
        assert_eq!(session.enter_digit(Digit::D8), EntryOutcome::Applied);
        assert!(session.status().is_playing());
        assert!(session.board().has_violation(Position::new(0, 0)));
    }

    #[test]
    fn undo_reselects_the_previous_edit() {
        let mut session = playing_session(&".".repeat(81));

        session.select(Position::new(0, 0));
        session.enter_digit(Digit::D1);
        session.select(Position::new(5, 5));
        session.enter_digit(Digit::D2);

        session.undo();
        assert_eq!(session.board().cell(Position::new(5, 5)), CellState::Empty);
        assert_eq!(session.board().selected(), Some(Position::new(0, 0)));

        session.undo();
        assert_eq!(session.board().cell(Position::new(0, 0)), CellState::Empty);
        assert_eq!(session.board().selected(), None);
        assert!(!session.can_undo());
    }

    #[test]
    fn no_op_edits_are_not_logged() {
        let mut session = playing_session(&".".repeat(81));
        session.select(Position::new(0, 0));

        assert_eq!(session.enter_digit(Digit::D3), EntryOutcome::Applied);
        assert_eq!(session.enter_digit(Digit::D3), EntryOutcome::Ignored);

        session.undo();
        assert_eq!(session.board().cell(Position::new(0, 0)), CellState::Empty);
        assert!(!session.can_undo());
    }

    #[test]
    fn hints_place_locked_values_and_are_undo_immune() {
        let mut session = playing_session(&".".repeat(81));

        let dispatch = session.begin_hint().unwrap();
        assert_eq!(session.hints_remaining(), DEFAULT_HINT_BUDGET - 1);

        let placement = HintPlacement {
            pos: Position::from_box(4, 0),
            digit: Digit::D7,
        };
        session.apply_hint(dispatch.generation, Ok(placement));

        let pos = Position::new(3, 3);
        assert_eq!(session.board().cell(pos), CellState::Given(Digit::D7));
        assert_eq!(session.board().selected(), Some(pos));
        assert_eq!(session.board().highlight(pos), HighlightKind::Selected);

        // The hint is irrevocable: direct edits and undo both bounce.
        session.select(pos);
        assert_eq!(session.enter_digit(Digit::D1), EntryOutcome::Ignored);
        session.undo();
        assert_eq!(session.board().cell(pos), CellState::Given(Digit::D7));
    }

    #[test]
    fn hint_budget_never_goes_negative() {
        let mut session = Session::new(None, 1);
        let dispatch = session.begin_start();
        session.apply_fetched(dispatch.generation, Ok(puzzle(1, &".".repeat(81))));

        let hint = session.begin_hint().unwrap();
        session.apply_hint(
            hint.generation,
            Ok(HintPlacement {
                pos: Position::new(0, 0),
                digit: Digit::D1,
            }),
        );
        assert_eq!(session.hints_remaining(), 0);

        let snapshot = session.board().snapshot();
        assert_eq!(session.begin_hint(), Err(SessionError::HintExhausted));
        assert_eq!(session.hints_remaining(), 0);
        assert_eq!(session.board().snapshot(), snapshot);
        assert_eq!(session.notice(), Some(&Notice::HintExhausted));
    }

    #[test]
    fn only_one_hint_request_may_be_in_flight() {
        let mut session = playing_session(&".".repeat(81));

        let first = session.begin_hint().unwrap();
        assert_eq!(session.begin_hint(), Err(SessionError::HintPending));
        assert_eq!(session.hints_remaining(), DEFAULT_HINT_BUDGET - 1);

        session.apply_hint(
            first.generation,
            Ok(HintPlacement {
                pos: Position::new(0, 0),
                digit: Digit::D1,
            }),
        );
        assert!(session.begin_hint().is_ok());
    }

    #[test]
    fn failed_hint_refunds_the_budget() {
        let mut session = playing_session(&".".repeat(81));

        let dispatch = session.begin_hint().unwrap();
        assert_eq!(session.hints_remaining(), DEFAULT_HINT_BUDGET - 1);

        session.apply_hint(dispatch.generation, Err(ServiceError::BadHint));
        assert_eq!(session.hints_remaining(), DEFAULT_HINT_BUDGET);
        assert!(matches!(session.notice(), Some(Notice::ServiceFailure(_))));
    }

    #[test]
    fn exit_clears_everything() {
        let mut session = playing_session(&format!("1{}", ".".repeat(80)));
        session.select(Position::new(1, 0));
        session.enter_digit(Digit::D2);

        session.exit();
        assert!(session.status().is_exited());
        assert_eq!(session.board().snapshot().decided_count(), 0);
        assert_eq!(session.hints_remaining(), 0);
        assert_eq!(session.elapsed(), Duration::ZERO);
        assert!(!session.can_undo());
    }

    #[test]
    fn input_is_ignored_outside_playing() {
        let mut session = Session::new(None, 5);
        session.select(Position::new(0, 0));
        assert_eq!(session.board().selected(), None);
        assert_eq!(session.enter_digit(Digit::D1), EntryOutcome::Ignored);
        assert_eq!(session.begin_hint(), Err(SessionError::NotPlaying));
    }

    #[test]
    fn move_selection_starts_at_origin_and_stops_at_edges() {
        let mut session = playing_session(&".".repeat(81));

        session.move_selection(MoveDirection::Up);
        assert_eq!(session.board().selected(), Some(Position::new(0, 0)));

        session.move_selection(MoveDirection::Right);
        assert_eq!(session.board().selected(), Some(Position::new(1, 0)));

        session.move_selection(MoveDirection::Up);
        assert_eq!(session.board().selected(), Some(Position::new(1, 0)));
    }
}
