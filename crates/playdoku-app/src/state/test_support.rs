//! Shared fixtures for session and worker tests.

use playdoku_client::{
    Difficulty, FetchedPuzzle, HintPlacement, PuzzleService, ServiceError,
};
use playdoku_core::DigitGrid;

/// A full valid solution grid used across tests.
pub(crate) const SOLVED: &str =
    "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

/// Builds a fetched puzzle from an 81-character grid string.
pub(crate) fn puzzle(id: i64, grid: &str) -> FetchedPuzzle {
    FetchedPuzzle {
        id,
        grid: grid.parse().expect("valid test grid"),
        difficulty: None,
    }
}

/// A [`PuzzleService`] with scripted answers, for tests that exercise the
/// dispatch path without a network.
pub(crate) struct ScriptedService {
    puzzle: FetchedPuzzle,
    hint: Option<HintPlacement>,
    solved: bool,
}

impl ScriptedService {
    pub(crate) fn with_puzzle(id: i64, grid: &str) -> Self {
        Self {
            puzzle: puzzle(id, grid),
            hint: None,
            solved: true,
        }
    }

    pub(crate) fn hint(mut self, hint: HintPlacement) -> Self {
        self.hint = Some(hint);
        self
    }

    pub(crate) fn solved(mut self, solved: bool) -> Self {
        self.solved = solved;
        self
    }
}

impl PuzzleService for ScriptedService {
    fn fetch_puzzle(&self, _difficulty: Option<Difficulty>) -> Result<FetchedPuzzle, ServiceError> {
        Ok(self.puzzle.clone())
    }

    fn submit_solution(&self, _board_id: i64, _board: &DigitGrid) -> Result<bool, ServiceError> {
        Ok(self.solved)
    }

    fn request_hint(
        &self,
        _board_id: i64,
        _board: &DigitGrid,
    ) -> Result<HintPlacement, ServiceError> {
        self.hint.ok_or(ServiceError::BadHint)
    }
}
