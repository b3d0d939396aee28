//! The service abstraction the session consumes.

use std::{fmt, str::FromStr};

use playdoku_core::{Digit, DigitGrid, Position};

use crate::ServiceError;

/// Puzzle difficulty, as understood by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Few blanks, forgiving.
    Easy,
    /// The default.
    Medium,
    /// Many blanks.
    Hard,
}

impl Difficulty {
    /// The lowercase wire token for this difficulty.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a difficulty token.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty {_0:?}, expected easy, medium, or hard")]
pub struct DifficultyParseError(#[error(not(source))] String);

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DifficultyParseError(s.to_owned())),
        }
    }
}

/// A puzzle fetched from the service, already validated and converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPuzzle {
    /// Service-assigned identifier for solve/hint calls.
    pub id: i64,
    /// The puzzle grid; decided entries are givens.
    pub grid: DigitGrid,
    /// Difficulty label, when the service reports one.
    pub difficulty: Option<String>,
}

/// A hint resolved to row/column addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintPlacement {
    /// Cell to fill.
    pub pos: Position,
    /// Digit to place, locked once applied.
    pub digit: Digit,
}

/// The three operations the session needs from the puzzle service.
///
/// The production implementation is [`HttpPuzzleService`]; session tests
/// substitute a scripted one.
///
/// [`HttpPuzzleService`]: crate::HttpPuzzleService
pub trait PuzzleService {
    /// Fetches a new puzzle. `None` asks the service to pick any difficulty.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] when the request fails or the payload is
    /// malformed.
    fn fetch_puzzle(&self, difficulty: Option<Difficulty>) -> Result<FetchedPuzzle, ServiceError>;

    /// Submits a completed board for verification.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] when the request fails.
    fn submit_solution(&self, board_id: i64, board: &DigitGrid) -> Result<bool, ServiceError>;

    /// Requests a hint for the current board state.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] when the request fails or the placement is
    /// malformed.
    fn request_hint(
        &self,
        board_id: i64,
        board: &DigitGrid,
    ) -> Result<HintPlacement, ServiceError>;
}
