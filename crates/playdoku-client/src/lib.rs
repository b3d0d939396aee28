//! Client for the remote puzzle service.
//!
//! The service owns puzzle generation, solution verification, and hint
//! computation; this crate owns the typed boundary to it. [`PuzzleService`]
//! is the trait the session consumes, [`HttpPuzzleService`] the production
//! transport, and [`dto`] the wire shapes.

pub use self::{
    http::HttpPuzzleService,
    service::{Difficulty, DifficultyParseError, FetchedPuzzle, HintPlacement, PuzzleService},
};

pub mod dto;
mod http;
mod service;

/// Errors raised at the puzzle-service boundary.
///
/// None of these are fatal: the session surfaces them and stays in a
/// recoverable state, and the triggering action can simply be re-issued.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ServiceError {
    /// The HTTP request itself failed (connection, timeout, decode).
    #[display("request failed: {_0}")]
    Http(#[from] reqwest::Error),
    /// The service answered with a non-success status code.
    #[display("service returned status {_0}")]
    BadStatus(#[error(not(source))] u16),
    /// A response grid contained a cell value outside 0-9.
    #[display("malformed grid in response: cell value {_0}")]
    BadGrid(#[error(not(source))] u8),
    /// A hint response carried an out-of-range box index or digit.
    #[display("malformed hint placement")]
    BadHint,
}
