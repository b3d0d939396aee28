//! HTTP transport for the puzzle service.

use std::time::Duration;

use playdoku_core::DigitGrid;
use reqwest::blocking::Client;

use crate::{
    Difficulty, FetchedPuzzle, HintPlacement, PuzzleService, ServiceError,
    dto::{self, BoardDto, BoardStateDto, HintResponseDto, SolveResponseDto},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking JSON client for the puzzle service.
///
/// Blocking is fine here: every call runs on the shared background worker
/// thread, never on the UI thread.
#[derive(Debug, Clone)]
pub struct HttpPuzzleService {
    base_url: String,
    client: Client,
}

impl HttpPuzzleService {
    /// Creates a client for the service at `base_url` (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ServiceError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn check_status(response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            log::warn!("puzzle service answered {status}");
            Err(ServiceError::BadStatus(status.as_u16()))
        }
    }

    fn post_board_state(
        &self,
        endpoint: &str,
        board_id: i64,
        board: &DigitGrid,
    ) -> Result<reqwest::blocking::Response, ServiceError> {
        let body = BoardStateDto {
            board_id,
            board: dto::grid_to_wire(board),
        };
        let response = self
            .client
            .post(format!("{}/{endpoint}", self.base_url))
            .json(&body)
            .send()?;
        Self::check_status(response)
    }
}

impl PuzzleService for HttpPuzzleService {
    fn fetch_puzzle(&self, difficulty: Option<Difficulty>) -> Result<FetchedPuzzle, ServiceError> {
        let difficulty_token = difficulty.map_or("any", Difficulty::as_str);
        let response = self
            .client
            .get(format!("{}/board", self.base_url))
            .query(&[("difficulty", difficulty_token)])
            .send()?;
        let dto: BoardDto = Self::check_status(response)?.json()?;
        let grid = dto::grid_from_wire(&dto.value)?;
        log::debug!(
            "fetched board {} ({} givens)",
            dto.id,
            grid.decided_count()
        );
        Ok(FetchedPuzzle {
            id: dto.id,
            grid,
            difficulty: dto.difficulty,
        })
    }

    fn submit_solution(&self, board_id: i64, board: &DigitGrid) -> Result<bool, ServiceError> {
        let response = self.post_board_state("solve", board_id, board)?;
        let dto: SolveResponseDto = response.json()?;
        Ok(dto.solved)
    }

    fn request_hint(
        &self,
        board_id: i64,
        board: &DigitGrid,
    ) -> Result<HintPlacement, ServiceError> {
        let response = self.post_board_state("hint", board_id, board)?;
        let dto: HintResponseDto = response.json()?;
        let (pos, digit) = dto.placement()?;
        Ok(HintPlacement { pos, digit })
    }
}
