//! Background execution of puzzle-service calls.
//!
//! The UI thread never blocks on the network: requests are handed to a single
//! background worker thread over a channel and completions are polled once
//! per frame. Every request carries the session generation that issued it, so
//! a response that arrives after a superseding `start` or an `exit` can be
//! recognized as stale and discarded by the session.

use std::sync::mpsc;

use playdoku_client::{Difficulty, FetchedPuzzle, HintPlacement, PuzzleService, ServiceError};
use playdoku_core::DigitGrid;

/// A service call to run on the worker thread.
#[derive(Debug)]
pub(crate) enum WorkRequest {
    /// Fetch a fresh puzzle.
    FetchPuzzle {
        generation: u64,
        difficulty: Option<Difficulty>,
    },
    /// Submit a completed board for verification.
    SubmitSolution {
        generation: u64,
        board_id: i64,
        board: DigitGrid,
    },
    /// Ask for a hint placement.
    RequestHint {
        generation: u64,
        board_id: i64,
        board: DigitGrid,
    },
}

/// A completed service call, tagged with its originating generation.
#[derive(Debug)]
pub(crate) enum WorkResponse {
    PuzzleFetched {
        generation: u64,
        result: Result<FetchedPuzzle, ServiceError>,
    },
    SolutionVerdict {
        generation: u64,
        result: Result<bool, ServiceError>,
    },
    HintReady {
        generation: u64,
        result: Result<HintPlacement, ServiceError>,
    },
}

/// Runs one request against the service. Centralized so every backend maps
/// requests to responses identically.
pub(crate) fn execute(service: &impl PuzzleService, request: WorkRequest) -> WorkResponse {
    match request {
        WorkRequest::FetchPuzzle {
            generation,
            difficulty,
        } => WorkResponse::PuzzleFetched {
            generation,
            result: service.fetch_puzzle(difficulty),
        },
        WorkRequest::SubmitSolution {
            generation,
            board_id,
            board,
        } => WorkResponse::SolutionVerdict {
            generation,
            result: service.submit_solution(board_id, &board),
        },
        WorkRequest::RequestHint {
            generation,
            board_id,
            board,
        } => WorkResponse::HintReady {
            generation,
            result: service.request_hint(board_id, &board),
        },
    }
}

/// Destination for work requests. The handler is written against this trait
/// so tests can capture dispatches without a worker thread.
pub(crate) trait WorkSink {
    fn dispatch(&mut self, request: WorkRequest);
}

/// Owns the worker thread and both channel ends.
///
/// Dropping the dispatcher closes the request channel, which ends the worker
/// thread; a response that never gets polled dies with the receiver. That is
/// the teardown path for the two recurring event sources feeding the session.
#[derive(Debug)]
pub(crate) struct WorkDispatcher {
    request_tx: mpsc::Sender<WorkRequest>,
    response_rx: mpsc::Receiver<WorkResponse>,
}

impl WorkDispatcher {
    /// Spawns the worker thread around `service`.
    pub(crate) fn spawn(service: impl PuzzleService + Send + 'static) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<WorkRequest>();
        let (response_tx, response_rx) = mpsc::channel::<WorkResponse>();
        std::thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let response = execute(&service, request);
                if response_tx.send(response).is_err() {
                    break;
                }
            }
        });
        Self {
            request_tx,
            response_rx,
        }
    }

    /// Drains every completed response without blocking.
    pub(crate) fn poll(&self) -> Vec<WorkResponse> {
        let mut responses = Vec::new();
        while let Ok(response) = self.response_rx.try_recv() {
            responses.push(response);
        }
        responses
    }
}

impl WorkSink for WorkDispatcher {
    fn dispatch(&mut self, request: WorkRequest) {
        if self.request_tx.send(request).is_err() {
            log::warn!("work dispatch dropped: worker thread is gone");
        }
    }
}

#[cfg(test)]
impl WorkSink for Vec<WorkRequest> {
    fn dispatch(&mut self, request: WorkRequest) {
        self.push(request);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::state::test_support::ScriptedService;

    #[test]
    fn execute_maps_requests_to_tagged_responses() {
        let service = ScriptedService::with_puzzle(7, &format!("1{}", ".".repeat(80)));

        let response = execute(
            &service,
            WorkRequest::FetchPuzzle {
                generation: 3,
                difficulty: None,
            },
        );
        match response {
            WorkResponse::PuzzleFetched { generation, result } => {
                assert_eq!(generation, 3);
                assert_eq!(result.unwrap().id, 7);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn dispatcher_round_trips_through_the_worker_thread() {
        let service = ScriptedService::with_puzzle(1, &format!("1{}", ".".repeat(80)));
        let mut dispatcher = WorkDispatcher::spawn(service);

        dispatcher.dispatch(WorkRequest::FetchPuzzle {
            generation: 1,
            difficulty: Some(Difficulty::Easy),
        });

        let mut responses = dispatcher.poll();
        for _ in 0..100 {
            if !responses.is_empty() {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
            responses = dispatcher.poll();
        }
        assert!(matches!(
            responses.as_slice(),
            [WorkResponse::PuzzleFetched { generation: 1, .. }]
        ));
    }
}
