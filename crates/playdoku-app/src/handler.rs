//! Action handling: the single place where UI requests and completed
//! background work mutate the session.

use crate::{
    action::{Action, ActionRequestQueue},
    async_work::{WorkRequest, WorkResponse, WorkSink},
    state::{EntryOutcome, Session},
};

/// Drains the queue and handles every action in order.
pub(crate) fn handle_all(
    session: &mut Session,
    work: &mut impl WorkSink,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(session, work, action);
    }
}

pub(crate) fn handle(session: &mut Session, work: &mut impl WorkSink, action: Action) {
    match action {
        Action::SelectCell(pos) => session.select(pos),
        Action::ClearSelection => session.clear_selection(),
        Action::MoveSelection(direction) => session.move_selection(direction),
        Action::EnterDigit(digit) => {
            let outcome = session.enter_digit(digit);
            submit_if_completed(session, work, outcome);
        }
        Action::ClearCell => {
            let _ = session.clear_cell();
        }
        Action::Undo => session.undo(),
        Action::StartNewGame => {
            let dispatch = session.begin_start();
            work.dispatch(WorkRequest::FetchPuzzle {
                generation: dispatch.generation,
                difficulty: dispatch.difficulty,
            });
        }
        Action::RequestHint => {
            // HintExhausted already surfaced a notice; NotPlaying means a
            // stray shortcut outside a game. Neither dispatches.
            if let Ok(dispatch) = session.begin_hint() {
                work.dispatch(WorkRequest::RequestHint {
                    generation: dispatch.generation,
                    board_id: dispatch.board_id,
                    board: dispatch.board,
                });
            }
        }
        Action::ExitGame => session.exit(),
        Action::SetDifficulty(difficulty) => session.set_difficulty(difficulty),
        Action::DismissNotice => session.clear_notice(),
        Action::Work(response) => handle_work(session, work, response),
    }
}

fn handle_work(session: &mut Session, work: &mut impl WorkSink, response: WorkResponse) {
    match response {
        WorkResponse::PuzzleFetched { generation, result } => {
            session.apply_fetched(generation, result);
        }
        WorkResponse::HintReady { generation, result } => {
            let outcome = session.apply_hint(generation, result);
            submit_if_completed(session, work, outcome);
        }
        WorkResponse::SolutionVerdict { generation, result } => {
            session.apply_verdict(generation, result);
        }
    }
}

fn submit_if_completed(session: &mut Session, work: &mut impl WorkSink, outcome: EntryOutcome) {
    if outcome == EntryOutcome::Completed
        && let Some(dispatch) = session.begin_submit()
    {
        work.dispatch(WorkRequest::SubmitSolution {
            generation: dispatch.generation,
            board_id: dispatch.board_id,
            board: dispatch.board,
        });
    }
}
