//! UI action requests and the queue that carries them to the handler.

use std::mem;

use playdoku_client::Difficulty;
use playdoku_core::{Digit, Position};

use crate::async_work::WorkResponse;

/// Everything the UI (or a completed background request) can ask the app to
/// do. Actions are queued during a frame and handled in order.
#[derive(Debug)]
pub(crate) enum Action {
    /// Select a cell.
    SelectCell(Position),
    /// Drop the selection and its highlighting.
    ClearSelection,
    /// Move the selection one cell in a direction.
    MoveSelection(MoveDirection),
    /// Enter a digit into the selected cell.
    EnterDigit(Digit),
    /// Erase the selected cell's player value.
    ClearCell,
    /// Revert the most recent edit.
    Undo,
    /// Start a new game at the session's chosen difficulty.
    StartNewGame,
    /// Spend a hint.
    RequestHint,
    /// Leave the current game.
    ExitGame,
    /// Change the difficulty used for the next new game.
    SetDifficulty(Option<Difficulty>),
    /// Dismiss the transient notice message.
    DismissNotice,
    /// A background service call completed.
    Work(WorkResponse),
}

/// A selection movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    pub(crate) fn apply_to(self, pos: Position) -> Option<Position> {
        match self {
            Self::Up => pos.up(),
            Self::Down => pos.down(),
            Self::Left => pos.left(),
            Self::Right => pos.right(),
        }
    }
}

/// Order-preserving queue of pending actions.
#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
