//! Application state.

pub(crate) use self::session::{
    BoardDispatch, DEFAULT_HINT_BUDGET, EntryOutcome, Notice, Session, SessionError, SessionStatus,
    StartDispatch,
};

mod session;

#[cfg(test)]
pub(crate) mod test_support;
