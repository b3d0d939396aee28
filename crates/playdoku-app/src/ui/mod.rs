//! Presentation modules. Everything here renders view models and emits
//! actions; no game state is touched directly.

pub(crate) mod grid;
pub(crate) mod sidebar;
pub(crate) mod status_line;
