//! Core vocabulary for the Playdoku board: digits, positions, and grids.
//!
//! This crate has no knowledge of game rules or sessions. It provides the
//! typed primitives every other crate builds on:
//!
//! - [`Digit`] — a Sudoku digit in the range 1-9
//! - [`Position`] — a board coordinate with the box ↔ row/column bijection
//! - [`DigitSet`] — a 9-bit set of digits
//! - [`DigitGrid`] — an 81-cell grid of optional digits
//! - [`Array9`] / [`Array81`] — fixed containers indexed by digit or position

pub use self::{
    containers::{Array9, Array81},
    digit::Digit,
    digit_grid::{DigitGrid, GridParseError},
    digit_set::DigitSet,
    position::Position,
};

mod containers;
mod digit;
mod digit_grid;
mod digit_set;
mod position;
