//! Cells in the cellular automaton.

use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    Dead,
    Alive,
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            State::Alive => State::Dead,
            State::Dead => State::Alive,
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            State::Alive
        } else {
            State::Dead
        }
    }
}

/// The coordinates of a cell.
///
/// `(row, column)`, both 0-indexed.
pub type Coord = (usize, usize);

/// A cell whose state changed during a generation step.
///
/// Only useful for incremental redrawing; the engine itself never reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transition {
    pub row: usize,
    pub column: usize,
    /// The state of the cell after the step.
    pub state: State,
}
