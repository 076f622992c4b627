//! Board configuration.

use crate::{board::Board, dimensions::Dimensions, traits::Observer};
use educe::Educe;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default interval between two generations, in milliseconds.
pub const DEFAULT_SPEED: u64 = 1500;

/// Board configuration.
///
/// The board will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Number of rows the rule is applied to.
    #[educe(Default = 32)]
    pub rows: usize,

    /// Number of columns the rule is applied to.
    #[educe(Default = 32)]
    pub columns: usize,

    /// Interval between two generations while running, in milliseconds.
    #[educe(Default = 1500)]
    pub speed: u64,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(rows: usize, columns: usize) -> Self {
        Config {
            rows,
            columns,
            ..Config::default()
        }
    }

    /// Sets the size.
    pub fn set_dimensions<D: Into<Dimensions>>(mut self, dimensions: D) -> Self {
        let dimensions = dimensions.into();
        self.rows = dimensions.rows;
        self.columns = dimensions.columns;
        self
    }

    /// Sets the interval between two generations, in milliseconds.
    pub fn set_speed(mut self, speed: u64) -> Self {
        self.speed = speed;
        self
    }

    /// The size as `RxC`.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.rows, self.columns)
    }

    /// The interval between two generations.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.speed)
    }

    /// Creates an empty board from the configuration.
    pub fn board(&self) -> Board<()> {
        Board::new(self.clone(), ())
    }

    /// Creates an empty board that reports to `observer`.
    pub fn board_with_observer<O: Observer>(&self, observer: O) -> Board<O> {
        Board::new(self.clone(), observer)
    }
}
