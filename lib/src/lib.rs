//! A sparse [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! engine.
//!
//! The [`Board`] keeps the living cells in a sparse [`Grid`], applies the
//! `B3/S23` rule inside a bounded rectangle, and reports what happens to an
//! [`Observer`]. A [`Clock`] steps a board at a fixed pace.
//!
//! # Example
//!
//! ```rust
//! use lifeboard_lib::Config;
//!
//! let mut board = Config::new(5, 5).board();
//! board.load_pattern("blinker").unwrap();
//! assert!(board.is_alive(2, 1));
//!
//! board.step();
//! assert!(board.is_alive(1, 2));
//! assert_eq!(board.generation(), 1);
//! ```

mod board;
mod cells;
mod clock;
mod config;
mod dimensions;
mod error;
mod generation;
mod grid;
pub mod patterns;
pub mod random;
mod snapshot;
mod traits;

pub use board::Board;
pub use cells::{Coord, State, Transition};
pub use clock::{Clock, ClockState};
pub use config::{Config, DEFAULT_SPEED};
pub use dimensions::{parse_dimensions, Dimensions};
pub use error::Error;
pub use generation::{next_generation, rule};
pub use grid::Grid;
pub use patterns::{Pattern, PatternLoad};
pub use snapshot::Snapshot;
pub use traits::Observer;
