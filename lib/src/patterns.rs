//! Preset patterns.

use crate::{cells::Coord, dimensions::Dimensions, error::Error, grid::Grid};

/// A pre-authored starting configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// The identifier used to look the pattern up.
    pub id: &'static str,

    /// A human readable name.
    pub name: &'static str,

    /// Living cells, as `(row, column)`.
    pub cells: &'static [Coord],

    /// The smallest board that shows the pattern comfortably,
    /// as `(rows, columns)`.
    pub min_grid: (usize, usize),

    /// A suggested zoom level (cell size) for whoever draws the board.
    pub zoom: Option<u32>,
}

/// The result of loading a pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternLoad {
    /// The cells of the pattern, to replace the current grid.
    pub grid: Grid,

    /// The board size to switch to: the larger of the current size
    /// and the pattern's minimum, in each direction.
    pub viewport: Dimensions,

    /// The zoom level the pattern asks for, if any.
    pub zoom: Option<u32>,
}

const GLIDER: &[Coord] = &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];

const BLINKER: &[Coord] = &[(2, 1), (2, 2), (2, 3)];

const TOAD: &[Coord] = &[(2, 2), (2, 3), (2, 4), (3, 1), (3, 2), (3, 3)];

const BEACON: &[Coord] = &[
    (1, 1),
    (1, 2),
    (2, 1),
    (2, 2),
    (3, 3),
    (3, 4),
    (4, 3),
    (4, 4),
];

#[rustfmt::skip]
const PULSAR: &[Coord] = &[
    (2, 4), (2, 5), (2, 6), (2, 10), (2, 11), (2, 12),
    (4, 2), (4, 7), (4, 9), (4, 14),
    (5, 2), (5, 7), (5, 9), (5, 14),
    (6, 2), (6, 7), (6, 9), (6, 14),
    (7, 4), (7, 5), (7, 6), (7, 10), (7, 11), (7, 12),
    (9, 4), (9, 5), (9, 6), (9, 10), (9, 11), (9, 12),
    (10, 2), (10, 7), (10, 9), (10, 14),
    (11, 2), (11, 7), (11, 9), (11, 14),
    (12, 2), (12, 7), (12, 9), (12, 14),
    (14, 4), (14, 5), (14, 6), (14, 10), (14, 11), (14, 12),
];

const PENTADECATHLON: &[Coord] = &[
    (8, 4),
    (8, 5),
    (8, 6),
    (8, 7),
    (8, 8),
    (8, 9),
    (8, 10),
    (8, 11),
    (8, 12),
    (8, 13),
];

const LWSS: &[Coord] = &[
    (1, 1),
    (1, 4),
    (2, 5),
    (3, 1),
    (3, 5),
    (4, 2),
    (4, 3),
    (4, 4),
    (4, 5),
];

const R_PENTOMINO: &[Coord] = &[(29, 30), (29, 31), (30, 29), (30, 30), (31, 30)];

const DIEHARD: &[Coord] = &[
    (20, 26),
    (21, 20),
    (21, 21),
    (22, 21),
    (22, 25),
    (22, 26),
    (22, 27),
];

const ACORN: &[Coord] = &[
    (40, 41),
    (41, 43),
    (42, 40),
    (42, 41),
    (42, 44),
    (42, 45),
    (42, 46),
];

#[rustfmt::skip]
const GOSPER_GLIDER_GUN: &[Coord] = &[
    (1, 25),
    (2, 23), (2, 25),
    (3, 13), (3, 14), (3, 21), (3, 22), (3, 35), (3, 36),
    (4, 12), (4, 16), (4, 21), (4, 22), (4, 35), (4, 36),
    (5, 1), (5, 2), (5, 11), (5, 17), (5, 21), (5, 22),
    (6, 1), (6, 2), (6, 11), (6, 15), (6, 17), (6, 18), (6, 23), (6, 25),
    (7, 11), (7, 17), (7, 25),
    (8, 12), (8, 16),
    (9, 13), (9, 14),
];

/// All preset patterns.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        id: "glider",
        name: "Glider",
        cells: GLIDER,
        min_grid: (20, 20),
        zoom: None,
    },
    Pattern {
        id: "blinker",
        name: "Blinker",
        cells: BLINKER,
        min_grid: (5, 5),
        zoom: Some(50),
    },
    Pattern {
        id: "toad",
        name: "Toad",
        cells: TOAD,
        min_grid: (6, 6),
        zoom: Some(50),
    },
    Pattern {
        id: "beacon",
        name: "Beacon",
        cells: BEACON,
        min_grid: (6, 6),
        zoom: Some(50),
    },
    Pattern {
        id: "pulsar",
        name: "Pulsar",
        cells: PULSAR,
        min_grid: (17, 17),
        zoom: Some(30),
    },
    Pattern {
        id: "pentadecathlon",
        name: "Pentadecathlon",
        cells: PENTADECATHLON,
        min_grid: (17, 18),
        zoom: Some(30),
    },
    Pattern {
        id: "lwss",
        name: "Lightweight spaceship",
        cells: LWSS,
        min_grid: (7, 40),
        zoom: Some(25),
    },
    Pattern {
        id: "r-pentomino",
        name: "R-pentomino",
        cells: R_PENTOMINO,
        min_grid: (60, 60),
        zoom: Some(10),
    },
    Pattern {
        id: "diehard",
        name: "Diehard",
        cells: DIEHARD,
        min_grid: (45, 45),
        zoom: Some(15),
    },
    Pattern {
        id: "acorn",
        name: "Acorn",
        cells: ACORN,
        min_grid: (100, 100),
        zoom: Some(8),
    },
    Pattern {
        id: "gosper-glider-gun",
        name: "Gosper glider gun",
        cells: GOSPER_GLIDER_GUN,
        min_grid: (40, 60),
        zoom: Some(12),
    },
];

/// Looks up a pattern by its identifier.
pub fn get(id: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.id == id)
}

/// Identifiers of all preset patterns.
pub fn ids() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|pattern| pattern.id)
}

/// Loads a pattern for a board of `current_rows × current_columns`.
pub fn load(id: &str, current_rows: usize, current_columns: usize) -> Result<PatternLoad, Error> {
    let pattern = get(id).ok_or_else(|| Error::UnknownPattern(id.to_string()))?;
    Ok(pattern.load(current_rows, current_columns))
}

impl Pattern {
    /// The cells of the pattern as a new grid.
    pub fn grid(&self) -> Grid {
        self.cells.iter().copied().collect()
    }

    /// Loads the pattern for a board of `current_rows × current_columns`.
    pub fn load(&self, current_rows: usize, current_columns: usize) -> PatternLoad {
        let (min_rows, min_columns) = self.min_grid;
        PatternLoad {
            grid: self.grid(),
            viewport: Dimensions::new(
                min_rows.max(current_rows),
                min_columns.max(current_columns),
            ),
            zoom: self.zoom,
        }
    }
}
