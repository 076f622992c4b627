//! Board sizes and their `RxC` descriptors.

use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The size of the board, in cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    pub fn new(rows: usize, columns: usize) -> Self {
        Dimensions { rows, columns }
    }

    /// Parses an `RxC` descriptor.
    ///
    /// Each side that fails to parse keeps the value it has in `self`.
    pub fn parse_or_keep(self, spec: &str) -> Self {
        let (rows, columns) = parse_dimensions(spec, self.rows, self.columns);
        Dimensions { rows, columns }
    }
}

/// Writes the descriptor, e.g. `30x40`.
impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

impl From<(usize, usize)> for Dimensions {
    fn from((rows, columns): (usize, usize)) -> Self {
        Dimensions { rows, columns }
    }
}

/// Parses a grid size like `"30x40"` into `(rows, columns)`.
///
/// This never fails. A side that is missing or not a number falls back to
/// `current_rows` or `current_columns`.
///
/// Like a lenient integer parser, a side only needs to start with digits:
/// `"30px"` still reads as 30.
pub fn parse_dimensions(spec: &str, current_rows: usize, current_columns: usize) -> (usize, usize) {
    let mut sides = spec.split('x');
    let rows = sides.next().and_then(leading_int).unwrap_or(current_rows);
    let columns = sides.next().and_then(leading_int).unwrap_or(current_columns);
    (rows, columns)
}

/// The integer at the start of `s`, after leading whitespace.
fn leading_int(s: &str) -> Option<usize> {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s[..end].parse().ok()
}
