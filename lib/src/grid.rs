//! The sparse store of living cells.

use crate::cells::Coord;
use std::collections::{btree_map, BTreeMap, BTreeSet};

/// Living cells, stored as a map from row index to the set of living columns.
///
/// A missing row means the whole row is dead. Memory is proportional to the
/// number of living cells, not to the size of the board.
///
/// Coordinates are not checked against any board size: a cell may live
/// anywhere, and whether it takes part in the next generation is up to
/// [`next_generation`](crate::next_generation).
#[derive(Clone, Debug, Default)]
pub struct Grid {
    rows: BTreeMap<usize, BTreeSet<usize>>,
}

/// Two grids are equal when they have the same living cells,
/// regardless of empty row entries.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.cells().eq(other.cells())
    }
}

impl Eq for Grid {}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cell at `(row, column)` is alive.
    #[inline]
    pub fn is_alive(&self, row: usize, column: usize) -> bool {
        self.rows
            .get(&row)
            .map_or(false, |columns| columns.contains(&column))
    }

    /// Flips the cell at `(row, column)` and returns whether it is now alive.
    ///
    /// Killing the last cell of a row leaves an empty row entry behind;
    /// it disappears at the next generation step.
    pub fn toggle(&mut self, row: usize, column: usize) -> bool {
        let columns = self.rows.entry(row).or_default();
        if columns.remove(&column) {
            false
        } else {
            columns.insert(column);
            true
        }
    }

    /// Makes the cell at `(row, column)` alive.
    pub fn insert(&mut self, row: usize, column: usize) {
        self.rows.entry(row).or_default().insert(column);
    }

    /// Kills the cell at `(row, column)`. Returns whether it was alive.
    pub fn remove(&mut self, row: usize, column: usize) -> bool {
        self.rows
            .get_mut(&row)
            .map_or(false, |columns| columns.remove(&column))
    }

    /// Replaces a whole row.
    pub fn replace_row(&mut self, row: usize, columns: BTreeSet<usize>) {
        self.rows.insert(row, columns);
    }

    /// The living columns of a row, if the row has an entry.
    pub fn row(&self, row: usize) -> Option<&BTreeSet<usize>> {
        self.rows.get(&row)
    }

    /// Iterates over the row entries, in ascending row order.
    ///
    /// Rows emptied by [`toggle`](Self::toggle) may show up with an empty set.
    pub fn rows(&self) -> btree_map::Iter<'_, usize, BTreeSet<usize>> {
        self.rows.iter()
    }

    /// Iterates over the coordinates of all living cells.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.rows
            .iter()
            .flat_map(|(&row, columns)| columns.iter().map(move |&column| (row, column)))
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.rows.values().map(BTreeSet::len).sum()
    }

    /// Whether there is no living cell at all.
    pub fn is_empty(&self) -> bool {
        self.rows.values().all(BTreeSet::is_empty)
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Drops row entries that have no living cell.
    pub fn prune(&mut self) {
        self.rows.retain(|_, columns| !columns.is_empty());
    }

    /// Whether every row entry has at least one living cell.
    pub fn is_pruned(&self) -> bool {
        self.rows.values().all(|columns| !columns.is_empty())
    }

    /// Displays the cells in `[0, rows) × [0, columns)` in
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext).
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`.
    pub fn plaintext(&self, rows: usize, columns: usize) -> String {
        let mut str = String::with_capacity((columns + 1) * rows);
        for row in 0..rows {
            let alive = self.rows.get(&row);
            for column in 0..columns {
                match alive {
                    Some(set) if set.contains(&column) => str.push('o'),
                    _ => str.push('.'),
                }
            }
            str.push('\n');
        }
        str
    }
}

impl FromIterator<Coord> for Grid {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut grid = Grid::new();
        grid.extend(iter);
        grid
    }
}

impl Extend<Coord> for Grid {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        for (row, column) in iter {
            self.insert(row, column);
        }
    }
}
