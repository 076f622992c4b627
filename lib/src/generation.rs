//! Computing the next generation.
//!
//! The rule is Conway's Game of Life, `B3/S23`, on the Moore neighborhood.

use crate::{
    cells::{State, Transition},
    grid::Grid,
};
use std::{collections::BTreeSet, mem};

/// Whether a cell is alive in the next generation.
///
/// A living cell survives with 2 or 3 living neighbors;
/// a dead cell is born with exactly 3.
#[inline]
pub fn rule(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}

/// Computes the generation after `grid`.
///
/// Only cells in `[0, rows) × [0, columns)` are evaluated. Everything outside
/// is dead as far as the neighbor counts are concerned, and there is no
/// wraparound. Living cells outside this window are copied into the result
/// untouched.
///
/// The result only contains rows with at least one living cell.
/// The returned [`Transition`]s list every cell in the window whose state
/// changed.
pub fn next_generation(grid: &Grid, rows: usize, columns: usize) -> (Grid, Vec<Transition>) {
    let mut next = residue(grid, rows, columns);
    let mut transitions = Vec::new();
    if rows == 0 || columns == 0 {
        return (next, transitions);
    }

    // Three dense rows with one dead cell of padding on each side.
    let width = columns + 2;
    let mut above = vec![0_u8; width];
    let mut current = vec![0_u8; width];
    let mut below = vec![0_u8; width];
    load_row(&mut current, grid.row(0), columns);

    for row in 0..rows {
        if row + 1 < rows {
            load_row(&mut below, grid.row(row + 1), columns);
        } else {
            below.fill(0);
        }

        let column_sum = |c: usize| above[c] + current[c] + below[c];
        let mut left = 0;
        let mut middle = column_sum(1);
        let mut alive_columns = BTreeSet::new();

        for column in 0..columns {
            let right = column_sum(column + 2);
            let alive = current[column + 1] == 1;
            let neighbors = left + middle + right - current[column + 1];
            let next_alive = rule(alive, neighbors);

            if next_alive {
                alive_columns.insert(column);
            }
            if next_alive != alive {
                transitions.push(Transition {
                    row,
                    column,
                    state: State::from(next_alive),
                });
            }

            left = middle;
            middle = right;
        }

        next.extend(alive_columns.into_iter().map(|column| (row, column)));

        // `below` now holds the oldest row and gets refilled next time.
        mem::swap(&mut above, &mut current);
        mem::swap(&mut current, &mut below);
    }

    (next, transitions)
}

/// Living cells outside the evaluation window, which pass through unchanged.
fn residue(grid: &Grid, rows: usize, columns: usize) -> Grid {
    let mut residue = Grid::new();
    for (&row, set) in grid.rows() {
        if row >= rows {
            if !set.is_empty() {
                residue.replace_row(row, set.clone());
            }
        } else {
            residue.extend(set.range(columns..).map(|&column| (row, column)));
        }
    }
    residue
}

/// Fills a padded dense row from a sparse one, ignoring cells past `columns`.
fn load_row(buffer: &mut [u8], set: Option<&BTreeSet<usize>>, columns: usize) {
    buffer.fill(0);
    if let Some(set) = set {
        for &column in set.range(..columns) {
            buffer[column + 1] = 1;
        }
    }
}
