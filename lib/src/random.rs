//! Filling the grid with random cells.

use crate::{error::Error, grid::Grid};
use rand::{distributions::Bernoulli, prelude::Distribution, Rng};
use std::collections::BTreeSet;

/// The probability of a cell being alive when nothing else is asked for.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Replaces every row in `[0, rows)` with random cells.
///
/// Each cell in `[0, rows) × [0, columns)` is alive with the given
/// probability, independently. Rows from `rows` on keep their cells.
pub fn fill<R: Rng + ?Sized>(
    grid: &mut Grid,
    rows: usize,
    columns: usize,
    probability: f64,
    rng: &mut R,
) -> Result<(), Error> {
    let bernoulli =
        Bernoulli::new(probability).map_err(|_| Error::InvalidProbability(probability))?;
    for row in 0..rows {
        let alive = (0..columns)
            .filter(|_| bernoulli.sample(rng))
            .collect::<BTreeSet<_>>();
        grid.replace_row(row, alive);
    }
    Ok(())
}
