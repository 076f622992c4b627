//! Saves and restores the grid.

use crate::{error::Error, grid::Grid};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{
    de::{self, Deserializer, Unexpected, Visitor},
    Deserialize, Serialize,
};
#[cfg(feature = "serde")]
use std::fmt::{self, Formatter};

// Every column index fits in an `i128`, so saving never loses a cell.
const _: () = assert!(usize::BITS < i128::BITS);

/// A representation of the grid which can be easily serialized.
///
/// Maps decimal row indices to the living columns of that row. As JSON it
/// looks like `{"0": [1, 2], "3": [0]}`.
///
/// Keys and columns are kept as they come, so that a snapshot read from
/// outside can be checked when it is turned into a [`Grid`].
/// Columns written as floats with no fractional part, like `2.0`,
/// are read as integers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Snapshot {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_rows"))]
    rows: BTreeMap<String, Vec<i128>>,
}

impl Snapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the columns of a row, under the key as written.
    pub fn insert<K: Into<String>>(&mut self, row: K, columns: Vec<i128>) {
        self.rows.insert(row.into(), columns);
    }

    /// Iterates over the raw entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[i128])> {
        self.rows
            .iter()
            .map(|(row, columns)| (row.as_str(), columns.as_slice()))
    }

    /// Number of row entries.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there is no row entry.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Restores the grid.
    ///
    /// Keys that name the same row, like `"3"` and `"03"`, are merged.
    pub fn to_grid(&self) -> Result<Grid, Error> {
        let mut grid = Grid::new();
        for (key, columns) in self.rows.iter() {
            let row = key.trim().parse::<usize>().map_err(|_| {
                Error::MalformedSnapshot(format!("row key {:?} is not an index", key))
            })?;
            let columns = columns
                .iter()
                .map(|&column| {
                    usize::try_from(column).map_err(|_| {
                        Error::MalformedSnapshot(format!(
                            "column {} in row {} is not an index",
                            column, row
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            grid.extend(columns.into_iter().map(|column| (row, column)));
        }
        Ok(grid)
    }

    /// Parses a snapshot from its JSON text.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::MalformedSnapshot(e.to_string()))
    }

    /// Writes the snapshot as JSON text.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> String {
        // A map of strings to integer arrays always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// A column as read from outside.
#[cfg(feature = "serde")]
struct Column(i128);

#[cfg(feature = "serde")]
struct ColumnVisitor;

#[cfg(feature = "serde")]
impl<'de> Visitor<'de> for ColumnVisitor {
    type Value = Column;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("an integer column index")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Column, E> {
        Ok(Column(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Column, E> {
        Ok(Column(v.into()))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Column, E> {
        Ok(Column(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Column, E> {
        i128::try_from(v)
            .map(Column)
            .map_err(|_| E::invalid_value(Unexpected::Other("a 128-bit integer"), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Column, E> {
        if v.is_finite() && v.fract() == 0.0 {
            // Saturates, and anything that large is not an index anyway.
            Ok(Column(v as i128))
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Column {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ColumnVisitor)
    }
}

#[cfg(feature = "serde")]
fn deserialize_rows<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<i128>>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows = BTreeMap::<String, Vec<Column>>::deserialize(deserializer)?;
    Ok(rows
        .into_iter()
        .map(|(row, columns)| (row, columns.into_iter().map(|Column(c)| c).collect()))
        .collect())
}

impl From<&Grid> for Snapshot {
    fn from(grid: &Grid) -> Self {
        let rows = grid
            .rows()
            .filter(|(_, columns)| !columns.is_empty())
            .map(|(row, columns)| {
                let columns = columns.iter().map(|&column| column as i128).collect();
                (row.to_string(), columns)
            })
            .collect();
        Snapshot { rows }
    }
}

impl TryFrom<&Snapshot> for Grid {
    type Error = Error;

    fn try_from(snapshot: &Snapshot) -> Result<Self, Self::Error> {
        snapshot.to_grid()
    }
}

impl Grid {
    /// Saves the grid as a [`Snapshot`].
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}
