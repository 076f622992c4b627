//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
///
/// A failed load never touches the board, so the prior grid stays intact.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Malformed snapshot: {0}.
    MalformedSnapshot(String),
    /// Unknown pattern: {0:?}.
    UnknownPattern(String),
    /// Probability should be between 0 and 1, got {0}.
    InvalidProbability(f64),
}
