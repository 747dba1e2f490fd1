use std::result::Result as StdResult;

use thiserror::Error;

use crate::measure::MeasureError;

/// Result type for trellis operations.
pub type Result<T> = StdResult<T, Error>;

/// Core error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// The measurement collaborator could not size a leaf. Fatal to the
    /// current pass; no partial layout is produced.
    #[error("measure: {0}")]
    Measure(#[from] MeasureError),

    /// Invalid tree construction input, rejected before layout runs.
    #[error("invalid: {0}")]
    Invalid(String),
}
