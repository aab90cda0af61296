//! Flight source error types.

use std::path::PathBuf;

use super::convert::ConversionError;

/// Errors while loading flights. Any of these aborts the whole load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The CSV structure is broken (bad quoting, wrong field count, missing column)
    #[error("malformed flights CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A row parsed as CSV but holds an invalid value
    #[error("row {row}: {source}")]
    Record {
        /// 1-based data row, header excluded
        row: usize,
        source: ConversionError,
    },
}

impl LoadError {
    /// The data row at fault, when known.
    pub fn row(&self) -> Option<usize> {
        match self {
            LoadError::Record { row, .. } => Some(*row),
            _ => None,
        }
    }
}
