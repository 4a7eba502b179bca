use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures while turning a trajectory log into a table.
///
/// Rows that are blank or start with a non-numeric token are not errors;
/// they never reach this type.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: expected {expected} columns but found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: '{token}' is not a number")]
    InvalidNumber { line: usize, token: String },

    #[error("expected at least 4 columns (t x y z) but rows have {found}")]
    TooFewColumns { found: usize },

    #[error("no numeric rows found")]
    NoData,
}
