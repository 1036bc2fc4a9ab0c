//! Error types for loading tabular data

use std::path::PathBuf;

use thiserror::Error;

/// What went wrong while turning file content into a table
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// The underlying CSV reader rejected the content (malformed quoting,
    /// inconsistent field counts, invalid UTF-8)
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// The header names the same column more than once
    #[error("duplicate column name {0:?} in header")]
    DuplicateColumn(String),
}

/// Errors surfaced by [`load_data`](crate::load_data)
///
/// Both kinds propagate directly to the caller; there is no local recovery
/// and no partial table is returned on failure.
#[derive(Debug, Error)]
pub enum DataError {
    /// The path could not be opened for reading
    #[error("cannot open {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file content is not well-formed delimited text
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseErrorKind,
    },
}

impl DataError {
    pub(crate) fn parse(path: &std::path::Path, kind: impl Into<ParseErrorKind>) -> Self {
        DataError::Parse {
            path: path.to_path_buf(),
            source: kind.into(),
        }
    }
}
