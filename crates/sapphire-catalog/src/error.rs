//! Error types for the catalog
//!
//! Covers the two ways the catalog can fail:
//! - Loading the source tables (fatal, raised once at startup)
//! - Parsing query parameters supplied as text

use crate::item::TableKind;
use std::path::PathBuf;

/// Errors raised while loading a source table
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// Source file does not exist
    #[error("{table} source not found: {path}")]
    Missing {
        /// Table being loaded
        table: TableKind,
        /// Path that was opened
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Source file exists but could not be opened
    #[error("io error reading {table} source {path}: {source}")]
    Io {
        /// Table being loaded
        table: TableKind,
        /// Path that was opened
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// CSV structure or a required field is broken
    #[error("malformed {table} source: {source}")]
    Csv {
        /// Table being loaded
        table: TableKind,
        /// Underlying error
        #[source]
        source: csv::Error,
    },

    /// Row parsed but violates a value constraint
    #[error("malformed {table} source at line {line}: {reason}")]
    InvalidRow {
        /// Table being loaded
        table: TableKind,
        /// Source line of the row
        line: u64,
        /// What is wrong with it
        reason: String,
    },
}

impl DataLoadError {
    /// Classify an open failure as missing or unreadable
    pub fn open_error(table: TableKind, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::Missing { table, path, source }
        } else {
            Self::Io { table, path, source }
        }
    }

    /// Create row constraint error
    pub fn invalid_row(table: TableKind, line: u64, reason: impl Into<String>) -> Self {
        Self::InvalidRow {
            table,
            line,
            reason: reason.into(),
        }
    }

    /// Table whose source failed
    #[must_use]
    pub fn table(&self) -> TableKind {
        match self {
            Self::Missing { table, .. }
            | Self::Io { table, .. }
            | Self::Csv { table, .. }
            | Self::InvalidRow { table, .. } => *table,
        }
    }
}

/// Errors parsing textual query parameters
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryParseError {
    /// Table name is not `collection` or `products`
    #[error("unknown table: '{0}' (expected 'collection' or 'products')")]
    UnknownTable(String),

    /// Sort label is not recognised
    #[error("unknown sort order: '{0}' (expected 'None', 'Low to High' or 'High to Low')")]
    UnknownSortOrder(String),

    /// Item id is not `C<row>` or `P<row>`
    #[error("invalid item id: '{0}' (expected C<row> or P<row>)")]
    InvalidItemId(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn not_found_is_classified_as_missing() {
        let err = DataLoadError::open_error(
            TableKind::Products,
            "nope.csv",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, DataLoadError::Missing { .. }));
        assert_eq!(err.to_string(), "products source not found: nope.csv");
    }

    #[test]
    fn other_io_failures_are_not_missing() {
        let err = DataLoadError::open_error(
            TableKind::Collection,
            "locked.csv",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, DataLoadError::Io { .. }));
        assert_eq!(err.table(), TableKind::Collection);
    }

    #[test]
    fn invalid_row_display() {
        let err = DataLoadError::invalid_row(TableKind::Collection, 4, "negative price -1");
        assert_eq!(
            err.to_string(),
            "malformed collection source at line 4: negative price -1"
        );
    }
}
