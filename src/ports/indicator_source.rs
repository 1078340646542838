//! IndicatorSource port - Interface for loading the reference indicator table.
//!
//! The table is loaded exactly once at startup. Every failure of this port is
//! fatal: the service must not accept requests without reference data.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::impact::{ReferenceTable, ReferenceTableError};

/// Port for obtaining the reference indicator table.
///
/// # Example
///
/// ```ignore
/// let source = CsvIndicatorSource::new("gen_element_imputed.csv");
/// let table = source.load_table().await?;
/// ```
#[async_trait]
pub trait IndicatorSource: Send + Sync {
    /// Loads and validates the complete table.
    ///
    /// # Errors
    ///
    /// - `Unreadable` if the underlying data cannot be read
    /// - `Malformed` if a row cannot be parsed
    /// - `MissingColumns` if required indicator columns are absent
    /// - `Table` if rows are missing, duplicated or hold invalid values
    async fn load_table(&self) -> Result<ReferenceTable, IndicatorSourceError>;

    /// Human-readable description of where the data comes from, for logs.
    fn describe(&self) -> String;
}

/// Errors that can occur while loading reference data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorSourceError {
    /// Data could not be read at all.
    #[error("Cannot read reference data from {location}: {message}")]
    Unreadable { location: String, message: String },

    /// A row could not be parsed.
    #[error("Malformed reference data at line {line}: {message}")]
    Malformed { line: u64, message: String },

    /// Header row lacks required columns.
    #[error("Reference data is missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Rows do not form a valid table.
    #[error(transparent)]
    Table(#[from] ReferenceTableError),
}

impl IndicatorSourceError {
    /// Creates an unreadable source error.
    pub fn unreadable(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unreadable {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed row error.
    pub fn malformed(line: u64, message: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            message: message.into(),
        }
    }
}
