use thiserror::Error;

#[derive(Debug, Error)]
pub enum BulkError {
    /// Request rejected before any statement was generated: empty row set,
    /// rows of differing widths, or an empty template.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The insert template's column list could not be located or is malformed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The template's column list and the row shape disagree.
    #[error("Column count {columns} does not match row field count {fields}")]
    SchemaMismatch { columns: usize, fields: usize },

    /// The row shape cannot be batched at all (zero fields, or a single row
    /// already exceeds the placeholder ceiling).
    #[error("Schema error: {0}")]
    Schema(String),

    /// No connection configured on this instance.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Error with transaction begin or commit, or a statement rejected by
    /// the connection layer.
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// Rusqlite specific errors
    #[cfg(feature = "rusqlite")]
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

/// Result type for bulk insert operations
pub type Result<T> = std::result::Result<T, BulkError>;
