//! Error types for the mt940_statements library.

use std::io;
use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading statements or exporting them.
///
/// Parsing is fail-fast: the first malformed field aborts the whole input.
/// The description decoders never produce an error.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error occurred during read or write operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error writing CSV output.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error writing JSON output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `:60F:`/`:62F:` field does not fit the fixed balance layout.
    #[error("Malformed balance: {0}")]
    MalformedBalance(String),

    /// The first line of a `:61:` field does not match the statement line grammar.
    #[error("Malformed transaction: {0}")]
    MalformedTransaction(String),

    /// Debit/credit mark outside of `D`, `C`, `RD`, `RC`.
    #[error("Unknown debit/credit mark: {0}")]
    UnknownSign(String),

    /// Bank name not recognized for description decoding.
    #[error("Unknown bank: {0}")]
    UnknownBank(String),

    /// Invalid output format specified.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}
