//! Error types for txcanon.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for txcanon operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in txcanon.
#[derive(Error, Debug)]
pub enum Error {
    /// The transaction contains errors that cannot be fixed by re-encoding.
    #[error("The transaction contains unfixable errors")]
    TxContainsUnfixableErrors,

    /// The transaction is not canonical; signing it as-is is disallowed.
    #[error("The transaction contains fixable errors, transform it before signing")]
    TxContainsFixableErrors,

    /// A witnessed transaction would have its signatures invalidated by re-encoding.
    #[error("Cannot transform the transaction, it contains witnesses that its re-encoding would invalidate")]
    CannotTransformSignedTx,

    /// Invalid hex in the transaction CBOR.
    #[error("Invalid hex in transaction CBOR: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The codec failed to parse the transaction bytes.
    #[error("Failed to parse transaction: {0}")]
    ParseFailed(String),

    /// The specified file was not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// An I/O error occurred.
    #[error("IO error{}: {source}", path.as_ref().map(|p| format!(" on {}", p.display())).unwrap_or_default())]
    IoError {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// The transaction file is not a valid text envelope.
    #[error("Invalid transaction file {}: {reason}", path.display())]
    InvalidEnvelope { path: PathBuf, reason: String },

    /// The envelope type names an era this tool does not handle.
    #[error("Unsupported era in transaction file: {0}")]
    UnsupportedEra(String),
}

impl Error {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Validation verdicts
            Error::TxContainsUnfixableErrors
            | Error::TxContainsFixableErrors
            | Error::CannotTransformSignedTx => 1,
            // Malformed transaction bytes
            Error::InvalidHex(_) | Error::ParseFailed(_) => 2,
            // I/O errors
            Error::FileNotFound(_) | Error::IoError { .. } => 3,
            // Envelope file errors
            Error::InvalidEnvelope { .. } | Error::UnsupportedEra(_) => 4,
        }
    }
}
