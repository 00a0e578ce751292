//! Bridge error types

use receipt_printer::PrintError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    /// Message could not be decoded or encoded
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Message bytes are not UTF-8
    #[error("Invalid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// The user refused the runtime permission needed for the interface
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Discovery failed: {0}")]
    Discovery(String),

    #[error("Print failed: {0}")]
    Print(#[from] PrintError),

    /// Message channel I/O
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BridgeResult<T> = Result<T, BridgeError>;
