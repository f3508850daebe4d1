//! Error types for FancyTalk
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using FancyTalkError
pub type Result<T> = std::result::Result<T, FancyTalkError>;

/// Unified error type for FancyTalk operations
#[derive(Debug, Error)]
pub enum FancyTalkError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    /// The datagram could not be decoded into a package
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A field is too long for its 16-bit length prefix
    #[error("Length overflow: {field} is {len} bytes (max 65535)")]
    LengthOverflow { field: &'static str, len: usize },

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
