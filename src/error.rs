//! Error types for icon generation and rendering

use std::io;

use thiserror::Error;

/// Result type for icon operations
pub type Result<T> = std::result::Result<T, IconError>;

/// Errors that can occur while generating or rendering icons
#[derive(Error, Debug)]
pub enum IconError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Icon not found
    #[error("Icon not found: {0}")]
    IconNotFound(String),

    /// Unknown variant name
    #[error("Unknown icon variant: {0}")]
    UnknownVariant(String),

    /// Render was called before a provider was registered
    #[error("Icon provider not initialized")]
    NotInitialized,

    /// A provider was already registered
    #[error("Icon provider already initialized")]
    AlreadyInitialized,
}
