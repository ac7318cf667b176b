//! Error types for the brand consultant.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Consultation session errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Reply dispatcher has stopped; the session can no longer answer")]
    DispatcherClosed,
}

/// Result type alias for the brand consultant.
pub type Result<T> = std::result::Result<T, Error>;
