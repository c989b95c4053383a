use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all kobuild operations.
#[derive(Debug, Error, Diagnostic)]
pub enum KobuildError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed build configuration.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check the source-set declarations in your build configuration"))]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type KobuildResult<T> = miette::Result<T>;
