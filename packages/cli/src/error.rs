//! Error types for the command-line front end

use csrgen_csr::CsrError;
use csrgen_pqcrypto::PqCryptoError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by `pqc-csr`
#[derive(Debug, Error)]
pub enum CliError {
    /// The algorithm argument matched no table entry
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Invalid combination or value of arguments
    #[error("{0}")]
    Usage(String),

    /// Subject, SAN or request failure
    #[error(transparent)]
    Csr(#[from] CsrError),

    /// Key generation or signing failure
    #[error(transparent)]
    Crypto(#[from] PqCryptoError),

    /// Report serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output directory or file failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Whether the error is the caller's fault and warrants the usage text
    #[must_use]
    pub fn is_usage(&self) -> bool {
        match self {
            Self::UnknownAlgorithm(_) | Self::Usage(_) => true,
            Self::Csr(e) => e.is_input_error(),
            _ => false,
        }
    }

    /// Process exit code: 1 for usage errors, 2 otherwise
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.is_usage() { 1 } else { 2 }
    }
}
