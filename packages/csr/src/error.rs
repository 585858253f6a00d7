//! Error types for CSR construction

use csrgen_pqcrypto::PqCryptoError;
use std::fmt;
use thiserror::Error;

/// Result type alias for CSR operations
pub type Result<T> = std::result::Result<T, CsrError>;

/// Errors raised while building, encoding or checking a CSR
#[derive(Debug, Error)]
pub enum CsrError {
    /// Subject distinguished name could not be parsed
    #[error("Invalid subject '{subject}': {reason}")]
    InvalidSubject {
        /// The distinguished name as supplied
        subject: String,
        /// Parser diagnostic
        reason: String,
    },

    /// A Subject Alternative Name entry could not be encoded
    #[error("Invalid subject alternative name '{entry}': {reason}")]
    InvalidSubjectAltName {
        /// The entry as supplied
        entry: String,
        /// Why it was rejected
        reason: String,
    },

    /// The request names a signature algorithm outside the table
    #[error("Unsupported signature algorithm: {0}")]
    UnsupportedSignatureAlgorithm(String),

    /// Key generation, signing or verification failed
    #[error(transparent)]
    Crypto(#[from] PqCryptoError),

    /// DER or PEM encoding failed
    #[error("Encoding error: {0}")]
    Encoding(#[from] der::Error),

    /// Writing an artifact failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CsrError {
    /// Create an `InvalidSubject` error
    pub fn invalid_subject(subject: &str, reason: impl fmt::Display) -> Self {
        Self::InvalidSubject {
            subject: subject.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an `InvalidSubjectAltName` error
    pub fn invalid_san(entry: &str, reason: impl fmt::Display) -> Self {
        Self::InvalidSubjectAltName {
            entry: entry.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether the error stems from user input rather than a failure
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSubject { .. } | Self::InvalidSubjectAltName { .. }
        )
    }
}
