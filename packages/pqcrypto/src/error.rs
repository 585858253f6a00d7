//! Error types for the key generation and signing crate

use std::fmt;
use thiserror::Error;

/// Result type alias for key generation and signing operations
pub type Result<T> = std::result::Result<T, PqCryptoError>;

/// Main error type for key generation, signing and key encoding
#[derive(Error, Debug)]
pub enum PqCryptoError {
    /// Invalid key or key-related error
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Key generation failed
    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    /// Signature generation failed
    #[error("Signature generation failed: {0}")]
    SignatureFailed(String),

    /// Signature bytes could not be parsed for verification
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// Unsupported or unknown algorithm
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Invalid key size
    #[error("Invalid key size: expected {expected}, got {actual}")]
    InvalidKeySize {
        /// Expected key size
        expected: usize,
        /// Actual key size provided
        actual: usize,
    },

    /// ASN.1 / DER encoding of a key failed
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl PqCryptoError {
    /// Create an `InvalidKey` error with a formatted message
    pub fn invalid_key(msg: impl fmt::Display) -> Self {
        Self::InvalidKey(msg.to_string())
    }

    /// Create a `KeyGenerationFailed` error with a formatted message
    pub fn key_generation_failed(msg: impl fmt::Display) -> Self {
        Self::KeyGenerationFailed(msg.to_string())
    }

    /// Create a `SignatureFailed` error with a formatted message
    pub fn signature_failed(msg: impl fmt::Display) -> Self {
        Self::SignatureFailed(msg.to_string())
    }

    /// Create an `InvalidSignature` error with a formatted message
    pub fn invalid_signature(msg: impl fmt::Display) -> Self {
        Self::InvalidSignature(msg.to_string())
    }

    /// Create an `UnsupportedAlgorithm` error with a formatted message
    pub fn unsupported(msg: impl fmt::Display) -> Self {
        Self::UnsupportedAlgorithm(msg.to_string())
    }

    /// Create an `EncodingError` with a formatted message
    pub fn encoding(msg: impl fmt::Display) -> Self {
        Self::EncodingError(msg.to_string())
    }

    /// Create an `InternalError` with a formatted message
    pub fn internal(msg: impl fmt::Display) -> Self {
        Self::InternalError(msg.to_string())
    }
}

impl From<der::Error> for PqCryptoError {
    fn from(err: der::Error) -> Self {
        Self::EncodingError(err.to_string())
    }
}

impl From<spki::Error> for PqCryptoError {
    fn from(err: spki::Error) -> Self {
        Self::EncodingError(format!("SPKI: {err}"))
    }
}

impl From<pkcs8::Error> for PqCryptoError {
    fn from(err: pkcs8::Error) -> Self {
        Self::EncodingError(format!("PKCS#8: {err}"))
    }
}
