//! Structured logging infrastructure
//!
//! Provides env_logger-based logging with hashed identifiers for key
//! material so fingerprints can be correlated without being printed in full.

use log::{debug, error, info, warn};
use sha2::{Digest, Sha256};
use std::path::Path;
use std::sync::Once;
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=info` - Enable info and above
    /// - `RUST_LOG=csrgen_pqcrypto=debug,csrgen_csr=info` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            debug!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a completed key generation with encoded sizes
    pub fn log_key_generation(algorithm: &str, public_len: usize, private_len: usize, elapsed: Duration) {
        info!(
            "Generated {algorithm} key pair (spki: {public_len} bytes, pkcs8: {private_len} bytes) in {}ms",
            elapsed.as_millis()
        );
    }

    /// Log a public key by hashed identifier
    ///
    /// Only a short digest prefix is logged, never the key itself.
    pub fn log_public_key(algorithm: &str, spki_der: &[u8]) {
        debug!("{algorithm} public key id: {}", Self::secure_hash(spki_der));
    }

    /// Log an artifact written to disk
    pub fn log_file_written(kind: &str, path: &Path, len: usize) {
        info!("Wrote {kind} to {} ({len} bytes)", path.display());
    }

    /// Log a CSR signature self-check
    pub fn log_verification(algorithm: &str, valid: bool) {
        if valid {
            info!("CSR signature verified: {algorithm}");
        } else {
            warn!("CSR signature verification failed: {algorithm}");
        }
    }

    /// Log a failed cryptographic operation
    ///
    /// Error messages from the crypto crates name the algorithm and sizes, never
    /// key bytes, so the `Display` text is safe to log.
    pub fn log_crypto_error(operation: &str, error: &dyn std::error::Error) {
        error!("{}", Self::crypto_error_message(operation, error));
    }

    /// Text logged by [`Self::log_crypto_error`]
    #[must_use]
    pub fn crypto_error_message(operation: &str, error: &dyn std::error::Error) -> String {
        format!("Cryptographic operation failed: {operation}: {error}")
    }

    /// Log performance metrics and timing information
    pub fn log_performance_metric(operation: &str, duration_ms: u64, success: bool) {
        if success {
            debug!("Performance: {operation} completed in {duration_ms}ms");
        } else {
            warn!("Performance: {operation} failed after {duration_ms}ms");
        }
    }

    /// SHA-256 digest prefix for logging
    ///
    /// Returns `#` followed by the first 12 hex characters.
    #[must_use]
    pub fn secure_hash(data: &[u8]) -> String {
        let hash = Sha256::digest(data);
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}
