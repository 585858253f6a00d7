//! Machine-readable generation reports

use csrgen_pqcrypto::{AlgorithmFamily, SignatureAlgorithm};
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of one successful generation
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// Algorithm used
    pub algorithm: SignatureAlgorithm,
    /// Key-pair generator family
    pub family: AlgorithmFamily,
    /// Whether the algorithm is post-quantum
    pub post_quantum: bool,
    /// NIST PQC security category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nist_level: Option<u8>,
    /// Subject DN as supplied
    pub subject: String,
    /// SAN entries as supplied
    pub subject_alt_names: Vec<String>,
    /// DER `SubjectPublicKeyInfo` length
    pub public_key_size: usize,
    /// DER PKCS#8 length
    pub private_key_size: usize,
    /// Hex SHA-256 of the public key
    pub public_key_fingerprint: String,
    /// Key generation time
    pub keygen_ms: u64,
    /// Written CSR file
    pub csr_path: PathBuf,
    /// Written private key file
    pub private_key_path: PathBuf,
    /// Result of the CSR self-check
    pub signature_valid: bool,
    /// CSR in PEM form
    pub csr_pem: String,
}

/// One line of an `--all` run
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchEntry {
    /// Generation succeeded
    Succeeded(Box<GenerationReport>),
    /// Generation failed
    Failed {
        /// Algorithm attempted
        algorithm: SignatureAlgorithm,
        /// Error message
        error: String,
    },
}

/// Results of an `--all` run
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Number of algorithms that succeeded
    pub succeeded: usize,
    /// Number of algorithms that failed
    pub failed: usize,
    /// Per-algorithm results in table order
    pub results: Vec<BatchEntry>,
}

impl BatchReport {
    /// Record one result
    pub fn push(&mut self, entry: BatchEntry) {
        match entry {
            BatchEntry::Succeeded(_) => self.succeeded += 1,
            BatchEntry::Failed { .. } => self.failed += 1,
        }
        self.results.push(entry);
    }

    /// `Summary: <n> succeeded, <m> failed`
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Summary: {} succeeded, {} failed",
            self.succeeded, self.failed
        )
    }
}
