//! Key pair, CSR and file generation driver

use crate::report::{BatchEntry, BatchReport, GenerationReport};
use crate::{GeneratorConfig, Result};
use csrgen_common::{LoggingTransformer, ensure_directory};
use csrgen_csr::{CsrBuilder, pem};
use csrgen_pqcrypto::{AlgorithmFamily, KeyPairBuilder, SignatureAlgorithm};
use log::debug;
use std::path::{Path, PathBuf};
use std::time::Instant;

const BATCH_RULE: &str = "═";
const PEM_RULE: &str = "─";
const RULE_WIDTH: usize = 60;

/// Runs generations with a fixed configuration
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Settings in use
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Print progress unless a JSON report was requested
    fn say(&self, line: impl AsRef<str>) {
        if !self.config.json {
            println!("{}", line.as_ref());
        }
    }

    /// CSR path for an algorithm: `<outdir>/<stem>.csr`
    #[must_use]
    pub fn csr_path(&self, algorithm: SignatureAlgorithm) -> PathBuf {
        self.config
            .output_dir
            .join(format!("{}.csr", algorithm.file_stem()))
    }

    /// Private key path for an algorithm: `<outdir>/<stem>_private.pem`
    #[must_use]
    pub fn private_key_path(&self, algorithm: SignatureAlgorithm) -> PathBuf {
        self.config
            .output_dir
            .join(format!("{}_private.pem", algorithm.file_stem()))
    }

    async fn prepare_output_dir(&self) -> Result<()> {
        let dir = &self.config.output_dir;
        debug!("Preparing output directory {}", dir.display());
        if ensure_directory(dir).await? {
            let shown = absolute(dir).await;
            self.say(format!("[*] Created output directory: {}", shown.display()));
        }
        Ok(())
    }

    /// Generate a key pair and CSR for `algorithm` and write both files
    ///
    /// # Errors
    ///
    /// Returns the first key generation, encoding or IO failure.
    pub async fn generate_and_save(&self, algorithm: SignatureAlgorithm) -> Result<GenerationReport> {
        let started = Instant::now();
        self.prepare_output_dir().await?;

        self.say(format!("[*] Generating {algorithm} key pair..."));
        let generated = KeyPairBuilder::new()
            .algorithm(algorithm)
            .generate()
            .await?;
        let key_pair = generated.key_pair;
        let public_der = key_pair.public_key_der()?;
        let private_der = key_pair.private_key_der()?;
        LoggingTransformer::log_key_generation(
            algorithm.name(),
            public_der.len(),
            private_der.len(),
            generated.elapsed,
        );
        LoggingTransformer::log_public_key(algorithm.name(), &public_der);

        self.say("[+] Key pair generated.");
        self.say(format!("    Algorithm       : {}", algorithm.family()));
        self.say(format!("    Public key size : {} bytes", public_der.len()));
        self.say(format!("    Private key size: {} bytes", private_der.len()));

        self.say(format!(
            "\n[*] Building PKCS#10 CSR for: {}",
            self.config.subject_text
        ));
        if let Some(echo) = self.config.san_echo() {
            self.say(format!("    Subject Alt Names: {echo}"));
        }
        let csr = CsrBuilder::new(self.config.subject.clone())
            .subject_alt_names(self.config.subject_alt_names.clone())
            .sign(&key_pair)?;
        self.say("[+] CSR created and self-signed.");

        let csr_path = self.csr_path(algorithm);
        let written = pem::write_csr(&csr_path, &csr).await?;
        LoggingTransformer::log_file_written("CSR", &csr_path, written);
        self.say(format!("[+] CSR written to {}", csr_path.display()));

        let key_path = self.private_key_path(algorithm);
        if let Some(note) = expanded_key_note(algorithm, private_der.len()) {
            self.say(note);
        }
        let written = pem::write_private_key(&key_path, &private_der).await?;
        LoggingTransformer::log_file_written("private key", &key_path, written);
        self.say(format!("[+] Private key written to {}", key_path.display()));

        let valid = csr.verify()?;
        LoggingTransformer::log_verification(algorithm.name(), valid);
        self.say(format!(
            "\n[+] CSR signature verification: {}",
            if valid { "PASSED ✓" } else { "FAILED ✗" }
        ));

        let csr_pem = csr.to_pem()?;
        self.say(format!("\n{}", PEM_RULE.repeat(RULE_WIDTH)));
        self.say("CSR (PEM):");
        self.say(PEM_RULE.repeat(RULE_WIDTH));
        if !self.config.json {
            print!("{csr_pem}");
        }

        let total = started.elapsed();
        LoggingTransformer::log_performance_metric(
            algorithm.name(),
            u64::try_from(total.as_millis()).unwrap_or(u64::MAX),
            true,
        );

        Ok(GenerationReport {
            algorithm,
            family: algorithm.family(),
            post_quantum: algorithm.is_post_quantum(),
            nist_level: algorithm.nist_level(),
            subject: self.config.subject_text.clone(),
            subject_alt_names: self.config.san_entries.clone(),
            public_key_size: public_der.len(),
            private_key_size: private_der.len(),
            public_key_fingerprint: key_pair.public_key_fingerprint()?,
            keygen_ms: u64::try_from(generated.elapsed.as_millis()).unwrap_or(u64::MAX),
            csr_path,
            private_key_path: key_path,
            signature_valid: valid,
            csr_pem,
        })
    }

    /// Generate for every algorithm in table order, continuing past failures
    pub async fn generate_all(&self) -> BatchReport {
        self.say(format!(
            "Generating CSRs for all {} algorithms...\n",
            SignatureAlgorithm::ALL.len()
        ));
        self.generate_batch(SignatureAlgorithm::all()).await
    }

    /// Generate for each algorithm in order, recording failures instead of
    /// stopping, and print the summary line
    pub async fn generate_batch(
        &self,
        algorithms: impl IntoIterator<Item = SignatureAlgorithm>,
    ) -> BatchReport {
        let mut report = BatchReport::default();
        for algorithm in algorithms {
            self.say(format!("\n{}", BATCH_RULE.repeat(RULE_WIDTH)));
            match self.generate_and_save(algorithm).await {
                Ok(generated) => report.push(BatchEntry::Succeeded(Box::new(generated))),
                Err(e) => {
                    LoggingTransformer::log_crypto_error(algorithm.name(), &e);
                    if !self.config.json {
                        eprintln!("[!] Failed to generate {algorithm}: {e}");
                    }
                    report.push(BatchEntry::Failed {
                        algorithm,
                        error: e.to_string(),
                    });
                }
            }
        }

        self.say(format!("\n{}", BATCH_RULE.repeat(RULE_WIDTH)));
        self.say(report.summary());
        report
    }
}

/// ML-DSA private keys are exported in expanded form; report their size
#[must_use]
pub fn expanded_key_note(algorithm: SignatureAlgorithm, private_key_size: usize) -> Option<String> {
    (algorithm.family() == AlgorithmFamily::MlDsa)
        .then(|| format!("    Expanded ML-DSA key: {private_key_size} bytes"))
}

async fn absolute(dir: &Path) -> PathBuf {
    tokio::fs::canonicalize(dir)
        .await
        .unwrap_or_else(|_| dir.to_path_buf())
}
