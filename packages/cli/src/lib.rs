//! `pqc-csr`: key pairs and self-signed PKCS#10 requests from the command line
//!
//! The binary is a thin wrapper over [`run`]; the pieces are public so the
//! generation flow can be driven from tests or other tools.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod report;
pub mod usage;

pub use self::cli::{Cli, Mode};
pub use self::config::GeneratorConfig;
pub use self::error::{CliError, Result};
pub use self::generator::Generator;

use csrgen_pqcrypto::SignatureAlgorithm;
use log::debug;
use serde_json::{Value, json};

/// Execute a parsed command line
///
/// # Errors
///
/// Returns usage errors for unknown algorithms or invalid subject/SAN
/// values, and fatal errors for generation or IO failures. Failures of
/// individual algorithms under `--all` are reported, not returned.
pub async fn run(cli: Cli) -> Result<()> {
    let mode = cli.mode()?;
    debug!("Running {mode:?} (json: {})", cli.json);
    match mode {
        Mode::List => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&algorithm_list())?);
            } else {
                println!("{}", usage::usage_text());
            }
        }
        Mode::Generate(algorithm) => {
            let generator = Generator::new(GeneratorConfig::from_cli(&cli)?);
            let report = generator.generate_and_save(algorithm).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Mode::All => {
            let generator = Generator::new(GeneratorConfig::from_cli(&cli)?);
            let report = generator.generate_all().await;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
    }
    Ok(())
}

/// `--list --json` output: one object per algorithm in table order
#[must_use]
pub fn algorithm_list() -> Value {
    SignatureAlgorithm::all()
        .map(|alg| {
            json!({
                "name": alg.name(),
                "family": alg.family(),
                "post_quantum": alg.is_post_quantum(),
                "nist_level": alg.nist_level(),
                "signature_oid": alg.signature_oid().to_string(),
            })
        })
        .collect()
}

/// JSON object printed for a failed run in `--json` mode
#[must_use]
pub fn error_report(error: &CliError) -> Value {
    json!({
        "success": false,
        "usage_error": error.is_usage(),
        "error": error.to_string(),
    })
}
