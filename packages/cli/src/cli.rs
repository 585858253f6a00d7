//! Command-line arguments

use crate::{CliError, Result, usage};
use clap::{CommandFactory, FromArgMatches, Parser};
use csrgen_csr::DEFAULT_SUBJECT;
use csrgen_pqcrypto::SignatureAlgorithm;
use std::ffi::OsString;
use std::path::PathBuf;

/// Generate a key pair and self-signed PKCS#10 CSR
#[derive(Debug, Clone, Parser)]
#[command(name = "pqc-csr", version)]
#[command(about = "Generate a key pair and a self-signed PKCS#10 CSR for a signature algorithm")]
pub struct Cli {
    /// Algorithm name, matched exactly first and then case-insensitively
    #[arg(value_name = "ALGORITHM")]
    pub algorithm: Option<String>,

    /// Generate CSRs for every supported algorithm
    #[arg(long, conflicts_with_all = ["algorithm", "list"])]
    pub all: bool,

    /// List supported algorithms grouped by family
    #[arg(long, conflicts_with = "algorithm")]
    pub list: bool,

    /// Subject distinguished name (RFC 4514)
    #[arg(long, env = "CSR_SUBJECT", default_value = DEFAULT_SUBJECT)]
    pub subject: String,

    /// Directory for the CSR and private key files
    #[arg(short = 'o', long, env = "CSR_OUTDIR", default_value = ".")]
    pub outdir: PathBuf,

    /// Comma-separated Subject Alternative Names (DNS, IP, email or URI)
    #[arg(long, env = "CSR_SAN", default_value = "")]
    pub san: String,

    /// Print a JSON report instead of progress output
    #[arg(long)]
    pub json: bool,
}

/// What the invocation asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the algorithm listing
    List,
    /// Generate for every table entry
    All,
    /// Generate for one algorithm
    Generate(SignatureAlgorithm),
}

impl Cli {
    /// Parse arguments with the algorithm listing appended to `--help`
    ///
    /// # Errors
    ///
    /// Returns clap's error for malformed command lines, including the
    /// `--help` and `--version` displays.
    pub fn try_parse_with_listing<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command()
            .after_help(format!("{}\n{}", usage::algorithm_listing(), usage::examples()))
            .try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    /// Resolve the requested mode; no arguments at all behaves like `--list`
    ///
    /// # Errors
    ///
    /// Returns [`CliError::UnknownAlgorithm`] if the name is not in the table.
    pub fn mode(&self) -> Result<Mode> {
        if self.all {
            return Ok(Mode::All);
        }
        match (&self.algorithm, self.list) {
            (_, true) | (None, false) => Ok(Mode::List),
            (Some(name), false) => SignatureAlgorithm::resolve(name)
                .map(Mode::Generate)
                .ok_or_else(|| CliError::UnknownAlgorithm(name.clone())),
        }
    }
}
