//! Validated generation settings

use crate::{Cli, Result};
use csrgen_csr::{GeneralName, Name, parse_subject, parse_subject_alt_names};
use std::path::PathBuf;

/// Settings shared by every generation run
///
/// Built from [`Cli`] before any key is generated so that a bad subject or
/// SAN entry fails fast.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Subject as supplied
    pub subject_text: String,
    /// Parsed subject
    pub subject: Name,
    /// SAN list exactly as supplied
    pub san_text: String,
    /// SAN entries trimmed, blanks removed
    pub san_entries: Vec<String>,
    /// Parsed SAN entries in the same order
    pub subject_alt_names: Vec<GeneralName>,
    /// Directory receiving the CSR and private key
    pub output_dir: PathBuf,
    /// Suppress progress output in favour of a JSON report
    pub json: bool,
}

impl GeneratorConfig {
    /// Validate the subject and SAN list
    ///
    /// # Errors
    ///
    /// Returns a usage-class error for an invalid subject or SAN entry.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let subject = parse_subject(&cli.subject)?;
        let subject_alt_names = parse_subject_alt_names(&cli.san)?;
        let san_entries = cli
            .san
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            subject_text: cli.subject.trim().to_string(),
            subject,
            san_text: cli.san.clone(),
            san_entries,
            subject_alt_names,
            output_dir: cli.outdir.clone(),
            json: cli.json,
        })
    }

    /// The SAN list echoed in progress output, `None` when no SANs are set
    ///
    /// Entries are shown as typed: split on `,`, whitespace kept, trailing
    /// empty entries dropped.
    #[must_use]
    pub fn san_echo(&self) -> Option<String> {
        if self.san_entries.is_empty() {
            return None;
        }
        let mut entries: Vec<&str> = self.san_text.split(',').collect();
        while entries.last().is_some_and(|entry| entry.is_empty()) {
            entries.pop();
        }
        Some(format!("[{}]", entries.join(", ")))
    }
}
