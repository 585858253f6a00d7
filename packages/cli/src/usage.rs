//! Usage text and the algorithm listing

use csrgen_pqcrypto::SignatureAlgorithm;
use std::fmt::Write as _;

const RULE_WIDTH: usize = 61;

/// Supported algorithms grouped by family in table order
#[must_use]
pub fn algorithm_listing() -> String {
    let mut out = String::from("Supported Algorithms:\n");
    out.push_str(&"─".repeat(RULE_WIDTH));
    out.push('\n');

    let mut last_family = None;
    for alg in SignatureAlgorithm::all() {
        let family = alg.family();
        if last_family != Some(family) {
            if last_family.is_some() {
                out.push('\n');
            }
            let _ = writeln!(out, "  {family}:");
            last_family = Some(family);
        }
        let _ = writeln!(out, "    • {alg}");
    }
    out
}

/// Environment variables and examples shown after the listing
#[must_use]
pub fn examples() -> &'static str {
    "Environment:
  CSR_SUBJECT=\"CN=...,O=...,C=...\"   Subject DN (default: CN=Test Certificate,O=Example Org,C=US)
  CSR_OUTDIR=/path/to/dir            Output directory (default: current directory)
  CSR_SAN=a.com,b.com                Comma-separated Subject Alt Names (optional)

Examples:
  pqc-csr ML-DSA-87
  pqc-csr SLH-DSA-SHA2-128f
  pqc-csr FALCON-512 -o out/
  pqc-csr --all
  pqc-csr EC-P256 --san example.com,www.example.com"
}

/// Full usage text printed for `--list` and after usage errors
#[must_use]
pub fn usage_text() -> String {
    format!(
        "
Usage: pqc-csr <ALGORITHM> [OPTIONS]
       pqc-csr --all [OPTIONS]
       pqc-csr --list | --help

Options:
  <ALGORITHM>          Generate CSR for the specified algorithm
  --all                Generate CSRs for all supported algorithms
  --list               List all supported algorithms
  --subject <DN>       Subject DN
  -o, --outdir <DIR>   Output directory
  --san <LIST>         Comma-separated Subject Alt Names
  --json               Print a JSON report instead of progress output
  --help               Show this help message

{}
{}
",
        algorithm_listing(),
        examples()
    )
}
