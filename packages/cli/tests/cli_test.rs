//! Tests for argument parsing and mode resolution

use csrgen::{Cli, CliError, Mode, usage};
use csrgen_pqcrypto::SignatureAlgorithm;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_with_listing(std::iter::once("pqc-csr").chain(args.iter().copied()))
        .expect("arguments should parse")
}

#[test]
fn no_arguments_lists_algorithms() {
    assert_eq!(parse(&[]).mode().expect("mode"), Mode::List);
    assert_eq!(parse(&["--list"]).mode().expect("mode"), Mode::List);
}

#[test]
fn all_flag_selects_batch_mode() {
    assert_eq!(parse(&["--all"]).mode().expect("mode"), Mode::All);
}

#[test]
fn algorithm_is_resolved_case_insensitively() {
    assert_eq!(
        parse(&["falcon-1024"]).mode().expect("mode"),
        Mode::Generate(SignatureAlgorithm::Falcon1024)
    );
}

#[test]
fn unknown_algorithm_is_a_usage_error() {
    let err = parse(&["ML-DSA-100"]).mode().expect_err("unknown algorithm");
    assert!(matches!(err, CliError::UnknownAlgorithm(ref name) if name == "ML-DSA-100"));
    assert!(err.is_usage());
    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.to_string(), "Unknown algorithm: ML-DSA-100");
}

#[test]
fn all_conflicts_with_algorithm() {
    let result = Cli::try_parse_with_listing(["pqc-csr", "--all", "ML-DSA-44"]);
    assert!(result.is_err());
}

#[test]
fn options_are_parsed() {
    let cli = parse(&[
        "EC-P256",
        "--subject",
        "CN=example.com",
        "-o",
        "out",
        "--san",
        "example.com,10.0.0.1",
        "--json",
    ]);
    assert_eq!(cli.subject, "CN=example.com");
    assert_eq!(cli.outdir, std::path::PathBuf::from("out"));
    assert_eq!(cli.san, "example.com,10.0.0.1");
    assert!(cli.json);
}

#[test]
fn help_includes_algorithm_listing() {
    let err = Cli::try_parse_with_listing(["pqc-csr", "--help"]).expect_err("help display");
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    let help = err.to_string();
    assert!(help.contains("Supported Algorithms:"));
    assert!(help.contains("SLH-DSA-SHAKE-256s"));
}

#[test]
fn listing_groups_by_family_in_table_order() {
    let listing = usage::algorithm_listing();
    let ml_dsa = listing.find("  ML-DSA:").expect("ML-DSA heading");
    let slh_dsa = listing.find("  SLH-DSA:").expect("SLH-DSA heading");
    let ed25519 = listing.find("  Ed25519:").expect("Ed25519 heading");
    let ed448 = listing.find("  Ed448:").expect("Ed448 heading");
    let ec = listing.find("  EC:").expect("EC heading");
    let rsa = listing.find("  RSA:").expect("RSA heading");
    assert!(ml_dsa < slh_dsa && slh_dsa < ed25519);
    assert!(ed25519 < ed448 && ed448 < ec && ec < rsa);
    assert_eq!(listing.matches("    • ").count(), SignatureAlgorithm::ALL.len());
    assert!(usage::usage_text().contains(&listing));
}
