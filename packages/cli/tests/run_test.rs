//! Tests for the top-level `run` entry point and its JSON output

use csrgen::{Cli, CliError, algorithm_list, error_report, run};
use csrgen_pqcrypto::SignatureAlgorithm;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_with_listing(std::iter::once("pqc-csr").chain(args.iter().copied()))
        .expect("arguments should parse")
}

#[tokio::test]
async fn list_json_runs_without_touching_the_filesystem() {
    let dir = tempfile::tempdir().expect("tempdir");
    let outdir = dir.path().join("never-created");
    let outdir = outdir.to_str().expect("utf-8 temp path");

    run(parse(&["--list", "--json", "-o", outdir]))
        .await
        .expect("listing succeeds");
    assert!(!dir.path().join("never-created").exists());
}

#[test]
fn algorithm_list_has_one_object_per_algorithm() {
    let list = algorithm_list();
    let entries = list.as_array().expect("array");
    assert_eq!(entries.len(), SignatureAlgorithm::ALL.len());

    for (entry, alg) in entries.iter().zip(SignatureAlgorithm::all()) {
        let object = entry.as_object().expect("object");
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["family", "name", "nist_level", "post_quantum", "signature_oid"]
        );
        assert_eq!(entry["name"], alg.name());
        assert_eq!(entry["signature_oid"], alg.signature_oid().to_string());
    }

    assert_eq!(entries[0]["family"], "ML-DSA");
    assert_eq!(entries[0]["post_quantum"], true);
    assert_eq!(entries[0]["nist_level"], 2);
    let ed448 = entries
        .iter()
        .find(|entry| entry["name"] == "Ed448")
        .expect("Ed448 listed");
    assert_eq!(ed448["post_quantum"], false);
    assert!(ed448["nist_level"].is_null());
}

#[tokio::test]
async fn invalid_subject_is_a_usage_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let outdir = dir.path().to_str().expect("utf-8 temp path");

    let err = run(parse(&["Ed25519", "--json", "-o", outdir, "--subject", "no equals sign"]))
        .await
        .expect_err("subject must be rejected");
    assert!(err.is_usage());
    assert_eq!(err.exit_code(), 1);
    assert!(!dir.path().join("ed25519.csr").exists());
}

#[tokio::test]
async fn unknown_algorithm_fails_from_run() {
    let err = run(parse(&["ML-DSA-99"])).await.expect_err("unknown algorithm");
    assert!(matches!(err, CliError::UnknownAlgorithm(_)));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn single_generation_writes_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let outdir = dir.path().to_str().expect("utf-8 temp path");

    run(parse(&["ed448", "--json", "-o", outdir, "--san", "ed448.example.com"]))
        .await
        .expect("generation succeeds");
    assert!(dir.path().join("ed448.csr").is_file());
    assert!(dir.path().join("ed448_private.pem").is_file());
}

#[tokio::test]
async fn all_with_failures_still_succeeds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"x").expect("create file");

    run(parse(&["--all", "--json", "-o", blocker.to_str().expect("utf-8 temp path")]))
        .await
        .expect("failures are reported, not returned");
}

#[test]
fn error_report_shape() {
    let usage = error_report(&CliError::UnknownAlgorithm("DSA".to_string()));
    assert_eq!(usage["success"], false);
    assert_eq!(usage["usage_error"], true);
    assert_eq!(usage["error"], "Unknown algorithm: DSA");

    let fatal = error_report(&CliError::Io(std::io::Error::other("disk full")));
    assert_eq!(fatal["success"], false);
    assert_eq!(fatal["usage_error"], false);
    assert_eq!(fatal["error"], "IO error: disk full");
    assert_eq!(fatal.as_object().expect("object").len(), 3);
}
