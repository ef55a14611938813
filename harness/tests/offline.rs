// Failure-path checks that run without a validator. The end-to-end scenario
// lives in tests/initialize.rs behind the `localnet-tests` feature.

use anchor_client::solana_sdk::commitment_config::CommitmentConfig;
use anchor_client::solana_sdk::signature::{write_keypair_file, Keypair};
use visibility_harness::{HarnessError, ProgramHandle, ProviderConfig};

#[test]
fn unreachable_endpoint_fails_the_scenario() {
    let dir = tempfile::tempdir().expect("tempdir");
    let wallet = dir.path().join("id.json");
    write_keypair_file(&Keypair::new(), &wallet).expect("write wallet");

    // port 9 (discard) has no validator behind it; the call must come back
    // as an error instead of hanging or silently succeeding
    let config = ProviderConfig::new("http://127.0.0.1:9", wallet)
        .with_commitment(CommitmentConfig::processed());
    let program = ProgramHandle::connect(config, visibility::id()).expect("connect does not dial");

    let err = program.initialize().expect_err("nothing is listening");
    assert!(matches!(err, HarnessError::Call(_)), "unexpected error class: {err}");
}

#[test]
fn connect_requires_a_loadable_wallet() {
    let config = ProviderConfig::new("localnet", "/nonexistent/wallet.json");
    let err = ProgramHandle::connect(config, visibility::id()).expect_err("wallet is missing");
    assert!(matches!(err, HarnessError::Wallet { .. }), "unexpected error class: {err}");
}

#[test]
fn handle_reports_the_bound_program_id() {
    let dir = tempfile::tempdir().expect("tempdir");
    let wallet = dir.path().join("id.json");
    write_keypair_file(&Keypair::new(), &wallet).expect("write wallet");

    let config = ProviderConfig::new("localnet", wallet);
    let program = ProgramHandle::connect(config, visibility::id()).expect("connect");
    assert_eq!(program.id(), visibility::id());
}

// Single test owning the ANCHOR_* variables end to end, so no parallel test
// observes a half-mutated environment.
#[test]
fn from_env_reads_the_anchor_provider_variables() {
    use visibility_harness::config::{PROVIDER_URL_VAR, WALLET_VAR};

    std::env::remove_var(PROVIDER_URL_VAR);
    std::env::remove_var(WALLET_VAR);
    assert!(matches!(ProviderConfig::from_env(), Err(HarnessError::Config(_))));

    std::env::set_var(PROVIDER_URL_VAR, "http://127.0.0.1:8899");
    assert!(
        matches!(ProviderConfig::from_env(), Err(HarnessError::Config(_))),
        "wallet variable is still missing"
    );

    std::env::set_var(WALLET_VAR, "/tmp/wallet.json");
    let config = ProviderConfig::from_env().expect("both variables set");
    assert_eq!(config.provider_url, "http://127.0.0.1:8899");
    assert_eq!(config.wallet_path, std::path::PathBuf::from("/tmp/wallet.json"));

    std::env::remove_var(PROVIDER_URL_VAR);
    std::env::remove_var(WALLET_VAR);
}
