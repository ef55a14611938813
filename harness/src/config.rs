use std::path::PathBuf;

use anchor_client::solana_sdk::commitment_config::CommitmentConfig;
use anchor_client::solana_sdk::signature::{read_keypair_file, Keypair};
use anchor_client::Cluster;

use crate::error::HarnessError;

/// Environment variables read by [`ProviderConfig::from_env`]. These are the
/// same two variables the Anchor toolchain exports for its own test runner.
pub const PROVIDER_URL_VAR: &str = "ANCHOR_PROVIDER_URL";
pub const WALLET_VAR: &str = "ANCHOR_WALLET";

/// Connection settings for one provider: endpoint, signer, and the
/// commitment level a call waits for.
///
/// Always passed by value into [`crate::ProgramHandle::connect`]; nothing in
/// the harness holds provider state globally.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// RPC endpoint URL, or a named cluster such as `localnet` or `devnet`.
    pub provider_url: String,
    /// Path to the signing keypair file (solana-keygen JSON format).
    pub wallet_path: PathBuf,
    /// Commitment the client waits for before reporting a signature.
    pub commitment: CommitmentConfig,
}

impl ProviderConfig {
    /// Builds a config with the default `confirmed` commitment.
    pub fn new(provider_url: impl Into<String>, wallet_path: impl Into<PathBuf>) -> Self {
        Self {
            provider_url: provider_url.into(),
            wallet_path: wallet_path.into(),
            commitment: CommitmentConfig::confirmed(),
        }
    }

    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }

    /// Reads `ANCHOR_PROVIDER_URL` and `ANCHOR_WALLET` into a config value.
    pub fn from_env() -> Result<Self, HarnessError> {
        let provider_url = std::env::var(PROVIDER_URL_VAR)
            .map_err(|_| HarnessError::Config(format!("{PROVIDER_URL_VAR} is not set")))?;
        let wallet_path = std::env::var(WALLET_VAR)
            .map_err(|_| HarnessError::Config(format!("{WALLET_VAR} is not set")))?;
        Ok(Self::new(provider_url, wallet_path))
    }

    /// Resolves the endpoint into a [`Cluster`]. Custom HTTP endpoints get
    /// their websocket URL derived from the HTTP one.
    pub fn cluster(&self) -> Result<Cluster, HarnessError> {
        self.provider_url.parse().map_err(|err| {
            HarnessError::Config(format!(
                "unusable provider url {url}: {err}",
                url = self.provider_url
            ))
        })
    }

    /// Loads the signing keypair from `wallet_path`.
    pub fn read_wallet(&self) -> Result<Keypair, HarnessError> {
        read_keypair_file(&self.wallet_path).map_err(|err| HarnessError::Wallet {
            path: self.wallet_path.display().to_string(),
            message: err.to_string(),
        })
    }
}
