use thiserror::Error;

/// Failures surfaced while driving the `initialize` scenario.
///
/// Setup problems are split from the call itself; once the request is on the
/// wire every failure mode (transport, signing, on-chain rejection) lands in
/// [`HarnessError::Call`] and aborts the scenario. No retries.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Provider settings were missing or unparseable.
    #[error("invalid provider configuration: {0}")]
    Config(String),

    /// The signing keypair could not be loaded.
    #[error("failed to load wallet keypair from {path}: {message}")]
    Wallet { path: String, message: String },

    /// The remote call failed.
    #[error("initialize call failed: {0}")]
    Call(#[from] anchor_client::ClientError),
}
