use anyhow::Result;
use tracing_subscriber::EnvFilter;
use visibility_harness::{ProgramHandle, ProviderConfig};

// Runs the initialize scenario once against the provider named by
// ANCHOR_PROVIDER_URL / ANCHOR_WALLET. Any failure aborts with a non-zero
// exit status.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ProviderConfig::from_env()?;
    let program = ProgramHandle::connect(config, visibility::id())?;
    program.initialize()?;
    Ok(())
}
