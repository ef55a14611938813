//! Test harness for the `visibility` program.
//!
//! Drives the deployed program's `initialize` entry point over RPC and
//! reports the confirmed transaction signature. Configuration is an explicit
//! value handed to [`ProgramHandle::connect`]; the harness installs no
//! process-wide provider state.

pub mod config;
pub mod error;
pub mod program;

pub use config::ProviderConfig;
pub use error::HarnessError;
pub use program::ProgramHandle;
