use std::rc::Rc;

use anchor_client::solana_client::rpc_client::RpcClient;
use anchor_client::solana_sdk::pubkey::Pubkey;
use anchor_client::solana_sdk::signature::{Keypair, Signature};
use anchor_client::{Client, Program};
use tracing::info;

use crate::config::ProviderConfig;
use crate::error::HarnessError;

/// Typed handle on a deployed program, bound to one provider and signer.
pub struct ProgramHandle {
    program: Program<Rc<Keypair>>,
}

impl std::fmt::Debug for ProgramHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgramHandle")
            .field("program_id", &self.program.id())
            .finish()
    }
}

impl ProgramHandle {
    /// Connects to `program_id` through the given provider.
    ///
    /// The config is consumed here; the handle owns its client and signer
    /// and nothing is installed process-wide.
    pub fn connect(config: ProviderConfig, program_id: Pubkey) -> Result<Self, HarnessError> {
        let wallet = config.read_wallet()?;
        let client = Client::new_with_options(config.cluster()?, Rc::new(wallet), config.commitment);
        let program = client.program(program_id)?;
        Ok(Self { program })
    }

    /// Issues the zero-argument `initialize` call, blocks until the
    /// configured commitment is reached, and returns the signature.
    ///
    /// The confirmed signature is logged exactly once.
    pub fn initialize(&self) -> Result<Signature, HarnessError> {
        let signature = self
            .program
            .request()
            .accounts(visibility::accounts::Initialize {})
            .args(visibility::instruction::Initialize {})
            .send()?;
        info!(%signature, "initialize confirmed");
        Ok(signature)
    }

    /// Blocking RPC client on the same endpoint, for test plumbing.
    pub fn rpc(&self) -> RpcClient {
        self.program.rpc()
    }

    /// The program id this handle is bound to.
    pub fn id(&self) -> Pubkey {
        self.program.id()
    }
}
