use anchor_lang::prelude::*;

declare_id!("5gxeL3AFd6utfoUjuRxRHyFbujXEZuUdFonBXNwaas64");

#[program]
pub mod visibility {
    use super::*;

    /// One-time setup entry point.
    /// The program keeps no account state, so a repeat call simply runs the
    /// same helper path again and succeeds.
    pub fn initialize(_ctx: Context<Initialize>) -> Result<()> {
        telemetry::log_boot();
        guard::mark_initialized();
        Ok(())
    }

    /// Openly callable no-op, useful as a liveness check against a deployed
    /// build.
    pub fn ping(_ctx: Context<Initialize>) -> Result<()> {
        msg!("pong");
        Ok(())
    }

    /// Logging helpers shared with the rest of the crate.
    pub mod telemetry {
        use anchor_lang::prelude::*;

        pub fn log_boot() {
            msg!("visibility: boot");
        }
    }

    /// Setup bookkeeping, reachable only from inside this module tree.
    pub mod guard {
        use anchor_lang::prelude::*;

        pub(in crate::visibility) fn mark_initialized() {
            msg!("visibility: initialized");
        }
    }
}

/// Consumes the instruction helpers from outside the program module.
/// `guard::mark_initialized` is `pub(in crate::visibility)` and does not
/// resolve here; only the telemetry surface is reachable.
pub mod probe {
    use crate::visibility;

    pub fn boot_log_only() {
        visibility::telemetry::log_boot();
    }
}

#[derive(Accounts)]
pub struct Initialize {}
