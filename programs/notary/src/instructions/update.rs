use anchor_lang::prelude::*;

use crate::error::NotaryError;
use crate::state::Config;

#[derive(Accounts)]
pub struct Update<'info> {
    #[account(
        mut,
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Box<Account<'info, Config>>,

    pub payer: Signer<'info>,
}

pub fn handler(ctx: Context<Update>, new_authority: Pubkey, new_fee: u64) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require!(config.initialized, NotaryError::NotInitialized);
    require!(
        config.admin_allowed(ctx.accounts.payer.key),
        NotaryError::Unauthorized
    );

    config.authority = new_authority;
    config.fee = new_fee;

    msg!("config updated: authority {}, fee {}", new_authority, new_fee);
    Ok(())
}
