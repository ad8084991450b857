use anchor_lang::prelude::*;

use crate::state::{AdminPolicy, Config};

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// `init_if_needed` so a repeat call reaches the handler and fails with
    /// a typed error instead of the system program's account-in-use error.
    #[account(
        init_if_needed,
        seeds = [Config::SEED],
        bump,
        payer = payer,
        space = Config::SIZE
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    authority: Pubkey,
    fee: u64,
    admin_policy: AdminPolicy,
) -> Result<()> {
    let owner = ctx.accounts.payer.key();
    let config = &mut ctx.accounts.config;
    config.bootstrap(authority, owner, fee, admin_policy, ctx.bumps.config)?;

    msg!(
        "config initialized: authority {}, fee {}, policy {:?}",
        authority,
        fee,
        admin_policy
    );
    Ok(())
}
