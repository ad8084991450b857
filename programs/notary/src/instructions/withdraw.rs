use anchor_lang::prelude::*;

use crate::error::NotaryError;
use crate::state::Config;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Box<Account<'info, Config>>,

    pub payer: Signer<'info>,

    /// CHECK: lamport destination chosen by the caller; only credited.
    #[account(mut)]
    pub destination: UncheckedAccount<'info>,
}

/// Move collected fees out of the config account. `amount = None` drains the
/// whole fee balance. The rent-exempt floor is untouchable, so the config
/// account survives every withdrawal.
pub fn handler(ctx: Context<Withdraw>, amount: Option<u64>) -> Result<()> {
    let config = &ctx.accounts.config;
    require!(config.initialized, NotaryError::NotInitialized);
    require!(
        config.admin_allowed(ctx.accounts.payer.key),
        NotaryError::Unauthorized
    );

    let floor = Rent::get()?.minimum_balance(Config::SIZE);
    let available = ctx.accounts.config.get_lamports().saturating_sub(floor);
    let amount = Config::withdrawal_amount(available, amount)?;

    ctx.accounts.config.sub_lamports(amount)?;
    ctx.accounts.destination.add_lamports(amount)?;

    msg!(
        "withdrew {} lamports to {}",
        amount,
        ctx.accounts.destination.key()
    );
    Ok(())
}
