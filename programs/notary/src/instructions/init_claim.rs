use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::error::NotaryError;
use crate::state::{Config, VaultState};

#[derive(Accounts)]
pub struct InitClaim<'info> {
    #[account(
        init_if_needed,
        seeds = [VaultState::SEED],
        bump,
        payer = payer,
        space = VaultState::SIZE
    )]
    pub vault_state: Box<Account<'info, VaultState>>,

    pub mint: Account<'info, Mint>,

    #[account(
        constraint = token_vault.mint == mint.key() @ NotaryError::InvalidTokenAccount,
        constraint = token_vault.owner == vault_state.key() @ NotaryError::InvalidVaultOwner,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    #[account(
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Bind the custodial vault. Idempotent: once bound, later calls succeed
/// without touching the binding.
pub fn handler(ctx: Context<InitClaim>) -> Result<()> {
    let config = &ctx.accounts.config;
    require!(config.initialized, NotaryError::NotInitialized);
    require!(
        config.admin_allowed(ctx.accounts.payer.key),
        NotaryError::Unauthorized
    );

    let state = &mut ctx.accounts.vault_state;
    if state.is_bound() {
        msg!("vault already bound: mint {}", state.token_mint);
        return Ok(());
    }

    state.bind(
        ctx.accounts.mint.key(),
        ctx.accounts.token_vault.key(),
        ctx.bumps.vault_state,
    );

    msg!(
        "vault bound: mint {}, vault {}",
        state.token_mint,
        state.token_vault
    );
    Ok(())
}
