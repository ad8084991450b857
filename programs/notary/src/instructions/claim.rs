use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::ID as IX_ID;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::ed25519;
use crate::error::NotaryError;
use crate::payload::ClaimPayload;
use crate::state::{ClaimRecord, Config, VaultState};

#[derive(Accounts)]
#[instruction(task: u64)]
pub struct Claim<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [VaultState::SEED],
        bump,
    )]
    pub vault_state: Box<Account<'info, VaultState>>,

    #[account(
        init_if_needed,
        seeds = [ClaimRecord::SEED, &task.to_le_bytes(), payer.key().as_ref()],
        bump,
        payer = payer,
        space = ClaimRecord::SIZE
    )]
    pub claim_record: Box<Account<'info, ClaimRecord>>,

    #[account(
        mut,
        constraint = token_vault.mint == vault_state.token_mint @ NotaryError::InvalidTokenAccount,
        constraint = token_vault.owner == vault_state.key() @ NotaryError::InvalidVaultOwner,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = payer,
        associated_token::token_program = token_program,
        constraint = receiver.owner == payer.key() @ NotaryError::InvalidTokenAccount,
        constraint = receiver.mint == vault_state.token_mint @ NotaryError::InvalidTokenAccount,
    )]
    pub receiver: Box<Account<'info, TokenAccount>>,

    pub mint: Box<Account<'info, Mint>>,

    /// CHECK: must be the instructions sysvar; Anchor has no typed wrapper
    /// for it, so the address constraint does the checking.
    #[account(address = IX_ID)]
    pub ix_sysvar: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler(ctx: Context<Claim>, task: u64, msg: Vec<u8>, sig: [u8; 64]) -> Result<()> {
    let config = &ctx.accounts.config;
    require!(config.initialized, NotaryError::NotInitialized);

    let payload = ClaimPayload::from_bytes(&msg)?;
    require!(payload.task == task, NotaryError::PayloadMismatch);
    require!(
        payload.receiver.matches(ctx.accounts.payer.key),
        NotaryError::PayloadMismatch
    );

    ed25519::require_matching_verification(
        &ctx.accounts.ix_sysvar,
        &config.authority,
        &msg,
        &sig,
    )?;

    let record = &mut ctx.accounts.claim_record;
    record.consume(payload.nonce, ctx.accounts.payer.key(), payload.reward)?;
    record.bump = ctx.bumps.claim_record;

    let vault_state = &mut ctx.accounts.vault_state;
    vault_state.add_claimed(payload.reward);
    let bump = vault_state.bump;

    let seeds = &[VaultState::SEED, &[bump]];
    let signer = &[&seeds[..]];
    let cpi_accounts = Transfer {
        from: ctx.accounts.token_vault.to_account_info(),
        to: ctx.accounts.receiver.to_account_info(),
        authority: ctx.accounts.vault_state.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer);
    token::transfer(cpi_ctx, payload.reward)?;

    msg!(
        "reward claimed: task {}, nonce {}, reward {}, receiver {}",
        task,
        payload.nonce,
        payload.reward,
        ctx.accounts.payer.key()
    );
    Ok(())
}
