use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::ID as IX_ID;

use crate::ed25519;
use crate::error::NotaryError;
use crate::payload::ConsensusPayload;
use crate::state::{Config, ConsensusRecord};

#[derive(Accounts)]
#[instruction(timestamp: u64)]
pub struct UploadValidation<'info> {
    #[account(mut)]
    pub submitter: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Box<Account<'info, Config>>,

    /// `init_if_needed` plus the `recorded` flag turns a replay into the
    /// typed duplicate error rather than a raw account-in-use failure.
    #[account(
        init_if_needed,
        seeds = [ConsensusRecord::SEED, &timestamp.to_le_bytes(), submitter.key().as_ref()],
        bump,
        payer = submitter,
        space = ConsensusRecord::SIZE
    )]
    pub record: Box<Account<'info, ConsensusRecord>>,

    /// CHECK: must be the instructions sysvar; Anchor has no typed wrapper
    /// for it, so the address constraint does the checking.
    #[account(address = IX_ID)]
    pub ix_sysvar: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<UploadValidation>,
    timestamp: u64,
    msg: Vec<u8>,
    sig: [u8; 64],
) -> Result<()> {
    let config = &ctx.accounts.config;
    require!(config.initialized, NotaryError::NotInitialized);

    let payload = ConsensusPayload::from_bytes(&msg)?;
    require!(payload.timestamp == timestamp, NotaryError::PayloadMismatch);
    let proof = payload.proof_bytes()?;

    ed25519::require_matching_verification(
        &ctx.accounts.ix_sysvar,
        &config.authority,
        &msg,
        &sig,
    )?;

    let global = config.authority == ctx.accounts.submitter.key();
    let fee = config.fee;

    let record = &mut ctx.accounts.record;
    record.record(global, timestamp, proof, ctx.bumps.record)?;

    // Charge the upload fee, if one is configured
    if fee > 0 {
        let fee_ix = anchor_lang::solana_program::system_instruction::transfer(
            ctx.accounts.submitter.key,
            &ctx.accounts.config.key(),
            fee,
        );
        anchor_lang::solana_program::program::invoke(
            &fee_ix,
            &[
                ctx.accounts.submitter.to_account_info(),
                ctx.accounts.config.to_account_info(),
                ctx.accounts.system_program.to_account_info(),
            ],
        )?;
    }

    msg!(
        "consensus recorded: timestamp {}, submitter {}, global {}",
        timestamp,
        ctx.accounts.submitter.key(),
        global
    );
    Ok(())
}
