use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::ID as IX_ID;

use crate::ed25519;
use crate::error::NotaryError;
use crate::payload::BadgePayload;
use crate::state::{Badge, BadgeConfig, BadgeConfigPool, Config};

#[derive(Accounts)]
#[instruction(quiz: u64)]
pub struct UploadBadge<'info> {
    #[account(mut)]
    pub submitter: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        init_if_needed,
        seeds = [BadgeConfigPool::SEED],
        bump,
        payer = submitter,
        space = BadgeConfigPool::SIZE
    )]
    pub badge_config_pool: Box<Account<'info, BadgeConfigPool>>,

    #[account(
        init_if_needed,
        seeds = [BadgeConfig::SEED, &quiz.to_le_bytes()],
        bump,
        payer = submitter,
        space = BadgeConfig::SIZE
    )]
    pub badge_config: Box<Account<'info, BadgeConfig>>,

    /// `init_if_needed` plus the owner sentinel turns a re-issue into the
    /// typed duplicate error rather than a raw account-in-use failure.
    #[account(
        init_if_needed,
        seeds = [Badge::SEED, &quiz.to_le_bytes(), submitter.key().as_ref()],
        bump,
        payer = submitter,
        space = Badge::SIZE
    )]
    pub badge: Box<Account<'info, Badge>>,

    /// CHECK: must be the instructions sysvar; Anchor has no typed wrapper
    /// for it, so the address constraint does the checking.
    #[account(address = IX_ID)]
    pub ix_sysvar: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<UploadBadge>, quiz: u64, msg: Vec<u8>, sig: [u8; 64]) -> Result<()> {
    require!(quiz != 0, NotaryError::InvalidQuiz);

    let config = &ctx.accounts.config;
    require!(config.initialized, NotaryError::NotInitialized);

    let payload = BadgePayload::from_bytes(&msg)?;
    require!(payload.quiz == quiz, NotaryError::PayloadMismatch);
    require!(
        payload.owner.matches(ctx.accounts.submitter.key),
        NotaryError::PayloadMismatch
    );

    ed25519::require_matching_verification(
        &ctx.accounts.ix_sysvar,
        &config.authority,
        &msg,
        &sig,
    )?;

    let badge = &mut ctx.accounts.badge;
    badge.issue(
        ctx.accounts.submitter.key(),
        quiz,
        payload.tier,
        ctx.bumps.badge,
    )?;

    let badge_config = &mut ctx.accounts.badge_config;
    let first_for_quiz = badge_config.record_issue(quiz, ctx.bumps.badge_config);

    let pool = &mut ctx.accounts.badge_config_pool;
    pool.bump = ctx.bumps.badge_config_pool;
    pool.record_issue(first_for_quiz);

    msg!(
        "badge issued: quiz {}, tier {}, owner {}",
        quiz,
        payload.tier,
        ctx.accounts.submitter.key()
    );
    Ok(())
}
