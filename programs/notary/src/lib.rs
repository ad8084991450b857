use anchor_lang::prelude::*;

declare_id!("4DaqgJYbEwoCMPKcT9PvvQe95oikwUeEPemM92Gh9jdm");

pub mod ed25519;
pub mod error;
pub mod instructions;
pub mod payload;
pub mod state;

use instructions::*;
use state::AdminPolicy;

#[program]
pub mod notary {
    use super::*;

    /// Bootstrap the config with the attestation authority and upload fee
    pub fn initialize(
        ctx: Context<Initialize>,
        authority: Pubkey,
        fee: u64,
        admin_policy: AdminPolicy,
    ) -> Result<()> {
        initialize_handler(ctx, authority, fee, admin_policy)
    }

    /// Rotate the attestation authority and upload fee
    pub fn update(ctx: Context<Update>, new_authority: Pubkey, new_fee: u64) -> Result<()> {
        update_handler(ctx, new_authority, new_fee)
    }

    /// Move collected upload fees out of the config account
    pub fn withdraw(ctx: Context<Withdraw>, amount: Option<u64>) -> Result<()> {
        withdraw_handler(ctx, amount)
    }

    /// Record an attested consensus submission, at most once per
    /// (timestamp, submitter)
    pub fn upload_validation(
        ctx: Context<UploadValidation>,
        timestamp: u64,
        msg: Vec<u8>,
        sig: [u8; 64],
    ) -> Result<()> {
        upload_validation_handler(ctx, timestamp, msg, sig)
    }

    /// Issue an attested badge, at most once per (quiz, owner)
    pub fn upload_badge(
        ctx: Context<UploadBadge>,
        quiz: u64,
        msg: Vec<u8>,
        sig: [u8; 64],
    ) -> Result<()> {
        upload_badge_handler(ctx, quiz, msg, sig)
    }

    /// Bind the custodial reward vault to its mint and token account
    pub fn init_claim(ctx: Context<InitClaim>) -> Result<()> {
        init_claim_handler(ctx)
    }

    /// Disburse an attested reward from the vault, consuming the signed nonce
    pub fn claim(ctx: Context<Claim>, task: u64, msg: Vec<u8>, sig: [u8; 64]) -> Result<()> {
        claim_handler(ctx, task, msg, sig)
    }
}
