use anchor_lang::prelude::*;

use crate::error::NotaryError;

/// Who may call the admin-mutating operations (`update`, `withdraw`,
/// `init_claim`).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AdminPolicy {
    /// Any payer; existence checks only.
    Open,
    /// Only the payer that initialized the config.
    OwnerOnly,
}

/// Global engine configuration. Singleton PDA.
#[account]
pub struct Config {
    /// Public key whose signature authorizes attested submissions.
    pub authority: Pubkey,
    /// The payer that initialized this deployment.
    pub owner: Pubkey,
    /// Fee in lamports charged per consensus submission.
    pub fee: u64,
    /// Admin gating mode for mutating config operations.
    pub admin_policy: AdminPolicy,
    /// Set once by `initialize`; guards against bootstrap replays.
    pub initialized: bool,
    /// PDA bump seed
    pub bump: u8,
}

impl Config {
    pub const SEED: &'static [u8] = b"config";

    pub const SIZE: usize = 8 + // discriminator
        32 + // authority
        32 + // owner
        8 + // fee
        1 + // admin_policy
        1 + // initialized
        1; // bump

    /// Write the initial configuration. Fails if it was already written,
    /// leaving the stored authority and fee untouched.
    pub fn bootstrap(
        &mut self,
        authority: Pubkey,
        owner: Pubkey,
        fee: u64,
        admin_policy: AdminPolicy,
        bump: u8,
    ) -> Result<()> {
        require!(!self.initialized, NotaryError::AlreadyInitialized);
        self.authority = authority;
        self.owner = owner;
        self.fee = fee;
        self.admin_policy = admin_policy;
        self.initialized = true;
        self.bump = bump;
        Ok(())
    }

    /// Whether `payer` may run an admin-mutating operation under the
    /// configured policy.
    pub fn admin_allowed(&self, payer: &Pubkey) -> bool {
        match self.admin_policy {
            AdminPolicy::Open => true,
            AdminPolicy::OwnerOnly => self.owner == *payer,
        }
    }

    /// Resolve a withdrawal request against the available fee balance.
    /// `None` drains the full balance; an explicit amount must fit in it.
    pub fn withdrawal_amount(available: u64, requested: Option<u64>) -> Result<u64> {
        match requested {
            None => Ok(available),
            Some(amount) if amount <= available => Ok(amount),
            Some(_) => Err(NotaryError::InsufficientBalance.into()),
        }
    }
}

/// One consensus submission, keyed by (timestamp, submitter). Created at
/// most once; later submissions at the same key are rejected.
#[account]
pub struct ConsensusRecord {
    /// Existence marker; a fresh PDA deserializes to `false`.
    pub recorded: bool,
    /// True iff the submitter was the config authority at creation time.
    pub global: bool,
    /// Attested timestamp.
    pub timestamp: u64,
    /// The 32-byte consensus proof carried by the attestation.
    pub proof: [u8; 32],
    /// PDA bump seed
    pub bump: u8,
}

impl ConsensusRecord {
    pub const SEED: &'static [u8] = b"consensus";

    pub const SIZE: usize = 8 + // discriminator
        1 + // recorded
        1 + // global
        8 + // timestamp
        32 + // proof
        1; // bump

    /// Materialize the record. Fails if it was already written.
    pub fn record(
        &mut self,
        global: bool,
        timestamp: u64,
        proof: [u8; 32],
        bump: u8,
    ) -> Result<()> {
        require!(!self.recorded, NotaryError::DuplicateAttestation);
        self.recorded = true;
        self.global = global;
        self.timestamp = timestamp;
        self.proof = proof;
        self.bump = bump;
        Ok(())
    }
}

/// Aggregate badge counters across all quizzes. Singleton PDA, created
/// lazily on the first badge.
#[account]
pub struct BadgeConfigPool {
    /// Total badges issued across all quizzes.
    pub total: u64,
    /// Number of distinct quiz ids seen.
    pub config_count: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl BadgeConfigPool {
    pub const SEED: &'static [u8] = b"badge_pool";

    pub const SIZE: usize = 8 + // discriminator
        8 + // total
        8 + // config_count
        1; // bump

    /// Count one issuance; `new_quiz` marks the first badge of a quiz.
    pub fn record_issue(&mut self, new_quiz: bool) {
        self.total = self.total.saturating_add(1);
        if new_quiz {
            self.config_count = self.config_count.saturating_add(1);
        }
    }
}

/// Per-quiz badge counters. PDA keyed by quiz id, created lazily.
#[account]
pub struct BadgeConfig {
    /// Quiz id; zero means the config has not been used yet.
    pub quiz: u64,
    /// Badges issued for this quiz.
    pub total: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl BadgeConfig {
    pub const SEED: &'static [u8] = b"badge_config";

    pub const SIZE: usize = 8 + // discriminator
        8 + // quiz
        8 + // total
        1; // bump

    /// Count one issuance, claiming the config on first use. Returns
    /// whether this was the quiz's first badge.
    pub fn record_issue(&mut self, quiz: u64, bump: u8) -> bool {
        let first_for_quiz = self.quiz == 0;
        if first_for_quiz {
            self.quiz = quiz;
            self.bump = bump;
        }
        self.total = self.total.saturating_add(1);
        first_for_quiz
    }
}

/// An issued badge, keyed by (quiz, owner). At most one per key.
#[account]
pub struct Badge {
    /// Badge owner; the default pubkey marks an unissued slot.
    pub owner: Pubkey,
    /// Quiz id.
    pub quiz: u64,
    /// Tier of badge.
    pub tier: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl Badge {
    pub const SEED: &'static [u8] = b"badge";

    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        8 + // quiz
        8 + // tier
        1; // bump

    /// Issue the badge. Fails if this (quiz, owner) slot is taken.
    pub fn issue(&mut self, owner: Pubkey, quiz: u64, tier: u64, bump: u8) -> Result<()> {
        require!(self.owner == Pubkey::default(), NotaryError::DuplicateBadge);
        self.owner = owner;
        self.quiz = quiz;
        self.tier = tier;
        self.bump = bump;
        Ok(())
    }
}

/// Reward claim bookkeeping, keyed by (task, receiver). `times` doubles as
/// the next expected nonce, so a signed nonce is consumed exactly once.
#[account]
pub struct ClaimRecord {
    /// Receiver this record belongs to.
    pub owner: Pubkey,
    /// Reward granted by the most recent claim.
    pub reward: u64,
    /// Successful claims so far; also the next nonce the authority must sign.
    pub times: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl ClaimRecord {
    pub const SEED: &'static [u8] = b"reward";

    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        8 + // reward
        8 + // times
        1; // bump

    /// Consume `nonce` and count the claim. A replayed or out-of-order
    /// nonce is rejected.
    pub fn consume(&mut self, nonce: u64, owner: Pubkey, reward: u64) -> Result<()> {
        require!(self.times == nonce, NotaryError::NonceAlreadyUsed);
        self.owner = owner;
        self.reward = reward;
        self.times = self.times.saturating_add(1);
        Ok(())
    }
}

/// Custodial vault binding. Singleton PDA; also the authority over the
/// vault token account, so its seeds sign outbound transfers.
#[account]
pub struct VaultState {
    /// The mint of the token to be distributed.
    pub token_mint: Pubkey,
    /// The token account that holds the tokens to be distributed.
    pub token_vault: Pubkey,
    /// Total rewards disbursed from the vault.
    pub claimed: u64,
    /// PDA bump seed
    pub bump: u8,
    /// Reserved for future use
    pub reserved: [u8; 64],
}

impl VaultState {
    pub const SEED: &'static [u8] = b"vault";

    pub const SIZE: usize = 8 + // discriminator
        32 + // token_mint
        32 + // token_vault
        8 + // claimed
        1 + // bump
        64; // reserved

    /// Whether the vault has been bound to a mint.
    pub fn is_bound(&self) -> bool {
        self.token_mint != Pubkey::default()
    }

    pub fn bind(&mut self, token_mint: Pubkey, token_vault: Pubkey, bump: u8) {
        self.token_mint = token_mint;
        self.token_vault = token_vault;
        self.bump = bump;
    }

    pub fn add_claimed(&mut self, amount: u64) {
        self.claimed = self.claimed.saturating_add(amount);
    }
}
