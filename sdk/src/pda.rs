//! Address derivation for the program's accounts.
//!
//! Seeds are shared with the program through its state constants, so a
//! client can locate any record from its key without touching the chain.

use solana_sdk::pubkey::Pubkey;

use notary::state::{Badge, BadgeConfig, BadgeConfigPool, ClaimRecord, Config, ConsensusRecord, VaultState};

pub fn config_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[Config::SEED], &notary::ID)
}

pub fn vault_state_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VaultState::SEED], &notary::ID)
}

pub fn badge_pool_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[BadgeConfigPool::SEED], &notary::ID)
}

pub fn consensus_record_address(timestamp: u64, submitter: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            ConsensusRecord::SEED,
            &timestamp.to_le_bytes(),
            submitter.as_ref(),
        ],
        &notary::ID,
    )
}

pub fn badge_config_address(quiz: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[BadgeConfig::SEED, &quiz.to_le_bytes()], &notary::ID)
}

pub fn badge_address(quiz: u64, owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[Badge::SEED, &quiz.to_le_bytes(), owner.as_ref()],
        &notary::ID,
    )
}

pub fn claim_record_address(task: u64, receiver: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ClaimRecord::SEED, &task.to_le_bytes(), receiver.as_ref()],
        &notary::ID,
    )
}
