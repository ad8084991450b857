//! Program instruction builders.
//!
//! Data is laid out the way Anchor expects: an 8-byte method discriminator
//! (`sha256("global:<name>")`), then the arguments in Borsh encoding.
//! Account lists mirror the program's accounts structs in declaration order.

use sha2::{Digest, Sha256};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::{system_program, sysvar};

use notary::state::AdminPolicy;

use crate::pda;

fn discriminator(name: &str) -> [u8; 8] {
    let digest = Sha256::digest(format!("global:{name}").as_bytes());
    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    out
}

fn append_bytes(data: &mut Vec<u8>, bytes: &[u8]) {
    data.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
    data.extend_from_slice(bytes);
}

/// Bootstrap the config.
pub fn initialize(payer: Pubkey, authority: Pubkey, fee: u64, policy: AdminPolicy) -> Instruction {
    let (config, _) = pda::config_address();

    let mut data = discriminator("initialize").to_vec();
    data.extend_from_slice(authority.as_ref());
    data.extend_from_slice(&fee.to_le_bytes());
    data.push(policy as u8);

    Instruction {
        program_id: notary::ID,
        accounts: vec![
            AccountMeta::new(config, false),
            AccountMeta::new(payer, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    }
}

/// Rotate the authority and fee.
pub fn update(payer: Pubkey, new_authority: Pubkey, new_fee: u64) -> Instruction {
    let (config, _) = pda::config_address();

    let mut data = discriminator("update").to_vec();
    data.extend_from_slice(new_authority.as_ref());
    data.extend_from_slice(&new_fee.to_le_bytes());

    Instruction {
        program_id: notary::ID,
        accounts: vec![
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(payer, true),
        ],
        data,
    }
}

/// Withdraw collected fees to `destination`. `None` drains the fee balance.
pub fn withdraw(payer: Pubkey, destination: Pubkey, amount: Option<u64>) -> Instruction {
    let (config, _) = pda::config_address();

    let mut data = discriminator("withdraw").to_vec();
    match amount {
        Some(amount) => {
            data.push(1);
            data.extend_from_slice(&amount.to_le_bytes());
        }
        None => data.push(0),
    }

    Instruction {
        program_id: notary::ID,
        accounts: vec![
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(payer, true),
            AccountMeta::new(destination, false),
        ],
        data,
    }
}

/// Record a consensus submission. Pair with the matching Ed25519
/// verification instruction directly before it.
pub fn upload_validation(
    submitter: Pubkey,
    timestamp: u64,
    msg: &[u8],
    sig: &[u8; 64],
) -> Instruction {
    let (config, _) = pda::config_address();
    let (record, _) = pda::consensus_record_address(timestamp, &submitter);

    let mut data = discriminator("upload_validation").to_vec();
    data.extend_from_slice(&timestamp.to_le_bytes());
    append_bytes(&mut data, msg);
    data.extend_from_slice(sig);

    Instruction {
        program_id: notary::ID,
        accounts: vec![
            AccountMeta::new(submitter, true),
            AccountMeta::new(config, false),
            AccountMeta::new(record, false),
            AccountMeta::new_readonly(sysvar::instructions::ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    }
}

/// Issue a badge. Pair with the matching Ed25519 verification instruction
/// directly before it.
pub fn upload_badge(submitter: Pubkey, quiz: u64, msg: &[u8], sig: &[u8; 64]) -> Instruction {
    let (config, _) = pda::config_address();
    let (pool, _) = pda::badge_pool_address();
    let (badge_config, _) = pda::badge_config_address(quiz);
    let (badge, _) = pda::badge_address(quiz, &submitter);

    let mut data = discriminator("upload_badge").to_vec();
    data.extend_from_slice(&quiz.to_le_bytes());
    append_bytes(&mut data, msg);
    data.extend_from_slice(sig);

    Instruction {
        program_id: notary::ID,
        accounts: vec![
            AccountMeta::new(submitter, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(pool, false),
            AccountMeta::new(badge_config, false),
            AccountMeta::new(badge, false),
            AccountMeta::new_readonly(sysvar::instructions::ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    }
}

/// Bind the reward vault to `mint` and its custodial token account.
pub fn init_claim(payer: Pubkey, mint: Pubkey, token_vault: Pubkey) -> Instruction {
    let (vault_state, _) = pda::vault_state_address();
    let (config, _) = pda::config_address();

    Instruction {
        program_id: notary::ID,
        accounts: vec![
            AccountMeta::new(vault_state, false),
            AccountMeta::new_readonly(mint, false),
            AccountMeta::new_readonly(token_vault, false),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(payer, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: discriminator("init_claim").to_vec(),
    }
}

/// Claim a reward into the payer's associated token account. Pair with the
/// matching Ed25519 verification instruction directly before it.
pub fn claim(
    payer: Pubkey,
    task: u64,
    mint: Pubkey,
    token_vault: Pubkey,
    msg: &[u8],
    sig: &[u8; 64],
) -> Instruction {
    let (config, _) = pda::config_address();
    let (vault_state, _) = pda::vault_state_address();
    let (claim_record, _) = pda::claim_record_address(task, &payer);
    let receiver = anchor_spl::associated_token::get_associated_token_address(&payer, &mint);

    let mut data = discriminator("claim").to_vec();
    data.extend_from_slice(&task.to_le_bytes());
    append_bytes(&mut data, msg);
    data.extend_from_slice(sig);

    Instruction {
        program_id: notary::ID,
        accounts: vec![
            AccountMeta::new(payer, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(vault_state, false),
            AccountMeta::new(claim_record, false),
            AccountMeta::new(token_vault, false),
            AccountMeta::new(receiver, false),
            AccountMeta::new_readonly(mint, false),
            AccountMeta::new_readonly(sysvar::instructions::ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(anchor_spl::token::ID, false),
            AccountMeta::new_readonly(anchor_spl::associated_token::ID, false),
        ],
        data,
    }
}
