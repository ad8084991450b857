//! Co-verification against the native Ed25519 program.
//!
//! The engine never verifies signatures itself. Callers prepend an
//! `Ed25519Program.createInstructionWithPublicKey` instruction to the
//! transaction; the runtime aborts the whole transaction if that check
//! fails. What remains for the engine is to prove the verified triple is
//! the one it was handed, by introspecting the preceding instruction
//! through the instructions sysvar and comparing bytes.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::ed25519_program;
use anchor_lang::solana_program::sysvar::instructions::{
    load_current_index_checked, load_instruction_at_checked,
};

use crate::error::NotaryError;

const HEADER_LEN: usize = 16;
const PUBKEY_OFFSET: usize = 16;
const SIG_OFFSET: usize = 48;
const MSG_OFFSET: usize = 112;

/// Require that the instruction directly before the current one is a native
/// Ed25519 verification of exactly `(authority, msg, sig)`.
pub fn require_matching_verification(
    ix_sysvar: &AccountInfo,
    authority: &Pubkey,
    msg: &[u8],
    sig: &[u8; 64],
) -> Result<()> {
    let index = load_current_index_checked(ix_sysvar)?;
    let prev = index
        .checked_sub(1)
        .ok_or_else(|| error!(NotaryError::SignatureMismatch))?;
    let ix = load_instruction_at_checked(prev as usize, ix_sysvar)
        .map_err(|_| error!(NotaryError::SignatureMismatch))?;

    require!(
        ix.program_id == ed25519_program::ID,
        NotaryError::SignatureMismatch
    );
    require!(ix.accounts.is_empty(), NotaryError::SignatureMismatch);
    require!(
        verification_matches(&ix.data, &authority.to_bytes(), msg, sig),
        NotaryError::SignatureMismatch
    );
    Ok(())
}

/// Whether `data` is a single-signature Ed25519 verification buffer for
/// exactly this triple, in the `createInstructionWithPublicKey` layout:
/// a 16-byte offsets header, then pubkey at 16, signature at 48, message
/// at 112, with all instruction indices pointing at the carrying
/// instruction itself (`u16::MAX`).
pub fn verification_matches(data: &[u8], pubkey: &[u8; 32], msg: &[u8], sig: &[u8; 64]) -> bool {
    let Ok(msg_len) = u16::try_from(msg.len()) else {
        return false;
    };
    if data.len() != MSG_OFFSET + msg.len() {
        return false;
    }

    let mut header = [0u8; HEADER_LEN];
    header[0] = 1; // num_signatures; padding byte stays zero
    header[2..4].copy_from_slice(&(SIG_OFFSET as u16).to_le_bytes());
    header[4..6].copy_from_slice(&u16::MAX.to_le_bytes());
    header[6..8].copy_from_slice(&(PUBKEY_OFFSET as u16).to_le_bytes());
    header[8..10].copy_from_slice(&u16::MAX.to_le_bytes());
    header[10..12].copy_from_slice(&(MSG_OFFSET as u16).to_le_bytes());
    header[12..14].copy_from_slice(&msg_len.to_le_bytes());
    header[14..16].copy_from_slice(&u16::MAX.to_le_bytes());

    data[..HEADER_LEN] == header
        && data[PUBKEY_OFFSET..SIG_OFFSET] == pubkey[..]
        && data[SIG_OFFSET..MSG_OFFSET] == sig[..]
        && data[MSG_OFFSET..] == msg[..]
}
