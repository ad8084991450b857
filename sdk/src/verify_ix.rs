//! Builder for the native Ed25519 verification instruction.
//!
//! Produces the same single-signature buffer as web3.js
//! `Ed25519Program.createInstructionWithPublicKey`: a 16-byte offsets
//! header, then pubkey, signature, and message back to back, with every
//! instruction index pointing at the carrying instruction (`u16::MAX`).
//! The program introspects this exact layout, so the two sides must agree
//! byte for byte.

use solana_sdk::ed25519_program;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;

use crate::error::SdkError;

const PUBKEY_OFFSET: u16 = 16;
const SIG_OFFSET: u16 = 48;
const MSG_OFFSET: u16 = 112;

/// Build the verification instruction to place directly before the program
/// call that consumes `(authority, message, signature)`.
pub fn ed25519_verify_instruction(
    authority: &Pubkey,
    message: &[u8],
    signature: &[u8; 64],
) -> Result<Instruction, SdkError> {
    let msg_len = u16::try_from(message.len()).map_err(|_| SdkError::MessageTooLong {
        len: message.len(),
        max: u16::MAX as usize,
    })?;

    let mut data = Vec::with_capacity(MSG_OFFSET as usize + message.len());
    data.push(1); // num_signatures
    data.push(0); // padding
    data.extend_from_slice(&SIG_OFFSET.to_le_bytes());
    data.extend_from_slice(&u16::MAX.to_le_bytes());
    data.extend_from_slice(&PUBKEY_OFFSET.to_le_bytes());
    data.extend_from_slice(&u16::MAX.to_le_bytes());
    data.extend_from_slice(&MSG_OFFSET.to_le_bytes());
    data.extend_from_slice(&msg_len.to_le_bytes());
    data.extend_from_slice(&u16::MAX.to_le_bytes());
    data.extend_from_slice(authority.as_ref());
    data.extend_from_slice(signature);
    data.extend_from_slice(message);

    Ok(Instruction {
        program_id: ed25519_program::ID,
        accounts: vec![],
        data,
    })
}
