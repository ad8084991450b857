//! Attestation payloads and their canonical JSON codec.
//!
//! A payload is signed off-chain as compact JSON with fields in declaration
//! order, so the bytes verified by the Ed25519 program are exactly the bytes
//! decoded here. Decoding accepts any field order; the signature already
//! covers the exact encoding.

use anchor_lang::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::NotaryError;

/// A public key as it travels inside a payload: a 32-element byte array in
/// JSON, independent of any base58 rendering.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PayloadKey(pub [u8; 32]);

impl PayloadKey {
    pub fn matches(&self, key: &Pubkey) -> bool {
        self.0 == key.to_bytes()
    }
}

impl From<Pubkey> for PayloadKey {
    fn from(key: Pubkey) -> Self {
        Self(key.to_bytes())
    }
}

impl From<[u8; 32]> for PayloadKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<PayloadKey> for Pubkey {
    fn from(key: PayloadKey) -> Self {
        Pubkey::new_from_array(key.0)
    }
}

/// Attests one consensus submission.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ConsensusPayload {
    /// 32-byte proof, hex-encoded, `0x` prefix optional.
    pub consensus_proof: String,
    pub timestamp: u64,
}

impl ConsensusPayload {
    pub fn from_bytes(msg: &[u8]) -> Result<Self> {
        parse(msg)
    }

    /// Decode the proof field into its raw 32 bytes.
    pub fn proof_bytes(&self) -> Result<[u8; 32]> {
        decode_proof(&self.consensus_proof)
    }
}

/// Attests a badge grant.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BadgePayload {
    /// Quiz id.
    pub quiz: u64,
    /// Tier of badge.
    pub tier: u64,
    /// Owner of badge.
    pub owner: PayloadKey,
}

impl BadgePayload {
    pub fn from_bytes(msg: &[u8]) -> Result<Self> {
        parse(msg)
    }
}

/// Attests one reward grant for a task.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClaimPayload {
    pub task: u64,
    pub nonce: u64,
    pub reward: u64,
    pub receiver: PayloadKey,
}

impl ClaimPayload {
    pub fn from_bytes(msg: &[u8]) -> Result<Self> {
        parse(msg)
    }
}

fn parse<T: DeserializeOwned>(msg: &[u8]) -> Result<T> {
    serde_json::from_slice(msg).map_err(|_| error!(NotaryError::MalformedPayload))
}

/// Decode a hex consensus proof. The prefix check is case-insensitive, the
/// digits themselves may be either case.
pub fn decode_proof(proof: &str) -> Result<[u8; 32]> {
    let digits = proof
        .strip_prefix("0x")
        .or_else(|| proof.strip_prefix("0X"))
        .unwrap_or(proof);
    let bytes = hex::decode(digits).map_err(|_| error!(NotaryError::InvalidProofEncoding))?;
    require!(bytes.len() == 32, NotaryError::InvalidProofLength);
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| error!(NotaryError::InvalidProofLength))
}
