//! Authority-side signing of attestation payloads.
//!
//! The authority holds an Ed25519 key whose public half is stored in the
//! program config. Each helper encodes a payload to its canonical compact
//! JSON bytes and signs exactly those bytes; the program later requires the
//! native Ed25519 program to have verified the same bytes.

use ed25519_dalek::{Signer as _, SigningKey};
use solana_sdk::pubkey::Pubkey;

use crate::error::SdkError;
use notary::payload::{BadgePayload, ClaimPayload, ConsensusPayload};

/// A signed attestation, ready to be co-submitted with a program call.
#[derive(Debug, Clone)]
pub struct Attested {
    /// The key that signed, as stored in the program config.
    pub authority: Pubkey,
    /// The exact bytes that were signed.
    pub message: Vec<u8>,
    pub signature: [u8; 64],
}

/// The off-chain attestation authority.
pub struct AuthoritySigner {
    key: SigningKey,
}

impl AuthoritySigner {
    /// Build a signer from the raw 32-byte Ed25519 secret key.
    pub fn from_bytes(secret: &[u8; 32]) -> Self {
        Self {
            key: SigningKey::from_bytes(secret),
        }
    }

    /// The public key to store in the program config.
    pub fn pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.key.verifying_key().to_bytes())
    }

    /// Attest a consensus submission.
    pub fn attest_consensus(&self, proof: &str, timestamp: u64) -> Result<Attested, SdkError> {
        self.sign_payload(&ConsensusPayload {
            consensus_proof: proof.to_string(),
            timestamp,
        })
    }

    /// Attest a badge grant for `owner`.
    pub fn attest_badge(&self, quiz: u64, tier: u64, owner: Pubkey) -> Result<Attested, SdkError> {
        self.sign_payload(&BadgePayload {
            quiz,
            tier,
            owner: owner.to_bytes().into(),
        })
    }

    /// Attest one reward grant for `receiver`, consuming `nonce`.
    pub fn attest_claim(
        &self,
        task: u64,
        nonce: u64,
        reward: u64,
        receiver: Pubkey,
    ) -> Result<Attested, SdkError> {
        self.sign_payload(&ClaimPayload {
            task,
            nonce,
            reward,
            receiver: receiver.to_bytes().into(),
        })
    }

    fn sign_payload<T: serde::Serialize>(&self, payload: &T) -> Result<Attested, SdkError> {
        let message = serde_json::to_vec(payload)?;
        let signature = self.key.sign(&message).to_bytes();
        Ok(Attested {
            authority: self.pubkey(),
            message,
            signature,
        })
    }
}
