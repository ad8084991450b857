//! Notary SDK - off-chain half of the notary program
//!
//! This SDK provides thin wrappers for:
//! - Signing attestation payloads as the configured authority
//! - Building the native Ed25519 verification instruction
//! - Deriving the program's record addresses
//! - Building program instructions and submitting them over RPC

pub mod attestation;
pub mod client;
pub mod error;
pub mod instruction;
pub mod pda;
pub mod verify_ix;

// Re-export key types
pub use attestation::{Attested, AuthoritySigner};
pub use client::NotaryClient;
pub use error::SdkError;

// The payload shapes are shared with the program so the signed bytes and the
// decoded bytes can never drift apart
pub use notary::payload::{BadgePayload, ClaimPayload, ConsensusPayload, PayloadKey};
pub use notary::state::AdminPolicy;
