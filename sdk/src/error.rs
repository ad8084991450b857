//! SDK error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("failed to encode attestation payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("attestation message is {len} bytes, the Ed25519 instruction caps it at {max}")]
    MessageTooLong { len: usize, max: usize },
}
