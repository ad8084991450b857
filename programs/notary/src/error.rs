use anchor_lang::prelude::*;

#[error_code]
pub enum NotaryError {
    #[msg("Config has not been initialized")]
    NotInitialized,

    #[msg("Config has already been initialized")]
    AlreadyInitialized,

    #[msg("Only the config owner may perform this action")]
    Unauthorized,

    #[msg("No matching Ed25519 verification found in this transaction")]
    SignatureMismatch,

    #[msg("Attested payload disagrees with the instruction arguments")]
    PayloadMismatch,

    #[msg("Message is not a well-formed attestation payload")]
    MalformedPayload,

    #[msg("Consensus proof must decode to exactly 32 bytes")]
    InvalidProofLength,

    #[msg("Consensus proof is not valid hex")]
    InvalidProofEncoding,

    #[msg("A consensus record already exists for this key")]
    DuplicateAttestation,

    #[msg("A badge already exists for this quiz and owner")]
    DuplicateBadge,

    #[msg("Quiz id zero is reserved")]
    InvalidQuiz,

    #[msg("Withdrawal exceeds the available fee balance")]
    InsufficientBalance,

    #[msg("Claim nonce does not match the next expected nonce")]
    NonceAlreadyUsed,

    #[msg("Token account does not match the vault mint")]
    InvalidTokenAccount,

    #[msg("Token vault is not owned by the vault authority")]
    InvalidVaultOwner,
}
