#[cfg(test)]
mod tests {
    use crate::utils::*;
    use anchor_lang::prelude::*;
    use notary::error::NotaryError;
    use notary::state::{ClaimRecord, VaultState};

    #[test]
    fn test_vault_binding() {
        let mint = generate_test_pubkey("mint");
        let vault = generate_test_pubkey("token_vault");
        let mut state = empty_vault_state();
        assert!(!state.is_bound());

        state.bind(mint, vault, 252);
        assert!(state.is_bound());
        assert_eq!(state.token_mint, mint);
        assert_eq!(state.token_vault, vault);
        assert_eq!(state.bump, 252);
        assert_eq!(state.claimed, 0);

        // The handler skips the bind once bound, so a repeat call can
        // never swap the mint
        let other_mint = generate_test_pubkey("other_mint");
        if !state.is_bound() {
            state.bind(other_mint, vault, 252);
        }
        assert_eq!(state.token_mint, mint);
    }

    #[test]
    fn test_claimed_accumulates() {
        let mut state = empty_vault_state();
        state.add_claimed(100);
        state.add_claimed(250);
        assert_eq!(state.claimed, 350);

        // Totals saturate rather than wrap
        state.add_claimed(u64::MAX);
        assert_eq!(state.claimed, u64::MAX);
    }

    #[test]
    fn test_nonce_sequencing() {
        let ctx = TestContext::new();
        let mut record = empty_claim_record();

        // The first claim must carry nonce 0
        let err = record.consume(1, ctx.user, 10).unwrap_err();
        assert_eq!(err, NotaryError::NonceAlreadyUsed.into());
        assert_eq!(record.times, 0);

        record.consume(0, ctx.user, 10).unwrap();
        assert_eq!(record.times, 1);
        assert_eq!(record.owner, ctx.user);
        assert_eq!(record.reward, 10);

        // Replaying the consumed nonce fails, the next one succeeds
        let err = record.consume(0, ctx.user, 10).unwrap_err();
        assert_eq!(err, NotaryError::NonceAlreadyUsed.into());
        assert_eq!(record.times, 1);

        record.consume(1, ctx.user, 25).unwrap();
        assert_eq!(record.times, 2);
        assert_eq!(record.reward, 25);

        // Nonces ahead of the counter are rejected too
        let err = record.consume(5, ctx.user, 25).unwrap_err();
        assert_eq!(err, NotaryError::NonceAlreadyUsed.into());
        assert_eq!(record.times, 2);
    }

    #[test]
    fn test_claim_record_serialization() {
        let ctx = TestContext::new();
        let mut record = empty_claim_record();
        record.consume(0, ctx.user, 1_000).unwrap();

        let serialized = record.try_to_vec().unwrap();
        let deserialized = ClaimRecord::try_from_slice(&serialized).unwrap();

        assert_eq!(deserialized.owner, ctx.user);
        assert_eq!(deserialized.reward, 1_000);
        assert_eq!(deserialized.times, 1);
    }

    #[test]
    fn test_vault_sizes() {
        let expected = 8 + // discriminator
            32 + // token_mint
            32 + // token_vault
            8 + // claimed
            1 + // bump
            64; // reserved
        assert_eq!(VaultState::SIZE, expected);
        assert_eq!(ClaimRecord::SIZE, 8 + 32 + 8 + 8 + 1);

        let state = empty_vault_state();
        assert_eq!(state.try_to_vec().unwrap().len(), VaultState::SIZE - 8);
        let record = empty_claim_record();
        assert_eq!(record.try_to_vec().unwrap().len(), ClaimRecord::SIZE - 8);
    }
}
