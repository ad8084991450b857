#[cfg(test)]
mod tests {
    use crate::utils::*;
    use anchor_lang::prelude::*;
    use notary::error::NotaryError;
    use notary::state::{AdminPolicy, Config};

    #[test]
    fn test_config_serialization() {
        let ctx = TestContext::new();
        let config = Config {
            authority: ctx.authority,
            owner: ctx.payer,
            fee: 5_000,
            admin_policy: AdminPolicy::OwnerOnly,
            initialized: true,
            bump: 253,
        };

        let serialized = config.try_to_vec().unwrap();
        let deserialized = Config::try_from_slice(&serialized).unwrap();

        assert_eq!(deserialized.authority, ctx.authority);
        assert_eq!(deserialized.owner, ctx.payer);
        assert_eq!(deserialized.fee, 5_000);
        assert_eq!(deserialized.admin_policy, AdminPolicy::OwnerOnly);
        assert!(deserialized.initialized);
        assert_eq!(deserialized.bump, 253);
    }

    #[test]
    fn test_config_size() {
        let expected = 8 + // discriminator
            32 + // authority
            32 + // owner
            8 + // fee
            1 + // admin_policy
            1 + // initialized
            1; // bump
        assert_eq!(Config::SIZE, expected);

        // Declared space must fit the borsh layout exactly
        let ctx = TestContext::new();
        let config = create_test_config(ctx.authority, ctx.payer, AdminPolicy::Open);
        assert_eq!(config.try_to_vec().unwrap().len(), Config::SIZE - 8);
    }

    #[test]
    fn test_bootstrap_happens_once() {
        let ctx = TestContext::new();
        let mut config = Config {
            authority: Pubkey::default(),
            owner: Pubkey::default(),
            fee: 0,
            admin_policy: AdminPolicy::Open,
            initialized: false,
            bump: 0,
        };

        config
            .bootstrap(ctx.authority, ctx.payer, 1_000, AdminPolicy::OwnerOnly, 254)
            .unwrap();
        assert!(config.initialized);
        assert_eq!(config.authority, ctx.authority);
        assert_eq!(config.owner, ctx.payer);
        assert_eq!(config.fee, 1_000);

        // A second bootstrap fails and leaves authority and fee untouched
        let err = config
            .bootstrap(ctx.user, ctx.user, 9_999, AdminPolicy::Open, 254)
            .unwrap_err();
        assert_eq!(err, NotaryError::AlreadyInitialized.into());
        assert_eq!(config.authority, ctx.authority);
        assert_eq!(config.owner, ctx.payer);
        assert_eq!(config.fee, 1_000);
        assert_eq!(config.admin_policy, AdminPolicy::OwnerOnly);
    }

    #[test]
    fn test_admin_policy_gating() {
        let ctx = TestContext::new();

        let open = create_test_config(ctx.authority, ctx.payer, AdminPolicy::Open);
        assert!(open.admin_allowed(&ctx.payer));
        assert!(open.admin_allowed(&ctx.user));

        let owner_only = create_test_config(ctx.authority, ctx.payer, AdminPolicy::OwnerOnly);
        assert!(owner_only.admin_allowed(&ctx.payer));
        assert!(!owner_only.admin_allowed(&ctx.user));
        assert!(!owner_only.admin_allowed(&ctx.authority));
    }

    #[test]
    fn test_withdrawal_amounts() {
        // None drains whatever sits above the rent floor
        assert_eq!(Config::withdrawal_amount(500, None).unwrap(), 500);
        assert_eq!(Config::withdrawal_amount(0, None).unwrap(), 0);

        // Explicit amounts must fit the accrued fee balance
        assert_eq!(Config::withdrawal_amount(500, Some(200)).unwrap(), 200);
        assert_eq!(Config::withdrawal_amount(500, Some(500)).unwrap(), 500);
        assert_eq!(Config::withdrawal_amount(500, Some(0)).unwrap(), 0);

        let err = Config::withdrawal_amount(500, Some(501)).unwrap_err();
        assert_eq!(err, NotaryError::InsufficientBalance.into());

        let err = Config::withdrawal_amount(0, Some(1)).unwrap_err();
        assert_eq!(err, NotaryError::InsufficientBalance.into());
    }
}
