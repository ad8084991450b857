//! RPC client interface for the notary program

use anyhow::{anyhow, Context, Result};
use solana_client::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;

use anchor_lang::AccountDeserialize;
use notary::state::{AdminPolicy, Badge, ClaimRecord, Config, ConsensusRecord, VaultState};

use crate::attestation::Attested;
use crate::instruction;
use crate::pda;
use crate::verify_ix;

/// Blocking client for the notary program. Attested operations submit the
/// Ed25519 verification instruction and the program call as one transaction.
pub struct NotaryClient {
    rpc: RpcClient,
}

impl NotaryClient {
    pub fn new(rpc_url: &str) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(
                rpc_url.to_string(),
                CommitmentConfig::confirmed(),
            ),
        }
    }

    pub fn initialize(
        &self,
        payer: &Keypair,
        authority: Pubkey,
        fee: u64,
        policy: AdminPolicy,
    ) -> Result<Signature> {
        let ix = instruction::initialize(payer.pubkey(), authority, fee, policy);
        self.send(payer, vec![ix])
    }

    pub fn update(&self, payer: &Keypair, new_authority: Pubkey, new_fee: u64) -> Result<Signature> {
        let ix = instruction::update(payer.pubkey(), new_authority, new_fee);
        self.send(payer, vec![ix])
    }

    pub fn withdraw(
        &self,
        payer: &Keypair,
        destination: Pubkey,
        amount: Option<u64>,
    ) -> Result<Signature> {
        let ix = instruction::withdraw(payer.pubkey(), destination, amount);
        self.send(payer, vec![ix])
    }

    pub fn upload_validation(
        &self,
        submitter: &Keypair,
        timestamp: u64,
        attested: &Attested,
    ) -> Result<Signature> {
        let ix = instruction::upload_validation(
            submitter.pubkey(),
            timestamp,
            &attested.message,
            &attested.signature,
        );
        self.send(submitter, self.with_verification(attested, ix)?)
    }

    pub fn upload_badge(
        &self,
        submitter: &Keypair,
        quiz: u64,
        attested: &Attested,
    ) -> Result<Signature> {
        let ix = instruction::upload_badge(
            submitter.pubkey(),
            quiz,
            &attested.message,
            &attested.signature,
        );
        self.send(submitter, self.with_verification(attested, ix)?)
    }

    pub fn init_claim(&self, payer: &Keypair, mint: Pubkey, token_vault: Pubkey) -> Result<Signature> {
        let ix = instruction::init_claim(payer.pubkey(), mint, token_vault);
        self.send(payer, vec![ix])
    }

    /// Claim against the bound vault; mint and custodial account are read
    /// from the on-chain vault state.
    pub fn claim(&self, payer: &Keypair, task: u64, attested: &Attested) -> Result<Signature> {
        let vault: VaultState = self.fetch(pda::vault_state_address().0)?;
        let ix = instruction::claim(
            payer.pubkey(),
            task,
            vault.token_mint,
            vault.token_vault,
            &attested.message,
            &attested.signature,
        );
        self.send(payer, self.with_verification(attested, ix)?)
    }

    pub fn get_config(&self) -> Result<Config> {
        self.fetch(pda::config_address().0)
    }

    pub fn get_vault_state(&self) -> Result<VaultState> {
        self.fetch(pda::vault_state_address().0)
    }

    pub fn get_consensus_record(&self, timestamp: u64, submitter: &Pubkey) -> Result<ConsensusRecord> {
        self.fetch(pda::consensus_record_address(timestamp, submitter).0)
    }

    pub fn get_badge(&self, quiz: u64, owner: &Pubkey) -> Result<Badge> {
        self.fetch(pda::badge_address(quiz, owner).0)
    }

    pub fn get_claim_record(&self, task: u64, receiver: &Pubkey) -> Result<ClaimRecord> {
        self.fetch(pda::claim_record_address(task, receiver).0)
    }

    fn with_verification(
        &self,
        attested: &Attested,
        program_ix: Instruction,
    ) -> Result<Vec<Instruction>> {
        let verify = verify_ix::ed25519_verify_instruction(
            &attested.authority,
            &attested.message,
            &attested.signature,
        )?;
        Ok(vec![verify, program_ix])
    }

    fn fetch<T: AccountDeserialize>(&self, address: Pubkey) -> Result<T> {
        let data = self
            .rpc
            .get_account_data(&address)
            .with_context(|| format!("failed to fetch account {address}"))?;
        T::try_deserialize(&mut data.as_slice())
            .map_err(|e| anyhow!("account {address} has unexpected layout: {e}"))
    }

    fn send(&self, payer: &Keypair, instructions: Vec<Instruction>) -> Result<Signature> {
        let blockhash = self
            .rpc
            .get_latest_blockhash()
            .context("failed to fetch a recent blockhash")?;
        let tx = Transaction::new_signed_with_payer(
            &instructions,
            Some(&payer.pubkey()),
            &[payer],
            blockhash,
        );
        Ok(self.rpc.send_and_confirm_transaction(&tx)?)
    }
}
