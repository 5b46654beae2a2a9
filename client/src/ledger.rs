use async_trait::async_trait;
use num_bigint::BigUint;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use thiserror::Error;

use drip_api::prelude::*;

use crate::account::{get_config_account, try_get_member_account};
use crate::rpc::{get_latest_blockhash, send_transaction};

/// Read and submit failures, both local to one wallet's turn and recoverable:
/// the scheduler logs them and moves on, and the next round's fresh read is
/// the retry mechanism.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("failed to read account state: {0}")]
    Read(#[source] anyhow::Error),
    #[error("failed to submit action: {0}")]
    Submit(#[source] anyhow::Error),
}

/// Everything the selector needs to know about one wallet, read fresh every
/// round. `cooldown_secs` is a global program parameter but is re-read along
/// with the rest rather than cached; it is cheap and may change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccountState {
    pub last_claim_at: i64,
    pub balance: BigUint,
    pub staked_balance: BigUint,
    pub username: String,
    pub cooldown_secs: u64,
}

/// Builds the read model from raw accounts. A wallet with no member account
/// yet reads as the all-default state; the zero `last_claim_at` makes the
/// claim rule fire on the first ever visit.
pub fn account_state(member: Option<&Member>, config: &Config) -> AccountState {
    match member {
        Some(member) => AccountState {
            last_claim_at: member.last_claim_at,
            balance: from_word(&member.balance),
            staked_balance: from_word(&member.staked_balance),
            username: from_name(&member.name),
            cooldown_secs: config.cooldown_secs,
        },
        None => AccountState {
            cooldown_secs: config.cooldown_secs,
            ..Default::default()
        },
    }
}

/// The remote ledger as the agent core sees it. The agent is generic over
/// this trait so tests can drive the scheduler with a mock collaborator.
#[async_trait]
pub trait Ledger {
    async fn read_account_state(&self, authority: &Pubkey) -> Result<AccountState, LedgerError>;

    async fn read_cooldown(&self) -> Result<u64, LedgerError>;

    async fn submit_action(
        &self,
        signer: &Keypair,
        action: &Action,
    ) -> Result<Signature, LedgerError>;
}

/// RPC-backed ledger. The inner client is shared read-only across all
/// wallets; signing keys never enter this type.
pub struct RpcLedger {
    client: RpcClient,
}

impl RpcLedger {
    pub fn new(client: RpcClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &RpcClient {
        &self.client
    }
}

#[async_trait]
impl Ledger for RpcLedger {
    async fn read_account_state(&self, authority: &Pubkey) -> Result<AccountState, LedgerError> {
        let (config, _) = get_config_account(&self.client)
            .await
            .map_err(LedgerError::Read)?;

        let member = try_get_member_account(&self.client, authority)
            .await
            .map_err(LedgerError::Read)?;

        Ok(account_state(member.as_ref(), &config))
    }

    async fn read_cooldown(&self) -> Result<u64, LedgerError> {
        let (config, _) = get_config_account(&self.client)
            .await
            .map_err(LedgerError::Read)?;

        Ok(config.cooldown_secs)
    }

    async fn submit_action(
        &self,
        signer: &Keypair,
        action: &Action,
    ) -> Result<Signature, LedgerError> {
        let ix = build_action_ix(signer.pubkey(), action)
            .ok_or_else(|| LedgerError::Submit(anyhow::anyhow!("idle action has no transaction")))?;

        let recent_blockhash = get_latest_blockhash(&self.client)
            .await
            .map_err(LedgerError::Submit)?;

        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&signer.pubkey()),
            &[signer],
            recent_blockhash,
        );

        send_transaction(&self.client, &tx)
            .await
            .map_err(LedgerError::Submit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drip_api::utils::{to_name, to_word};

    fn test_config(cooldown_secs: u64) -> Config {
        Config {
            claim_amount: to_word(&BigUint::from(100u64)),
            cooldown_secs,
        }
    }

    #[test]
    fn test_missing_member_reads_as_default() {
        let state = account_state(None, &test_config(3600));

        assert_eq!(state.last_claim_at, 0);
        assert_eq!(state.balance, BigUint::default());
        assert_eq!(state.staked_balance, BigUint::default());
        assert_eq!(state.username, "");
        assert_eq!(state.cooldown_secs, 3600);
    }

    #[test]
    fn test_member_fields_carry_through() {
        let member = Member {
            authority: Pubkey::new_unique(),
            name: to_name("Nitzy42"),
            balance: to_word(&BigUint::from(500u64)),
            staked_balance: to_word(&BigUint::from(7u64)),
            last_claim_at: 1_000_000,
            created_at: 999_000,
            score: 3,
        };

        let state = account_state(Some(&member), &test_config(600));

        assert_eq!(state.last_claim_at, 1_000_000);
        assert_eq!(state.balance, BigUint::from(500u64));
        assert_eq!(state.staked_balance, BigUint::from(7u64));
        assert_eq!(state.username, "Nitzy42");
        assert_eq!(state.cooldown_secs, 600);
    }
}
