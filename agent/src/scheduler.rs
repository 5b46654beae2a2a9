use std::time::Duration;

use anyhow::{bail, Result};
use chrono::Utc;
use log::{info, warn};
use rand::Rng;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use tokio::sync::watch;
use tokio::time::sleep;

use drip_api::types::Action;
use drip_client::{Ledger, LedgerError};

use crate::consts::*;
use crate::executor::execute_action;
use crate::selector::select_action;

#[derive(Clone, Copy, Debug)]
pub struct SwarmConfig {
    /// Pause after each submitted action.
    pub action_pace: Duration,
    /// Pause between rounds.
    pub round_pause: Duration,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            action_pace: ACTION_PACE,
            round_pause: ROUND_PAUSE,
        }
    }
}

/// The scheduler context: the fixed, ordered wallet list and the round
/// counter. Wallets are visited strictly sequentially, one action in flight
/// at a time, so pacing stays predictable and per-wallet nonce use is
/// serialized without any synchronization.
pub struct Swarm {
    wallets: Vec<Keypair>,
    config: SwarmConfig,
    round: u64,
}

impl Swarm {
    pub fn new(wallets: Vec<Keypair>) -> Result<Self> {
        Self::with_config(wallets, SwarmConfig::default())
    }

    pub fn with_config(wallets: Vec<Keypair>, config: SwarmConfig) -> Result<Self> {
        if wallets.is_empty() {
            bail!("no wallets configured");
        }

        Ok(Self {
            wallets,
            config,
            round: 1,
        })
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    pub fn addresses(&self) -> impl Iterator<Item = Pubkey> + '_ {
        self.wallets.iter().map(|w| w.pubkey())
    }

    /// The wallet after `index` in the fixed list, wrapping around; transfer
    /// recipients form a ring. A single-wallet swarm has no neighbor, which
    /// keeps self-transfers out of the coin flip.
    fn neighbor(&self, index: usize) -> Option<Pubkey> {
        if self.wallets.len() < 2 {
            return None;
        }

        let next = (index + 1) % self.wallets.len();
        Some(self.wallets[next].pubkey())
    }

    /// One full pass over all wallets in fixed order, then increments the
    /// round counter. A wallet failure is logged and isolated to its own
    /// turn; the pass always reaches the last wallet.
    pub async fn run_round<L: Ledger>(&mut self, ledger: &L, rng: &mut impl Rng) {
        self.pass(ledger, rng, None).await;
    }

    /// Runs rounds until the shutdown flag is raised. The flag is checked at
    /// every wallet boundary and during the inter-round pause, so shutdown
    /// never waits for a full round. A closed channel (sender dropped) also
    /// counts as shutdown; otherwise the loop could never be stopped.
    pub async fn run<L: Ledger>(
        &mut self,
        ledger: &L,
        rng: &mut impl Rng,
        mut shutdown: watch::Receiver<bool>,
    ) {
        loop {
            if !self.pass(ledger, rng, Some(&shutdown)).await {
                break;
            }

            tokio::select! {
                _ = sleep(self.config.round_pause) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("shutting down after round {}", self.round);
    }

    /// Returns false when interrupted by shutdown mid-pass.
    async fn pass<L: Ledger>(
        &mut self,
        ledger: &L,
        rng: &mut impl Rng,
        shutdown: Option<&watch::Receiver<bool>>,
    ) -> bool {
        info!("--- round {} ---", self.round);

        for index in 0..self.wallets.len() {
            if let Some(flag) = shutdown {
                if *flag.borrow() {
                    return false;
                }
            }

            self.step(ledger, rng, index).await;
        }

        self.round += 1;
        true
    }

    /// One wallet's turn: read fresh state, select, execute. Errors are
    /// reported here and go no further; the wallet is retried fresh next
    /// round with no carried-over state.
    async fn step<L: Ledger>(&self, ledger: &L, rng: &mut impl Rng, index: usize) {
        let address = self.wallets[index].pubkey();

        match self.try_step(ledger, rng, index).await {
            Ok((action, Some(signature))) => {
                info!("wallet {}: {} -> tx {}", short(&address), action, signature);
            }
            Ok((action, None)) => {
                info!("wallet {}: {}", short(&address), action);
            }
            Err(e) => {
                warn!("wallet {}: {}", short(&address), e);
            }
        }
    }

    async fn try_step<L: Ledger>(
        &self,
        ledger: &L,
        rng: &mut impl Rng,
        index: usize,
    ) -> Result<(Action, Option<Signature>), LedgerError> {
        let wallet = &self.wallets[index];

        let state = ledger.read_account_state(&wallet.pubkey()).await?;
        let now = Utc::now().timestamp();

        let action = select_action(now, &state, self.neighbor(index), rng);
        let signature = execute_action(ledger, wallet, &action, self.config.action_pace).await?;

        Ok((action, signature))
    }
}

fn short(address: &Pubkey) -> String {
    let s = address.to_string();
    format!("..{}", &s[s.len() - 4..])
}
