use std::time::Duration;

use solana_sdk::signature::{Keypair, Signature};
use tokio::time::sleep;

use drip_api::types::Action;
use drip_client::{Ledger, LedgerError};

/// Submits one chosen action with the wallet's signing key and returns the
/// transaction signature. Fire-and-forget: no confirmation wait, no retry;
/// a failed submission surfaces as [`LedgerError::Submit`] and the wallet is
/// simply retried fresh next round.
///
/// After a successful submission the fixed pacing delay is applied before
/// control returns to the scheduler. An idle turn submits nothing and skips
/// the delay.
pub async fn execute_action<L: Ledger>(
    ledger: &L,
    signer: &Keypair,
    action: &Action,
    pace: Duration,
) -> Result<Option<Signature>, LedgerError> {
    if action.is_idle() {
        return Ok(None);
    }

    let signature = ledger.submit_action(signer, action).await?;
    sleep(pace).await;

    Ok(Some(signature))
}
