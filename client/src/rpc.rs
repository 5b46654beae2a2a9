use anyhow::{anyhow, Result};
use solana_client::{
    client_error::{ClientErrorKind, Result as ClientResult},
    nonblocking::rpc_client::RpcClient,
    rpc_response::RpcSimulateTransactionResult,
};
use solana_sdk::{
    account::Account,
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::Transaction,
};

/// Sends a transaction and returns its signature. Fire-and-forget: the call
/// returns as soon as the node accepts the transaction, without waiting for
/// confirmation.
pub async fn send_transaction(client: &RpcClient, tx: &Transaction) -> Result<Signature> {
    with_logs(client.send_transaction(tx).await)
}

/// Fetches the latest blockhash.
pub async fn get_latest_blockhash(client: &RpcClient) -> Result<Hash> {
    client
        .get_latest_blockhash()
        .await
        .map_err(|e| anyhow!("Failed to fetch latest blockhash: {}", e))
}

/// Fetches an account by address. Returns `None` for an account that does not
/// exist, which is distinct from a network failure.
pub async fn get_account_optional(
    client: &RpcClient,
    address: &Pubkey,
) -> Result<Option<Account>> {
    let response = client
        .get_account_with_commitment(address, client.commitment())
        .await
        .map_err(|e| anyhow!("Failed to fetch account {}: {}", address, e))?;

    Ok(response.value)
}

/// Fetches an account by address, failing if it does not exist.
pub async fn get_account(client: &RpcClient, address: &Pubkey) -> Result<Account> {
    get_account_optional(client, address)
        .await?
        .ok_or_else(|| anyhow!("Account {} not found", address))
}

/// Handles transaction simulation logs for failed transactions.
pub fn with_logs(res: ClientResult<Signature>) -> Result<Signature> {
    match res {
        Ok(signature) => Ok(signature),
        Err(e) => {
            if let ClientErrorKind::RpcError(
                solana_client::rpc_request::RpcError::RpcResponseError { data, .. },
            ) = e.kind()
            {
                if let solana_client::rpc_request::RpcResponseErrorData::SendTransactionPreflightFailure(
                    RpcSimulateTransactionResult { logs: Some(logs), .. }
                ) = data {
                    log::warn!("Transaction simulation failed:");
                    for log in logs {
                        log::warn!("  {}", log);
                    }
                }
            }
            Err(anyhow!("Transaction failed: {}", e))
        }
    }
}
