use anyhow::{anyhow, Result};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use drip_api::pda::{config_pda, member_pda};
use drip_api::state::{Config, Member};
use crate::rpc::{get_account, get_account_optional};

pub async fn get_config_account(client: &RpcClient) -> Result<(Config, Pubkey)> {
    let (config_address, _bump) = config_pda();
    let account = get_account(client, &config_address).await?;
    let config = Config::unpack(&account.data)
        .map_err(|e| anyhow!("Failed to unpack config account: {}", e))
        .copied()?;
    Ok((config, config_address))
}

pub async fn get_member_account(client: &RpcClient, authority: &Pubkey) -> Result<(Member, Pubkey)> {
    let (member_address, _bump) = member_pda(*authority);
    let account = get_account(client, &member_address).await?;
    let member = Member::unpack(&account.data)
        .map_err(|e| anyhow!("Failed to unpack member account: {}", e))
        .copied()?;
    Ok((member, member_address))
}

/// Like [`get_member_account`], but a member that has never touched the
/// program resolves to `None` rather than an error.
pub async fn try_get_member_account(
    client: &RpcClient,
    authority: &Pubkey,
) -> Result<Option<Member>> {
    let (member_address, _bump) = member_pda(*authority);
    match get_account_optional(client, &member_address).await? {
        Some(account) => {
            let member = Member::unpack(&account.data)
                .map_err(|e| anyhow!("Failed to unpack member account: {}", e))
                .copied()?;
            Ok(Some(member))
        }
        None => Ok(None),
    }
}
