use anyhow::Result;
use std::str::FromStr;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;

use drip_api::prelude::*;
use drip_client::{get_config_account, get_member_account};

use crate::cli::{Cli, Commands};
use crate::log;

pub async fn handle_info_commands(cli: Cli, client: RpcClient) -> Result<()> {
    match cli.command {

        Commands::GetMember { pubkey } => {
            let authority = Pubkey::from_str(&pubkey)?;
            let (member, address) = get_member_account(&client, &authority).await?;

            let username = match from_name(&member.name) {
                name if name.is_empty() => "(unset)".to_string(),
                name => name,
            };

            log::print_section_header("Member Account");
            log::print_message(&format!("Address: {}", address));
            log::print_message(&format!("Authority: {}", member.authority));
            log::print_message(&format!("Username: {}", username));
            log::print_message(&format!("Balance: {}", from_word(&member.balance)));
            log::print_message(&format!("Staked: {}", from_word(&member.staked_balance)));
            log::print_message(&format!("Last claim at: {}", member.last_claim_at));
            log::print_message(&format!("Score: {}", member.score));
        }

        Commands::GetConfig {} => {
            let (config, address) = get_config_account(&client).await?;

            log::print_section_header("Config Account");
            log::print_message(&format!("Address: {}", address));
            log::print_message(&format!("Claim amount: {}", from_word(&config.claim_amount)));
            log::print_message(&format!("Cooldown: {}s", config.cooldown_secs));
        }

        _ => {}
    }

    Ok(())
}
