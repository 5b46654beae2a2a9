use anyhow::Result;
use num_bigint::BigUint;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{signer::Signer, transaction::Transaction};

use drip_api::prelude::*;
use drip_client::{get_latest_blockhash, send_transaction};

use crate::cli::{Cli, Commands};
use crate::keypair::get_payer;
use crate::log;

pub async fn handle_admin_commands(cli: Cli, client: RpcClient) -> Result<()> {
    match cli.command {

        Commands::Initialize { claim_amount, cooldown_secs } => {
            let payer = get_payer(cli.keypair_path)?;
            let claim_amount: BigUint = claim_amount.parse()?;

            log::print_info("Initializing program config...");
            log::print_message(&format!("Using payer: {}", payer.pubkey()));

            let ix = build_initialize_ix(payer.pubkey(), &claim_amount, cooldown_secs);
            let recent_blockhash = get_latest_blockhash(&client).await?;
            let tx = Transaction::new_signed_with_payer(
                &[ix],
                Some(&payer.pubkey()),
                &[&payer],
                recent_blockhash,
            );

            let signature = send_transaction(&client, &tx).await?;

            log::print_section_header("Config Initialized");
            log::print_message(&format!("Address: {}", CONFIG_ADDRESS));
            log::print_message(&format!("Claim amount: {}", claim_amount));
            log::print_message(&format!("Cooldown: {}s", cooldown_secs));
            log::print_message(&format!("Tx: {}", signature));
        }

        _ => {}
    }

    Ok(())
}
