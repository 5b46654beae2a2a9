mod cli;
mod keypair;
mod log;
mod commands;

use anyhow::Result;
use clap::Parser;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;

use cli::{Cli, Commands};
use commands::{admin, info, run};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    log::print_title("☴ DRIP");

    let rpc_url = cli.cluster.rpc_url();
    let rpc_client = RpcClient::new_with_commitment(rpc_url.clone(), CommitmentConfig::confirmed());

    log::print_message(&format!("Connected to: {}", rpc_url));

    match cli.command {
        // Agent Commands

        Commands::Run { .. } => {
            run::handle_run_command(cli, rpc_client).await?;
        }

        // Admin Commands

        Commands::Initialize { .. } => {
            admin::handle_admin_commands(cli, rpc_client).await?;
        }

        // Miscellaneous Commands

        _ => {
            info::handle_info_commands(cli, rpc_client).await?;
        }
    }

    Ok(())
}
