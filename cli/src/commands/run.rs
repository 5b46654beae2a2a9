use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use solana_client::nonblocking::rpc_client::RpcClient;
use tokio::sync::watch;

use drip_agent::scheduler::Swarm;
use drip_client::RpcLedger;

use crate::cli::{Cli, Commands};
use crate::keypair::load_wallets;
use crate::log;

pub async fn handle_run_command(cli: Cli, client: RpcClient) -> Result<()> {

    log::print_divider();

    match cli.command {

        Commands::Run { wallets, rounds } => {
            let wallets = load_wallets(&wallets)?;

            log::print_info("Starting agent...");
            log::print_message(&format!("Loaded {} wallet(s)", wallets.len()));

            let ledger = RpcLedger::new(client);
            let mut swarm = Swarm::new(wallets)?;
            let mut rng = StdRng::from_entropy();

            match rounds {
                Some(rounds) => {
                    log::print_message(&format!("Running {} round(s)", rounds));
                    for _ in 0..rounds {
                        swarm.run_round(&ledger, &mut rng).await;
                    }
                }
                None => {
                    log::print_message("Running until Ctrl-C");

                    let (shutdown_tx, shutdown_rx) = watch::channel(false);
                    tokio::spawn(async move {
                        if tokio::signal::ctrl_c().await.is_ok() {
                            let _ = shutdown_tx.send(true);
                        }
                    });

                    swarm.run(&ledger, &mut rng, shutdown_rx).await;
                }
            }
        }

        _ => {}
    }

    Ok(())
}
