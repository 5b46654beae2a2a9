use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(
    name = "drip",
    about = "Autonomous multi-wallet agent for the drip points program.",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short = 'k', long = "keypair", global = true, help = "Payer keypair for admin commands")]
    pub keypair_path: Option<PathBuf>,

    #[arg(
        short = 'u',
        long = "cluster",
        default_value = "l",
        global = true,
        help = "Cluster to use: l (localnet), m (mainnet), d (devnet), t (testnet),\n or a custom RPC URL"
    )]
    pub cluster: Cluster,

    #[arg(short = 'v', long = "verbose", help = "Print verbose output", global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {

    // Agent Commands

    Run {
        #[arg(
            help = "Wallet keypair files and/or directories of keypair files\n(defaults to ~/.config/drip/wallets)",
            value_name = "PATH"
        )]
        wallets: Vec<PathBuf>,

        #[arg(short = 'r', long = "rounds", help = "Stop after this many rounds (default: run until Ctrl-C)")]
        rounds: Option<u64>,
    },

    // Admin Commands

    #[command(hide = true)]
    Initialize {
        #[arg(help = "Points granted per claim")]
        claim_amount: String,

        #[arg(help = "Cooldown between claims, in seconds")]
        cooldown_secs: u64,
    },

    // Misc Commands

    GetMember {
        #[arg(help = "Member wallet public key")]
        pubkey: String,
    },
    GetConfig {},
}

#[derive(Debug, Clone)]
pub enum Cluster {
    Localnet,
    Mainnet,
    Devnet,
    Testnet,
    Custom(String),
}

impl Cluster {
    pub fn rpc_url(&self) -> String {
        match self {
            Cluster::Localnet => "http://127.0.0.1:8899".to_string(),
            Cluster::Mainnet => "https://api.mainnet-beta.solana.com".to_string(),
            Cluster::Devnet => "https://api.devnet.solana.com".to_string(),
            Cluster::Testnet => "https://api.testnet.solana.com".to_string(),
            Cluster::Custom(url) => url.clone(),
        }
    }
}

impl FromStr for Cluster {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l" => Ok(Cluster::Localnet),
            "m" => Ok(Cluster::Mainnet),
            "d" => Ok(Cluster::Devnet),
            "t" => Ok(Cluster::Testnet),
            s if s.starts_with("http://") || s.starts_with("https://") => Ok(Cluster::Custom(s.to_string())),
            _ => Err(format!(
                "Invalid cluster value: '{}'. Use l, m, d, t, or a valid RPC URL (http:// or https://)",
                s
            )),
        }
    }
}
