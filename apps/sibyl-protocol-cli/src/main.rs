use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use error::CliResult;

#[derive(Parser)]
#[command(name = "sibyl")]
#[command(about = "Sibyl Protocol CLI - prediction pools on Solana")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a prediction pool
    InitPool {
        /// Pool id: a UUID, hyphens optional
        pool_id: String,

        /// Length of the prediction window in seconds
        #[arg(long, default_value = "31536000")]
        ends_in_secs: u64,

        /// Admin keypair file
        #[arg(short, long)]
        keypair: PathBuf,

        /// Solana RPC URL
        #[arg(short, long, default_value = "https://api.mainnet-beta.solana.com")]
        rpc_url: String,

        /// Simulate without sending
        #[arg(long)]
        dry_run: bool,
    },

    /// Stake a prediction on an open pool
    PostPrediction {
        /// Pool id: a UUID, hyphens optional
        pool_id: String,

        /// Predicted "yes" percentage (0-100)
        #[arg(short, long)]
        prediction: u8,

        /// Stake in lamports
        #[arg(short, long)]
        stake_lamports: u64,

        /// Predictor keypair file
        #[arg(short, long)]
        keypair: PathBuf,

        /// Solana RPC URL
        #[arg(short, long, default_value = "https://api.mainnet-beta.solana.com")]
        rpc_url: String,

        /// Simulate without sending
        #[arg(long)]
        dry_run: bool,
    },

    /// Finalize a pool so rewards can be claimed
    ResolvePool {
        /// Pool id: a UUID, hyphens optional
        pool_id: String,

        /// Admin keypair file
        #[arg(short, long)]
        keypair: PathBuf,

        /// Solana RPC URL
        #[arg(short, long, default_value = "https://api.mainnet-beta.solana.com")]
        rpc_url: String,

        /// Simulate without sending
        #[arg(long)]
        dry_run: bool,
    },

    /// Claim the reward for a resolved prediction
    ClaimRewards {
        /// Pool id: a UUID, hyphens optional
        pool_id: String,

        /// Predictor keypair file
        #[arg(short, long)]
        keypair: PathBuf,

        /// Solana RPC URL
        #[arg(short, long, default_value = "https://api.mainnet-beta.solana.com")]
        rpc_url: String,

        /// Simulate without sending
        #[arg(long)]
        dry_run: bool,
    },

    /// Send lamports to many recipients in packed transactions
    BatchTransfer {
        /// JSON file with recipients
        #[arg(long, conflicts_with = "generate")]
        recipients: Option<PathBuf>,

        /// Generate N throwaway recipients instead (for testing)
        #[arg(long)]
        generate: Option<usize>,

        /// Amount in SOL per recipient
        #[arg(long, default_value = "0.01")]
        amount_sol: f64,

        /// Sender keypair file
        #[arg(short, long)]
        keypair: PathBuf,

        /// Solana RPC URL
        #[arg(short, long, default_value = "https://api.mainnet-beta.solana.com")]
        rpc_url: String,

        /// Estimate fees without sending
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::InitPool {
            pool_id,
            ends_in_secs,
            keypair,
            rpc_url,
            dry_run,
        } => commands::init_pool::execute(pool_id, ends_in_secs, keypair, rpc_url, dry_run),

        Commands::PostPrediction {
            pool_id,
            prediction,
            stake_lamports,
            keypair,
            rpc_url,
            dry_run,
        } => commands::post_prediction::execute(
            pool_id,
            prediction,
            stake_lamports,
            keypair,
            rpc_url,
            dry_run,
        ),

        Commands::ResolvePool {
            pool_id,
            keypair,
            rpc_url,
            dry_run,
        } => commands::resolve_pool::execute(pool_id, keypair, rpc_url, dry_run),

        Commands::ClaimRewards {
            pool_id,
            keypair,
            rpc_url,
            dry_run,
        } => commands::claim_rewards::execute(pool_id, keypair, rpc_url, dry_run),

        Commands::BatchTransfer {
            recipients,
            generate,
            amount_sol,
            keypair,
            rpc_url,
            dry_run,
        } => commands::batch_transfer::execute(
            recipients,
            generate,
            amount_sol,
            keypair,
            rpc_url,
            dry_run,
        ),
    }
}
