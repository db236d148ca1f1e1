use crate::commands::{load_keypair, parse_pool_id};
use crate::error::{CliError, CliResult};
use sibyl_protocol_client::{SibylClient, TransactionResult};
use sibyl_protocol_sdk::{build_create_pool_tx, AddressFinder};
use solana_sdk::signer::Signer;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn execute(
    pool_id: String,
    ends_in_secs: u64,
    keypair_path: PathBuf,
    rpc_url: String,
    dry_run: bool,
) -> CliResult<()> {
    println!("🏗️  Initializing prediction pool...");

    let pool_id_bytes = parse_pool_id(&pool_id)?;
    let admin = load_keypair(&keypair_path)?;
    println!("🔑 Admin: {}", admin.pubkey());

    let client = SibylClient::new(rpc_url)?;
    println!("📜 Program: {}", client.program_id());

    let (pool_pda, _) = AddressFinder::default().find_pool_address(&pool_id_bytes)?;
    println!("📍 Pool PDA: {}", pool_pda);

    if client.get_pool(&pool_id_bytes)?.is_some() {
        println!("⚠️  Pool already exists, nothing to do");
        return Ok(());
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| CliError::CommandExecution(e.to_string()))?
        .as_secs();
    let prediction_end_time = (now + ends_in_secs) as i64;
    println!("⏳ Prediction window closes at {}", prediction_end_time);

    let recent_blockhash = client
        .rpc_client()
        .get_latest_blockhash()
        .map_err(sibyl_protocol_client::ClientError::Rpc)?;

    let mut tx = build_create_pool_tx(
        &admin.pubkey(),
        pool_id_bytes,
        prediction_end_time,
        recent_blockhash,
    )
    .map_err(|e| CliError::TransactionBuild(e.to_string()))?;
    tx.try_sign(&[&admin], recent_blockhash)
        .map_err(|e| CliError::Signing(e.to_string()))?;

    match client.simulate_and_send(&tx, dry_run)? {
        TransactionResult::Executed(signature) => {
            println!("✅ Pool initialized: {}", signature);
        }
        TransactionResult::Simulated(_) => {
            println!("🧪 Dry run complete, no transaction sent");
        }
    }

    Ok(())
}
