use crate::commands::{load_keypair, parse_pool_id};
use crate::error::{CliError, CliResult};
use sibyl_protocol_client::{SibylClient, TransactionResult};
use sibyl_protocol_sdk::build_resolve_pool_tx;
use solana_sdk::signer::Signer;
use std::path::PathBuf;

pub fn execute(
    pool_id: String,
    keypair_path: PathBuf,
    rpc_url: String,
    dry_run: bool,
) -> CliResult<()> {
    println!("🏁 Resolving pool...");

    let pool_id_bytes = parse_pool_id(&pool_id)?;
    let admin = load_keypair(&keypair_path)?;
    println!("🔑 Admin: {}", admin.pubkey());

    let client = SibylClient::new(rpc_url)?;

    let pool = match client.get_pool(&pool_id_bytes)? {
        Some(pool) => pool,
        None => {
            println!("❌ Pool {} not found on chain", pool_id);
            return Ok(());
        }
    };
    if pool.is_finalized {
        println!("⚠️  Pool {} is already finalized, nothing to do", pool_id);
        return Ok(());
    }
    println!("📊 Finalizing with {} lamports staked", pool.total_stake);

    let recent_blockhash = client
        .rpc_client()
        .get_latest_blockhash()
        .map_err(sibyl_protocol_client::ClientError::Rpc)?;

    let mut tx = build_resolve_pool_tx(&admin.pubkey(), pool_id_bytes, recent_blockhash)
        .map_err(|e| CliError::TransactionBuild(e.to_string()))?;
    tx.try_sign(&[&admin], recent_blockhash)
        .map_err(|e| CliError::Signing(e.to_string()))?;

    match client.simulate_and_send(&tx, dry_run)? {
        TransactionResult::Executed(signature) => {
            println!("✅ Pool resolved: {}", signature);
        }
        TransactionResult::Simulated(_) => {
            println!("🧪 Dry run complete, no transaction sent");
        }
    }

    Ok(())
}
