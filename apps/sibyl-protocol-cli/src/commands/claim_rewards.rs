use crate::commands::{load_keypair, parse_pool_id};
use crate::error::{CliError, CliResult};
use sibyl_protocol_client::{SibylClient, TransactionResult};
use sibyl_protocol_sdk::build_claim_rewards_tx;
use solana_sdk::signer::Signer;
use std::path::PathBuf;

pub fn execute(
    pool_id: String,
    keypair_path: PathBuf,
    rpc_url: String,
    dry_run: bool,
) -> CliResult<()> {
    println!("🎁 Claiming rewards...");

    let pool_id_bytes = parse_pool_id(&pool_id)?;
    let predictor = load_keypair(&keypair_path)?;
    println!("🔑 Predictor: {}", predictor.pubkey());

    let client = SibylClient::new(rpc_url)?;

    let pool = match client.get_pool(&pool_id_bytes)? {
        Some(pool) => pool,
        None => {
            println!("❌ Pool {} not found on chain", pool_id);
            return Ok(());
        }
    };
    if !pool.is_finalized {
        println!("❌ Pool {} is not resolved yet; nothing to claim", pool_id);
        return Ok(());
    }

    let prediction = match client.get_prediction(&pool_id_bytes, &predictor.pubkey())? {
        Some(prediction) => prediction,
        None => {
            println!("❌ No prediction found for {} in this pool", predictor.pubkey());
            return Ok(());
        }
    };
    if prediction.is_claimed {
        println!("⚠️  Rewards already claimed, nothing to do");
        return Ok(());
    }
    println!("💰 Claimable prize: {} lamports", prediction.prize);

    let recent_blockhash = client
        .rpc_client()
        .get_latest_blockhash()
        .map_err(sibyl_protocol_client::ClientError::Rpc)?;

    let mut tx = build_claim_rewards_tx(&predictor.pubkey(), pool_id_bytes, recent_blockhash)
        .map_err(|e| CliError::TransactionBuild(e.to_string()))?;
    tx.try_sign(&[&predictor], recent_blockhash)
        .map_err(|e| CliError::Signing(e.to_string()))?;

    match client.simulate_and_send(&tx, dry_run)? {
        TransactionResult::Executed(signature) => {
            println!("✅ Rewards claimed: {}", signature);
        }
        TransactionResult::Simulated(_) => {
            println!("🧪 Dry run complete, no transaction sent");
        }
    }

    Ok(())
}
