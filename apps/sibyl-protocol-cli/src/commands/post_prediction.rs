use crate::commands::{load_keypair, parse_pool_id};
use crate::error::{CliError, CliResult};
use sibyl_protocol_client::{SibylClient, TransactionResult};
use sibyl_protocol_sdk::{build_predict_tx, AddressFinder};
use solana_sdk::signer::Signer;
use std::path::PathBuf;

pub fn execute(
    pool_id: String,
    prediction: u8,
    stake_lamports: u64,
    keypair_path: PathBuf,
    rpc_url: String,
    dry_run: bool,
) -> CliResult<()> {
    println!("🎯 Posting prediction...");

    if prediction > 100 {
        return Err(CliError::InvalidArgument(format!(
            "prediction {} is outside 0..=100",
            prediction
        )));
    }

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
    if pool.is_finalized {
        println!("❌ Pool {} is already finalized; predictions are closed", pool_id);
        return Ok(());
    }
    println!(
        "📊 Pool stake so far: {} lamports, window closes at {}",
        pool.total_stake, pool.prediction_end_time
    );

    let finder = AddressFinder::default();
    let (pool_pda, _) = finder.find_pool_address(&pool_id_bytes)?;
    let (prediction_pda, _) = finder.find_prediction_address(&pool_pda, &predictor.pubkey())?;
    println!("📍 Prediction PDA: {}", prediction_pda);

    let recent_blockhash = client
        .rpc_client()
        .get_latest_blockhash()
        .map_err(sibyl_protocol_client::ClientError::Rpc)?;

    let mut tx = build_predict_tx(
        &predictor.pubkey(),
        pool_id_bytes,
        prediction,
        stake_lamports,
        recent_blockhash,
    )
    .map_err(|e| CliError::TransactionBuild(e.to_string()))?;
    tx.try_sign(&[&predictor], recent_blockhash)
        .map_err(|e| CliError::Signing(e.to_string()))?;

    match client.simulate_and_send(&tx, dry_run)? {
        TransactionResult::Executed(signature) => {
            println!(
                "✅ Predicted {}% with {} lamports: {}",
                prediction, stake_lamports, signature
            );
        }
        TransactionResult::Simulated(_) => {
            println!("🧪 Dry run complete, no transaction sent");
        }
    }

    Ok(())
}
