use crate::commands::load_keypair;
use crate::config::TransferRecipient;
use crate::error::{CliError, CliResult};
use sibyl_protocol_batch_tx::{BatchTxClient, RpcClient};
use solana_sdk::{
    native_token::sol_to_lamports, pubkey::Pubkey, signature::Keypair, signer::Signer,
    system_instruction,
};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

pub fn execute(
    recipients_path: Option<PathBuf>,
    generate: Option<usize>,
    amount_sol: f64,
    keypair_path: PathBuf,
    rpc_url: String,
    dry_run: bool,
) -> CliResult<()> {
    println!("📤 Starting batch transfer...");

    let payer = load_keypair(&keypair_path)?;
    println!("🔑 Sender: {}", payer.pubkey());

    let transfers = resolve_transfers(recipients_path, generate, amount_sol)?;
    println!("👥 {} recipient(s)", transfers.len());

    let instructions: Vec<_> = transfers
        .iter()
        .map(|(recipient, lamports)| {
            system_instruction::transfer(&payer.pubkey(), recipient, *lamports)
        })
        .collect();

    let rpc_client = Arc::new(RpcClient::new(rpc_url));
    let client = BatchTxClient::new(rpc_client, payer);

    let runtime = tokio::runtime::Runtime::new()?;

    if dry_run {
        let estimate = runtime.block_on(client.estimate_cost(instructions))?;
        println!(
            "🧪 Dry run: {} transaction(s), {} lamports in fees",
            estimate.transaction_count, estimate.total_fee_lamports
        );
        return Ok(());
    }

    let signatures = runtime.block_on(client.send_instructions(instructions))?;

    println!("✅ Sent {} transaction(s):", signatures.len());
    for signature in &signatures {
        println!("   {}", signature);
    }

    Ok(())
}

/// Resolve the recipient list to (address, lamports) pairs, either from the
/// recipients file or by generating throwaway keys.
fn resolve_transfers(
    recipients_path: Option<PathBuf>,
    generate: Option<usize>,
    amount_sol: f64,
) -> CliResult<Vec<(Pubkey, u64)>> {
    if let Some(path) = recipients_path {
        let contents = std::fs::read_to_string(&path)?;
        let entries: Vec<TransferRecipient> = serde_json::from_str(&contents)?;

        let mut transfers = Vec::with_capacity(entries.len());
        for entry in entries {
            let recipient = Pubkey::from_str(&entry.recipient)
                .map_err(|_| CliError::InvalidRecipient(entry.recipient.clone()))?;
            let lamports = sol_to_lamports(entry.amount_sol.unwrap_or(amount_sol));
            transfers.push((recipient, lamports));
        }
        return Ok(transfers);
    }

    if let Some(count) = generate {
        // Throwaway recipients; the corresponding private keys are discarded.
        let lamports = sol_to_lamports(amount_sol);
        return Ok((0..count)
            .map(|_| (Keypair::new().pubkey(), lamports))
            .collect());
    }

    Err(CliError::InvalidArgument(
        "provide --recipients FILE or --generate N".to_string(),
    ))
}
