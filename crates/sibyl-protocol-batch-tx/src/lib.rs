/*!
# Sibyl Batch Transaction Client

Order-preserving packing of independent instructions into size-bounded atomic
transactions, plus an efficient batch sender with automatic retry logic and
balance verification. Sending patterns follow the Solana CLI for production
reliability.

## Quick Start

```rust
use sibyl_protocol_batch_tx::{BatchTxClient, TxBatchConfig};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{instruction::Instruction, signature::Keypair};
use std::sync::Arc;

# async fn example() -> Result<(), Box<dyn std::error::Error>> {
let rpc_client = Arc::new(RpcClient::new("https://api.devnet.solana.com".to_string()));
let payer = Keypair::new();
let client = BatchTxClient::new(rpc_client, payer);

let instructions: Vec<Instruction> = vec![/* your instructions */];

// Simple usage - handles packing, retry, and parallel sending automatically
let signatures = client.send_instructions(instructions).await?;
println!("Sent {} transactions successfully", signatures.len());
# Ok(())
# }
```

## Packing Without Sending

```rust
use sibyl_protocol_batch_tx::{pack_instructions, PackLimits};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};

# fn example(payer: Pubkey, instructions: Vec<Instruction>) -> Result<(), Box<dyn std::error::Error>> {
let batches = pack_instructions(&payer, &instructions, &PackLimits::default())?;
for batch in &batches {
    println!("{} instructions, {} bytes", batch.len(), batch.wire_size());
}
# Ok(())
# }
```

## Custom Configuration

```rust
# use sibyl_protocol_batch_tx::{BatchTxClient, TxBatchConfig};
# use solana_client::nonblocking::rpc_client::RpcClient;
# use solana_sdk::signature::Keypair;
# use std::sync::Arc;

# async fn example() -> Result<(), Box<dyn std::error::Error>> {
let rpc_client = Arc::new(RpcClient::new("https://api.devnet.solana.com".to_string()));
let config = TxBatchConfig {
    max_parallel_sends: 8,
    max_retries: 5,
    ..Default::default()
};

let payer = Keypair::new();
let client = BatchTxClient::with_config(rpc_client, payer, config);
# Ok(())
# }
```
*/

mod client;
mod config;
mod error;
mod packer;

pub use client::{BatchTxClient, CostEstimate};
pub use config::TxBatchConfig;
pub use error::TxBatchError;
pub use packer::{
    pack_instructions, InstructionBatch, PackError, PackLimits,
    MAX_ACCOUNT_KEYS_PER_TRANSACTION,
};

// Re-export key Solana types for convenience
pub use solana_client::nonblocking::rpc_client::RpcClient;
pub use solana_sdk::{
    hash::Hash,
    instruction::Instruction,
    message::Message,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::Transaction,
};
