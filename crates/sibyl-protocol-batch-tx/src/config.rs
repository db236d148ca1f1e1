use crate::packer::{PackLimits, MAX_ACCOUNT_KEYS_PER_TRANSACTION};
use backoff::ExponentialBackoff;
use solana_sdk::commitment_config::CommitmentConfig;
use std::time::Duration;

/// Configuration for batch transaction operations
#[derive(Debug, Clone)]
pub struct TxBatchConfig {
    /// Maximum number of retry attempts for failed transactions
    pub max_retries: usize,

    /// Backoff strategy for retry delays
    pub retry_backoff: ExponentialBackoff,

    /// Commitment level for transaction confirmation
    pub confirmation_commitment: CommitmentConfig,

    /// Whether to verify payer balance before sending transactions
    pub verify_balance_before_send: bool,

    /// Maximum number of transactions to send in parallel
    pub max_parallel_sends: usize,

    /// Maximum serialized transaction size in bytes (conservative default)
    pub max_transaction_size_bytes: usize,

    /// Maximum distinct account keys per transaction
    pub max_account_keys_per_tx: usize,

    /// Maximum number of instructions to pack into a single transaction;
    /// a secondary guard on top of the size-based packing
    pub max_instructions_per_tx: usize,
}

impl TxBatchConfig {
    /// Project the packing-relevant ceilings for the instruction packer.
    pub fn pack_limits(&self) -> PackLimits {
        PackLimits {
            max_transaction_size: self.max_transaction_size_bytes,
            max_account_keys: self.max_account_keys_per_tx,
            max_instructions: self.max_instructions_per_tx,
        }
    }
}

impl Default for TxBatchConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            retry_backoff: ExponentialBackoff {
                initial_interval: Duration::from_millis(500),
                max_interval: Duration::from_secs(30),
                max_elapsed_time: Some(Duration::from_secs(300)), // 5 minutes total
                multiplier: 2.0,
                ..Default::default()
            },
            confirmation_commitment: CommitmentConfig::confirmed(),
            verify_balance_before_send: true,
            max_parallel_sends: 4,
            max_transaction_size_bytes: 1200, // Conservative, well under 1232 limit
            max_account_keys_per_tx: MAX_ACCOUNT_KEYS_PER_TRANSACTION,
            max_instructions_per_tx: 24,
        }
    }
}
