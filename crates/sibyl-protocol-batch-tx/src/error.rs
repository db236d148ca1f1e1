use crate::packer::PackError;
use thiserror::Error;

/// Errors that can occur during batch transaction operations
#[derive(Error, Debug)]
pub enum TxBatchError {
    #[error("RPC client error: {0}")]
    RpcClient(#[from] solana_client::client_error::ClientError),

    #[error("transaction failed after {retries} retries: {last_error}")]
    RetriesExhausted { retries: usize, last_error: String },

    #[error(transparent)]
    Packing(#[from] PackError),

    #[error("insufficient balance: need {required} lamports, have {available}")]
    InsufficientBalance { required: u64, available: u64 },

    #[error("no instructions provided")]
    NoInstructions,

    #[error("configuration error: {0}")]
    Config(String),
}
