use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("client error: {0}")]
    Client(#[from] sibyl_protocol_client::ClientError),

    #[error("batch send failed: {0}")]
    Batch(#[from] sibyl_protocol_batch_tx::TxBatchError),

    #[error("address derivation failed: {0}")]
    Address(#[from] sibyl_protocol_sdk::AddressError),

    #[error("invalid pool id '{input}': {reason}")]
    InvalidPoolId { input: String, reason: String },

    #[error("invalid recipient address '{0}'")]
    InvalidRecipient(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("keypair error: {0}")]
    Keypair(String),

    #[error("failed to build transaction: {0}")]
    TransactionBuild(String),

    #[error("failed to sign transaction: {0}")]
    Signing(String),

    #[error("command execution failed: {0}")]
    CommandExecution(String),
}
