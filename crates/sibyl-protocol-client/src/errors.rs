use sibyl_protocol_sdk::AddressError;
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error("address derivation failed: {0}")]
    Address(#[from] AddressError),

    #[error("invalid account data: {0}")]
    InvalidAccountData(String),

    #[error("transaction simulation failed: {0}")]
    SimulationFailed(String),

    #[error("transaction failed: {0}")]
    TransactionFailed(String),
}
