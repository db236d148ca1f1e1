/*!
# Sibyl Protocol Client

Blocking RPC client for Sibyl operations: typed account fetches for the
protocol's PDAs, transaction simulation, and submission with dry-run support.
*/

mod client;
mod errors;
mod types;

pub use client::SibylClient;
pub use errors::{ClientError, ClientResult};
pub use types::{SimulationResult, TransactionResult};

// Re-export the account types callers get back
pub use sibyl_protocol_interface::state::{ConfigAccount, PoolAccount, PredictionAccount};
