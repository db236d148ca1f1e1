/*!
# Sibyl Client Implementation

Unified access to Sibyl protocol accounts and transaction submission.
*/

use crate::{
    errors::{ClientError, ClientResult},
    types::{SimulationResult, TransactionResult},
};
use sibyl_protocol_interface::state::{ConfigAccount, PoolAccount, PredictionAccount};
use sibyl_protocol_interface::{ProgramAccount, POOL_ID_LEN};
use sibyl_protocol_sdk::AddressFinder;
use solana_client::{
    rpc_client::RpcClient,
    rpc_config::{RpcSendTransactionConfig, RpcSimulateTransactionConfig},
};
use solana_sdk::{
    commitment_config::CommitmentConfig, pubkey::Pubkey, signature::Signature,
    transaction::Transaction,
};

/// Unified client for Sibyl RPC operations
pub struct SibylClient {
    address_finder: AddressFinder,
    rpc_client: RpcClient,
}

impl SibylClient {
    /// Create new client with default commitment (confirmed)
    pub fn new(rpc_url: String) -> ClientResult<Self> {
        Self::new_with_address_finder_and_commitment(
            rpc_url,
            AddressFinder::default(),
            CommitmentConfig::confirmed(),
        )
    }

    /// Create new client with specific commitment level
    pub fn new_with_address_finder_and_commitment(
        rpc_url: String,
        address_finder: AddressFinder,
        commitment: CommitmentConfig,
    ) -> ClientResult<Self> {
        let rpc_client = RpcClient::new_with_commitment(rpc_url, commitment);

        Ok(Self {
            rpc_client,
            address_finder,
        })
    }

    // ================================================================================================
    // Protocol Account Operations
    // ================================================================================================

    /// Get the protocol config account
    pub fn get_config(&self) -> ClientResult<Option<ConfigAccount>> {
        let (config_pda, _) = self.address_finder.find_config_address()?;
        self.get_program_account(&config_pda, "config")
    }

    /// Get a pool account by its 16-byte id
    pub fn get_pool(&self, pool_id: &[u8; POOL_ID_LEN]) -> ClientResult<Option<PoolAccount>> {
        let (pool_pda, _) = self.address_finder.find_pool_address(pool_id)?;
        self.get_program_account(&pool_pda, "pool")
    }

    /// Get a wallet's prediction account for a pool
    pub fn get_prediction(
        &self,
        pool_id: &[u8; POOL_ID_LEN],
        predictor: &Pubkey,
    ) -> ClientResult<Option<PredictionAccount>> {
        let (pool_pda, _) = self.address_finder.find_pool_address(pool_id)?;
        let (prediction_pda, _) = self
            .address_finder
            .find_prediction_address(&pool_pda, predictor)?;
        self.get_program_account(&prediction_pda, "prediction")
    }

    fn get_program_account<T: ProgramAccount>(
        &self,
        address: &Pubkey,
        kind: &str,
    ) -> ClientResult<Option<T>> {
        let account_data = match self.rpc_client.get_account_data(address) {
            Ok(data) => data,
            Err(solana_client::client_error::ClientError {
                kind:
                    solana_client::client_error::ClientErrorKind::RpcError(
                        solana_client::rpc_request::RpcError::RpcResponseError { .. },
                    ),
                ..
            }) => return Ok(None), // Account doesn't exist
            Err(e) => return Err(ClientError::Rpc(e)),
        };

        let account = T::try_from_bytes(&account_data).map_err(|e| {
            ClientError::InvalidAccountData(format!(
                "failed to deserialize {} account {}: {}",
                kind, address, e
            ))
        })?;

        Ok(Some(account))
    }

    // ================================================================================================
    // Transaction Management (Simulation + Execution + Logging)
    // ================================================================================================

    /// Simulate transaction without executing
    pub fn simulate_transaction(&self, tx: &Transaction) -> ClientResult<SimulationResult> {
        let config = RpcSimulateTransactionConfig {
            sig_verify: true,
            replace_recent_blockhash: false,
            commitment: Some(self.rpc_client.commitment()),
            encoding: None,
            accounts: None,
            min_context_slot: None,
            inner_instructions: false,
        };

        let result = self
            .rpc_client
            .simulate_transaction_with_config(tx, config)?;
        Ok(SimulationResult::from_rpc_result(result.value))
    }

    /// Send transaction and return signature
    pub fn send_transaction(&self, tx: &Transaction) -> ClientResult<Signature> {
        let config = RpcSendTransactionConfig {
            skip_preflight: false,
            preflight_commitment: Some(self.rpc_client.commitment().commitment),
            encoding: None,
            max_retries: Some(3),
            min_context_slot: None,
        };

        let signature = self.rpc_client.send_transaction_with_config(tx, config)?;

        // Explorer URL for easy debugging
        println!(
            "✅ Transaction: https://explorer.solana.com/tx/{}",
            signature
        );

        Ok(signature)
    }

    /// Simulate and optionally send transaction (supports dry-run)
    pub fn simulate_and_send(
        &self,
        tx: &Transaction,
        dry_run: bool,
    ) -> ClientResult<TransactionResult> {
        // Always simulate first
        let sim_result = self.simulate_transaction(tx)?;

        if !sim_result.success {
            return Err(ClientError::SimulationFailed(
                sim_result
                    .error
                    .unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        if dry_run {
            println!(
                "🧪 Dry run successful - transaction would consume {} compute units",
                sim_result.compute_units.unwrap_or(0)
            );
            return Ok(TransactionResult::Simulated(sim_result.raw));
        }

        let signature = self.send_transaction(tx)?;
        Ok(TransactionResult::Executed(signature))
    }

    // ================================================================================================
    // Utility Methods
    // ================================================================================================

    /// Get the address finder
    pub fn address_finder(&self) -> &AddressFinder {
        &self.address_finder
    }

    /// Get the program ID
    pub fn program_id(&self) -> &Pubkey {
        &self.address_finder.program_id
    }

    /// Get the RPC client (for advanced operations)
    pub fn rpc_client(&self) -> &RpcClient {
        &self.rpc_client
    }
}
