/*!
# Transaction Builders

High-level builders for single Sibyl operations. All functions follow the
naming pattern `build_*_tx` and return unsigned transactions that the caller
signs and sends.

Design notes:

- **Unsigned**: callers hold the keypairs; builders never see them.
- **RPC independence**: no network calls; the caller supplies the recent
  blockhash.
- **Composable**: `build_multi_instruction_tx` packs caller-assembled
  instruction lists into one transaction (for many independent operations,
  use the batch packer instead).
*/

use crate::{
    build_claim_rewards_ix, build_create_pool_ix, build_predict_ix, build_resolve_pool_ix,
    AddressFinder,
};
use sibyl_protocol_interface::POOL_ID_LEN;
use solana_sdk::{
    hash::Hash, instruction::Instruction, message::Message, pubkey::Pubkey,
    transaction::Transaction,
};

/// Errors that can occur during transaction building
#[derive(Debug)]
pub enum TransactionBuilderError {
    InvalidInput(String),
    InstructionBuilder(String),
}

impl std::fmt::Display for TransactionBuilderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionBuilderError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            TransactionBuilderError::InstructionBuilder(msg) => {
                write!(f, "Instruction building failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for TransactionBuilderError {}

pub type TransactionBuilderResult<T> = Result<T, TransactionBuilderError>;

/// Build transaction to open a prediction pool
pub fn build_create_pool_tx(
    admin: &Pubkey,
    pool_id: [u8; POOL_ID_LEN],
    prediction_end_time: i64,
    recent_blockhash: Hash,
) -> TransactionBuilderResult<Transaction> {
    let address_finder = AddressFinder::default();

    let (create_pool_ix, _, _) =
        build_create_pool_ix(&address_finder, *admin, pool_id, prediction_end_time)
            .map_err(|e| TransactionBuilderError::InstructionBuilder(e.to_string()))?;

    let message = Message::new(&[create_pool_ix], Some(admin));
    let mut transaction = Transaction::new_unsigned(message);
    transaction.message.recent_blockhash = recent_blockhash;

    Ok(transaction)
}

/// Build transaction to stake on a pool
pub fn build_predict_tx(
    predictor: &Pubkey,
    pool_id: [u8; POOL_ID_LEN],
    prediction_value: u8,
    stake: u64,
    recent_blockhash: Hash,
) -> TransactionBuilderResult<Transaction> {
    if prediction_value > 100 {
        return Err(TransactionBuilderError::InvalidInput(format!(
            "prediction value {} is outside 0..=100",
            prediction_value
        )));
    }

    let address_finder = AddressFinder::default();

    let (predict_ix, _, _) =
        build_predict_ix(&address_finder, *predictor, pool_id, prediction_value, stake)
            .map_err(|e| TransactionBuilderError::InstructionBuilder(e.to_string()))?;

    let message = Message::new(&[predict_ix], Some(predictor));
    let mut transaction = Transaction::new_unsigned(message);
    transaction.message.recent_blockhash = recent_blockhash;

    Ok(transaction)
}

/// Build transaction to finalize a pool
pub fn build_resolve_pool_tx(
    admin: &Pubkey,
    pool_id: [u8; POOL_ID_LEN],
    recent_blockhash: Hash,
) -> TransactionBuilderResult<Transaction> {
    let address_finder = AddressFinder::default();

    let (resolve_ix, _, _) = build_resolve_pool_ix(&address_finder, *admin, pool_id)
        .map_err(|e| TransactionBuilderError::InstructionBuilder(e.to_string()))?;

    let message = Message::new(&[resolve_ix], Some(admin));
    let mut transaction = Transaction::new_unsigned(message);
    transaction.message.recent_blockhash = recent_blockhash;

    Ok(transaction)
}

/// Build transaction to claim a resolved prediction
pub fn build_claim_rewards_tx(
    predictor: &Pubkey,
    pool_id: [u8; POOL_ID_LEN],
    recent_blockhash: Hash,
) -> TransactionBuilderResult<Transaction> {
    let address_finder = AddressFinder::default();

    let (claim_ix, _, _) = build_claim_rewards_ix(&address_finder, *predictor, pool_id)
        .map_err(|e| TransactionBuilderError::InstructionBuilder(e.to_string()))?;

    let message = Message::new(&[claim_ix], Some(predictor));
    let mut transaction = Transaction::new_unsigned(message);
    transaction.message.recent_blockhash = recent_blockhash;

    Ok(transaction)
}

/// Build multi-instruction transaction from instruction list
/// Useful for combining multiple operations into a single transaction
pub fn build_multi_instruction_tx(
    instructions: Vec<Instruction>,
    payer: &Pubkey,
    recent_blockhash: Hash,
) -> TransactionBuilderResult<Transaction> {
    if instructions.is_empty() {
        return Err(TransactionBuilderError::InvalidInput(
            "Cannot create transaction with no instructions".to_string(),
        ));
    }

    let message = Message::new(&instructions, Some(payer));
    let mut transaction = Transaction::new_unsigned(message);
    transaction.message.recent_blockhash = recent_blockhash;

    Ok(transaction)
}
