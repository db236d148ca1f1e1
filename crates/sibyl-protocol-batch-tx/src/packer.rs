//! Order-preserving bin packing of instructions into size-bounded
//! transactions.
//!
//! Instructions are scanned once in arrival order and accumulated into the
//! current batch while the candidate transaction stays inside every limit;
//! the first instruction that does not fit closes the batch and opens the
//! next one. Input order is preserved across batches so independent
//! operations (a transfer per recipient, say) land on chain in the order the
//! caller supplied them.

use solana_sdk::{
    hash::Hash, instruction::Instruction, message::Message, packet::PACKET_DATA_SIZE,
    pubkey::Pubkey, signature::Signature,
};
use thiserror::Error;

/// Runtime account-lock ceiling per transaction.
pub const MAX_ACCOUNT_KEYS_PER_TRANSACTION: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackError {
    #[error(
        "instruction {index} serializes to {size} bytes in a transaction of its own, \
         exceeding the {limit}-byte limit"
    )]
    InstructionTooLarge {
        index: usize,
        size: usize,
        limit: usize,
    },

    #[error(
        "instruction {index} references {account_keys} accounts in a transaction of its own, \
         exceeding the limit of {limit}"
    )]
    InstructionTooManyAccounts {
        index: usize,
        account_keys: usize,
        limit: usize,
    },
}

/// Ceilings one packed transaction must respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackLimits {
    /// Serialized size of the signed transaction, in bytes.
    pub max_transaction_size: usize,
    /// Distinct account keys the compiled message may reference.
    pub max_account_keys: usize,
    /// Instruction count; a secondary guard, size is usually the binding
    /// constraint.
    pub max_instructions: usize,
}

impl Default for PackLimits {
    fn default() -> Self {
        Self {
            max_transaction_size: PACKET_DATA_SIZE,
            max_account_keys: MAX_ACCOUNT_KEYS_PER_TRANSACTION,
            max_instructions: usize::MAX,
        }
    }
}

/// One payer plus a non-empty ordered instruction list, sized to fit a
/// single atomic transaction.
#[derive(Debug, Clone)]
pub struct InstructionBatch {
    payer: Pubkey,
    instructions: Vec<Instruction>,
}

impl InstructionBatch {
    fn new(payer: Pubkey, instructions: Vec<Instruction>) -> Self {
        Self {
            payer,
            instructions,
        }
    }

    pub fn payer(&self) -> &Pubkey {
        &self.payer
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Compile the batch into a message ready for signing.
    pub fn to_message(&self, recent_blockhash: &Hash) -> Message {
        Message::new_with_blockhash(&self.instructions, Some(&self.payer), recent_blockhash)
    }

    /// Wire size of the signed transaction this batch compiles to.
    pub fn wire_size(&self) -> usize {
        transaction_wire_size(&Message::new(&self.instructions, Some(&self.payer)))
    }

    /// Distinct account keys the compiled message references.
    pub fn account_keys(&self) -> usize {
        Message::new(&self.instructions, Some(&self.payer))
            .account_keys
            .len()
    }
}

/// Pack `instructions` into the fewest transactions that respect `limits`,
/// preserving arrival order.
///
/// Greedy forward scan: an instruction joins the current batch iff the
/// candidate message stays inside every limit, otherwise the batch is closed
/// and a new one opened. An instruction that violates the size or account
/// limit in a transaction of its own fails the whole call; nothing is
/// silently dropped or truncated. An empty input yields an empty batch list.
pub fn pack_instructions(
    payer: &Pubkey,
    instructions: &[Instruction],
    limits: &PackLimits,
) -> Result<Vec<InstructionBatch>, PackError> {
    let mut batches = Vec::new();
    let mut current: Vec<Instruction> = Vec::new();

    for (index, instruction) in instructions.iter().enumerate() {
        if !current.is_empty() && current.len() < limits.max_instructions {
            current.push(instruction.clone());
            let message = Message::new(&current, Some(payer));
            if transaction_wire_size(&message) <= limits.max_transaction_size
                && message.account_keys.len() <= limits.max_account_keys
            {
                continue;
            }
            current.pop();
        }

        if !current.is_empty() {
            batches.push(InstructionBatch::new(*payer, std::mem::take(&mut current)));
        }

        // The instruction opens a fresh batch; reject it outright if it
        // cannot fit a transaction of its own.
        let message = Message::new(std::slice::from_ref(instruction), Some(payer));
        let size = transaction_wire_size(&message);
        if size > limits.max_transaction_size {
            return Err(PackError::InstructionTooLarge {
                index,
                size,
                limit: limits.max_transaction_size,
            });
        }
        let account_keys = message.account_keys.len();
        if account_keys > limits.max_account_keys {
            return Err(PackError::InstructionTooManyAccounts {
                index,
                account_keys,
                limit: limits.max_account_keys,
            });
        }

        current.push(instruction.clone());
    }

    if !current.is_empty() {
        batches.push(InstructionBatch::new(*payer, current));
    }

    Ok(batches)
}

/// Wire size of the signed transaction carrying `message`: the compact-u16
/// signature count, 64 bytes per required signature, then the message bytes.
fn transaction_wire_size(message: &Message) -> usize {
    let signatures = message.header.num_required_signatures as usize;
    compact_u16_len(signatures)
        + signatures * std::mem::size_of::<Signature>()
        + message.serialize().len()
}

fn compact_u16_len(value: usize) -> usize {
    match value {
        0..=0x7f => 1,
        0x80..=0x3fff => 2,
        _ => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::instruction::AccountMeta;
    use solana_sdk::system_instruction;

    fn transfers(payer: &Pubkey, count: usize) -> Vec<Instruction> {
        (0..count)
            .map(|_| system_instruction::transfer(payer, &Pubkey::new_unique(), 10_000_000))
            .collect()
    }

    #[test]
    fn empty_input_yields_no_batches() {
        let payer = Pubkey::new_unique();
        let batches = pack_instructions(&payer, &[], &PackLimits::default()).unwrap();
        assert!(batches.is_empty());
    }

    #[test]
    fn short_input_yields_one_batch() {
        let payer = Pubkey::new_unique();
        let instructions = transfers(&payer, 3);

        let batches = pack_instructions(&payer, &instructions, &PackLimits::default()).unwrap();

        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 3);
        assert_eq!(batches[0].payer(), &payer);
    }

    #[test]
    fn every_batch_respects_the_limits() {
        let payer = Pubkey::new_unique();
        let instructions = transfers(&payer, 50);
        let limits = PackLimits {
            max_transaction_size: 500,
            ..PackLimits::default()
        };

        let batches = pack_instructions(&payer, &instructions, &limits).unwrap();

        assert!(batches.len() > 1);
        for batch in &batches {
            assert!(!batch.is_empty());
            assert!(batch.wire_size() <= limits.max_transaction_size);
            assert!(batch.account_keys() <= limits.max_account_keys);
        }
    }

    #[test]
    fn packing_preserves_the_input_sequence_exactly() {
        let payer = Pubkey::new_unique();
        let instructions = transfers(&payer, 37);
        let limits = PackLimits {
            max_transaction_size: 400,
            ..PackLimits::default()
        };

        let batches = pack_instructions(&payer, &instructions, &limits).unwrap();

        let repacked: Vec<Instruction> = batches
            .into_iter()
            .flat_map(InstructionBatch::into_instructions)
            .collect();
        assert_eq!(repacked, instructions);
    }

    #[test]
    fn twenty_one_transfers_split_twenty_then_one_at_the_twenty_transfer_size() {
        let payer = Pubkey::new_unique();
        let instructions = transfers(&payer, 21);

        // A limit that admits exactly the first twenty transfers.
        let first_twenty = Message::new(&instructions[..20], Some(&payer));
        let limits = PackLimits {
            max_transaction_size: transaction_wire_size(&first_twenty),
            ..PackLimits::default()
        };

        let batches = pack_instructions(&payer, &instructions, &limits).unwrap();

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].len(), 20);
        assert_eq!(batches[1].len(), 1);
    }

    #[test]
    fn account_limit_bounds_each_batch() {
        let payer = Pubkey::new_unique();
        let instructions = transfers(&payer, 5);
        // payer + system program + two recipients
        let limits = PackLimits {
            max_account_keys: 4,
            ..PackLimits::default()
        };

        let batches = pack_instructions(&payer, &instructions, &limits).unwrap();

        let lengths: Vec<usize> = batches.iter().map(InstructionBatch::len).collect();
        assert_eq!(lengths, vec![2, 2, 1]);
        for batch in &batches {
            assert!(batch.account_keys() <= limits.max_account_keys);
        }
    }

    #[test]
    fn instruction_count_limit_chunks_like_the_legacy_packer() {
        let payer = Pubkey::new_unique();
        let instructions = transfers(&payer, 7);
        let limits = PackLimits {
            max_instructions: 3,
            ..PackLimits::default()
        };

        let batches = pack_instructions(&payer, &instructions, &limits).unwrap();

        let lengths: Vec<usize> = batches.iter().map(InstructionBatch::len).collect();
        assert_eq!(lengths, vec![3, 3, 1]);
    }

    #[test]
    fn oversized_instruction_is_rejected_with_its_index() {
        let payer = Pubkey::new_unique();
        let mut instructions = transfers(&payer, 2);
        instructions.push(Instruction::new_with_bytes(
            Pubkey::new_unique(),
            &[0u8; 2 * PACKET_DATA_SIZE],
            vec![AccountMeta::new(payer, true)],
        ));

        let err = pack_instructions(&payer, &instructions, &PackLimits::default()).unwrap_err();

        match err {
            PackError::InstructionTooLarge { index, size, limit } => {
                assert_eq!(index, 2);
                assert!(size > limit);
            }
            other => panic!("expected InstructionTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn account_heavy_instruction_is_rejected_with_its_index() {
        let payer = Pubkey::new_unique();
        let metas: Vec<AccountMeta> = (0..MAX_ACCOUNT_KEYS_PER_TRANSACTION)
            .map(|_| AccountMeta::new_readonly(Pubkey::new_unique(), false))
            .collect();
        let instructions = vec![Instruction::new_with_bytes(
            Pubkey::new_unique(),
            &[],
            metas,
        )];

        // Generous size ceiling so only the account limit can trip.
        let limits = PackLimits {
            max_transaction_size: 10 * PACKET_DATA_SIZE,
            ..PackLimits::default()
        };
        let err = pack_instructions(&payer, &instructions, &limits).unwrap_err();

        match err {
            PackError::InstructionTooManyAccounts {
                index,
                account_keys,
                limit,
            } => {
                assert_eq!(index, 0);
                assert!(account_keys > limit);
            }
            other => panic!("expected InstructionTooManyAccounts, got {other:?}"),
        }
    }

    #[test]
    fn wire_size_stays_under_the_packet_ceiling_for_default_limits() {
        let payer = Pubkey::new_unique();
        let instructions = transfers(&payer, 40);

        let batches = pack_instructions(&payer, &instructions, &PackLimits::default()).unwrap();

        for batch in &batches {
            assert!(batch.wire_size() <= PACKET_DATA_SIZE);
        }
    }
}
