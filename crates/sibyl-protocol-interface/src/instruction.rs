//! Instruction data layouts: an 8-byte discriminator followed by the
//! borsh-encoded arguments.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::POOL_ID_LEN;

pub const INSTRUCTION_DISCRIMINATOR_LEN: usize = 8;

/// Instructions accepted by the Sibyl program. `DISCRIMINATOR` is the first
/// 8 bytes of `sha256("global:<snake_case_name>")`.
pub trait ProgramInstruction: BorshSerialize {
    const DISCRIMINATOR: [u8; INSTRUCTION_DISCRIMINATOR_LEN];

    fn data(&self) -> std::io::Result<Vec<u8>> {
        let mut data = Self::DISCRIMINATOR.to_vec();
        self.serialize(&mut data)?;
        Ok(data)
    }
}

/// Create the config account and set the initial protocol parameters.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Initialize {
    pub min_stake: u64,
    pub max_stake: u64,
    pub max_roi: u64,
    pub platform_fee: u64,
}

impl ProgramInstruction for Initialize {
    const DISCRIMINATOR: [u8; 8] = [0xaf, 0xaf, 0x6d, 0x1f, 0x0d, 0x98, 0x9b, 0xed];
}

/// Replace the protocol parameters on an existing config account.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct UpdateParameters {
    pub min_stake: u64,
    pub max_stake: u64,
    pub max_roi: u64,
    pub platform_fee: u64,
}

impl ProgramInstruction for UpdateParameters {
    const DISCRIMINATOR: [u8; 8] = [0x74, 0x6b, 0x18, 0xcf, 0x65, 0x31, 0xd5, 0x4d];
}

/// Open a prediction pool for a 16-byte question id.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct CreatePool {
    pub question: [u8; POOL_ID_LEN],
    pub prediction_end_time: i64,
}

impl ProgramInstruction for CreatePool {
    const DISCRIMINATOR: [u8; 8] = [0xe9, 0x92, 0xd1, 0x8e, 0xcf, 0x68, 0x40, 0xbc];
}

/// Stake lamports on a "yes" percentage for an open pool.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Predict {
    pub prediction_value: u8,
    pub stake: u64,
}

impl ProgramInstruction for Predict {
    const DISCRIMINATOR: [u8; 8] = [0xfe, 0x72, 0x70, 0xf4, 0x25, 0x31, 0x20, 0x80];
}

/// Finalize a pool so predictors can claim.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ResolvePool {}

impl ProgramInstruction for ResolvePool {
    const DISCRIMINATOR: [u8; 8] = [0xbf, 0xa4, 0xbe, 0x8e, 0xb2, 0xc6, 0xa2, 0xf9];
}

/// Pay out a finalized, unclaimed prediction.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ClaimRewards {}

impl ProgramInstruction for ClaimRewards {
    const DISCRIMINATOR: [u8; 8] = [0x04, 0x90, 0x84, 0x47, 0x74, 0x17, 0x97, 0x50];
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    fn anchor_instruction_discriminator(name: &str) -> [u8; 8] {
        let digest = Sha256::digest(format!("global:{name}").as_bytes());
        digest[..8].try_into().unwrap()
    }

    #[test]
    fn discriminators_match_anchor_convention() {
        assert_eq!(
            Initialize::DISCRIMINATOR,
            anchor_instruction_discriminator("initialize")
        );
        assert_eq!(
            UpdateParameters::DISCRIMINATOR,
            anchor_instruction_discriminator("update_parameters")
        );
        assert_eq!(
            CreatePool::DISCRIMINATOR,
            anchor_instruction_discriminator("create_pool")
        );
        assert_eq!(
            Predict::DISCRIMINATOR,
            anchor_instruction_discriminator("predict")
        );
        assert_eq!(
            ResolvePool::DISCRIMINATOR,
            anchor_instruction_discriminator("resolve_pool")
        );
        assert_eq!(
            ClaimRewards::DISCRIMINATOR,
            anchor_instruction_discriminator("claim_rewards")
        );
    }

    #[test]
    fn data_is_discriminator_then_args() {
        let args = Predict {
            prediction_value: 72,
            stake: 10_000_000,
        };

        let data = args.data().unwrap();
        assert_eq!(&data[..8], &Predict::DISCRIMINATOR);
        assert_eq!(
            Predict::try_from_slice(&data[8..]).unwrap(),
            args,
        );
    }

    #[test]
    fn argless_instructions_encode_to_bare_discriminator() {
        assert_eq!(ClaimRewards {}.data().unwrap(), ClaimRewards::DISCRIMINATOR);
        assert_eq!(ResolvePool {}.data().unwrap(), ResolvePool::DISCRIMINATOR);
    }
}
