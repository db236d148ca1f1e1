//! Account state layouts as stored by the program: an 8-byte discriminator
//! followed by the borsh-encoded struct.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

use crate::POOL_ID_LEN;

pub const ACCOUNT_DISCRIMINATOR_LEN: usize = 8;

#[derive(Debug, Error)]
pub enum AccountDataError {
    #[error("account data too short for discriminator ({len} bytes)")]
    TooShort { len: usize },

    #[error("account discriminator mismatch")]
    DiscriminatorMismatch,

    #[error("failed to deserialize account data: {0}")]
    Deserialize(#[from] std::io::Error),
}

/// Accounts owned by the Sibyl program. `DISCRIMINATOR` is the first 8 bytes
/// of `sha256("account:<StructName>")`.
pub trait ProgramAccount: BorshDeserialize {
    const DISCRIMINATOR: [u8; ACCOUNT_DISCRIMINATOR_LEN];

    fn try_from_bytes(data: &[u8]) -> Result<Self, AccountDataError> {
        if data.len() < ACCOUNT_DISCRIMINATOR_LEN {
            return Err(AccountDataError::TooShort { len: data.len() });
        }
        if data[..ACCOUNT_DISCRIMINATOR_LEN] != Self::DISCRIMINATOR {
            return Err(AccountDataError::DiscriminatorMismatch);
        }
        let account = Self::deserialize(&mut &data[ACCOUNT_DISCRIMINATOR_LEN..])?;
        Ok(account)
    }
}

/// Global protocol parameters, held at the config PDA.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ConfigAccount {
    pub authority: Pubkey,
    pub min_stake: u64,
    pub max_stake: u64,
    /// Maximum ROI in basis points (10000 = 100%).
    pub max_roi: u64,
    /// Platform fee in basis points.
    pub platform_fee: u64,
    pub treasury: Pubkey,
    pub bump: u8,
}

impl ProgramAccount for ConfigAccount {
    const DISCRIMINATOR: [u8; 8] = [0xbd, 0xff, 0x61, 0x46, 0xba, 0xbd, 0x18, 0x66];
}

/// One prediction pool, keyed by its 16-byte question id.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PoolAccount {
    pub question: [u8; POOL_ID_LEN],
    /// Unix timestamp after which no further predictions are accepted.
    pub prediction_end_time: i64,
    pub total_stake: u64,
    pub is_finalized: bool,
    pub bump: u8,
}

impl ProgramAccount for PoolAccount {
    const DISCRIMINATOR: [u8; 8] = [0x74, 0xd2, 0xbb, 0x77, 0xc4, 0xc4, 0x34, 0x89];
}

/// One wallet's position in one pool.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PredictionAccount {
    pub pool: Pubkey,
    /// Predicted "yes" percentage, 0..=100.
    pub prediction_value: u8,
    /// Lamports awarded at resolution; zero until the pool is finalized.
    pub prize: u64,
    pub is_claimed: bool,
    pub bump: u8,
}

impl ProgramAccount for PredictionAccount {
    const DISCRIMINATOR: [u8; 8] = [0xf3, 0x97, 0xc8, 0x7d, 0x82, 0x03, 0x29, 0x75];
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    fn anchor_account_discriminator(name: &str) -> [u8; 8] {
        let digest = Sha256::digest(format!("account:{name}").as_bytes());
        digest[..8].try_into().unwrap()
    }

    #[test]
    fn discriminators_match_anchor_convention() {
        assert_eq!(
            ConfigAccount::DISCRIMINATOR,
            anchor_account_discriminator("ConfigAccount")
        );
        assert_eq!(
            PoolAccount::DISCRIMINATOR,
            anchor_account_discriminator("PoolAccount")
        );
        assert_eq!(
            PredictionAccount::DISCRIMINATOR,
            anchor_account_discriminator("PredictionAccount")
        );
    }

    #[test]
    fn pool_account_decodes_from_prefixed_bytes() {
        let pool = PoolAccount {
            question: [7u8; POOL_ID_LEN],
            prediction_end_time: 1_700_000_000,
            total_stake: 42_000_000,
            is_finalized: false,
            bump: 254,
        };

        let mut data = PoolAccount::DISCRIMINATOR.to_vec();
        pool.serialize(&mut data).unwrap();

        let decoded = PoolAccount::try_from_bytes(&data).unwrap();
        assert_eq!(decoded, pool);
    }

    #[test]
    fn try_from_bytes_rejects_short_data() {
        let err = PoolAccount::try_from_bytes(&[0u8; 3]).unwrap_err();
        assert!(matches!(err, AccountDataError::TooShort { len: 3 }));
    }

    #[test]
    fn try_from_bytes_rejects_foreign_discriminator() {
        let prediction = PredictionAccount {
            pool: Pubkey::new_unique(),
            prediction_value: 60,
            prize: 0,
            is_claimed: false,
            bump: 255,
        };

        // Valid payload behind the wrong account kind's discriminator.
        let mut data = PoolAccount::DISCRIMINATOR.to_vec();
        prediction.serialize(&mut data).unwrap();

        let err = PredictionAccount::try_from_bytes(&data).unwrap_err();
        assert!(matches!(err, AccountDataError::DiscriminatorMismatch));
    }
}
