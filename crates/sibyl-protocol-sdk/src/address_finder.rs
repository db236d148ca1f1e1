use sibyl_protocol_interface::{
    CONFIG_SEED_PREFIX, ID as SIBYL_PROGRAM_ID, POOL_ID_LEN, POOL_SEED_PREFIX,
    PREDICTION_SEED_PREFIX,
};
use solana_sdk::pubkey::{Pubkey, MAX_SEEDS, MAX_SEED_LEN};
use solana_sdk::system_program::ID as SYSTEM_PROGRAM_ID;
use solana_sdk::sysvar::clock::ID as CLOCK_SYSVAR_ID;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("seed set has {count} elements, the runtime allows {max} including the bump")]
    TooManySeeds { count: usize, max: usize },

    #[error("seed {index} is {len} bytes, the runtime allows at most {max}")]
    SeedTooLong { index: usize, len: usize, max: usize },

    #[error("bump seed space exhausted for the given seed set")]
    DerivationExhausted,
}

/// Derive the program address for `seeds` under `program_id`, together with
/// the bump that pushed it off the ed25519 curve.
///
/// Walks the single-byte bump down from 255, appending it to the seed set and
/// asking the runtime for the resulting address, until the runtime accepts a
/// candidate. An address the runtime accepts has no corresponding private
/// key, so only `program_id` can authorize writes to it. The same inputs
/// always produce the same `(address, bump)` pair, which is what lets this
/// client and the on-chain program agree on an address without coordination.
pub fn derive_program_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), AddressError> {
    // The bump occupies one of the runtime's seed slots.
    if seeds.len() >= MAX_SEEDS {
        return Err(AddressError::TooManySeeds {
            count: seeds.len(),
            max: MAX_SEEDS,
        });
    }
    for (index, seed) in seeds.iter().enumerate() {
        if seed.len() > MAX_SEED_LEN {
            return Err(AddressError::SeedTooLong {
                index,
                len: seed.len(),
                max: MAX_SEED_LEN,
            });
        }
    }

    let mut bump = [u8::MAX];
    for _ in 0..u8::MAX {
        let mut seeds_with_bump = seeds.to_vec();
        seeds_with_bump.push(&bump);
        // With the lengths validated above, the only remaining failure is a
        // candidate that landed on the curve.
        if let Ok(address) = Pubkey::create_program_address(&seeds_with_bump, program_id) {
            return Ok((address, bump[0]));
        }
        bump[0] -= 1;
    }

    Err(AddressError::DerivationExhausted)
}

/// Derives the protocol's account addresses for one program deployment.
pub struct AddressFinder {
    pub program_id: Pubkey,

    pub clock_sysvar_id: Pubkey,
    pub system_program_id: Pubkey,
}

impl AddressFinder {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            clock_sysvar_id: CLOCK_SYSVAR_ID,
            system_program_id: SYSTEM_PROGRAM_ID,
        }
    }

    pub fn find_config_address(&self) -> Result<(Pubkey, u8), AddressError> {
        derive_program_address(&[CONFIG_SEED_PREFIX], &self.program_id)
    }

    pub fn find_pool_address(
        &self,
        pool_id: &[u8; POOL_ID_LEN],
    ) -> Result<(Pubkey, u8), AddressError> {
        derive_program_address(&[POOL_SEED_PREFIX, pool_id], &self.program_id)
    }

    pub fn find_prediction_address(
        &self,
        pool: &Pubkey,
        predictor: &Pubkey,
    ) -> Result<(Pubkey, u8), AddressError> {
        derive_program_address(
            &[PREDICTION_SEED_PREFIX, pool.as_ref(), predictor.as_ref()],
            &self.program_id,
        )
    }
}

impl Default for AddressFinder {
    fn default() -> Self {
        Self::new(SIBYL_PROGRAM_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn derivation_is_deterministic() {
        let finder = AddressFinder::default();
        let pool_id = [0x42u8; POOL_ID_LEN];

        let first = finder.find_pool_address(&pool_id).unwrap();
        let second = finder.find_pool_address(&pool_id).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn derivation_agrees_with_runtime_finder() {
        let pool_id = [0x42u8; POOL_ID_LEN];
        let seeds: &[&[u8]] = &[POOL_SEED_PREFIX, &pool_id];

        let ours = derive_program_address(seeds, &SIBYL_PROGRAM_ID).unwrap();
        let runtime = Pubkey::find_program_address(seeds, &SIBYL_PROGRAM_ID);
        assert_eq!(ours, runtime);
    }

    #[test]
    fn derived_addresses_are_off_curve() {
        let finder = AddressFinder::default();
        let (config, _) = finder.find_config_address().unwrap();
        assert!(!config.is_on_curve());

        let (pool, _) = finder.find_pool_address(&[9u8; POOL_ID_LEN]).unwrap();
        assert!(!pool.is_on_curve());

        let predictor = Pubkey::new_unique();
        let (prediction, _) = finder.find_prediction_address(&pool, &predictor).unwrap();
        assert!(!prediction.is_on_curve());
    }

    #[test]
    fn bump_reverifies_through_runtime_predicate() {
        let pool_id = [0x17u8; POOL_ID_LEN];
        let (address, bump) =
            derive_program_address(&[POOL_SEED_PREFIX, &pool_id], &SIBYL_PROGRAM_ID).unwrap();

        let reconstructed = Pubkey::create_program_address(
            &[POOL_SEED_PREFIX, &pool_id, &[bump]],
            &SIBYL_PROGRAM_ID,
        )
        .unwrap();
        assert_eq!(address, reconstructed);
    }

    #[test]
    fn distinct_pool_ids_derive_distinct_addresses() {
        let finder = AddressFinder::default();
        let mut seen = HashSet::new();

        for _ in 0..256 {
            let pool_id: [u8; POOL_ID_LEN] = rand::random();
            let (address, _) = finder.find_pool_address(&pool_id).unwrap();
            assert!(seen.insert(address), "collision for pool id {pool_id:?}");
        }
    }

    #[test]
    fn distinct_predictors_derive_distinct_prediction_addresses() {
        let finder = AddressFinder::default();
        let (pool, _) = finder.find_pool_address(&[3u8; POOL_ID_LEN]).unwrap();

        let a = finder
            .find_prediction_address(&pool, &Pubkey::new_unique())
            .unwrap();
        let b = finder
            .find_prediction_address(&pool, &Pubkey::new_unique())
            .unwrap();
        assert_ne!(a.0, b.0);
    }

    #[test]
    fn overlong_seed_is_rejected_with_its_index() {
        let long = [0u8; MAX_SEED_LEN + 1];
        let err = derive_program_address(&[POOL_SEED_PREFIX, &long], &SIBYL_PROGRAM_ID)
            .unwrap_err();
        assert_eq!(
            err,
            AddressError::SeedTooLong {
                index: 1,
                len: MAX_SEED_LEN + 1,
                max: MAX_SEED_LEN,
            }
        );
    }

    #[test]
    fn seed_count_leaves_room_for_the_bump() {
        let seed: &[u8] = b"s";
        let seeds = vec![seed; MAX_SEEDS];
        let err = derive_program_address(&seeds, &SIBYL_PROGRAM_ID).unwrap_err();
        assert_eq!(
            err,
            AddressError::TooManySeeds {
                count: MAX_SEEDS,
                max: MAX_SEEDS,
            }
        );
    }

    #[test]
    fn account_kinds_occupy_independent_address_spaces() {
        let finder = AddressFinder::default();
        let pool_id = [1u8; POOL_ID_LEN];

        let (config, _) = finder.find_config_address().unwrap();
        let (pool, _) = finder.find_pool_address(&pool_id).unwrap();
        assert_ne!(config, pool);
    }
}
