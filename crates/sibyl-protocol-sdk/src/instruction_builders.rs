use crate::{AddressError, AddressFinder};
use sibyl_protocol_interface::{accounts, instruction, ProgramInstruction as _, POOL_ID_LEN};
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IxBuilderError {
    #[error(transparent)]
    Address(#[from] AddressError),

    #[error("failed to encode instruction data: {0}")]
    Encode(#[from] std::io::Error),
}

pub type IxBuilderResult<T> = Result<T, IxBuilderError>;

pub fn build_initialize_ix(
    address_finder: &AddressFinder,
    authority: Pubkey,
    treasury: Pubkey,
    min_stake: u64,
    max_stake: u64,
    max_roi: u64,
    platform_fee: u64,
) -> IxBuilderResult<(Instruction, accounts::Initialize, instruction::Initialize)> {
    let (config, _) = address_finder.find_config_address()?;

    let ix_accounts = accounts::Initialize {
        authority,
        config,
        treasury,
        system_program: address_finder.system_program_id,
    };

    let ix_data = instruction::Initialize {
        min_stake,
        max_stake,
        max_roi,
        platform_fee,
    };

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(),
        data: ix_data.data()?,
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_update_parameters_ix(
    address_finder: &AddressFinder,
    authority: Pubkey,
    min_stake: u64,
    max_stake: u64,
    max_roi: u64,
    platform_fee: u64,
) -> IxBuilderResult<(
    Instruction,
    accounts::UpdateParameters,
    instruction::UpdateParameters,
)> {
    let (config, _) = address_finder.find_config_address()?;

    let ix_accounts = accounts::UpdateParameters { authority, config };

    let ix_data = instruction::UpdateParameters {
        min_stake,
        max_stake,
        max_roi,
        platform_fee,
    };

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(),
        data: ix_data.data()?,
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_create_pool_ix(
    address_finder: &AddressFinder,
    admin: Pubkey,
    pool_id: [u8; POOL_ID_LEN],
    prediction_end_time: i64,
) -> IxBuilderResult<(Instruction, accounts::CreatePool, instruction::CreatePool)> {
    let (pool, _) = address_finder.find_pool_address(&pool_id)?;

    let ix_accounts = accounts::CreatePool {
        admin,
        pool,
        system_program: address_finder.system_program_id,
        clock: address_finder.clock_sysvar_id,
    };

    let ix_data = instruction::CreatePool {
        question: pool_id,
        prediction_end_time,
    };

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(),
        data: ix_data.data()?,
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_predict_ix(
    address_finder: &AddressFinder,
    predictor: Pubkey,
    pool_id: [u8; POOL_ID_LEN],
    prediction_value: u8,
    stake: u64,
) -> IxBuilderResult<(Instruction, accounts::Predict, instruction::Predict)> {
    let (pool, _) = address_finder.find_pool_address(&pool_id)?;
    let (prediction, _) = address_finder.find_prediction_address(&pool, &predictor)?;

    let ix_accounts = accounts::Predict {
        predictor,
        pool,
        prediction,
        system_program: address_finder.system_program_id,
    };

    let ix_data = instruction::Predict {
        prediction_value,
        stake,
    };

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(),
        data: ix_data.data()?,
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_resolve_pool_ix(
    address_finder: &AddressFinder,
    admin: Pubkey,
    pool_id: [u8; POOL_ID_LEN],
) -> IxBuilderResult<(Instruction, accounts::ResolvePool, instruction::ResolvePool)> {
    let (pool, _) = address_finder.find_pool_address(&pool_id)?;

    let ix_accounts = accounts::ResolvePool { admin, pool };
    let ix_data = instruction::ResolvePool {};

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(),
        data: ix_data.data()?,
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_claim_rewards_ix(
    address_finder: &AddressFinder,
    predictor: Pubkey,
    pool_id: [u8; POOL_ID_LEN],
) -> IxBuilderResult<(Instruction, accounts::ClaimRewards, instruction::ClaimRewards)> {
    let (pool, _) = address_finder.find_pool_address(&pool_id)?;
    let (prediction, _) = address_finder.find_prediction_address(&pool, &predictor)?;

    let ix_accounts = accounts::ClaimRewards {
        predictor,
        prediction,
        pool,
        system_program: address_finder.system_program_id,
    };

    let ix_data = instruction::ClaimRewards {};

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(),
        data: ix_data.data()?,
    };

    Ok((ix, ix_accounts, ix_data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sibyl_protocol_interface::instruction::ProgramInstruction;

    #[test]
    fn create_pool_ix_targets_the_pool_pda() {
        let finder = AddressFinder::default();
        let admin = Pubkey::new_unique();
        let pool_id = [0xabu8; POOL_ID_LEN];

        let (ix, ix_accounts, _) =
            build_create_pool_ix(&finder, admin, pool_id, 1_800_000_000).unwrap();

        let (expected_pool, _) = finder.find_pool_address(&pool_id).unwrap();
        assert_eq!(ix_accounts.pool, expected_pool);
        assert_eq!(ix.program_id, finder.program_id);
        assert_eq!(
            &ix.data[..8],
            &sibyl_protocol_interface::instruction::CreatePool::DISCRIMINATOR
        );

        // admin signs and pays; the pool PDA cannot sign
        assert!(ix.accounts[0].is_signer);
        assert!(!ix.accounts[1].is_signer);
        assert!(ix.accounts[1].is_writable);
    }

    #[test]
    fn predict_ix_derives_prediction_from_pool_and_predictor() {
        let finder = AddressFinder::default();
        let predictor = Pubkey::new_unique();
        let pool_id = [0x01u8; POOL_ID_LEN];

        let (_, ix_accounts, ix_data) =
            build_predict_ix(&finder, predictor, pool_id, 60, 10_000_000).unwrap();

        let (pool, _) = finder.find_pool_address(&pool_id).unwrap();
        let (expected, _) = finder.find_prediction_address(&pool, &predictor).unwrap();
        assert_eq!(ix_accounts.prediction, expected);
        assert_eq!(ix_data.prediction_value, 60);
        assert_eq!(ix_data.stake, 10_000_000);
    }

    #[test]
    fn claim_rewards_ix_references_both_pdas() {
        let finder = AddressFinder::default();
        let predictor = Pubkey::new_unique();
        let pool_id = [0x55u8; POOL_ID_LEN];

        let (ix, ix_accounts, _) = build_claim_rewards_ix(&finder, predictor, pool_id).unwrap();

        let (pool, _) = finder.find_pool_address(&pool_id).unwrap();
        assert_eq!(ix_accounts.pool, pool);
        assert_ne!(ix_accounts.prediction, ix_accounts.pool);
        assert_eq!(ix.data, sibyl_protocol_interface::instruction::ClaimRewards::DISCRIMINATOR);
    }
}
