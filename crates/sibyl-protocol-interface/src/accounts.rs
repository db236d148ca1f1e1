//! Account lists per instruction, in the order the program declares them.
//! Writability and signer flags are fixed by the program's account
//! constraints; clients must reproduce them exactly.

use solana_sdk::instruction::AccountMeta;
use solana_sdk::pubkey::Pubkey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Initialize {
    pub authority: Pubkey,
    pub config: Pubkey,
    pub treasury: Pubkey,
    pub system_program: Pubkey,
}

impl Initialize {
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.authority, true),
            AccountMeta::new(self.config, false),
            AccountMeta::new_readonly(self.treasury, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateParameters {
    pub authority: Pubkey,
    pub config: Pubkey,
}

impl UpdateParameters {
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.authority, true),
            AccountMeta::new(self.config, false),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatePool {
    pub admin: Pubkey,
    pub pool: Pubkey,
    pub system_program: Pubkey,
    pub clock: Pubkey,
}

impl CreatePool {
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.admin, true),
            AccountMeta::new(self.pool, false),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.clock, false),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predict {
    pub predictor: Pubkey,
    pub pool: Pubkey,
    pub prediction: Pubkey,
    pub system_program: Pubkey,
}

impl Predict {
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.predictor, true),
            AccountMeta::new(self.pool, false),
            AccountMeta::new(self.prediction, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvePool {
    pub admin: Pubkey,
    pub pool: Pubkey,
}

impl ResolvePool {
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.admin, true),
            AccountMeta::new(self.pool, false),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimRewards {
    pub predictor: Pubkey,
    pub prediction: Pubkey,
    pub pool: Pubkey,
    pub system_program: Pubkey,
}

impl ClaimRewards {
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.predictor, true),
            AccountMeta::new(self.prediction, false),
            AccountMeta::new(self.pool, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}
