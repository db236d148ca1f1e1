/*!
# Sibyl Protocol Interface

Client-side bindings for the on-chain Sibyl prediction-pool program: the
program id, PDA seed prefixes, account state layouts and instruction data
layouts. Everything here mirrors what the deployed program expects on the
wire; nothing here talks to an RPC node.
*/

mod constants;

pub mod accounts;
pub mod instruction;
pub mod state;

pub use constants::*;
pub use instruction::ProgramInstruction;
pub use state::{AccountDataError, ProgramAccount};

use solana_sdk::pubkey::Pubkey;

/// The deployed Sibyl program.
pub const ID: Pubkey = solana_sdk::pubkey!("Afp4Son7MNf1HKKhycpcHa3kCR7BDqwWJUP2oBpWbjVS");
