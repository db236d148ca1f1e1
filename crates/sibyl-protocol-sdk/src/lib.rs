mod address_finder;
mod instruction_builders;
mod transaction_builders;

pub use address_finder::{derive_program_address, AddressError, AddressFinder};
pub use instruction_builders::*;
pub use transaction_builders::*;

// Re-export program bindings
pub use sibyl_protocol_interface::ID as PROGRAM_ID;
pub use sibyl_protocol_interface::POOL_ID_LEN;
