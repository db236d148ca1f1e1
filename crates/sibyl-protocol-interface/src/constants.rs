/// Seed prefixes for PDA derivation
pub const CONFIG_SEED_PREFIX: &[u8] = b"config";

pub const POOL_SEED_PREFIX: &[u8] = b"pool";

pub const PREDICTION_SEED_PREFIX: &[u8] = b"prediction";

/// Pool identifiers are 16-byte UUIDs.
pub const POOL_ID_LEN: usize = 16;
