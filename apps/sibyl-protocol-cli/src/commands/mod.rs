pub mod batch_transfer;
pub mod claim_rewards;
pub mod init_pool;
pub mod post_prediction;
pub mod resolve_pool;

use crate::error::{CliError, CliResult};
use sibyl_protocol_sdk::POOL_ID_LEN;
use solana_sdk::signature::{read_keypair_file, Keypair};
use std::path::Path;

/// Parse a pool id given as a UUID (hyphens optional) into its 16 raw bytes.
pub(crate) fn parse_pool_id(input: &str) -> CliResult<[u8; POOL_ID_LEN]> {
    let cleaned = input.replace('-', "");
    let bytes = hex::decode(&cleaned).map_err(|e| CliError::InvalidPoolId {
        input: input.to_string(),
        reason: e.to_string(),
    })?;

    if bytes.len() != POOL_ID_LEN {
        return Err(CliError::InvalidPoolId {
            input: input.to_string(),
            reason: format!("expected {} bytes, got {}", POOL_ID_LEN, bytes.len()),
        });
    }

    let mut pool_id = [0u8; POOL_ID_LEN];
    pool_id.copy_from_slice(&bytes);
    Ok(pool_id)
}

pub(crate) fn load_keypair(path: &Path) -> CliResult<Keypair> {
    read_keypair_file(path)
        .map_err(|e| CliError::Keypair(format!("failed to read {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pool_id_accepts_hyphenated_uuids() {
        let id = parse_pool_id("b9cdc74e-c59a-4dbc-8006-c3e32604081a").unwrap();
        assert_eq!(id[0], 0xb9);
        assert_eq!(id[15], 0x1a);
    }

    #[test]
    fn parse_pool_id_accepts_bare_hex() {
        let hyphenated = parse_pool_id("b9cdc74e-c59a-4dbc-8006-c3e32604081a").unwrap();
        let bare = parse_pool_id("b9cdc74ec59a4dbc8006c3e32604081a").unwrap();
        assert_eq!(hyphenated, bare);
    }

    #[test]
    fn parse_pool_id_rejects_wrong_length() {
        let err = parse_pool_id("b9cdc74e").unwrap_err();
        assert!(err.to_string().contains("expected 16 bytes"));
    }

    #[test]
    fn parse_pool_id_rejects_non_hex() {
        assert!(parse_pool_id("not-a-uuid-at-all").is_err());
    }
}
