pub const VAULT_OWNER_SEED: &[u8] = b"vault";
pub const TREASURY_SEED: &[u8] = b"treasury";
pub const TRADE_RECORD_SEED: &[u8] = b"history";

/// Byte limit for store and market names.
pub const MAX_NAME_LEN: usize = 40;

/// Byte limit for store and market descriptions.
pub const MAX_DESCRIPTION_LEN: usize = 60;
