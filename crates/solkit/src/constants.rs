use std::time::Duration;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
pub const SOL_DECIMALS: u8 = 9;

pub const MAINNET_RPC: &str = "https://api.mainnet-beta.solana.com";
pub const TESTNET_RPC: &str = "https://api.testnet.solana.com";
pub const DEVNET_RPC: &str = "https://api.devnet.solana.com";
pub const LOCALNET_RPC: &str = "http://localhost:8899";

pub const EXPLORER_BASE_URL: &str = "https://explorer.solana.com";

pub const SOLKIT_CONFIG_RELATIVE_PATH: &str = ".config/solkit.toml";
pub const SOLKIT_CONFIG_ENV: &str = "SOLKIT_CONFIG";
pub const DEFAULT_KEYPAIR_RELATIVE_PATH: &str = ".config/solana/id.json";

/// Upper bound on waiting for an airdrop to reach `finalized`.
pub const CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(30);
pub const CONFIRMATION_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Faucet cap enforced on devnet requests, in SOL.
pub const DEVNET_AIRDROP_LIMIT_SOL: f64 = 100.0;

pub const DEFAULT_TOKEN_DECIMALS: u8 = 9;
pub const DEFAULT_MANAGED_TOKEN_DECIMALS: u8 = 2;
/// 10^19 is the largest power of ten that fits in a u64.
pub const MAX_TOKEN_DECIMALS: u8 = 19;

pub const METADATA_PROGRAM_ID: &str = "metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s";
pub const METADATA_SEED_PREFIX: &str = "metadata";
pub const MAX_METADATA_NAME_LEN: usize = 32;
pub const MAX_METADATA_SYMBOL_LEN: usize = 10;
pub const MAX_METADATA_URI_LEN: usize = 200;
