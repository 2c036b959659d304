//! Contract types and ledger policy constants.

use soroban_sdk::{contracttype, Address, String};

/// Token display name.
pub const TOKEN_NAME: &str = "Carbon Reward Token";

/// Token ticker symbol.
pub const TOKEN_SYMBOL: &str = "CRT";

/// Implied decimal places of every amount (1 token = 1_000_000 units).
pub const TOKEN_DECIMALS: u32 = 6;

/// Maximum number of entries in a single batch mint.
pub const MAX_BATCH_SIZE: u32 = 100;

/// Maximum length of mint metadata, in characters.
pub const MAX_METADATA_LEN: u32 = 500;

/// Maximum length of the token URI, in characters.
pub const MAX_URI_LEN: u32 = 256;

/// Byte size of the longest metadata that can still be within the character
/// limit (4 bytes per UTF-8 character).
pub const MAX_METADATA_BYTES: usize = MAX_METADATA_LEN as usize * 4;

/// Byte size of the longest URI that can still be within the character limit.
pub const MAX_URI_BYTES: usize = MAX_URI_LEN as usize * 4;

/// Maximum number of records returned by a single range query.
pub const MAX_RECORD_PAGE: u64 = 100;

/// Ledgers closed per day at a 5 second close time.
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage (singletons) is kept alive for 30 days after each call.
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Balances, minter flags and mint records are kept alive for 90 days after
/// each write or read.
pub const PERSISTENT_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Immutable audit entry written for every successful mint.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintRecord {
    /// Mint id (first record is 1)
    pub id: u64,
    /// Amount credited, in base units
    pub amount: i128,
    /// Account that received the tokens
    pub recipient: Address,
    /// Free-form description supplied by the minter (e.g. "1 ton CO2")
    pub metadata: String,
    /// Ledger sequence at which the mint was applied
    pub created_at: u32,
    /// Minter that performed the mint
    pub minter: Address,
}

/// A single entry of a batch mint request.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintEntry {
    pub recipient: Address,
    pub amount: i128,
    pub metadata: String,
}
