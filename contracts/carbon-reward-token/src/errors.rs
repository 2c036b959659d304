use soroban_sdk::contracterror;

/// Result codes returned by the carbon reward token.
///
/// The discriminants are part of the public contract: clients match on
/// `Error(Contract, #<code>)`, so existing values must never be renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CarbonTokenError {
    /// Caller lacks the required role, or the referenced mint record is absent
    Unauthorized = 100,
    /// Ledger is paused
    Paused = 101,
    /// Amount is zero or negative
    InvalidAmount = 102,
    /// Recipient is the reserved original owner
    InvalidRecipient = 103,
    /// Caller is not an enabled minter
    InvalidMinter = 104,
    /// Account already has a minter entry
    AlreadyRegistered = 105,
    /// Mint metadata exceeds the maximum length
    MetadataTooLong = 106,
    /// Account balance is lower than the requested amount
    InsufficientBalance = 107,
    /// Token URI exceeds the maximum length
    InvalidUri = 108,
    /// Mint record belongs to a different account
    NotOwner = 109,
    /// Batch mint has more entries than allowed
    BatchTooLarge = 110,
    /// Ledger was already initialized
    AlreadyInitialized = 111,
    /// Ledger has not been initialized
    NotInitialized = 112,
    /// Arithmetic on a balance or total would overflow
    Overflow = 113,
}

impl CarbonTokenError {
    /// Numeric result code of this error.
    pub fn code(&self) -> u32 {
        *self as u32
    }
}
