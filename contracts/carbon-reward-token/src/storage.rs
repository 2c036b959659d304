//! Storage schema and typed accessors.
//!
//! Singletons live in instance storage; per-account and per-record entries
//! live in persistent storage. Every entry point extends the instance TTL,
//! and persistent entries are extended whenever they are written or read, so
//! an idle ledger stays live for at least the bump window.

use soroban_sdk::{contracttype, Address, Env, String};

use crate::errors::CarbonTokenError;
use crate::types::{
    MintRecord, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Fixed identity established at initialization
    Owner,
    /// Current admin
    Admin,
    /// Pause state (true = paused)
    Paused,
    /// Optional descriptive URI
    TokenUri,
    /// Last assigned mint id
    MintCounter,
    TotalSupply,
    TotalMinted,
    TotalBurned,
    Balance(Address),
    /// Minter flag; entries are disabled, never removed
    Minter(Address),
    /// Mint audit record by id
    MintRecord(u64),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn read_owner(env: &Env) -> Result<Address, CarbonTokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(CarbonTokenError::NotInitialized)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn read_admin(env: &Env) -> Result<Address, CarbonTokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(CarbonTokenError::NotInitialized)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn write_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn read_token_uri(env: &Env) -> Option<String> {
    env.storage().instance().get(&DataKey::TokenUri)
}

pub fn write_token_uri(env: &Env, uri: &String) {
    env.storage().instance().set(&DataKey::TokenUri, uri);
}

pub fn read_mint_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::MintCounter)
        .unwrap_or(0)
}

pub fn write_mint_counter(env: &Env, counter: u64) {
    env.storage().instance().set(&DataKey::MintCounter, &counter);
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn read_total_minted(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalMinted)
        .unwrap_or(0)
}

pub fn write_total_minted(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalMinted, &total);
}

pub fn read_total_burned(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalBurned)
        .unwrap_or(0)
}

pub fn write_total_burned(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalBurned, &total);
}

pub fn read_balance(env: &Env, account: &Address) -> i128 {
    let key = DataKey::Balance(account.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            extend_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn write_balance(env: &Env, account: &Address, balance: i128) {
    let key = DataKey::Balance(account.clone());
    // Absent entries read as zero
    if balance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        extend_persistent(env, &key);
    }
}

/// Minter flag, or `None` if the account was never registered.
pub fn read_minter(env: &Env, account: &Address) -> Option<bool> {
    let key = DataKey::Minter(account.clone());
    let enabled: Option<bool> = env.storage().persistent().get(&key);
    if enabled.is_some() {
        extend_persistent(env, &key);
    }
    enabled
}

pub fn write_minter(env: &Env, account: &Address, enabled: bool) {
    let key = DataKey::Minter(account.clone());
    env.storage().persistent().set(&key, &enabled);
    extend_persistent(env, &key);
}

pub fn read_mint_record(env: &Env, id: u64) -> Option<MintRecord> {
    let key = DataKey::MintRecord(id);
    let record: Option<MintRecord> = env.storage().persistent().get(&key);
    if record.is_some() {
        extend_persistent(env, &key);
    }
    record
}

pub fn has_mint_record(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&DataKey::MintRecord(id))
}

pub fn write_mint_record(env: &Env, record: &MintRecord) {
    let key = DataKey::MintRecord(record.id);
    env.storage().persistent().set(&key, record);
    extend_persistent(env, &key);
}
