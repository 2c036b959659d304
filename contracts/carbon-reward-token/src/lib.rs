//! # Carbon Reward Token
//!
//! A Soroban smart contract implementing the fungible reward token issued for
//! verified carbon-sequestration activity.
//!
//! ## Features
//!
//! - **Balance Ledger**: mint, transfer and burn with 6 implied decimals
//! - **Minter Registry**: admin-managed minters, disabled rather than deleted
//! - **Circuit Breaker**: admin pause halting every balance-affecting call
//! - **Mint Audit Log**: one immutable record per mint, ids contiguous from 1
//! - **Atomic Batch Mint**: up to 100 mints that all succeed or all fail
//!
//! External systems (registration, verification, credit calculation,
//! distribution) are granted the minter role and call `mint` or
//! `batch_mint` with amounts they have already validated.
//!
//! Every fallible entry point returns a [`CarbonTokenError`] whose numeric
//! code is part of the public interface.

#![no_std]

mod access;
mod batch;
mod errors;
mod events;
mod ledger;
mod metadata;
mod pause;
mod records;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use crate::errors::CarbonTokenError;
pub use crate::types::{
    MintEntry, MintRecord, MAX_BATCH_SIZE, MAX_METADATA_LEN, MAX_RECORD_PAGE, MAX_URI_LEN,
    TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL,
};

#[contract]
pub struct CarbonRewardToken;

#[contractimpl]
impl CarbonRewardToken {
    /// Initializes the ledger. `owner` becomes the fixed original owner and
    /// the first admin.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the ledger was already initialized
    pub fn initialize(env: Env, owner: Address) -> Result<(), CarbonTokenError> {
        storage::extend_instance(&env);
        if storage::is_initialized(&env) {
            return Err(CarbonTokenError::AlreadyInitialized);
        }
        owner.require_auth();

        storage::write_owner(&env, &owner);
        storage::write_admin(&env, &owner);
        storage::write_paused(&env, false);
        storage::write_mint_counter(&env, 0);
        storage::write_total_supply(&env, 0);
        storage::write_total_minted(&env, 0);
        storage::write_total_burned(&env, 0);

        events::TokenEvents::initialized(&env, &owner);
        Ok(())
    }

    // ── Authorization ────────────────────────────────────────────────────────

    /// Reassigns the admin. Callable by the current admin or the original owner.
    pub fn set_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), CarbonTokenError> {
        storage::extend_instance(&env);
        caller.require_auth();
        access::set_admin(&env, &caller, &new_admin)
    }

    /// Registers `account` as an enabled minter (admin only).
    ///
    /// # Errors
    /// * `Unauthorized` - If caller is not the admin
    /// * `AlreadyRegistered` - If the account was ever registered, even if since disabled
    pub fn add_minter(env: Env, caller: Address, account: Address) -> Result<(), CarbonTokenError> {
        storage::extend_instance(&env);
        caller.require_auth();
        access::add_minter(&env, &caller, &account)
    }

    /// Disables `account` as a minter (admin only). The entry is kept.
    pub fn remove_minter(env: Env, caller: Address, account: Address) -> Result<(), CarbonTokenError> {
        storage::extend_instance(&env);
        caller.require_auth();
        access::remove_minter(&env, &caller, &account)
    }

    // ── Pause ────────────────────────────────────────────────────────────────

    pub fn pause(env: Env, caller: Address) -> Result<(), CarbonTokenError> {
        storage::extend_instance(&env);
        caller.require_auth();
        pause::pause(&env, &caller)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), CarbonTokenError> {
        storage::extend_instance(&env);
        caller.require_auth();
        pause::unpause(&env, &caller)
    }

    // ── Metadata ─────────────────────────────────────────────────────────────

    /// Sets the descriptive token URI (admin only, at most 256 bytes).
    pub fn set_token_uri(env: Env, caller: Address, uri: String) -> Result<(), CarbonTokenError> {
        storage::extend_instance(&env);
        caller.require_auth();
        metadata::set_token_uri(&env, &caller, &uri)
    }

    // ── Ledger ───────────────────────────────────────────────────────────────

    /// Mints `amount` to `recipient` and records it in the mint log.
    ///
    /// # Returns
    /// * The id of the new mint record
    ///
    /// # Errors
    /// * `Paused` - If the ledger is paused
    /// * `InvalidMinter` - If caller is not an enabled minter
    /// * `InvalidAmount` - If amount is not positive
    /// * `InvalidRecipient` - If recipient is the original owner
    /// * `MetadataTooLong` - If metadata exceeds 500 bytes
    pub fn mint(
        env: Env,
        caller: Address,
        amount: i128,
        recipient: Address,
        metadata: String,
    ) -> Result<u64, CarbonTokenError> {
        storage::extend_instance(&env);
        caller.require_auth();
        ledger::mint(&env, &caller, amount, &recipient, &metadata)
    }

    /// Moves `amount` from `sender` to `recipient`; caller must be the sender.
    ///
    /// # Errors
    /// * `Paused` - If the ledger is paused
    /// * `Unauthorized` - If caller is not the sender
    /// * `InvalidAmount` - If amount is not positive
    /// * `InvalidRecipient` - If recipient is the original owner
    /// * `InsufficientBalance` - If sender holds less than amount
    pub fn transfer(
        env: Env,
        caller: Address,
        amount: i128,
        sender: Address,
        recipient: Address,
    ) -> Result<(), CarbonTokenError> {
        storage::extend_instance(&env);
        caller.require_auth();
        ledger::transfer(&env, &caller, amount, &sender, &recipient)
    }

    /// Burns `amount` of the caller's tokens.
    pub fn burn(env: Env, caller: Address, amount: i128) -> Result<(), CarbonTokenError> {
        storage::extend_instance(&env);
        caller.require_auth();
        ledger::burn(&env, &caller, amount)
    }

    /// Mints every entry atomically: if any entry is invalid, nothing is minted
    /// and that entry's error is returned.
    ///
    /// # Returns
    /// * The number of mints performed (always `entries.len()`)
    ///
    /// # Errors
    /// * `Paused` - If the ledger is paused
    /// * `InvalidMinter` - If caller is not an enabled minter
    /// * `BatchTooLarge` - If more than 100 entries are submitted
    /// * Any `mint` error of the first invalid entry
    pub fn batch_mint(
        env: Env,
        caller: Address,
        entries: Vec<MintEntry>,
    ) -> Result<u32, CarbonTokenError> {
        storage::extend_instance(&env);
        caller.require_auth();
        batch::batch_mint(&env, &caller, &entries)
    }

    // ── Mint records ─────────────────────────────────────────────────────────

    /// Returns `true` if mint `id` was credited to `owner`.
    ///
    /// # Errors
    /// * `Unauthorized` - If no record exists for `id`
    /// * `NotOwner` - If the record belongs to another account
    pub fn verify_mint_ownership(env: Env, id: u64, owner: Address) -> Result<bool, CarbonTokenError> {
        storage::extend_instance(&env);
        records::verify_ownership(&env, id, &owner)
    }

    pub fn get_mint_record(env: Env, id: u64) -> Option<MintRecord> {
        storage::extend_instance(&env);
        records::get(&env, id)
    }

    /// Records with ids in `start..=end`, at most 100 per call.
    pub fn get_mint_records(env: Env, start: u64, end: u64) -> Vec<MintRecord> {
        storage::extend_instance(&env);
        records::range(&env, start, end)
    }

    pub fn mint_counter(env: Env) -> u64 {
        storage::extend_instance(&env);
        storage::read_mint_counter(&env)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn name(env: Env) -> String {
        storage::extend_instance(&env);
        metadata::name(&env)
    }

    pub fn symbol(env: Env) -> String {
        storage::extend_instance(&env);
        metadata::symbol(&env)
    }

    pub fn decimals(env: Env) -> u32 {
        storage::extend_instance(&env);
        metadata::decimals()
    }

    pub fn token_uri(env: Env) -> Option<String> {
        storage::extend_instance(&env);
        metadata::token_uri(&env)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::extend_instance(&env);
        ledger::total_supply(&env)
    }

    pub fn balance(env: Env, account: Address) -> i128 {
        storage::extend_instance(&env);
        ledger::balance(&env, &account)
    }

    pub fn total_minted(env: Env) -> i128 {
        storage::extend_instance(&env);
        storage::read_total_minted(&env)
    }

    pub fn total_burned(env: Env) -> i128 {
        storage::extend_instance(&env);
        storage::read_total_burned(&env)
    }

    pub fn is_minter(env: Env, account: Address) -> bool {
        storage::extend_instance(&env);
        access::is_minter(&env, &account)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::extend_instance(&env);
        pause::is_paused(&env)
    }

    pub fn admin(env: Env) -> Result<Address, CarbonTokenError> {
        storage::extend_instance(&env);
        storage::read_admin(&env)
    }

    pub fn original_owner(env: Env) -> Result<Address, CarbonTokenError> {
        storage::extend_instance(&env);
        storage::read_owner(&env)
    }
}
