//! Balance accounting: mint, transfer and burn.
//!
//! Each operation performs all of its checks before the first storage write,
//! so a rejected call leaves balances, supply and the mint log untouched.
//! Total supply always equals the sum of balances and
//! `total_minted - total_burned`.

use soroban_sdk::{log, Address, Env, String};

use crate::access;
use crate::errors::CarbonTokenError;
use crate::events::TokenEvents;
use crate::metadata::within_char_limit;
use crate::pause;
use crate::records;
use crate::storage;
use crate::types::{MAX_METADATA_BYTES, MAX_METADATA_LEN};

/// Per-mint checks shared by single and batch minting, applied after the
/// pause and minter gates.
pub fn validate_mint(
    env: &Env,
    owner: &Address,
    amount: i128,
    recipient: &Address,
    metadata: &String,
) -> Result<(), CarbonTokenError> {
    if amount <= 0 {
        return Err(CarbonTokenError::InvalidAmount);
    }
    if recipient == owner {
        log!(env, "mint to original owner rejected");
        return Err(CarbonTokenError::InvalidRecipient);
    }
    if !within_char_limit::<MAX_METADATA_BYTES>(metadata, MAX_METADATA_LEN) {
        return Err(CarbonTokenError::MetadataTooLong);
    }
    Ok(())
}

pub fn mint(
    env: &Env,
    caller: &Address,
    amount: i128,
    recipient: &Address,
    metadata: &String,
) -> Result<u64, CarbonTokenError> {
    pause::require_not_paused(env)?;
    access::require_minter(env, caller)?;
    let owner = storage::read_owner(env)?;
    validate_mint(env, &owner, amount, recipient, metadata)?;

    let new_balance = storage::read_balance(env, recipient)
        .checked_add(amount)
        .ok_or(CarbonTokenError::Overflow)?;
    let new_supply = storage::read_total_supply(env)
        .checked_add(amount)
        .ok_or(CarbonTokenError::Overflow)?;
    let new_minted = storage::read_total_minted(env)
        .checked_add(amount)
        .ok_or(CarbonTokenError::Overflow)?;
    let id = records::next_id(env)?;

    storage::write_balance(env, recipient, new_balance);
    storage::write_total_supply(env, new_supply);
    storage::write_total_minted(env, new_minted);
    records::append(env, id, amount, recipient, metadata, caller);

    TokenEvents::mint(env, id, recipient, amount, caller);
    Ok(id)
}

/// Moves `amount` from `sender` to `recipient`. Only the sender itself may
/// move its tokens.
pub fn transfer(
    env: &Env,
    caller: &Address,
    amount: i128,
    sender: &Address,
    recipient: &Address,
) -> Result<(), CarbonTokenError> {
    pause::require_not_paused(env)?;
    if caller != sender {
        return Err(CarbonTokenError::Unauthorized);
    }
    if amount <= 0 {
        return Err(CarbonTokenError::InvalidAmount);
    }
    let owner = storage::read_owner(env)?;
    if *recipient == owner {
        log!(env, "transfer to original owner rejected");
        return Err(CarbonTokenError::InvalidRecipient);
    }

    let sender_balance = storage::read_balance(env, sender);
    if sender_balance < amount {
        return Err(CarbonTokenError::InsufficientBalance);
    }

    if sender != recipient {
        let recipient_balance = storage::read_balance(env, recipient)
            .checked_add(amount)
            .ok_or(CarbonTokenError::Overflow)?;
        storage::write_balance(env, sender, sender_balance - amount);
        storage::write_balance(env, recipient, recipient_balance);
    }

    TokenEvents::transfer(env, sender, recipient, amount);
    Ok(())
}

/// Destroys `amount` of the caller's own tokens.
pub fn burn(env: &Env, caller: &Address, amount: i128) -> Result<(), CarbonTokenError> {
    pause::require_not_paused(env)?;
    if amount <= 0 {
        return Err(CarbonTokenError::InvalidAmount);
    }

    let balance = storage::read_balance(env, caller);
    if balance < amount {
        return Err(CarbonTokenError::InsufficientBalance);
    }
    let new_burned = storage::read_total_burned(env)
        .checked_add(amount)
        .ok_or(CarbonTokenError::Overflow)?;

    // supply >= balance >= amount
    storage::write_balance(env, caller, balance - amount);
    storage::write_total_supply(env, storage::read_total_supply(env) - amount);
    storage::write_total_burned(env, new_burned);

    TokenEvents::burn(env, caller, amount);
    Ok(())
}

pub fn balance(env: &Env, account: &Address) -> i128 {
    storage::read_balance(env, account)
}

pub fn total_supply(env: &Env) -> i128 {
    storage::read_total_supply(env)
}
