//! All-or-nothing batch minting.
//!
//! A batch is processed in two phases. The staging phase validates every
//! entry and accumulates the resulting balances, supply and ids in memory
//! without touching storage; the first invalid entry aborts the whole batch.
//! The commit phase then writes all staged effects. Nothing from a rejected
//! batch is ever persisted, independently of host-level rollback.

use soroban_sdk::{Address, Env, Map, Vec};

use crate::access;
use crate::errors::CarbonTokenError;
use crate::events::TokenEvents;
use crate::ledger;
use crate::pause;
use crate::records;
use crate::storage;
use crate::types::{MintEntry, MAX_BATCH_SIZE};

/// Effects of a fully validated batch, ready to be written.
struct StagedBatch {
    balances: Map<Address, i128>,
    total_amount: i128,
    new_supply: i128,
    new_minted: i128,
    first_id: u64,
}

fn stage(
    env: &Env,
    owner: &Address,
    entries: &Vec<MintEntry>,
) -> Result<StagedBatch, CarbonTokenError> {
    let mut balances: Map<Address, i128> = Map::new(env);
    let mut total_amount: i128 = 0;

    for entry in entries.iter() {
        ledger::validate_mint(env, owner, entry.amount, &entry.recipient, &entry.metadata)?;

        let current = match balances.get(entry.recipient.clone()) {
            Some(staged) => staged,
            None => storage::read_balance(env, &entry.recipient),
        };
        let updated = current
            .checked_add(entry.amount)
            .ok_or(CarbonTokenError::Overflow)?;
        balances.set(entry.recipient.clone(), updated);

        total_amount = total_amount
            .checked_add(entry.amount)
            .ok_or(CarbonTokenError::Overflow)?;
    }

    let new_supply = storage::read_total_supply(env)
        .checked_add(total_amount)
        .ok_or(CarbonTokenError::Overflow)?;
    let new_minted = storage::read_total_minted(env)
        .checked_add(total_amount)
        .ok_or(CarbonTokenError::Overflow)?;

    let first_id = records::next_id(env)?;
    // Reserve the whole id range up front
    first_id
        .checked_add(entries.len() as u64 - 1)
        .ok_or(CarbonTokenError::Overflow)?;

    Ok(StagedBatch {
        balances,
        total_amount,
        new_supply,
        new_minted,
        first_id,
    })
}

fn commit(env: &Env, caller: &Address, entries: &Vec<MintEntry>, staged: &StagedBatch) {
    for (recipient, balance) in staged.balances.iter() {
        storage::write_balance(env, &recipient, balance);
    }
    storage::write_total_supply(env, staged.new_supply);
    storage::write_total_minted(env, staged.new_minted);

    let mut id = staged.first_id;
    for entry in entries.iter() {
        records::append(env, id, entry.amount, &entry.recipient, &entry.metadata, caller);
        TokenEvents::mint(env, id, &entry.recipient, entry.amount, caller);
        id += 1;
    }
}

/// Mints every entry or none of them. Returns the number of mints performed.
pub fn batch_mint(
    env: &Env,
    caller: &Address,
    entries: &Vec<MintEntry>,
) -> Result<u32, CarbonTokenError> {
    pause::require_not_paused(env)?;
    access::require_minter(env, caller)?;
    if entries.len() > MAX_BATCH_SIZE {
        return Err(CarbonTokenError::BatchTooLarge);
    }
    if entries.is_empty() {
        return Ok(0);
    }

    let owner = storage::read_owner(env)?;
    let staged = stage(env, &owner, entries)?;
    commit(env, caller, entries, &staged);

    let count = entries.len();
    TokenEvents::batch_minted(env, caller, staged.first_id, count, staged.total_amount);
    Ok(count)
}
