//! Append-only mint audit log.
//!
//! Every successful mint stores exactly one [`MintRecord`] under the next
//! value of the mint counter. Ids start at 1, are contiguous and are never
//! reused; records are never updated or removed once written.

use soroban_sdk::{Address, Env, String, Vec};

use crate::errors::CarbonTokenError;
use crate::storage;
use crate::types::{MintRecord, MAX_RECORD_PAGE};

/// Id that the next appended record will receive.
pub fn next_id(env: &Env) -> Result<u64, CarbonTokenError> {
    storage::read_mint_counter(env)
        .checked_add(1)
        .ok_or(CarbonTokenError::Overflow)
}

/// Writes a new record and advances the counter to its id.
///
/// Callers obtain `id` from [`next_id`] (or consecutive ids after it for a
/// batch) and append in increasing order.
pub fn append(
    env: &Env,
    id: u64,
    amount: i128,
    recipient: &Address,
    metadata: &String,
    minter: &Address,
) -> MintRecord {
    debug_assert_eq!(id, storage::read_mint_counter(env) + 1);
    debug_assert!(!storage::has_mint_record(env, id));

    let record = MintRecord {
        id,
        amount,
        recipient: recipient.clone(),
        metadata: metadata.clone(),
        created_at: env.ledger().sequence(),
        minter: minter.clone(),
    };

    storage::write_mint_record(env, &record);
    storage::write_mint_counter(env, id);
    record
}

pub fn get(env: &Env, id: u64) -> Option<MintRecord> {
    storage::read_mint_record(env, id)
}

/// Records with ids in `start..=end`, clamped to existing ids and to at most
/// `MAX_RECORD_PAGE` entries.
pub fn range(env: &Env, start: u64, end: u64) -> Vec<MintRecord> {
    let mut records = Vec::new(env);
    let start = start.max(1);
    let end = end.min(storage::read_mint_counter(env));
    if start > end {
        return records;
    }

    let end = end.min(start.saturating_add(MAX_RECORD_PAGE - 1));
    for id in start..=end {
        if let Some(record) = storage::read_mint_record(env, id) {
            records.push_back(record);
        }
    }
    records
}

/// `Ok(true)` when record `id` was minted to `owner`.
///
/// A missing record yields `Unauthorized` rather than a dedicated not-found
/// code; integrators depend on this value.
pub fn verify_ownership(env: &Env, id: u64, owner: &Address) -> Result<bool, CarbonTokenError> {
    let record = storage::read_mint_record(env, id).ok_or(CarbonTokenError::Unauthorized)?;
    if record.recipient != *owner {
        return Err(CarbonTokenError::NotOwner);
    }
    Ok(true)
}
