//! Circuit breaker gating every balance-affecting operation.

use soroban_sdk::{Address, Env};

use crate::access;
use crate::errors::CarbonTokenError;
use crate::events::TokenEvents;
use crate::storage;

pub fn is_paused(env: &Env) -> bool {
    storage::read_paused(env)
}

/// Must run before any other validation of a balance-affecting call.
pub fn require_not_paused(env: &Env) -> Result<(), CarbonTokenError> {
    if is_paused(env) {
        return Err(CarbonTokenError::Paused);
    }
    Ok(())
}

pub fn pause(env: &Env, caller: &Address) -> Result<(), CarbonTokenError> {
    access::require_admin(env, caller)?;
    storage::write_paused(env, true);
    TokenEvents::paused(env, caller);
    Ok(())
}

pub fn unpause(env: &Env, caller: &Address) -> Result<(), CarbonTokenError> {
    access::require_admin(env, caller)?;
    storage::write_paused(env, false);
    TokenEvents::unpaused(env, caller);
    Ok(())
}
