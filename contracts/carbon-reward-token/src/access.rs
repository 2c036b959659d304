//! Original owner, admin and minter registry.

use soroban_sdk::{log, Address, Env};

use crate::errors::CarbonTokenError;
use crate::events::TokenEvents;
use crate::storage;

/// Fails with `Unauthorized` unless `caller` is the current admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), CarbonTokenError> {
    let admin = storage::read_admin(env).map_err(|_| CarbonTokenError::Unauthorized)?;
    if *caller != admin {
        log!(env, "rejected non-admin caller", caller.clone());
        return Err(CarbonTokenError::Unauthorized);
    }
    Ok(())
}

/// Fails with `InvalidMinter` unless `caller` is an enabled minter.
pub fn require_minter(env: &Env, caller: &Address) -> Result<(), CarbonTokenError> {
    if !is_minter(env, caller) {
        log!(env, "rejected caller without minter role", caller.clone());
        return Err(CarbonTokenError::InvalidMinter);
    }
    Ok(())
}

pub fn is_minter(env: &Env, account: &Address) -> bool {
    storage::read_minter(env, account).unwrap_or(false)
}

/// Reassigns the admin. Allowed for the current admin and, at any time, for
/// the original owner.
pub fn set_admin(env: &Env, caller: &Address, new_admin: &Address) -> Result<(), CarbonTokenError> {
    let admin = storage::read_admin(env).map_err(|_| CarbonTokenError::Unauthorized)?;
    let owner = storage::read_owner(env).map_err(|_| CarbonTokenError::Unauthorized)?;
    if *caller != admin && *caller != owner {
        return Err(CarbonTokenError::Unauthorized);
    }

    storage::write_admin(env, new_admin);
    TokenEvents::admin_changed(env, caller, new_admin);
    Ok(())
}

pub fn add_minter(env: &Env, caller: &Address, account: &Address) -> Result<(), CarbonTokenError> {
    require_admin(env, caller)?;

    // A disabled entry still counts as registered
    if storage::read_minter(env, account).is_some() {
        return Err(CarbonTokenError::AlreadyRegistered);
    }

    storage::write_minter(env, account, true);
    TokenEvents::minter_added(env, caller, account);
    Ok(())
}

pub fn remove_minter(env: &Env, caller: &Address, account: &Address) -> Result<(), CarbonTokenError> {
    require_admin(env, caller)?;

    storage::write_minter(env, account, false);
    TokenEvents::minter_removed(env, caller, account);
    Ok(())
}
