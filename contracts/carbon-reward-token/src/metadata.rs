use soroban_sdk::{Address, Env, String};

use crate::access;
use crate::errors::CarbonTokenError;
use crate::events::TokenEvents;
use crate::storage;
use crate::types::{MAX_URI_BYTES, MAX_URI_LEN, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL};

pub fn name(env: &Env) -> String {
    String::from_str(env, TOKEN_NAME)
}

pub fn symbol(env: &Env) -> String {
    String::from_str(env, TOKEN_SYMBOL)
}

pub fn decimals() -> u32 {
    TOKEN_DECIMALS
}

pub fn token_uri(env: &Env) -> Option<String> {
    storage::read_token_uri(env)
}

/// Overwrites the token URI. Admin only; no history is kept.
pub fn set_token_uri(env: &Env, caller: &Address, uri: &String) -> Result<(), CarbonTokenError> {
    access::require_admin(env, caller)?;
    if !within_char_limit::<MAX_URI_BYTES>(uri, MAX_URI_LEN) {
        return Err(CarbonTokenError::InvalidUri);
    }

    storage::write_token_uri(env, uri);
    TokenEvents::uri_set(env, caller);
    Ok(())
}

/// Returns `true` if `text` has at most `max_chars` UTF-8 characters.
///
/// `BYTES` must be `max_chars * 4`, the longest encoding that can still fit.
/// Text that is not valid UTF-8 is measured in bytes.
pub fn within_char_limit<const BYTES: usize>(text: &String, max_chars: u32) -> bool {
    let len = text.len() as usize;
    if len <= max_chars as usize {
        return true;
    }
    if len > BYTES {
        return false;
    }

    let mut buf = [0u8; BYTES];
    let bytes = &mut buf[..len];
    text.copy_into_slice(bytes);
    let chars = core::str::from_utf8(bytes)
        .map(|s| s.chars().count())
        .unwrap_or(len);
    chars <= max_chars as usize
}
