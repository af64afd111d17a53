// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bounds checks that run before any allocation.

use crate::config::{MemoryPolicy, Params};
use crate::error::Error;

/// Shortest accepted salt.
pub const MIN_SALT_LEN: usize = 8;

/// Shortest accepted output.
pub const MIN_HASH_LEN: usize = 4;

/// Largest accepted lane or thread count (2^24 - 1).
pub const MAX_LANES: u32 = 0x00FF_FFFF;

/// Largest accepted length for any byte input or output.
pub const MAX_LEN: usize = u32::MAX as usize;

pub(crate) fn validate_password(password: &[u8]) -> Result<(), Error> {
    if password.is_empty() {
        return Err(Error::PasswordTooShort);
    }
    if password.len() > MAX_LEN {
        return Err(Error::PasswordTooLong);
    }
    Ok(())
}

pub(crate) fn validate_salt_len(len: usize) -> Result<(), Error> {
    if len < MIN_SALT_LEN {
        return Err(Error::SaltTooShort);
    }
    if len > MAX_LEN {
        return Err(Error::SaltTooLong);
    }
    Ok(())
}

pub(crate) fn validate_secret_key(secret_key: &[u8]) -> Result<(), Error> {
    if secret_key.len() > MAX_LEN {
        return Err(Error::SecretKeyTooLong);
    }
    Ok(())
}

pub(crate) fn validate_additional_data(additional_data: &[u8]) -> Result<(), Error> {
    if additional_data.len() > MAX_LEN {
        return Err(Error::AdditionalDataTooLong);
    }
    Ok(())
}

pub(crate) fn validate_hash_len(len: usize) -> Result<(), Error> {
    if len < MIN_HASH_LEN {
        return Err(Error::HashLenTooShort);
    }
    if len > MAX_LEN {
        return Err(Error::HashLenTooLong);
    }
    Ok(())
}

pub(crate) fn validate_lanes(lanes: u32) -> Result<(), Error> {
    if lanes < 1 {
        return Err(Error::LanesTooFew);
    }
    if lanes > MAX_LANES {
        return Err(Error::LanesTooMany);
    }
    Ok(())
}

pub(crate) fn validate_threads(threads: u32) -> Result<(), Error> {
    if threads < 1 {
        return Err(Error::ThreadsTooFew);
    }
    if threads > MAX_LANES {
        return Err(Error::ThreadsTooMany);
    }
    Ok(())
}

pub(crate) fn validate_iterations(iterations: u32) -> Result<(), Error> {
    if iterations < 1 {
        return Err(Error::IterationsTooFew);
    }
    Ok(())
}

/// `lanes` must already be in range.
pub(crate) fn validate_memory_size(
    memory_size: u32,
    lanes: u32,
    policy: MemoryPolicy,
) -> Result<(), Error> {
    match policy {
        MemoryPolicy::Aligned => {
            if memory_size == 0 {
                return Err(Error::MemorySizeTooSmall);
            }
        }
        MemoryPolicy::Strict => {
            if !memory_size.is_power_of_two() {
                return Err(Error::MemorySizeInvalid);
            }
            if u64::from(memory_size) < 8 * u64::from(lanes) {
                return Err(Error::MemorySizeTooSmall);
            }
        }
    }
    Ok(())
}

/// Checks every cost parameter. Pure; never allocates.
pub fn validate_params(params: &Params, policy: MemoryPolicy) -> Result<(), Error> {
    validate_lanes(params.lanes)?;
    validate_threads(params.threads)?;
    validate_iterations(params.iterations)?;
    validate_memory_size(params.memory_size, params.lanes, policy)?;
    validate_hash_len(params.hash_len as usize)?;
    Ok(())
}

/// Checks the byte inputs, then the cost parameters.
pub fn validate(
    params: &Params,
    policy: MemoryPolicy,
    password: &[u8],
    salt: &[u8],
    secret_key: &[u8],
    additional_data: &[u8],
) -> Result<(), Error> {
    validate_password(password)?;
    validate_salt_len(salt.len())?;
    validate_secret_key(secret_key)?;
    validate_additional_data(additional_data)?;
    validate_params(params, policy)
}
