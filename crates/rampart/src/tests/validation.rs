// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::config::{MemoryPolicy, Params, Variant};
use crate::error::Error;
use crate::validation::{
    MAX_LANES, validate, validate_hash_len, validate_memory_size, validate_params,
    validate_salt_len,
};

use super::support::small_params;

fn check(params: Params, policy: MemoryPolicy) -> Result<(), Error> {
    validate_params(&params, policy)
}

#[test]
fn test_validate_accepts_small_params() {
    let params = small_params(Variant::Argon2id);

    validate(&params, MemoryPolicy::Strict, b"password", b"saltsalt", b"", b"")
        .expect("Failed to validate(..)");
}

#[test]
fn test_validate_byte_inputs() {
    let params = small_params(Variant::Argon2id);

    assert_eq!(
        validate(&params, MemoryPolicy::Aligned, b"", b"saltsalt", b"", b""),
        Err(Error::PasswordTooShort)
    );
    assert_eq!(
        validate(&params, MemoryPolicy::Aligned, b"password", b"salt", b"", b""),
        Err(Error::SaltTooShort)
    );
}

#[test]
fn test_validate_salt_bounds() {
    assert_eq!(validate_salt_len(7), Err(Error::SaltTooShort));
    assert_eq!(validate_salt_len(8), Ok(()));
    assert_eq!(validate_salt_len(u32::MAX as usize), Ok(()));
}

#[test]
fn test_validate_hash_len_bounds() {
    assert_eq!(validate_hash_len(3), Err(Error::HashLenTooShort));
    assert_eq!(validate_hash_len(4), Ok(()));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_validate_lengths_above_u32() {
    let too_long = u32::MAX as usize + 1;

    assert_eq!(validate_salt_len(too_long), Err(Error::SaltTooLong));
    assert_eq!(validate_hash_len(too_long), Err(Error::HashLenTooLong));
}

#[test]
fn test_validate_lanes_and_threads() {
    let base = small_params(Variant::Argon2id);

    assert_eq!(
        check(Params { lanes: 0, ..base }, MemoryPolicy::Aligned),
        Err(Error::LanesTooFew)
    );
    assert_eq!(
        check(Params { lanes: MAX_LANES + 1, ..base }, MemoryPolicy::Aligned),
        Err(Error::LanesTooMany)
    );
    assert_eq!(
        check(Params { threads: 0, ..base }, MemoryPolicy::Aligned),
        Err(Error::ThreadsTooFew)
    );
    assert_eq!(
        check(Params { threads: MAX_LANES + 1, ..base }, MemoryPolicy::Aligned),
        Err(Error::ThreadsTooMany)
    );
    assert_eq!(
        check(Params { threads: 64, ..base }, MemoryPolicy::Aligned),
        Ok(())
    );
}

#[test]
fn test_validate_iterations() {
    let base = small_params(Variant::Argon2id);

    assert_eq!(
        check(Params { iterations: 0, ..base }, MemoryPolicy::Aligned),
        Err(Error::IterationsTooFew)
    );
}

#[test]
fn test_memory_policy_aligned() {
    assert_eq!(
        validate_memory_size(0, 1, MemoryPolicy::Aligned),
        Err(Error::MemorySizeTooSmall)
    );
    assert_eq!(validate_memory_size(1, 4, MemoryPolicy::Aligned), Ok(()));
    assert_eq!(validate_memory_size(300, 2, MemoryPolicy::Aligned), Ok(()));
}

#[test]
fn test_memory_policy_strict() {
    assert_eq!(
        validate_memory_size(300, 2, MemoryPolicy::Strict),
        Err(Error::MemorySizeInvalid)
    );
    assert_eq!(
        validate_memory_size(16, 4, MemoryPolicy::Strict),
        Err(Error::MemorySizeTooSmall)
    );
    assert_eq!(validate_memory_size(32, 4, MemoryPolicy::Strict), Ok(()));
    assert_eq!(
        validate_memory_size(0, 1, MemoryPolicy::Strict),
        Err(Error::MemorySizeInvalid)
    );
}

#[test]
fn test_input_errors_are_classified() {
    assert!(Error::SaltTooShort.is_input_error());
    assert!(Error::MemorySizeInvalid.is_input_error());
    assert!(!Error::PasswordMissing.is_input_error());
    assert!(!Error::Thread.is_input_error());
}
