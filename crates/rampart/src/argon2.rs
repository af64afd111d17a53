// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-call hashing entry points.

use rampart_rand::{EntropySource, SystemEntropySource, generate_salt};

use crate::config::defaults::DEFAULT_SALT_LEN;
use crate::config::{MemoryPolicy, Params};
use crate::error::Error;
use crate::instance::{self, Inputs};
use crate::memory::{try_copy_bytes, try_zeroed_bytes};
use crate::output::HashRaw;
use crate::validation;

/// Hashes `password` and returns the encoded string and the raw hash.
///
/// A random 32-byte salt is drawn from the operating system when `salt` is
/// `None`. `params.memory_size` may be any non-zero value; it is aligned
/// internally and encoded as given.
///
/// ```rust
/// use rampart::config::{Params, Variant, Version};
///
/// let params = Params {
///     variant: Variant::Argon2id,
///     version: Version::V0x13,
///     iterations: 2,
///     memory_size: 65536,
///     lanes: 1,
///     threads: 1,
///     hash_len: 32,
/// };
///
/// let (encoded, raw) = rampart::hash(&params, b"correct horse", Some(b"saltsalt"), None, None)
///     .expect("Failed to hash(..)");
///
/// assert_eq!(
///     encoded,
///     "$argon2id$v=19$m=65536,t=2,p=1$c2FsdHNhbHQ$5NukIitqJW1G2ak1eDNCRTOQjOFnWKPRcHJHz6Dqcfk"
/// );
/// assert_eq!(raw.len(), 32);
/// ```
pub fn hash(
    params: &Params,
    password: &[u8],
    salt: Option<&[u8]>,
    secret_key: Option<&[u8]>,
    additional_data: Option<&[u8]>,
) -> Result<(String, Vec<u8>), Error> {
    hash_with_entropy(
        &SystemEntropySource {},
        params,
        password,
        salt,
        secret_key,
        additional_data,
    )
}

pub(crate) fn hash_with_entropy(
    source: &dyn EntropySource,
    params: &Params,
    password: &[u8],
    salt: Option<&[u8]>,
    secret_key: Option<&[u8]>,
    additional_data: Option<&[u8]>,
) -> Result<(String, Vec<u8>), Error> {
    let salt = match salt {
        Some(salt) => salt.to_vec(),
        None => generate_salt(source, DEFAULT_SALT_LEN as usize)?,
    };

    let raw = hash_to_raw(
        params,
        MemoryPolicy::Aligned,
        Inputs {
            password,
            salt: &salt,
            secret_key: secret_key.unwrap_or_default(),
            additional_data: additional_data.unwrap_or_default(),
        },
    )?;

    let bytes = try_copy_bytes(raw.raw_hash_bytes())?;

    Ok((raw.encode(), bytes))
}

/// Hashes `password` and returns only the raw hash bytes.
pub fn hash_raw(
    params: &Params,
    password: &[u8],
    salt: &[u8],
    secret_key: Option<&[u8]>,
    additional_data: Option<&[u8]>,
) -> Result<Vec<u8>, Error> {
    let raw = hash_to_raw(
        params,
        MemoryPolicy::Aligned,
        Inputs {
            password,
            salt,
            secret_key: secret_key.unwrap_or_default(),
            additional_data: additional_data.unwrap_or_default(),
        },
    )?;

    try_copy_bytes(raw.raw_hash_bytes())
}

/// Validates, then runs the instance into a fresh [`HashRaw`].
pub(crate) fn hash_to_raw(
    params: &Params,
    policy: MemoryPolicy,
    inputs: Inputs<'_>,
) -> Result<HashRaw, Error> {
    validation::validate(
        params,
        policy,
        inputs.password,
        inputs.salt,
        inputs.secret_key,
        inputs.additional_data,
    )?;

    let mut raw = HashRaw::new(
        params.variant,
        params.version,
        params.memory_size,
        params.iterations,
        params.lanes,
        try_copy_bytes(inputs.salt)?,
        try_zeroed_bytes(params.hash_len as usize)?,
    );
    instance::hash_into(params, &inputs, raw.raw_hash_bytes_mut())?;

    Ok(raw)
}
