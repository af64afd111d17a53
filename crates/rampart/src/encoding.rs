// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The `$argon2<variant>$v=<version>$m=<m>,t=<t>,p=<p>$<salt>$<hash>` string format.
//!
//! Salt and hash use standard base64 without padding. Decoding is strict:
//! numbers are plain decimal without sign or leading zeros, base64 must be
//! canonical, and nothing may follow the hash. A missing `$v=` segment is
//! the legacy format and means version 0x10.

use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;

use crate::config::{MemoryPolicy, Variant, Version};
use crate::error::{DecodeError, Error};
use crate::output::HashRaw;
use crate::validation::{self, MAX_LEN, MIN_HASH_LEN, MIN_SALT_LEN};

const PREFIX: &str = "$argon2";

/// Every supported version prints as two decimal digits.
const VERSION_DIGITS: usize = 2;

pub(crate) fn encode(raw: &HashRaw) -> String {
    format!(
        "${}$v={}$m={},t={},p={}${}${}",
        raw.variant().as_str(),
        raw.version().as_u32(),
        raw.memory_size(),
        raw.iterations(),
        raw.lanes(),
        STANDARD_NO_PAD.encode(raw.raw_salt_bytes()),
        STANDARD_NO_PAD.encode(raw.raw_hash_bytes()),
    )
}

/// Parses an encoded hash without running Argon2.
///
/// # Errors
///
/// `Error::Decode` with the first problem found.
///
/// ```rust
/// let raw = rampart::decode(
///     "$argon2i$v=19$m=65536,t=2,p=1$c29tZXNhbHQ$wWKIMhR9lyDFvRz9YTZweHKfbftvj+qf+YFY4NeBbtA",
/// )
/// .expect("Failed to decode(..)");
///
/// assert_eq!(raw.memory_size(), 65536);
/// assert_eq!(raw.raw_salt_bytes(), b"somesalt");
/// ```
pub fn decode(encoded: &str) -> Result<HashRaw, Error> {
    let rest = encoded
        .strip_prefix(PREFIX)
        .ok_or(DecodeError::MissingPrefix)?;
    let mut segments = rest.split('$');

    let variant = match segments.next() {
        Some("d") => Variant::Argon2d,
        Some("i") => Variant::Argon2i,
        Some("id") => Variant::Argon2id,
        _ => return Err(DecodeError::UnknownVariant.into()),
    };

    let mut segment = segments.next().ok_or(DecodeError::Malformed)?;
    let version = match segment.strip_prefix("v=") {
        Some(digits) => {
            let version = Version::from_u32(parse_decimal(digits, "v")?)?;
            segment = segments.next().ok_or(DecodeError::Malformed)?;
            version
        }
        None => Version::V0x10,
    };

    let mut fields = segment.split(',');
    let memory_size = parse_field(fields.next(), "m")?;
    let iterations = parse_field(fields.next(), "t")?;
    let lanes = parse_field(fields.next(), "p")?;
    if fields.next().is_some() {
        return Err(DecodeError::Malformed.into());
    }

    let salt = decode_base64(segments.next(), "salt")?;
    let hash = decode_base64(segments.next(), "hash")?;

    if segments.next().is_some() {
        return Err(DecodeError::TrailingData.into());
    }
    if !(MIN_SALT_LEN..=MAX_LEN).contains(&salt.len()) {
        return Err(DecodeError::SaltLength(salt.len()).into());
    }
    if !(MIN_HASH_LEN..=MAX_LEN).contains(&hash.len()) {
        return Err(DecodeError::HashLength(hash.len()).into());
    }

    Ok(HashRaw::new(
        variant,
        version,
        memory_size,
        iterations,
        lanes,
        salt,
        hash,
    ))
}

/// Byte length of the encoded string for these parameters, plus one for a
/// terminating NUL.
///
/// # Errors
///
/// The same bound errors hashing would report.
///
/// ```rust
/// use rampart::config::Variant;
///
/// let len = rampart::encoded_length(32, 2, 1, 65536, 8, Variant::Argon2id)
///     .expect("Failed to encoded_length(..)");
/// assert_eq!(len, "$argon2id$v=19$m=65536,t=2,p=1$c2FsdHNhbHQ$5NukIitqJW1G2ak1eDNCRTOQjOFnWKPRcHJHz6Dqcfk".len() + 1);
/// ```
pub fn encoded_length(
    hash_len: usize,
    iterations: u32,
    lanes: u32,
    memory_size: u32,
    salt_len: usize,
    variant: Variant,
) -> Result<usize, Error> {
    validation::validate_hash_len(hash_len)?;
    validation::validate_iterations(iterations)?;
    validation::validate_lanes(lanes)?;
    validation::validate_memory_size(memory_size, lanes, MemoryPolicy::Aligned)?;
    validation::validate_salt_len(salt_len)?;

    let salt_b64 = base64::encoded_len(salt_len, false).ok_or(Error::SaltTooLong)?;
    let hash_b64 = base64::encoded_len(hash_len, false).ok_or(Error::HashLenTooLong)?;

    Ok(1 + variant.as_str().len()
        + "$v=".len()
        + VERSION_DIGITS
        + "$m=".len()
        + decimal_len(memory_size)
        + ",t=".len()
        + decimal_len(iterations)
        + ",p=".len()
        + decimal_len(lanes)
        + 1
        + salt_b64
        + 1
        + hash_b64
        + 1)
}

fn decimal_len(mut value: u32) -> usize {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}

/// Plain decimal: digits only, no leading zeros, fits u32.
fn parse_decimal(digits: &str, field: &'static str) -> Result<u32, Error> {
    let well_formed = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && !(digits.len() > 1 && digits.starts_with('0'));

    if !well_formed {
        return Err(DecodeError::InvalidNumber(field).into());
    }

    digits
        .parse::<u32>()
        .map_err(|_| DecodeError::InvalidNumber(field).into())
}

/// `<key>=<decimal>`
fn parse_field(part: Option<&str>, key: &'static str) -> Result<u32, Error> {
    let value = part
        .and_then(|part| part.strip_prefix(key))
        .and_then(|part| part.strip_prefix('='))
        .ok_or(DecodeError::Malformed)?;

    parse_decimal(value, key)
}

fn decode_base64(segment: Option<&str>, what: &'static str) -> Result<Vec<u8>, Error> {
    let segment = segment.ok_or(DecodeError::Malformed)?;
    STANDARD_NO_PAD
        .decode(segment)
        .map_err(|_| DecodeError::InvalidBase64(what).into())
}
