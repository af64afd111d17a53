// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_blake2b::Blake2bError;
use rampart_rand::EntropyError;
use thiserror::Error;

/// Reasons an encoded hash string fails to parse.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The string does not start with `$argon2`.
    #[error("missing $argon2 prefix")]
    MissingPrefix,

    /// The variant suffix after `$argon2` is not `d`, `i` or `id`.
    #[error("unknown variant")]
    UnknownVariant,

    /// Wrong number of `$`-separated segments, or a segment without its key.
    #[error("malformed encoded hash")]
    Malformed,

    /// A numeric field is empty, signed, zero-padded, non-decimal or overflows u32.
    #[error("invalid number in field {0}")]
    InvalidNumber(&'static str),

    /// The version is well-formed but neither 16 nor 19.
    #[error("unsupported version {0}")]
    UnsupportedVersion(u32),

    /// Salt or hash is not canonical unpadded standard base64.
    #[error("invalid base64 in {0}")]
    InvalidBase64(&'static str),

    /// Decoded salt is shorter than 8 bytes or longer than 2^32-1.
    #[error("decoded salt length {0} out of range")]
    SaltLength(usize),

    /// Decoded hash is shorter than 4 bytes or longer than 2^32-1.
    #[error("decoded hash length {0} out of range")]
    HashLength(usize),

    /// Something follows the hash segment.
    #[error("trailing data after hash")]
    TrailingData,
}

/// Every failure `rampart` can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Password is empty.
    #[error("PasswordTooShort")]
    PasswordTooShort,
    /// Password is longer than 2^32-1 bytes.
    #[error("PasswordTooLong")]
    PasswordTooLong,
    /// Salt is shorter than 8 bytes.
    #[error("SaltTooShort")]
    SaltTooShort,
    /// Salt is longer than 2^32-1 bytes.
    #[error("SaltTooLong")]
    SaltTooLong,
    /// Secret key is longer than 2^32-1 bytes.
    #[error("SecretKeyTooLong")]
    SecretKeyTooLong,
    /// Additional data is longer than 2^32-1 bytes.
    #[error("AdditionalDataTooLong")]
    AdditionalDataTooLong,
    /// Lanes is zero.
    #[error("LanesTooFew")]
    LanesTooFew,
    /// Lanes is 2^24 or more.
    #[error("LanesTooMany")]
    LanesTooMany,
    /// Threads is zero.
    #[error("ThreadsTooFew")]
    ThreadsTooFew,
    /// Threads is 2^24 or more.
    #[error("ThreadsTooMany")]
    ThreadsTooMany,
    /// Iterations is zero.
    #[error("IterationsTooFew")]
    IterationsTooFew,
    /// Memory size is not a power of two under the strict policy.
    #[error("MemorySizeInvalid")]
    MemorySizeInvalid,
    /// Memory size is zero, or below 8 × lanes under the strict policy.
    #[error("MemorySizeTooSmall")]
    MemorySizeTooSmall,
    /// Hash length is below 4 bytes.
    #[error("HashLenTooShort")]
    HashLenTooShort,
    /// Hash length is above 2^32-1 bytes.
    #[error("HashLenTooLong")]
    HashLenTooLong,

    /// Encoded hash string could not be parsed.
    #[error("Decode: {0}")]
    Decode(#[from] DecodeError),

    /// Working memory could not be reserved.
    #[error("MemoryAllocation")]
    MemoryAllocation,
    /// A worker thread could not be spawned or did not finish.
    #[error("Thread")]
    Thread,
    /// The entropy source failed while generating a salt or key.
    #[error("Entropy: {0}")]
    Entropy(#[from] EntropyError),

    /// A builder was asked to hash or verify without a password.
    #[error("PasswordMissing")]
    PasswordMissing,
    /// Password clearing is on but the password is immutably borrowed.
    #[error("PasswordImmutable")]
    PasswordImmutable,
    /// A secret key is required and none was provided.
    #[error("SecretKeyMissing")]
    SecretKeyMissing,
    /// Secret key clearing is on but the key is immutably borrowed.
    #[error("SecretKeyImmutable")]
    SecretKeyImmutable,
    /// A verifier was run without a hash to check against.
    #[error("HashMissing")]
    HashMissing,

    /// Internal invariant violated.
    #[error("Bug: {0}")]
    Bug(&'static str),
}

impl Error {
    /// `true` for failures to parse an encoded hash.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// `true` for parameter or input bound violations.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::PasswordTooShort
                | Error::PasswordTooLong
                | Error::SaltTooShort
                | Error::SaltTooLong
                | Error::SecretKeyTooLong
                | Error::AdditionalDataTooLong
                | Error::LanesTooFew
                | Error::LanesTooMany
                | Error::ThreadsTooFew
                | Error::ThreadsTooMany
                | Error::IterationsTooFew
                | Error::MemorySizeInvalid
                | Error::MemorySizeTooSmall
                | Error::HashLenTooShort
                | Error::HashLenTooLong
        )
    }
}

// Lengths reaching BLAKE2b are validated first; a rejection here is ours.
impl From<Blake2bError> for Error {
    fn from(_: Blake2bError) -> Self {
        Error::Bug("BLAKE2b rejected a validated length")
    }
}
