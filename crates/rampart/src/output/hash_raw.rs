// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::str::FromStr;

use rampart_util::constant_time_eq;
use rampart_zero::FastZeroizable;

use crate::config::{Variant, Version};
use crate::encoding;
use crate::error::Error;

/// Decoded form of an encoded hash: parameters, salt and raw hash bytes.
///
/// The hash bytes are wiped on drop. Equality compares the hash bytes in
/// constant time.
#[derive(Clone)]
pub struct HashRaw {
    variant: Variant,
    version: Version,
    memory_size: u32,
    iterations: u32,
    lanes: u32,
    raw_salt_bytes: Vec<u8>,
    raw_hash_bytes: Vec<u8>,
}

impl HashRaw {
    pub(crate) fn new(
        variant: Variant,
        version: Version,
        memory_size: u32,
        iterations: u32,
        lanes: u32,
        raw_salt_bytes: Vec<u8>,
        raw_hash_bytes: Vec<u8>,
    ) -> Self {
        Self {
            variant,
            version,
            memory_size,
            iterations,
            lanes,
            raw_salt_bytes,
            raw_hash_bytes,
        }
    }

    pub(crate) fn raw_hash_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.raw_hash_bytes
    }

    /// Encoded string form.
    pub fn encode(&self) -> String {
        encoding::encode(self)
    }
}

#[allow(missing_docs)]
impl HashRaw {
    pub fn variant(&self) -> Variant {
        self.variant
    }
    pub fn version(&self) -> Version {
        self.version
    }
    /// Requested memory cost in KiB, as hashed.
    pub fn memory_size(&self) -> u32 {
        self.memory_size
    }
    pub fn iterations(&self) -> u32 {
        self.iterations
    }
    pub fn lanes(&self) -> u32 {
        self.lanes
    }
    pub fn raw_salt_bytes(&self) -> &[u8] {
        &self.raw_salt_bytes
    }
    pub fn raw_hash_bytes(&self) -> &[u8] {
        &self.raw_hash_bytes
    }
}

impl fmt::Debug for HashRaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashRaw")
            .field("variant", &self.variant)
            .field("version", &self.version)
            .field("memory_size", &self.memory_size)
            .field("iterations", &self.iterations)
            .field("lanes", &self.lanes)
            .field("salt_len", &self.raw_salt_bytes.len())
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for HashRaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for HashRaw {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        encoding::decode(s)
    }
}

impl PartialEq for HashRaw {
    fn eq(&self, other: &Self) -> bool {
        let params_eq = self.variant == other.variant
            && self.version == other.version
            && self.memory_size == other.memory_size
            && self.iterations == other.iterations
            && self.lanes == other.lanes
            && self.raw_salt_bytes == other.raw_salt_bytes;

        constant_time_eq(&self.raw_hash_bytes, &other.raw_hash_bytes) & params_eq
    }
}

impl Eq for HashRaw {}

impl Drop for HashRaw {
    fn drop(&mut self) {
        self.raw_hash_bytes.fast_zeroize();
    }
}
