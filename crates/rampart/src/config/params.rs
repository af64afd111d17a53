// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::defaults::{
    DEFAULT_HASH_LEN, DEFAULT_ITERATIONS, DEFAULT_MEMORY_SIZE, DEFAULT_VARIANT, DEFAULT_VERSION,
    default_lanes, default_threads,
};
use super::{Variant, Version};

/// How the memory cost is checked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MemoryPolicy {
    /// Any non-zero cost; the instance aligns it up to `max(m, 8p)` rounded
    /// down to a multiple of `4p`.
    #[default]
    Aligned,
    /// Cost must be a power of two and at least `8 × lanes`.
    Strict,
}

/// Cost parameters for one Argon2 computation.
///
/// `memory_size` is the requested cost in KiB. It is what goes into H0 and
/// the encoded string, even when the instance rounds the block count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Params {
    /// Argon2 variant.
    pub variant: Variant,
    /// Algorithm version.
    pub version: Version,
    /// Passes over memory (t).
    pub iterations: u32,
    /// Memory cost in KiB (m).
    pub memory_size: u32,
    /// Degree of parallelism (p).
    pub lanes: u32,
    /// Worker threads; clamped to `lanes` at run time.
    pub threads: u32,
    /// Output length in bytes.
    pub hash_len: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            variant: DEFAULT_VARIANT,
            version: DEFAULT_VERSION,
            iterations: DEFAULT_ITERATIONS,
            memory_size: DEFAULT_MEMORY_SIZE,
            lanes: default_lanes(),
            threads: default_threads(),
            hash_len: DEFAULT_HASH_LEN,
        }
    }
}
