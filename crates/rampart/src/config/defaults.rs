// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Default values for [`HasherConfig`](super::HasherConfig),
//! [`VerifierConfig`](super::VerifierConfig) and [`Params`](super::Params).

use std::thread;

use super::{Variant, Version};

/// Output length in bytes.
pub const DEFAULT_HASH_LEN: u32 = 32;

/// Passes over memory.
pub const DEFAULT_ITERATIONS: u32 = 192;

/// Memory cost in KiB.
pub const DEFAULT_MEMORY_SIZE: u32 = 4096;

/// Length of generated salts in bytes.
pub const DEFAULT_SALT_LEN: u32 = 32;

/// Length of generated secret keys in bytes.
pub const DEFAULT_SECRET_KEY_LEN: u32 = 32;

#[allow(missing_docs)]
pub const DEFAULT_OPT_OUT_OF_SECRET_KEY: bool = false;
#[allow(missing_docs)]
pub const DEFAULT_PASSWORD_CLEARING: bool = false;
#[allow(missing_docs)]
pub const DEFAULT_SECRET_KEY_CLEARING: bool = false;
#[allow(missing_docs)]
pub const DEFAULT_VARIANT: Variant = Variant::Argon2id;
#[allow(missing_docs)]
pub const DEFAULT_VERSION: Version = Version::V0x13;

/// Number of logical cores, capped so the default memory size stays
/// at least 8 KiB per lane.
pub fn default_lanes() -> u32 {
    let cores = thread::available_parallelism()
        .map(|n| u32::try_from(n.get()).unwrap_or(u32::MAX))
        .unwrap_or(1);

    cores.min(DEFAULT_MEMORY_SIZE / 8)
}

/// Same as [`default_lanes`].
pub fn default_threads() -> u32 {
    default_lanes()
}

/// Threads used when verifying: available parallelism clamped to `lanes`.
pub(crate) fn verify_threads(lanes: u32) -> u32 {
    let cores = thread::available_parallelism()
        .map(|n| u32::try_from(n.get()).unwrap_or(u32::MAX))
        .unwrap_or(1);

    cores.min(lanes).max(1)
}
