// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::defaults::{
    DEFAULT_HASH_LEN, DEFAULT_ITERATIONS, DEFAULT_MEMORY_SIZE, DEFAULT_OPT_OUT_OF_SECRET_KEY,
    DEFAULT_PASSWORD_CLEARING, DEFAULT_SECRET_KEY_CLEARING, DEFAULT_VARIANT, DEFAULT_VERSION,
    default_lanes, default_threads,
};
use super::{MemoryPolicy, Params, Variant, Version};
use crate::error::Error;
use crate::validation;

/// Configuration carried by a [`Hasher`](crate::Hasher).
///
/// Read through the getters; change through the `Hasher::configure_*`
/// methods.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HasherConfig {
    hash_len: u32,
    iterations: u32,
    lanes: u32,
    memory_size: u32,
    opt_out_of_secret_key: bool,
    password_clearing: bool,
    secret_key_clearing: bool,
    threads: u32,
    variant: Variant,
    version: Version,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            hash_len: DEFAULT_HASH_LEN,
            iterations: DEFAULT_ITERATIONS,
            lanes: default_lanes(),
            memory_size: DEFAULT_MEMORY_SIZE,
            opt_out_of_secret_key: DEFAULT_OPT_OUT_OF_SECRET_KEY,
            password_clearing: DEFAULT_PASSWORD_CLEARING,
            secret_key_clearing: DEFAULT_SECRET_KEY_CLEARING,
            threads: default_threads(),
            variant: DEFAULT_VARIANT,
            version: DEFAULT_VERSION,
        }
    }
}

#[allow(missing_docs)]
impl HasherConfig {
    pub fn hash_len(&self) -> u32 {
        self.hash_len
    }
    pub fn iterations(&self) -> u32 {
        self.iterations
    }
    pub fn lanes(&self) -> u32 {
        self.lanes
    }
    pub fn memory_size(&self) -> u32 {
        self.memory_size
    }
    pub fn opt_out_of_secret_key(&self) -> bool {
        self.opt_out_of_secret_key
    }
    pub fn password_clearing(&self) -> bool {
        self.password_clearing
    }
    pub fn secret_key_clearing(&self) -> bool {
        self.secret_key_clearing
    }
    pub fn threads(&self) -> u32 {
        self.threads
    }
    pub fn variant(&self) -> Variant {
        self.variant
    }
    pub fn version(&self) -> Version {
        self.version
    }
}

impl HasherConfig {
    pub(crate) fn set_hash_len(&mut self, hash_len: u32) {
        self.hash_len = hash_len;
    }
    pub(crate) fn set_iterations(&mut self, iterations: u32) {
        self.iterations = iterations;
    }
    pub(crate) fn set_lanes(&mut self, lanes: u32) {
        self.lanes = lanes;
    }
    pub(crate) fn set_memory_size(&mut self, memory_size: u32) {
        self.memory_size = memory_size;
    }
    pub(crate) fn set_opt_out_of_secret_key(&mut self, opt_out: bool) {
        self.opt_out_of_secret_key = opt_out;
    }
    pub(crate) fn set_password_clearing(&mut self, clearing: bool) {
        self.password_clearing = clearing;
    }
    pub(crate) fn set_secret_key_clearing(&mut self, clearing: bool) {
        self.secret_key_clearing = clearing;
    }
    pub(crate) fn set_threads(&mut self, threads: u32) {
        self.threads = threads;
    }
    pub(crate) fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
    }
    pub(crate) fn set_version(&mut self, version: Version) {
        self.version = version;
    }

    /// Cost parameters for the instance.
    pub fn params(&self) -> Params {
        Params {
            variant: self.variant,
            version: self.version,
            iterations: self.iterations,
            memory_size: self.memory_size,
            lanes: self.lanes,
            threads: self.threads,
            hash_len: self.hash_len,
        }
    }

    /// Checks the cost parameters with the strict memory policy.
    pub fn validate(&self) -> Result<(), Error> {
        validation::validate_params(&self.params(), MemoryPolicy::Strict)
    }
}
