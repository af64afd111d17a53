// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::defaults::{DEFAULT_PASSWORD_CLEARING, DEFAULT_SECRET_KEY_CLEARING, default_threads};

/// Configuration carried by a [`Verifier`](crate::Verifier).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VerifierConfig {
    password_clearing: bool,
    secret_key_clearing: bool,
    threads: u32,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            password_clearing: DEFAULT_PASSWORD_CLEARING,
            secret_key_clearing: DEFAULT_SECRET_KEY_CLEARING,
            threads: default_threads(),
        }
    }
}

#[allow(missing_docs)]
impl VerifierConfig {
    pub fn password_clearing(&self) -> bool {
        self.password_clearing
    }
    pub fn secret_key_clearing(&self) -> bool {
        self.secret_key_clearing
    }
    /// Upper bound; the run uses `min(threads, lanes)`.
    pub fn threads(&self) -> u32 {
        self.threads
    }
}

impl VerifierConfig {
    pub(crate) fn set_password_clearing(&mut self, clearing: bool) {
        self.password_clearing = clearing;
    }
    pub(crate) fn set_secret_key_clearing(&mut self, clearing: bool) {
        self.secret_key_clearing = clearing;
    }
    pub(crate) fn set_threads(&mut self, threads: u32) {
        self.threads = threads;
    }
}
