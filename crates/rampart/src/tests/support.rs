// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::config::{Params, Variant, Version};

/// Cheap parameters for tests that only care about behavior.
pub(crate) fn small_params(variant: Variant) -> Params {
    Params {
        variant,
        version: Version::V0x13,
        iterations: 1,
        memory_size: 32,
        lanes: 1,
        threads: 1,
        hash_len: 32,
    }
}

/// Routes `tracing` output to the test harness.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
