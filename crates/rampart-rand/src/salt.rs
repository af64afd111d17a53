// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec;
use alloc::vec::Vec;

use rampart_zero::FastZeroizable;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Returns `len` fresh random bytes drawn from `source`.
///
/// On failure the partially written buffer is wiped before the error is
/// returned.
///
/// # Errors
///
/// Returns `EntropyError::EntropyNotAvailable` if `source` fails.
pub fn generate_salt(source: &dyn EntropySource, len: usize) -> Result<Vec<u8>, EntropyError> {
    let mut salt = vec![0u8; len];

    if let Err(err) = source.fill_bytes(&mut salt) {
        salt.fast_zeroize();
        return Err(err);
    }

    Ok(salt)
}
