// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Helpers for test vectors.

use alloc::vec::Vec;

/// Parses a hexadecimal string into bytes.
///
/// # Panics
///
/// Panics on an odd length or a non-hex digit.
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string must have even length");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}

/// `true` when the whole allocation of `vec`, spare capacity included, is
/// zero.
#[inline(never)]
pub fn is_vec_fully_zeroized(vec: &Vec<u8>) -> bool {
    let base = vec.as_ptr();

    // SAFETY: the allocation is valid for `capacity` bytes; we only read.
    (0..vec.capacity()).all(|i| unsafe { *base.add(i) } == 0)
}
