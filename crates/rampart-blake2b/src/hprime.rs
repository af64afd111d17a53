// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Variable-length hash H′ per RFC 9106 Section 3.3

use rampart_zero::{FastZeroizable, ZeroizationProbe, ZeroizingGuard};

use crate::consts::MAX_OUTPUT_LEN;
use crate::error::Blake2bError;
use crate::state::Blake2bState;

const HALF_LEN: usize = MAX_OUTPUT_LEN / 2;

/// Chaining digests V_i and V_{i+1}; they only ever live inside a
/// [`ZeroizingGuard`].
pub(crate) struct Chain {
    pub(crate) v: [u8; MAX_OUTPUT_LEN],
    pub(crate) next: [u8; MAX_OUTPUT_LEN],
}

impl Default for Chain {
    fn default() -> Self {
        Self {
            v: [0u8; MAX_OUTPUT_LEN],
            next: [0u8; MAX_OUTPUT_LEN],
        }
    }
}

impl Chain {
    /// V_{i+1} = BLAKE2b(V_i); afterwards `v` holds the new digest.
    pub(crate) fn advance(&mut self) -> Result<(), Blake2bError> {
        let mut state = Blake2bState::new(MAX_OUTPUT_LEN)?;
        state.update(&self.v);
        state.finalize(&mut self.next)?;
        self.v.copy_from_slice(&self.next);

        Ok(())
    }
}

impl FastZeroizable for Chain {
    fn fast_zeroize(&mut self) {
        self.v.fast_zeroize();
        self.next.fast_zeroize();
    }
}

impl ZeroizationProbe for Chain {
    fn is_zeroized(&self) -> bool {
        self.v.is_zeroized() && self.next.is_zeroized()
    }
}

/// Computes H′ over the concatenation of `input` into `out`.
///
/// The input is given in parts so callers never have to build a
/// concatenated copy of secret material.
///
/// - `out.len() <= 64`: `BLAKE2b(LE32(len) ‖ X)` with digest length `len`
/// - otherwise a chain of 64-byte BLAKE2b digests, emitting the first 32
///   bytes of each, closed by one digest of the remaining length
///
/// # Errors
///
/// `Blake2bError::InvalidLongOutputLength` if `out` is empty or longer than
/// `u32::MAX` bytes.
pub fn blake2b_long(input: &[&[u8]], out: &mut [u8]) -> Result<(), Blake2bError> {
    let out_len = out.len();
    let tag = u32::try_from(out_len)
        .ok()
        .filter(|&len| len > 0)
        .ok_or(Blake2bError::InvalidLongOutputLength(out_len))?;

    if out_len <= MAX_OUTPUT_LEN {
        let mut state = Blake2bState::new(out_len)?;
        state.update(&tag.to_le_bytes());
        for part in input {
            state.update(part);
        }
        return state.finalize(out);
    }

    let mut chain = ZeroizingGuard::new(Chain::default());

    let mut state = Blake2bState::new(MAX_OUTPUT_LEN)?;
    state.update(&tag.to_le_bytes());
    for part in input {
        state.update(part);
    }
    state.finalize(&mut chain.v)?;

    // r = ceil(len / 32) - 2 full digests contribute their first half.
    let r = out_len.div_ceil(HALF_LEN) - 2;
    out[..HALF_LEN].copy_from_slice(&chain.v[..HALF_LEN]);

    for i in 1..r {
        chain.advance()?;
        out[i * HALF_LEN..(i + 1) * HALF_LEN].copy_from_slice(&chain.v[..HALF_LEN]);
    }

    let tail = &mut out[r * HALF_LEN..];
    let mut state = Blake2bState::new(tail.len())?;
    state.update(&chain.v);
    state.finalize(tail)
}
