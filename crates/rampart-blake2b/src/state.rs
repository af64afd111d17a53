// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! BLAKE2b streaming state per RFC 7693 Section 3

use rampart_zero::{FastZeroizable, ZeroizationProbe};

use crate::consts::{BLOCK_LEN, IV, MAX_OUTPUT_LEN, ROUNDS, SIGMA};
use crate::error::Blake2bError;

/// BLAKE2b streaming state.
///
/// Every buffer that sees message bytes lives in the struct so a single
/// `fast_zeroize` reaches all of it. The state wipes itself after
/// [`finalize`](Self::finalize) and on drop.
pub struct Blake2bState {
    // Chained hash state
    h: [u64; 8],

    // Local work vector and message words per RFC 7693 Section 3.2
    v: [u64; 16],
    m: [u64; 16],

    // Input buffering. The last block is held back until finalize so it can
    // carry the final-block flag.
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    counter: u128,
    out_len: usize,
}

impl Blake2bState {
    /// Creates an unkeyed state producing an `out_len`-byte digest.
    ///
    /// # Errors
    ///
    /// `Blake2bError::InvalidOutputLength` unless `1 <= out_len <= 64`.
    pub fn new(out_len: usize) -> Result<Self, Blake2bError> {
        if out_len == 0 || out_len > MAX_OUTPUT_LEN {
            return Err(Blake2bError::InvalidOutputLength(out_len));
        }

        let mut h = IV;
        // Parameter block: digest length, key length 0, fanout 1, depth 1.
        h[0] ^= 0x0101_0000 ^ out_len as u64;

        Ok(Self {
            h,
            v: [0u64; 16],
            m: [0u64; 16],
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            counter: 0,
            out_len,
        })
    }

    /// Digest length this state was created with.
    pub fn output_len(&self) -> usize {
        self.out_len
    }

    #[inline(always)]
    fn g(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
        v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
        v[d] = (v[d] ^ v[a]).rotate_right(32);
        v[c] = v[c].wrapping_add(v[d]);
        v[b] = (v[b] ^ v[c]).rotate_right(24);
        v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
        v[d] = (v[d] ^ v[a]).rotate_right(16);
        v[c] = v[c].wrapping_add(v[d]);
        v[b] = (v[b] ^ v[c]).rotate_right(63);
    }

    /// Compression function F over `self.buffer`.
    fn compress(&mut self, last: bool) {
        for (word, chunk) in self.m.iter_mut().zip(self.buffer.chunks_exact(8)) {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            *word = u64::from_le_bytes(bytes);
            bytes.fast_zeroize();
        }

        self.v[..8].copy_from_slice(&self.h);
        self.v[8..].copy_from_slice(&IV);
        self.v[12] ^= self.counter as u64;
        self.v[13] ^= (self.counter >> 64) as u64;
        if last {
            self.v[14] = !self.v[14];
        }

        for round in 0..ROUNDS {
            let s = &SIGMA[round % 10];
            let m = &self.m;
            let v = &mut self.v;

            Self::g(v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
            Self::g(v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
            Self::g(v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
            Self::g(v, 3, 7, 11, 15, m[s[6]], m[s[7]]);

            Self::g(v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
            Self::g(v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
            Self::g(v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
            Self::g(v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
        }

        for i in 0..8 {
            self.h[i] ^= self.v[i] ^ self.v[i + 8];
        }

        self.v.fast_zeroize();
        self.m.fast_zeroize();
    }

    /// Absorbs `data`.
    pub fn update(&mut self, data: &[u8]) {
        let mut offset = 0;

        while offset < data.len() {
            if self.buffer_len == BLOCK_LEN {
                self.counter += BLOCK_LEN as u128;
                self.compress(false);
                self.buffer.fast_zeroize();
                self.buffer_len = 0;
            }

            let take = core::cmp::min(BLOCK_LEN - self.buffer_len, data.len() - offset);
            self.buffer[self.buffer_len..self.buffer_len + take]
                .copy_from_slice(&data[offset..offset + take]);
            self.buffer_len += take;
            offset += take;
        }
    }

    /// Writes the digest into `out` and wipes the state.
    ///
    /// # Errors
    ///
    /// `Blake2bError::InvalidOutputLength` if `out.len()` differs from the
    /// length passed to [`new`](Self::new).
    pub fn finalize(&mut self, out: &mut [u8]) -> Result<(), Blake2bError> {
        if out.len() != self.out_len {
            return Err(Blake2bError::InvalidOutputLength(out.len()));
        }

        self.counter += self.buffer_len as u128;
        self.buffer[self.buffer_len..].fill(0);
        self.compress(true);

        for (chunk, word) in out.chunks_mut(8).zip(self.h.iter()) {
            let bytes = word.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }

        self.fast_zeroize();
        Ok(())
    }
}

impl FastZeroizable for Blake2bState {
    fn fast_zeroize(&mut self) {
        self.h.fast_zeroize();
        self.v.fast_zeroize();
        self.m.fast_zeroize();
        self.buffer.fast_zeroize();
        self.buffer_len.fast_zeroize();
        self.counter.fast_zeroize();
    }
}

impl ZeroizationProbe for Blake2bState {
    fn is_zeroized(&self) -> bool {
        self.h.is_zeroized()
            && self.v.is_zeroized()
            && self.m.is_zeroized()
            && self.buffer.is_zeroized()
            && self.buffer_len == 0
            && self.counter == 0
    }
}

impl Drop for Blake2bState {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}
