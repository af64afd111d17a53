// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 1 KiB memory block and the compression function G per RFC 9106 Section 3.5-3.6

use core::ops::BitXorAssign;

use rampart_zero::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

/// Bytes per block.
pub(crate) const BLOCK_SIZE: usize = 1024;

/// 64-bit words per block.
pub(crate) const QWORDS_IN_BLOCK: usize = BLOCK_SIZE / 8;

/// One Argon2 memory block: 128 little-endian 64-bit words.
#[derive(Clone, Copy)]
#[repr(C, align(64))]
pub(crate) struct Block(pub(crate) [u64; QWORDS_IN_BLOCK]);

impl Block {
    pub(crate) const ZERO: Block = Block([0u64; QWORDS_IN_BLOCK]);

    /// Loads from exactly 1024 little-endian bytes.
    pub(crate) fn load(&mut self, bytes: &[u8; BLOCK_SIZE]) {
        for (word, chunk) in self.0.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut le = [0u8; 8];
            le.copy_from_slice(chunk);
            *word = u64::from_le_bytes(le);
            le.fast_zeroize();
        }
    }

    /// Stores as 1024 little-endian bytes.
    pub(crate) fn store(&self, bytes: &mut [u8; BLOCK_SIZE]) {
        for (chunk, word) in bytes.chunks_exact_mut(8).zip(self.0.iter()) {
            let mut le = word.to_le_bytes();
            chunk.copy_from_slice(&le);
            le.fast_zeroize();
        }
    }

    /// G(x, y) written into `out`.
    ///
    /// With `with_xor` the result is XORed into the current contents of
    /// `out` (version 0x13, passes after the first). `scratch` carries the
    /// intermediate R = x ⊕ y and is left dirty for the caller to wipe.
    pub(crate) fn compress(
        x: &Block,
        y: &Block,
        out: &mut Block,
        with_xor: bool,
        scratch: &mut Block,
    ) {
        for i in 0..QWORDS_IN_BLOCK {
            scratch.0[i] = x.0[i] ^ y.0[i];
        }

        if with_xor {
            *out ^= &*scratch;
        } else {
            out.0.copy_from_slice(&scratch.0);
        }

        scratch.permute();
        *out ^= &*scratch;
    }

    /// Applies P to each row of 16 words, then to each interleaved column.
    fn permute(&mut self) {
        for row in 0..8 {
            let base = 16 * row;
            let idx: [usize; 16] = core::array::from_fn(|k| base + k);
            self.round(&idx);
        }

        for col in 0..8 {
            let base = 2 * col;
            let idx: [usize; 16] = core::array::from_fn(|k| base + 16 * (k / 2) + (k % 2));
            self.round(&idx);
        }
    }

    /// The BLAKE2b round without message words, over the words at `idx`.
    #[inline(always)]
    fn round(&mut self, idx: &[usize; 16]) {
        let v = &mut self.0;

        gb(v, idx[0], idx[4], idx[8], idx[12]);
        gb(v, idx[1], idx[5], idx[9], idx[13]);
        gb(v, idx[2], idx[6], idx[10], idx[14]);
        gb(v, idx[3], idx[7], idx[11], idx[15]);

        gb(v, idx[0], idx[5], idx[10], idx[15]);
        gb(v, idx[1], idx[6], idx[11], idx[12]);
        gb(v, idx[2], idx[7], idx[8], idx[13]);
        gb(v, idx[3], idx[4], idx[9], idx[14]);
    }
}

/// a + b + 2 · lo32(a) · lo32(b)
#[inline(always)]
fn fblamka(a: u64, b: u64) -> u64 {
    let lo = (a & 0xFFFF_FFFF).wrapping_mul(b & 0xFFFF_FFFF);
    a.wrapping_add(b).wrapping_add(lo.wrapping_mul(2))
}

#[inline(always)]
fn gb(v: &mut [u64; QWORDS_IN_BLOCK], a: usize, b: usize, c: usize, d: usize) {
    v[a] = fblamka(v[a], v[b]);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = fblamka(v[c], v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(24);

    v[a] = fblamka(v[a], v[b]);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = fblamka(v[c], v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(63);
}

impl BitXorAssign<&Block> for Block {
    fn bitxor_assign(&mut self, rhs: &Block) {
        for (a, b) in self.0.iter_mut().zip(rhs.0.iter()) {
            *a ^= b;
        }
    }
}

impl Default for Block {
    fn default() -> Self {
        Block::ZERO
    }
}

impl ZeroizeMetadata for Block {
    const CAN_BE_BULK_ZEROIZED: bool = true;
}

impl FastZeroizable for Block {
    fn fast_zeroize(&mut self) {
        self.0.fast_zeroize();
    }
}

impl ZeroizationProbe for Block {
    fn is_zeroized(&self) -> bool {
        self.0.is_zeroized()
    }
}
