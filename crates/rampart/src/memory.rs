// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Memory geometry, the working-memory allocation and its shared view.

use core::marker::PhantomData;

use rampart_zero::{FastZeroizable, ZeroizationProbe};

use crate::block::Block;
use crate::error::Error;

/// Slices (sync points) per pass.
pub(crate) const SYNC_POINTS: u32 = 4;

/// Block layout derived from the requested memory cost and lane count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Geometry {
    pub(crate) lanes: u32,
    pub(crate) memory_blocks: u32,
    pub(crate) segment_length: u32,
    pub(crate) lane_length: u32,
}

impl Geometry {
    /// `lanes` must be non-zero and below 2^24.
    pub(crate) fn new(memory_size: u32, lanes: u32) -> Self {
        let minimum = 2 * SYNC_POINTS * lanes;
        let requested = memory_size.max(minimum);

        let segment_length = requested / (lanes * SYNC_POINTS);
        let memory_blocks = segment_length * lanes * SYNC_POINTS;

        Self {
            lanes,
            memory_blocks,
            segment_length,
            lane_length: segment_length * SYNC_POINTS,
        }
    }

    /// Index of block `index` of `lane` in the flat block array.
    #[inline(always)]
    pub(crate) fn offset(&self, lane: u32, index: u32) -> usize {
        lane as usize * self.lane_length as usize + index as usize
    }
}

/// Working memory: `memory_blocks` zero-initialized blocks, wiped on drop.
pub(crate) struct Memory {
    blocks: Vec<Block>,
}

impl Memory {
    /// Reserves the whole region up front so failure is reported rather
    /// than aborting.
    pub(crate) fn try_new(memory_blocks: usize) -> Result<Self, Error> {
        let mut blocks = Vec::new();
        blocks
            .try_reserve_exact(memory_blocks)
            .map_err(|_| Error::MemoryAllocation)?;
        blocks.resize(memory_blocks, Block::ZERO);

        Ok(Self { blocks })
    }

    pub(crate) fn len(&self) -> usize {
        self.blocks.len()
    }

    pub(crate) fn block(&self, index: usize) -> &Block {
        &self.blocks[index]
    }

    pub(crate) fn block_mut(&mut self, index: usize) -> &mut Block {
        &mut self.blocks[index]
    }

    pub(crate) fn shared(&mut self) -> SharedBlocks<'_> {
        SharedBlocks {
            ptr: self.blocks.as_mut_ptr(),
            len: self.blocks.len(),
            _marker: PhantomData,
        }
    }
}

impl FastZeroizable for Memory {
    fn fast_zeroize(&mut self) {
        self.blocks.fast_zeroize();
    }
}

impl ZeroizationProbe for Memory {
    fn is_zeroized(&self) -> bool {
        self.blocks.is_zeroized()
    }
}

impl Drop for Memory {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}

/// `len` zero bytes, or `MemoryAllocation` when the reservation fails.
pub(crate) fn try_zeroed_bytes(len: usize) -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(len)
        .map_err(|_| Error::MemoryAllocation)?;
    bytes.resize(len, 0);

    Ok(bytes)
}

/// Fallible copy of `src` into an exactly sized buffer.
pub(crate) fn try_copy_bytes(src: &[u8]) -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(src.len())
        .map_err(|_| Error::MemoryAllocation)?;
    bytes.extend_from_slice(src);

    Ok(bytes)
}

/// Unsynchronized view of the blocks, shared by the segment workers.
///
/// Soundness rests on the fill schedule: within one segment a worker writes
/// only blocks of its own lane's current segment, and every block it reads
/// is either in its own lane or outside the current slice of every lane, so
/// no block is written by one thread while another reads it. The scope join
/// after each segment orders all writes before the next segment's reads.
#[derive(Clone, Copy)]
pub(crate) struct SharedBlocks<'a> {
    ptr: *mut Block,
    len: usize,
    _marker: PhantomData<&'a mut [Block]>,
}

// SAFETY: see the type-level invariant; workers touch disjoint writes.
unsafe impl Send for SharedBlocks<'_> {}
// SAFETY: as above.
unsafe impl Sync for SharedBlocks<'_> {}

impl SharedBlocks<'_> {
    /// Computes G(blocks[prev], blocks[reference]) into blocks[current].
    ///
    /// # Safety
    ///
    /// `current` must differ from `prev` and `reference`, all three must be in
    /// bounds, and no other thread may access `current` or write `prev` or
    /// `reference` concurrently.
    pub(crate) unsafe fn compress(
        &self,
        prev: usize,
        reference: usize,
        current: usize,
        with_xor: bool,
        scratch: &mut Block,
    ) {
        debug_assert!(prev < self.len && reference < self.len && current < self.len);
        debug_assert!(current != prev && current != reference);

        // SAFETY: guaranteed by the caller.
        unsafe {
            let x = &*self.ptr.add(prev);
            let y = &*self.ptr.add(reference);
            let out = &mut *self.ptr.add(current);
            Block::compress(x, y, out, with_xor, scratch);
        }
    }

    /// First word of blocks[index].
    ///
    /// # Safety
    ///
    /// `index` must be in bounds and not written concurrently.
    pub(crate) unsafe fn first_word(&self, index: usize) -> u64 {
        debug_assert!(index < self.len);

        // SAFETY: guaranteed by the caller.
        unsafe { (*self.ptr.add(index)).0[0] }
    }
}
