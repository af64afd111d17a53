// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Segment filling per RFC 9106 Section 3.4, and the per-segment worker fan-out.

use std::thread;

use rampart_zero::{FastZeroizable, ZeroizationProbe};

use crate::block::{Block, QWORDS_IN_BLOCK};
use crate::config::{Variant, Version};
use crate::error::Error;
use crate::memory::{Geometry, Memory, SYNC_POINTS, SharedBlocks};

/// Everything a segment fill needs besides its position.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FillContext {
    pub(crate) geometry: Geometry,
    pub(crate) passes: u32,
    pub(crate) variant: Variant,
    pub(crate) version: Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    pub(crate) pass: u32,
    pub(crate) lane: u32,
    pub(crate) slice: u32,
}

/// Per-worker scratch: the G intermediate and the address generator state.
pub(crate) struct SegmentScratch {
    g: Block,
    address: Block,
    input: Block,
    tmp: Block,
}

impl SegmentScratch {
    pub(crate) fn new() -> Self {
        Self {
            g: Block::ZERO,
            address: Block::ZERO,
            input: Block::ZERO,
            tmp: Block::ZERO,
        }
    }

    /// address = G(0, G(0, input)) after bumping the counter word.
    fn next_addresses(&mut self) {
        self.input.0[6] = self.input.0[6].wrapping_add(1);
        Block::compress(&Block::ZERO, &self.input, &mut self.tmp, false, &mut self.g);
        Block::compress(&Block::ZERO, &self.tmp, &mut self.address, false, &mut self.g);
    }
}

impl FastZeroizable for SegmentScratch {
    fn fast_zeroize(&mut self) {
        self.g.fast_zeroize();
        self.address.fast_zeroize();
        self.input.fast_zeroize();
        self.tmp.fast_zeroize();
    }
}

impl ZeroizationProbe for SegmentScratch {
    fn is_zeroized(&self) -> bool {
        self.g.is_zeroized()
            && self.address.is_zeroized()
            && self.input.is_zeroized()
            && self.tmp.is_zeroized()
    }
}

impl Drop for SegmentScratch {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}

fn is_data_independent(variant: Variant, pos: Position) -> bool {
    match variant {
        Variant::Argon2d => false,
        Variant::Argon2i => true,
        Variant::Argon2id => pos.pass == 0 && pos.slice < SYNC_POINTS / 2,
    }
}

/// Index, within the reference lane, of the block referenced by block
/// `index` of the current segment.
pub(crate) fn reference_index(
    geometry: &Geometry,
    pos: Position,
    index: u32,
    pseudo_rand: u64,
    same_lane: bool,
) -> u32 {
    let segment_length = u64::from(geometry.segment_length);
    let lane_length = u64::from(geometry.lane_length);
    let index = u64::from(index);
    let slice = u64::from(pos.slice);
    let first_in_segment = u64::from(index == 0);

    // Blocks already finished and visible from this position.
    let area_size = if pos.pass == 0 {
        if pos.slice == 0 {
            index - 1
        } else if same_lane {
            slice * segment_length + index - 1
        } else {
            slice * segment_length - first_in_segment
        }
    } else if same_lane {
        lane_length - segment_length + index - 1
    } else {
        lane_length - segment_length - first_in_segment
    };

    // Non-uniform mapping favouring recent blocks.
    let j1 = pseudo_rand & 0xFFFF_FFFF;
    let x = (j1 * j1) >> 32;
    let y = (area_size * x) >> 32;
    let relative = area_size - 1 - y;

    let start = if pos.pass != 0 && pos.slice != SYNC_POINTS - 1 {
        (slice + 1) * segment_length
    } else {
        0
    };

    ((start + relative) % lane_length) as u32
}

/// Fills one lane's segment in increasing block order.
pub(crate) fn fill_segment(
    blocks: &SharedBlocks<'_>,
    ctx: &FillContext,
    pos: Position,
    scratch: &mut SegmentScratch,
) {
    let geometry = &ctx.geometry;
    let data_independent = is_data_independent(ctx.variant, pos);
    let with_xor = ctx.version == Version::V0x13 && pos.pass != 0;

    if data_independent {
        scratch.input = Block::ZERO;
        scratch.input.0[0] = u64::from(pos.pass);
        scratch.input.0[1] = u64::from(pos.lane);
        scratch.input.0[2] = u64::from(pos.slice);
        scratch.input.0[3] = u64::from(geometry.memory_blocks);
        scratch.input.0[4] = u64::from(ctx.passes);
        scratch.input.0[5] = u64::from(ctx.variant.type_id());
    }

    // Blocks 0 and 1 of each lane come from H0.
    let start = if pos.pass == 0 && pos.slice == 0 { 2 } else { 0 };

    if data_independent && start == 2 {
        scratch.next_addresses();
    }

    let lane_start = geometry.offset(pos.lane, 0);
    let lane_length = geometry.lane_length as usize;
    let segment_start = pos.slice * geometry.segment_length;

    for index in start..geometry.segment_length {
        let in_lane = (segment_start + index) as usize;
        let current = lane_start + in_lane;
        let prev = if in_lane == 0 {
            lane_start + lane_length - 1
        } else {
            current - 1
        };

        let pseudo_rand = if data_independent {
            let slot = index as usize % QWORDS_IN_BLOCK;
            if slot == 0 {
                scratch.next_addresses();
            }
            scratch.address.0[slot]
        } else {
            // SAFETY: `prev` is in this lane and written only by this worker.
            unsafe { blocks.first_word(prev) }
        };

        let ref_lane = if pos.pass == 0 && pos.slice == 0 {
            pos.lane
        } else {
            ((pseudo_rand >> 32) % u64::from(geometry.lanes)) as u32
        };

        let ref_index = reference_index(
            geometry,
            pos,
            index,
            pseudo_rand,
            ref_lane == pos.lane,
        );
        let reference = geometry.offset(ref_lane, ref_index);

        // SAFETY: `reference` lies outside every lane's current slice unless
        // it is in this lane before `current`; `prev` is in this lane. Only
        // this worker writes `current`.
        unsafe {
            blocks.compress(prev, reference, current, with_xor, &mut scratch.g);
        }
    }

    scratch.g.fast_zeroize();
}

/// Runs every pass and slice over `memory`.
///
/// Slice 0 of pass 0 runs lane by lane on the calling thread. Every other
/// slice spreads lanes over `threads` scoped workers; the scope join is the
/// barrier between slices.
pub(crate) fn fill_memory(
    memory: &mut Memory,
    ctx: &FillContext,
    threads: u32,
) -> Result<(), Error> {
    let lanes = ctx.geometry.lanes;
    let threads = threads.clamp(1, lanes);
    let blocks = memory.shared();
    let mut scratch = SegmentScratch::new();

    for pass in 0..ctx.passes {
        for slice in 0..SYNC_POINTS {
            if (pass == 0 && slice == 0) || threads == 1 {
                for lane in 0..lanes {
                    fill_segment(&blocks, ctx, Position { pass, lane, slice }, &mut scratch);
                }
                continue;
            }

            fill_slice_parallel(&blocks, ctx, pass, slice, threads)?;
        }
    }

    Ok(())
}

fn fill_slice_parallel(
    blocks: &SharedBlocks<'_>,
    ctx: &FillContext,
    pass: u32,
    slice: u32,
    threads: u32,
) -> Result<(), Error> {
    let lanes = ctx.geometry.lanes;

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(threads as usize);

        for worker in 0..threads {
            let spawned = thread::Builder::new().spawn_scoped(scope, move || {
                let mut scratch = SegmentScratch::new();
                let mut lane = worker;
                while lane < lanes {
                    fill_segment(blocks, ctx, Position { pass, lane, slice }, &mut scratch);
                    lane += threads;
                }
            });

            match spawned {
                Ok(handle) => handles.push(handle),
                // Already-spawned workers are joined when the scope ends.
                Err(_) => return Err(Error::Thread),
            }
        }

        for handle in handles {
            handle.join().map_err(|_| Error::Thread)?;
        }

        Ok(())
    })
}
