// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Instance orchestration: H0, lane initialization, fill, finalization.

use rampart_blake2b::{Blake2bState, blake2b_long};
use rampart_zero::ZeroizingGuard;
use tracing::debug;

use crate::block::{BLOCK_SIZE, Block};
use crate::config::Params;
use crate::error::Error;
use crate::fill::{FillContext, fill_memory};
use crate::memory::{Geometry, Memory};

/// Length of H0 plus the two LE32 words appended when seeding a lane.
const SEED_LEN: usize = 72;

/// Borrowed byte inputs for one computation. Validated by the caller.
#[derive(Clone, Copy)]
pub(crate) struct Inputs<'a> {
    pub(crate) password: &'a [u8],
    pub(crate) salt: &'a [u8],
    pub(crate) secret_key: &'a [u8],
    pub(crate) additional_data: &'a [u8],
}

/// Absorbs `LE32(len) ‖ bytes`.
fn update_with_len(state: &mut Blake2bState, bytes: &[u8]) {
    state.update(&(bytes.len() as u32).to_le_bytes());
    state.update(bytes);
}

/// H0 into the first 64 bytes of `seed`.
fn initial_hash(
    params: &Params,
    inputs: &Inputs<'_>,
    seed: &mut [u8; SEED_LEN],
) -> Result<(), Error> {
    let mut state = Blake2bState::new(64)?;

    state.update(&params.lanes.to_le_bytes());
    state.update(&params.hash_len.to_le_bytes());
    state.update(&params.memory_size.to_le_bytes());
    state.update(&params.iterations.to_le_bytes());
    state.update(&params.version.as_u32().to_le_bytes());
    state.update(&params.variant.type_id().to_le_bytes());
    update_with_len(&mut state, inputs.password);
    update_with_len(&mut state, inputs.salt);
    update_with_len(&mut state, inputs.secret_key);
    update_with_len(&mut state, inputs.additional_data);

    state.finalize(&mut seed[..64])?;
    Ok(())
}

/// Runs Argon2 and writes `out.len()` bytes of tag into `out`.
///
/// Inputs and parameters must already be validated; `out.len()` must equal
/// `params.hash_len`. Working memory and every intermediate are wiped on
/// all exit paths.
pub(crate) fn hash_into(params: &Params, inputs: &Inputs<'_>, out: &mut [u8]) -> Result<(), Error> {
    if out.len() != params.hash_len as usize {
        return Err(Error::Bug("output buffer does not match hash_len"));
    }

    let geometry = Geometry::new(params.memory_size, params.lanes);
    let threads = params.threads.min(params.lanes);

    debug!(
        variant = %params.variant,
        version = %params.version,
        passes = params.iterations,
        lanes = geometry.lanes,
        threads,
        memory_blocks = geometry.memory_blocks,
        segment_length = geometry.segment_length,
        "Argon2 instance geometry"
    );

    let mut memory = Memory::try_new(geometry.memory_blocks as usize)?;
    debug_assert_eq!(memory.len(), geometry.offset(geometry.lanes, 0));

    let mut seed = ZeroizingGuard::new([0u8; SEED_LEN]);
    let mut block_bytes = ZeroizingGuard::new([0u8; BLOCK_SIZE]);

    initial_hash(params, inputs, &mut seed)?;

    for lane in 0..geometry.lanes {
        seed[68..72].copy_from_slice(&lane.to_le_bytes());
        for index in 0..2u32 {
            seed[64..68].copy_from_slice(&index.to_le_bytes());
            blake2b_long(&[&seed[..]], &mut block_bytes[..])?;
            memory
                .block_mut(geometry.offset(lane, index))
                .load(&block_bytes);
        }
    }

    let ctx = FillContext {
        geometry,
        passes: params.iterations,
        variant: params.variant,
        version: params.version,
    };
    fill_memory(&mut memory, &ctx, threads)?;

    // XOR of every lane's last block.
    let last_index = geometry.lane_length - 1;
    let mut last = ZeroizingGuard::new(Block::ZERO);
    for lane in 0..geometry.lanes {
        let block: &Block = memory.block(geometry.offset(lane, last_index));
        *last ^= block;
    }

    last.store(&mut block_bytes);
    blake2b_long(&[&block_bytes[..]], out)?;

    Ok(())
}
