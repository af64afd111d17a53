// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_zero::{FastZeroizable, ZeroizationProbe};

use crate::block::{BLOCK_SIZE, Block, QWORDS_IN_BLOCK};

fn compress(x: &Block, y: &Block) -> Block {
    let mut out = Block::ZERO;
    let mut scratch = Block::ZERO;
    Block::compress(x, y, &mut out, false, &mut scratch);
    out
}

#[test]
fn test_block_layout() {
    assert_eq!(core::mem::size_of::<Block>(), BLOCK_SIZE);
    assert_eq!(core::mem::align_of::<Block>(), 64);
}

#[test]
fn test_compress_equal_inputs_is_zero() {
    let mut x = Block::ZERO;
    for (i, word) in x.0.iter_mut().enumerate() {
        *word = (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    }

    let out = compress(&x, &x);
    assert!(out.is_zeroized());
}

#[test]
fn test_compress_single_bit() {
    let mut y = Block::ZERO;
    y.0[0] = 1;

    let out = compress(&Block::ZERO, &y);

    assert_eq!(out.0[0], 0x13f7_22ff_1cf4_c6f4);
    assert_eq!(out.0[1], 0x05ce_51cf_32da_98b2);
    assert_eq!(out.0[127], 0x4b12_eb43_09e1_bc7a);
}

#[test]
fn test_compress_patterned_inputs() {
    let mut x = Block::ZERO;
    let mut y = Block::ZERO;
    for i in 0..QWORDS_IN_BLOCK {
        x.0[i] = i as u64;
        y.0[i] = (i as u64).wrapping_mul(0x0101_0101_0101_0101);
    }

    let out = compress(&x, &y);

    assert_eq!(out.0[0], 0xbcc0_f548_5d81_f4ba);
    assert_eq!(out.0[64], 0xd04e_691f_900a_04ca);
    assert_eq!(out.0[127], 0x74d7_11bc_19fd_1c09);
}

#[test]
fn test_compress_with_xor_accumulates() {
    let mut y = Block::ZERO;
    y.0[0] = 1;
    let fresh = compress(&Block::ZERO, &y);

    let mut previous = Block::ZERO;
    previous.0[3] = 0xDEAD_BEEF;

    let mut out = previous;
    let mut scratch = Block::ZERO;
    Block::compress(&Block::ZERO, &y, &mut out, true, &mut scratch);

    let mut expected = fresh;
    expected ^= &previous;
    assert_eq!(out.0, expected.0);
}

#[test]
fn test_load_store_little_endian() {
    let mut bytes = [0u8; BLOCK_SIZE];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = i as u8;
    }

    let mut block = Block::ZERO;
    block.load(&bytes);
    assert_eq!(block.0[0], 0x0706_0504_0302_0100);

    let mut stored = [0u8; BLOCK_SIZE];
    block.store(&mut stored);
    assert_eq!(stored, bytes);
}

#[test]
fn test_store_overwrites_every_byte() {
    let mut block = Block::ZERO;
    block.0[0] = 0x0102_0304_0506_0708;
    block.0[QWORDS_IN_BLOCK - 1] = u64::MAX;

    let mut stored = [0xCCu8; BLOCK_SIZE];
    block.store(&mut stored);

    assert_eq!(stored[..8], [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
    assert!(stored[8..BLOCK_SIZE - 8].iter().all(|&b| b == 0));
    assert_eq!(stored[BLOCK_SIZE - 8..], [0xFF; 8]);
}

#[test]
fn test_block_fast_zeroize() {
    let mut block = Block([0xAA; QWORDS_IN_BLOCK]);
    assert!(!block.is_zeroized());

    block.fast_zeroize();
    assert!(block.is_zeroized());
}
