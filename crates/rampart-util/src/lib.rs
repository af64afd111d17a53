// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Memory utilities for zeroization, verification and timing-safe comparison.
//!
//! Every zeroizing helper here pairs a bulk write with a volatile read so the
//! optimizer cannot drop the write as dead.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod support;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;

use alloc::vec::Vec;

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise.
///
/// Differences are accumulated as a running OR of XORs over the whole
/// length and reduced to a boolean once at the end, so the number of byte
/// operations and branches does not depend on where (or whether) the inputs
/// differ. Only the lengths, which are public, short-circuit.
///
/// # Example
///
/// ```
/// use rampart_util::constant_time_eq;
///
/// let a = [1, 2, 3, 4];
/// let b = [1, 2, 3, 4];
/// let c = [1, 2, 3, 5];
///
/// assert!(constant_time_eq(&a, &b));
/// assert!(!constant_time_eq(&a, &c));
/// ```
#[inline(never)]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut acc = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        acc = core::hint::black_box(acc | (x ^ y));
    }

    core::hint::black_box(acc) == 0
}

/// `true` when every byte of `slice` is zero.
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Writes zero into one primitive through a volatile store.
///
/// `T` must accept the all-zero bit pattern (integers, `bool`, floats,
/// `char`).
///
/// ```
/// use rampart_util::zeroize_primitive;
///
/// let mut lanes = 4u32;
/// zeroize_primitive(&mut lanes);
/// assert_eq!(lanes, 0);
/// ```
#[inline(always)]
pub fn zeroize_primitive<T>(val: &mut T) {
    // SAFETY: callers only pass primitives, for which the all-zero bit
    // pattern is a valid value.
    unsafe {
        core::ptr::write_volatile(val, core::mem::zeroed());
    }
}

/// memset followed by a volatile read of the first byte, so the store is
/// observable and cannot be elided.
///
/// # Safety
///
/// `ptr` must be valid for writes of `len` bytes and the zero pattern must
/// be acceptable for whatever lives there.
#[inline(always)]
unsafe fn wipe_raw(ptr: *mut u8, len: usize) {
    if len == 0 {
        return;
    }

    // SAFETY: guaranteed by the caller.
    unsafe {
        core::ptr::write_bytes(ptr, 0, len);
        core::ptr::read_volatile(ptr);
    }
}

/// Bulk-zeroes `slice` as raw bytes.
///
/// `T` must accept the all-zero bit pattern.
///
/// ```
/// use rampart_util::fast_zeroize_slice;
///
/// let mut block = [0x6a09e667f3bcc908u64; 128];
/// fast_zeroize_slice(&mut block);
/// assert!(block.iter().all(|&w| w == 0));
/// ```
#[inline(always)]
pub fn fast_zeroize_slice<T>(slice: &mut [T]) {
    let len = core::mem::size_of_val(slice);
    // SAFETY: the pointer covers exactly the bytes owned by `slice`.
    unsafe { wipe_raw(slice.as_mut_ptr().cast::<u8>(), len) }
}

/// Bulk-zeroes the whole allocation of `vec`, spare capacity included.
#[inline(always)]
pub fn fast_zeroize_vec<T>(vec: &mut Vec<T>) {
    let len = vec.capacity() * core::mem::size_of::<T>();
    // SAFETY: the allocation is valid for `capacity` elements; zero bytes in
    // spare capacity create no values of `T`.
    unsafe { wipe_raw(vec.as_mut_ptr().cast::<u8>(), len) }
}

/// Zeroes `[len, capacity)` of `vec` and leaves live elements alone.
///
/// Used before a reallocation so the old buffer carries no stale tail.
#[inline(always)]
pub fn zeroize_spare_capacity<T>(vec: &mut Vec<T>) {
    let spare = (vec.capacity() - vec.len()) * core::mem::size_of::<T>();
    // SAFETY: the tail belongs to the allocation and holds no live values.
    unsafe { wipe_raw(vec.as_mut_ptr().add(vec.len()).cast::<u8>(), spare) }
}

/// `true` when the bytes of `vec` past `len` are all zero.
///
/// Reads the tail as bytes, never as `T`.
#[inline(never)]
pub fn is_spare_capacity_zeroized<T>(vec: &Vec<T>) -> bool {
    let start = vec.len() * core::mem::size_of::<T>();
    let end = vec.capacity() * core::mem::size_of::<T>();

    // SAFETY: bytes in [start, end) are inside the allocation.
    let tail =
        unsafe { core::slice::from_raw_parts(vec.as_ptr().cast::<u8>().add(start), end - start) };

    is_slice_zeroized(tail)
}
