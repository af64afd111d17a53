// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait implementations for slices, arrays, `Vec<T>`, `String` and `Option<T>`.

use alloc::string::String;
use alloc::vec::Vec;

use core::sync::atomic::{Ordering, compiler_fence};

use crate::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

/// Zeroizes a slice with memset when `fast`, otherwise element by element.
#[inline(always)]
pub(crate) fn slice_fast_zeroize<T: FastZeroizable + ZeroizeMetadata>(slice: &mut [T], fast: bool) {
    if fast {
        rampart_util::fast_zeroize_slice(slice);
        compiler_fence(Ordering::SeqCst);
    } else {
        for elem in slice.iter_mut() {
            elem.fast_zeroize();
            compiler_fence(Ordering::SeqCst);
        }
    }
}

/// Zeroizes a `Vec` including spare capacity.
#[inline(always)]
pub(crate) fn vec_fast_zeroize<T: FastZeroizable + ZeroizeMetadata>(vec: &mut Vec<T>, fast: bool) {
    slice_fast_zeroize(vec.as_mut_slice(), fast);
    rampart_util::zeroize_spare_capacity(vec);
    compiler_fence(Ordering::SeqCst);
}

// [T]

impl<T: ZeroizeMetadata> ZeroizeMetadata for [T] {
    const CAN_BE_BULK_ZEROIZED: bool = T::CAN_BE_BULK_ZEROIZED;
}

impl<T: FastZeroizable + ZeroizeMetadata> FastZeroizable for [T] {
    fn fast_zeroize(&mut self) {
        slice_fast_zeroize(self, T::CAN_BE_BULK_ZEROIZED);
    }
}

impl<T: ZeroizationProbe> ZeroizationProbe for [T] {
    fn is_zeroized(&self) -> bool {
        self.iter().all(ZeroizationProbe::is_zeroized)
    }
}

// [T; N]

impl<T: ZeroizeMetadata, const N: usize> ZeroizeMetadata for [T; N] {
    const CAN_BE_BULK_ZEROIZED: bool = T::CAN_BE_BULK_ZEROIZED;
}

impl<T: FastZeroizable + ZeroizeMetadata, const N: usize> FastZeroizable for [T; N] {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        slice_fast_zeroize(self, T::CAN_BE_BULK_ZEROIZED);
    }
}

impl<T: ZeroizationProbe, const N: usize> ZeroizationProbe for [T; N] {
    fn is_zeroized(&self) -> bool {
        self.iter().all(ZeroizationProbe::is_zeroized)
    }
}

// Vec<T>

impl<T: ZeroizeMetadata> ZeroizeMetadata for Vec<T> {
    // ptr/len/capacity must survive, so never memset the Vec itself.
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: FastZeroizable + ZeroizeMetadata> FastZeroizable for Vec<T> {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        vec_fast_zeroize(self, T::CAN_BE_BULK_ZEROIZED);
    }
}

impl<T: ZeroizationProbe> ZeroizationProbe for Vec<T> {
    /// Returns true if all elements AND spare capacity are zeroed.
    ///
    /// Only meaningful after `fast_zeroize()`: fresh spare capacity may hold
    /// arbitrary bytes.
    fn is_zeroized(&self) -> bool {
        self.iter().all(ZeroizationProbe::is_zeroized)
            && rampart_util::is_spare_capacity_zeroized(self)
    }
}

// String

impl ZeroizeMetadata for String {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl FastZeroizable for String {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        // SAFETY: all-zero bytes are valid UTF-8 (NUL characters).
        unsafe {
            rampart_util::fast_zeroize_vec(self.as_mut_vec());
        }
        compiler_fence(Ordering::SeqCst);
    }
}

impl ZeroizationProbe for String {
    fn is_zeroized(&self) -> bool {
        rampart_util::is_slice_zeroized(self.as_bytes())
    }
}

// Option<T>

impl<T> ZeroizeMetadata for Option<T> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: FastZeroizable> FastZeroizable for Option<T> {
    /// Wipes the payload in place and leaves `None` behind.
    fn fast_zeroize(&mut self) {
        if let Some(inner) = self.as_mut() {
            inner.fast_zeroize();
        }
        *self = None;
    }
}

impl<T: ZeroizationProbe> ZeroizationProbe for Option<T> {
    fn is_zeroized(&self) -> bool {
        self.as_ref().is_none_or(ZeroizationProbe::is_zeroized)
    }
}
