// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core traits for systematic zeroization.

/// Trait for verifying that a value has been zeroized.
///
/// # Example
///
/// ```rust
/// use rampart_zero::{FastZeroizable, ZeroizationProbe};
///
/// let mut value: u32 = 42;
/// assert!(!value.is_zeroized());
///
/// value.fast_zeroize();
/// assert!(value.is_zeroized());
/// ```
pub trait ZeroizationProbe {
    /// Returns `true` if every byte of the value is 0.
    fn is_zeroized(&self) -> bool;
}

/// Metadata about the zeroization strategy for a type.
///
/// Not dyn-compatible (associated constant). Use [`FastZeroizable`] for
/// trait objects.
pub trait ZeroizeMetadata {
    /// Whether this type can be bulk-zeroized with memset.
    ///
    /// - `true`: all-zeros is a valid bit pattern (primitives)
    /// - `false`: owns pointers or heap data and needs per-element wipes
    const CAN_BE_BULK_ZEROIZED: bool;
}

/// Trait for types that can be zeroized at runtime.
///
/// Dyn-compatible, so it works behind `&mut dyn FastZeroizable`.
pub trait FastZeroizable {
    /// Overwrites the value with zeros in place.
    fn fast_zeroize(&mut self);
}

/// Combined trait for types with both zeroization metadata and runtime zeroization.
///
/// Blanket-implemented; implement [`ZeroizeMetadata`] and [`FastZeroizable`]
/// instead.
pub trait FastZeroize: ZeroizeMetadata + FastZeroizable {}

impl<T: ZeroizeMetadata + FastZeroizable> FastZeroize for T {}
