// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Zeroization primitives used by every rampart crate that touches secrets.
//!
//! - [`FastZeroizable`]: dyn-compatible in-place zeroization
//! - [`ZeroizeMetadata`]: compile-time hint selecting memset or per-element wipes
//! - [`ZeroizationProbe`]: runtime check used by tests and assertions
//! - [`ZeroizingGuard`]: boxed owner that wipes its value on drop

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod collections;
mod primitives;
mod traits;
mod zeroizing_guard;

pub use traits::{FastZeroizable, FastZeroize, ZeroizationProbe, ZeroizeMetadata};
pub use zeroizing_guard::ZeroizingGuard;
