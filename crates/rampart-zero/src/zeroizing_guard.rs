// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RAII guard for owned values that auto-zeroizes on drop.

use alloc::boxed::Box;
use core::fmt;
use core::mem::{self, ManuallyDrop};
use core::ops::{Deref, DerefMut};
use core::ptr;
use core::sync::atomic::{Ordering, compiler_fence};

use crate::traits::{FastZeroizable, ZeroizationProbe};

/// RAII guard for owned values that automatically zeroizes on drop.
///
/// The value lives in a `Box` so moving the guard never leaves stack copies
/// of the secret behind.
///
/// ```rust
/// use rampart_zero::{ZeroizationProbe, ZeroizingGuard};
///
/// let mut seed = [7u8; 32];
/// let guard = ZeroizingGuard::from_mut(&mut seed);
///
/// assert_eq!(guard[0], 7);
/// assert!(seed.is_zeroized());
/// ```
pub struct ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    inner: Box<T>,
}

impl<T> fmt::Debug for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ZeroizingGuard]")
    }
}

impl<T> ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    /// Takes ownership of `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Box::new(value),
        }
    }

    /// Creates a guard by swapping the value out of `source` and zeroizing it.
    pub fn from_mut(source: &mut T) -> Self
    where
        T: Default,
    {
        let mut boxed = Box::new(T::default());
        mem::swap(&mut *boxed, source);
        source.fast_zeroize();

        Self { inner: boxed }
    }

    /// Creates a guard around `T::default()`.
    #[inline(always)]
    pub fn from_default() -> Self
    where
        T: Default,
    {
        Self::new(T::default())
    }

    /// Releases the value without zeroizing it.
    ///
    /// The caller becomes responsible for wiping it.
    pub fn into_inner(self) -> T {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so the box is read exactly once.
        let boxed = unsafe { ptr::read(&this.inner) };
        *boxed
    }
}

impl<T> Deref for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T> FastZeroizable for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    fn fast_zeroize(&mut self) {
        self.inner.fast_zeroize();
        compiler_fence(Ordering::SeqCst);
    }
}

impl<T> ZeroizationProbe for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    fn is_zeroized(&self) -> bool {
        self.inner.is_zeroized()
    }
}

impl<T> Drop for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}
