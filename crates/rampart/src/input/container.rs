// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use rampart_zero::FastZeroizable;

/// Storage for secret inputs.
///
/// `Borrowed` can never be cleared, `BorrowedMut` is cleared in place when
/// the owning builder has clearing on, `Owned` is always wiped on drop.
pub(crate) enum Container<'a> {
    Borrowed(&'a [u8]),
    BorrowedMut(&'a mut [u8]),
    Owned(Vec<u8>),
}

impl Container<'_> {
    pub(crate) fn as_bytes(&self) -> &[u8] {
        match self {
            Container::Borrowed(bytes) => bytes,
            Container::BorrowedMut(bytes) => bytes,
            Container::Owned(bytes) => bytes,
        }
    }

    pub(crate) fn is_mutable(&self) -> bool {
        !matches!(self, Container::Borrowed(_))
    }

    pub(crate) fn is_owned(&self) -> bool {
        matches!(self, Container::Owned(_))
    }

    pub(crate) fn to_owned(&self) -> Container<'static> {
        Container::Owned(self.as_bytes().to_vec())
    }

    /// Zeroes the bytes in place if they are writable.
    pub(crate) fn clear(&mut self) {
        match self {
            Container::Borrowed(_) => {}
            Container::BorrowedMut(bytes) => bytes.fast_zeroize(),
            Container::Owned(bytes) => bytes.fast_zeroize(),
        }
    }
}

impl fmt::Debug for Container<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Container::Borrowed(_) => "Borrowed",
            Container::BorrowedMut(_) => "BorrowedMut",
            Container::Owned(_) => "Owned",
        };
        write!(f, "{kind}([REDACTED; {}])", self.as_bytes().len())
    }
}

impl Drop for Container<'_> {
    fn drop(&mut self) {
        if let Container::Owned(bytes) = self {
            bytes.fast_zeroize();
        }
    }
}
