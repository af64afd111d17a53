// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::container::Container;
use crate::error::Error;
use crate::validation;

/// Password to hash or verify.
///
/// Owned passwords are wiped on drop. Mutably borrowed passwords are wiped
/// in place after hashing when password clearing is on; immutably borrowed
/// ones cannot be cleared and make such a run fail up front.
///
/// ```rust
/// use rampart::input::Password;
///
/// let mut bytes = b"P@ssw0rd".to_vec();
/// let password = Password::from(&mut bytes[..]);
/// assert!(password.is_mutable());
/// assert!(!password.is_owned());
/// ```
#[derive(Debug)]
pub struct Password<'a> {
    pub(crate) inner: Container<'a>,
}

impl<'a> From<&'a [u8]> for Password<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self {
            inner: Container::Borrowed(bytes),
        }
    }
}

impl<'a> From<&'a str> for Password<'a> {
    fn from(s: &'a str) -> Self {
        Self {
            inner: Container::Borrowed(s.as_bytes()),
        }
    }
}

impl<'a> From<&'a String> for Password<'a> {
    fn from(s: &'a String) -> Self {
        Self {
            inner: Container::Borrowed(s.as_bytes()),
        }
    }
}

impl<'a> From<&'a Vec<u8>> for Password<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self {
            inner: Container::Borrowed(bytes),
        }
    }
}

impl<'a> From<&'a mut [u8]> for Password<'a> {
    fn from(bytes: &'a mut [u8]) -> Self {
        Self {
            inner: Container::BorrowedMut(bytes),
        }
    }
}

impl<'a> From<&'a mut Vec<u8>> for Password<'a> {
    fn from(bytes: &'a mut Vec<u8>) -> Self {
        Self {
            inner: Container::BorrowedMut(bytes.as_mut_slice()),
        }
    }
}

impl From<Vec<u8>> for Password<'static> {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            inner: Container::Owned(bytes),
        }
    }
}

impl From<String> for Password<'static> {
    fn from(s: String) -> Self {
        Self {
            inner: Container::Owned(s.into_bytes()),
        }
    }
}

#[allow(missing_docs)]
impl Password<'_> {
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
    /// `false` only for immutable borrows.
    pub fn is_mutable(&self) -> bool {
        self.inner.is_mutable()
    }
    pub fn is_owned(&self) -> bool {
        self.inner.is_owned()
    }
    /// Owned copy, detached from any borrow.
    pub fn to_owned(&self) -> Password<'static> {
        Password {
            inner: self.inner.to_owned(),
        }
    }
}

impl Password<'_> {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        validation::validate_password(self.as_bytes())
    }

    pub(crate) fn clear(&mut self) {
        self.inner.clear();
    }
}
