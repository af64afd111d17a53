// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rampart_rand::{EntropySource, SystemEntropySource, generate_salt};

use super::container::Container;
use crate::error::{DecodeError, Error};
use crate::validation;

/// Secret key (Argon2 "pepper") mixed into H0.
///
/// Same ownership rules as [`Password`](super::Password).
#[derive(Debug)]
pub struct SecretKey<'a> {
    pub(crate) inner: Container<'a>,
}

impl<'a> From<&'a [u8]> for SecretKey<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self {
            inner: Container::Borrowed(bytes),
        }
    }
}

impl<'a> From<&'a str> for SecretKey<'a> {
    fn from(s: &'a str) -> Self {
        Self {
            inner: Container::Borrowed(s.as_bytes()),
        }
    }
}

impl<'a> From<&'a Vec<u8>> for SecretKey<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self {
            inner: Container::Borrowed(bytes),
        }
    }
}

impl<'a> From<&'a mut [u8]> for SecretKey<'a> {
    fn from(bytes: &'a mut [u8]) -> Self {
        Self {
            inner: Container::BorrowedMut(bytes),
        }
    }
}

impl<'a> From<&'a mut Vec<u8>> for SecretKey<'a> {
    fn from(bytes: &'a mut Vec<u8>) -> Self {
        Self {
            inner: Container::BorrowedMut(bytes.as_mut_slice()),
        }
    }
}

impl From<Vec<u8>> for SecretKey<'static> {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            inner: Container::Owned(bytes),
        }
    }
}

impl From<String> for SecretKey<'static> {
    fn from(s: String) -> Self {
        Self {
            inner: Container::Owned(s.into_bytes()),
        }
    }
}

impl SecretKey<'static> {
    /// Decodes a standard base64 (padded) key.
    ///
    /// # Errors
    ///
    /// `DecodeError::InvalidBase64` if `encoded` is not valid base64.
    pub fn from_base64_encoded(encoded: &str) -> Result<Self, Error> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|_| DecodeError::InvalidBase64("secret key"))?;
        Ok(bytes.into())
    }

    /// `len` random bytes from the operating system.
    pub fn random(len: usize) -> Result<Self, Error> {
        Self::random_with(&SystemEntropySource {}, len)
    }

    /// `len` random bytes from `source`.
    pub fn random_with(source: &dyn EntropySource, len: usize) -> Result<Self, Error> {
        Ok(generate_salt(source, len)?.into())
    }
}

#[allow(missing_docs)]
impl SecretKey<'_> {
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
    /// Standard base64 with padding.
    pub fn to_base64_encoded(&self) -> String {
        STANDARD.encode(self.as_bytes())
    }
    /// Owned copy, detached from any borrow.
    pub fn to_owned(&self) -> SecretKey<'static> {
        SecretKey {
            inner: self.inner.to_owned(),
        }
    }
}

impl SecretKey<'_> {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        validation::validate_secret_key(self.as_bytes())
    }

    pub(crate) fn clear(&mut self) {
        self.inner.clear();
    }
}
