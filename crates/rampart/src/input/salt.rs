// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_rand::{EntropySource, generate_salt};

use crate::config::defaults::DEFAULT_SALT_LEN;
use crate::error::Error;
use crate::validation;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Kind {
    Deterministic(Vec<u8>),
    Random(Vec<u8>),
}

/// Salt for a [`Hasher`](crate::Hasher).
///
/// A random salt is regenerated by every hash; a deterministic one is used
/// as given. The default is a random 32-byte salt.
///
/// ```rust
/// use rampart::input::Salt;
///
/// let salt = Salt::from("somesalt");
/// assert!(!salt.is_random());
/// assert_eq!(salt.as_bytes(), b"somesalt");
///
/// let salt = Salt::random(16);
/// assert!(salt.is_random());
/// assert_eq!(salt.len(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salt(Kind);

impl Default for Salt {
    fn default() -> Self {
        Salt::random(DEFAULT_SALT_LEN)
    }
}

impl From<Vec<u8>> for Salt {
    fn from(bytes: Vec<u8>) -> Self {
        Salt(Kind::Deterministic(bytes))
    }
}

impl From<&[u8]> for Salt {
    fn from(bytes: &[u8]) -> Self {
        Salt(Kind::Deterministic(bytes.to_vec()))
    }
}

impl From<&str> for Salt {
    fn from(s: &str) -> Self {
        Salt(Kind::Deterministic(s.as_bytes().to_vec()))
    }
}

impl From<String> for Salt {
    fn from(s: String) -> Self {
        Salt(Kind::Deterministic(s.into_bytes()))
    }
}

impl Salt {
    /// A random salt of `len` bytes. The bytes are drawn at hash time.
    pub fn random(len: u32) -> Self {
        Salt(Kind::Random(vec![0u8; len as usize]))
    }

    #[allow(missing_docs)]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.0 {
            Kind::Deterministic(bytes) | Kind::Random(bytes) => bytes,
        }
    }

    #[allow(missing_docs)]
    pub fn is_random(&self) -> bool {
        matches!(self.0, Kind::Random(_))
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Draws fresh bytes for a random salt; no-op for a deterministic one.
    pub fn update(&mut self, source: &dyn EntropySource) -> Result<(), Error> {
        if let Kind::Random(bytes) = &mut self.0 {
            *bytes = generate_salt(source, bytes.len())?;
        }
        Ok(())
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        validation::validate_salt_len(self.len())
    }
}
