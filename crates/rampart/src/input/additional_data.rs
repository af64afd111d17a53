// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::Error;
use crate::validation;

/// Associated data (Argon2 "X") mixed into H0.
///
/// Not secret; it must be supplied again to verify.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdditionalData(Vec<u8>);

impl From<Vec<u8>> for AdditionalData {
    fn from(bytes: Vec<u8>) -> Self {
        AdditionalData(bytes)
    }
}

impl From<&[u8]> for AdditionalData {
    fn from(bytes: &[u8]) -> Self {
        AdditionalData(bytes.to_vec())
    }
}

impl From<&str> for AdditionalData {
    fn from(s: &str) -> Self {
        AdditionalData(s.as_bytes().to_vec())
    }
}

impl From<String> for AdditionalData {
    fn from(s: String) -> Self {
        AdditionalData(s.into_bytes())
    }
}

#[allow(missing_docs)]
impl AdditionalData {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AdditionalData {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        validation::validate_additional_data(self.as_bytes())
    }
}
