// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::str::FromStr;

use crate::error::{DecodeError, Error};

/// Argon2 algorithm version.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Version {
    /// Legacy 1.0: later passes overwrite blocks.
    V0x10,
    /// 1.3: later passes XOR into the existing blocks.
    #[default]
    V0x13,
}

impl Version {
    /// Numeric value (16 or 19) as it appears in H0 and after `v=`.
    pub fn as_u32(&self) -> u32 {
        match self {
            Version::V0x10 => 0x10,
            Version::V0x13 => 0x13,
        }
    }

    /// Hex form, `"0x10"` or `"0x13"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Version::V0x10 => "0x10",
            Version::V0x13 => "0x13",
        }
    }

    /// Maps 16 and 19 to their versions.
    ///
    /// # Errors
    ///
    /// `DecodeError::UnsupportedVersion` for any other value.
    pub fn from_u32(value: u32) -> Result<Self, Error> {
        match value {
            0x10 => Ok(Version::V0x10),
            0x13 => Ok(Version::V0x13),
            other => Err(DecodeError::UnsupportedVersion(other).into()),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = Error;

    /// Accepts the hex (`0x13`) and decimal (`19`) spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0x10" | "16" => Ok(Version::V0x10),
            "0x13" | "19" => Ok(Version::V0x13),
            _ => Err(DecodeError::InvalidNumber("v").into()),
        }
    }
}
