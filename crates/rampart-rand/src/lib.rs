// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart-rand
//!
//! Entropy for salt generation.
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`EntropySource`]: seam for alternative or mocked sources
//! - [`generate_salt`]: fills a fresh buffer of the requested length
//!
//! ```rust
//! use rampart_rand::{EntropySource, SystemEntropySource, generate_salt};
//!
//! let source = SystemEntropySource {};
//! let salt = generate_salt(&source, 32).expect("Failed to generate salt");
//! assert_eq!(salt.len(), 32);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod salt;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use salt::generate_salt;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
