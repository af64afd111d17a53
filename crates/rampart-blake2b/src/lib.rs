// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! BLAKE2b and the Argon2 variable-length hash H′ with secure memory handling.
//!
//! Implementation per RFC 7693 (BLAKE2) and RFC 9106 Section 3.3 (H′).
//! Only the unkeyed mode is provided. All working state is zeroized when
//! a hash finishes and again on drop.
//!
//! References:
//! - RFC 7693: The BLAKE2 Cryptographic Hash and Message Authentication Code
//!   <https://datatracker.ietf.org/doc/html/rfc7693>
//! - RFC 9106: Argon2 Memory-Hard Function for Password Hashing
//!   <https://datatracker.ietf.org/doc/html/rfc9106>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod hprime;
mod state;

pub use consts::{BLOCK_LEN, MAX_OUTPUT_LEN};
pub use error::Blake2bError;
pub use hprime::blake2b_long;
pub use state::Blake2bState;

/// One-shot BLAKE2b of `input` into `out`.
///
/// The digest length is `out.len()`, which must be in `1..=64`.
///
/// # Example
///
/// ```rust
/// let mut digest = [0u8; 64];
/// rampart_blake2b::blake2b(b"abc", &mut digest).expect("Failed to blake2b(..)");
/// assert_eq!(digest[0], 0xba);
/// ```
pub fn blake2b(input: &[u8], out: &mut [u8]) -> Result<(), Blake2bError> {
    let mut state = Blake2bState::new(out.len())?;
    state.update(input);
    state.finalize(out)
}
