// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Argon2 password hashing that cleans up after itself.</em></p>
//!
//! ---
//!
//! Rampart implements Argon2d, Argon2i and Argon2id (RFC 9106, versions
//! 0x10 and 0x13), the `$argon2id$v=19$...` string encoding and a
//! constant-time verification path. Working memory, BLAKE2b state and every
//! intermediate block are wiped on every exit path.
//!
//! # Features
//!
//! - 🔐 **All three variants**: data-dependent, data-independent and hybrid
//! - ⚡ **Parallel lanes**: segments filled on scoped worker threads
//! - 🧹 **Automatic zeroization**: memory is wiped when it goes out of scope
//! - ⏱️ **Constant-time verification**: no early exit on the first differing byte
//! - 🧰 **Builders**: [`Hasher`] and [`Verifier`] with password and secret key clearing
//!
//! # Quick Start
//!
//! ```rust
//! use rampart::config::{Params, Variant, Version};
//!
//! let params = Params {
//!     variant: Variant::Argon2id,
//!     version: Version::V0x13,
//!     iterations: 1,
//!     memory_size: 32,
//!     lanes: 1,
//!     threads: 1,
//!     hash_len: 32,
//! };
//!
//! // Random 32-byte salt
//! let (encoded, _raw) = rampart::hash(&params, b"password", None, None, None)?;
//!
//! assert!(rampart::verify(&encoded, b"password", None, None)?);
//! assert!(!rampart::verify(&encoded, b"passw0rd", None, None)?);
//! # Ok::<(), rampart::Error>(())
//! ```
//!
//! # Builders
//!
//! ```rust
//! use rampart::{Hasher, Verifier};
//!
//! let mut password = b"P@ssw0rd".to_vec();
//!
//! let mut hasher = Hasher::fast_but_insecure();
//! let encoded = hasher
//!     .configure_password_clearing(true)
//!     .with_password(&mut password)
//!     .hash()?;
//!
//! // Cleared in place
//! drop(hasher);
//! assert!(password.iter().all(|b| *b == 0));
//!
//! let mut verifier = Verifier::default();
//! let is_valid = verifier
//!     .with_hash(&encoded)
//!     .with_password("P@ssw0rd")
//!     .verify()?;
//!
//! assert!(is_valid);
//! # Ok::<(), rampart::Error>(())
//! ```
//!
//! # Memory size
//!
//! The free functions accept any non-zero memory size and align it up to a
//! multiple of `4 * lanes` blocks (at least `8 * lanes`). The [`Hasher`]
//! builder is stricter: the memory size must be a power of two and at least
//! `8 * lanes`. Encoded strings always carry the requested value.
//!
//! # Logging
//!
//! Instance geometry and verification outcomes are emitted as `tracing`
//! debug events. Nothing is printed unless the application installs a
//! subscriber. Events never carry passwords, keys, salts or hashes.
//!
//! # License
//!
//! GPL-3.0-only

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod argon2;
mod block;
mod encoding;
mod error;
mod fill;
mod hasher;
mod instance;
mod memory;
mod validation;
mod verifier;

pub mod config;
pub mod input;
pub mod output;

pub use rampart_rand as rand;

pub use argon2::{hash, hash_raw};
pub use config::{MemoryPolicy, Params, Variant, Version};
pub use encoding::{decode, encoded_length};
pub use error::{DecodeError, Error};
pub use hasher::Hasher;
pub use output::HashRaw;
pub use validation::{MAX_LANES, MAX_LEN, MIN_HASH_LEN, MIN_SALT_LEN, validate, validate_params};
pub use verifier::{Verifier, verify};
