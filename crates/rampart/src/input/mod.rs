// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte inputs accepted by [`Hasher`](crate::Hasher) and [`Verifier`](crate::Verifier).

mod additional_data;
mod container;
mod password;
mod salt;
mod secret_key;

pub use additional_data::AdditionalData;
pub use password::Password;
pub use salt::Salt;
pub use secret_key::SecretKey;
