// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hashing parameters, builder configuration and their defaults.

pub mod defaults;

mod hasher_config;
mod params;
mod variant;
mod verifier_config;
mod version;

pub use hasher_config::HasherConfig;
pub use params::{MemoryPolicy, Params};
pub use variant::Variant;
pub use verifier_config::VerifierConfig;
pub use version::Version;
