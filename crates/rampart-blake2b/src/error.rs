// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// BLAKE2b error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blake2bError {
    /// Digest length outside `1..=64`, or an output buffer that does not
    /// match the length the state was created with.
    #[error("invalid BLAKE2b output length: {0}")]
    InvalidOutputLength(usize),

    /// H′ output length is zero or does not fit in 32 bits.
    #[error("invalid H' output length: {0}")]
    InvalidLongOutputLength(usize),
}
