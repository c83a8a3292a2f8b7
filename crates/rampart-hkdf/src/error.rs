// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Keyed-hash (HMAC) failure reported by a [`KeyedHash`](crate::KeyedHash) implementation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyedHashError {
    /// The key was rejected during init
    #[error("keyed hash rejected the key")]
    InvalidKey,

    /// update/finalize called without a preceding init
    #[error("keyed hash used before init")]
    NotInitialized,

    /// Finalize destination is shorter than the digest output
    #[error("keyed hash output buffer shorter than digest output")]
    OutputTooShort,

    /// Implementation-specific internal fault
    #[error("keyed hash internal fault")]
    Internal,
}

/// HKDF error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HkdfError {
    /// A length is out of range: the requested output exceeds 255 * HashLen,
    /// L + HashLen overflows usize, or a supplied PRK is longer than the
    /// largest digest output
    #[error("length out of range (output above 255 * HashLen or PRK above largest digest output)")]
    InvalidLength,

    /// The underlying keyed hash failed at init, update or finalize
    #[error("keyed hash failure: {0}")]
    PrimitiveFailure(#[from] KeyedHashError),
}
