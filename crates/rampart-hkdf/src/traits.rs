// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::digest::Digest;
use crate::error::KeyedHashError;
use crate::indicator::ServiceOperation;

/// Streaming keyed hash (HMAC) consumed by HKDF.
///
/// One value is reused for every keyed-hash computation of an HKDF call:
/// Extract inits it once, Expand re-inits it with the same PRK for every block.
/// A successful `finalize_into` ends the computation; the next use must `init` again.
pub trait KeyedHash {
    /// Starts a new computation over `digest`, keyed with `key`.
    ///
    /// Any computation in progress is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`KeyedHashError::InvalidKey`] if the key cannot be used.
    fn init(&mut self, digest: Digest, key: &[u8]) -> Result<(), KeyedHashError>;

    /// Absorbs `data` into the running computation.
    ///
    /// # Errors
    ///
    /// Returns [`KeyedHashError::NotInitialized`] if no computation is in progress.
    fn update(&mut self, data: &[u8]) -> Result<(), KeyedHashError>;

    /// Writes the tag into `out[..HashLen]` and returns `HashLen`.
    ///
    /// # Errors
    ///
    /// - [`KeyedHashError::NotInitialized`] if no computation is in progress
    /// - [`KeyedHashError::OutputTooShort`] if `out` is shorter than `HashLen`
    fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, KeyedHashError>;
}

/// Compliance-indicator capability.
///
/// Services report approved operations through [`verify_service`](Self::verify_service).
/// While the state is locked (lock depth > 0) approvals are not recorded, so a
/// composite service can suppress the signals of the services it calls internally
/// and report once for itself.
///
/// Lock and unlock must be paired; use [`IndicatorLock`](crate::IndicatorLock)
/// instead of calling them directly.
pub trait ServiceIndicator {
    /// Enters a suppression scope. Nestable.
    fn lock_state(&self);

    /// Leaves the innermost suppression scope.
    fn unlock_state(&self);

    /// Reports `operation` as completed and returns whether it is approved.
    ///
    /// The approval is recorded only when no suppression scope is open.
    fn verify_service(&self, operation: ServiceOperation) -> bool;
}
