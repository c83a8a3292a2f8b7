// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// A hardware random number generator producing one 64-bit word per call.
///
/// Stateless from the caller's view. Implementations report the instruction's
/// own success flag and perform no validation of the value.
pub trait HardwareRng {
    /// Draws one word. The value is meaningful only when the flag is `true`.
    fn rdrand64(&self) -> (u64, bool);
}

impl<R> HardwareRng for &R
where
    R: HardwareRng + ?Sized,
{
    fn rdrand64(&self) -> (u64, bool) {
        (**self).rdrand64()
    }
}

/// Trait for entropy sources that can fill arbitrary buffers.
pub trait EntropySource {
    /// Fills the destination buffer with random bytes.
    ///
    /// # Errors
    ///
    /// Returns an [`EntropyError`] if the underlying source fails. The
    /// contents of `dest` are then unspecified.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}
