// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Pseudorandom key produced by HKDF-Extract.

use core::fmt;

use rampart_zero::{
    AssertZeroizeOnDrop, ZeroizationProbe, ZeroizeOnDropSentinel, assert_zeroize_on_drop,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::MAX_DIGEST_LEN;
use crate::error::HkdfError;

/// Pseudorandom key (RFC 5869 Section 2.2).
///
/// Fixed-capacity storage sized for the largest supported digest. After a
/// successful Extract, [`len`](Self::len) equals the digest's `HashLen`.
/// Wiped on drop; `Debug` output is redacted.
///
/// # Example
///
/// ```rust
/// use rampart_hkdf::{Digest, Prk, hkdf_extract};
///
/// let mut prk = Prk::new();
/// hkdf_extract(Digest::Sha384, b"secret", b"salt", &mut prk).expect("Failed to hkdf_extract(..)");
///
/// assert_eq!(prk.len(), Digest::Sha384.output_len());
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Prk {
    bytes: [u8; MAX_DIGEST_LEN],
    len: usize,
    __sentinel: ZeroizeOnDropSentinel,
}

impl Prk {
    /// Creates an empty PRK.
    pub fn new() -> Self {
        Self {
            bytes: [0u8; MAX_DIGEST_LEN],
            len: 0,
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }

    /// Copies an externally obtained PRK, e.g. one stored by an earlier Extract.
    ///
    /// # Errors
    ///
    /// Returns [`HkdfError::InvalidLength`] if `bytes` is longer than the
    /// largest supported digest output.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, HkdfError> {
        if bytes.len() > MAX_DIGEST_LEN {
            return Err(HkdfError::InvalidLength);
        }

        let mut prk = Self::new();
        prk.bytes[..bytes.len()].copy_from_slice(bytes);
        prk.len = bytes.len();

        Ok(prk)
    }

    /// The key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no key is held.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Full backing storage, for the keyed hash to finalize into.
    pub(crate) fn storage_mut(&mut self) -> &mut [u8; MAX_DIGEST_LEN] {
        &mut self.bytes
    }

    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(len <= MAX_DIGEST_LEN);
        self.len = len;
    }
}

impl Default for Prk {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Prk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prk([REDACTED; {}])", self.len)
    }
}

impl ZeroizationProbe for Prk {
    fn is_zeroized(&self) -> bool {
        self.bytes.is_zeroized() && self.len.is_zeroized()
    }
}

impl AssertZeroizeOnDrop for Prk {
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }

    fn assert_zeroize_on_drop(self) {
        assert_zeroize_on_drop(self);
    }
}
