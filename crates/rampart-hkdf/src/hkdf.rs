// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF per RFC 5869

use rampart_zero::{AssertZeroizeOnDrop, ZeroizeOnDropSentinel, assert_zeroize_on_drop};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{MAX_DIGEST_LEN, MAX_EXPAND_BLOCKS};
use crate::digest::Digest;
use crate::error::{HkdfError, KeyedHashError};
use crate::hmac::HmacKeyedHash;
use crate::indicator::{IndicatorLock, NoServiceIndicator, ServiceOperation};
use crate::prk::Prk;
use crate::traits::{KeyedHash, ServiceIndicator};

/// Expand scratch: T(i-1) while computing T(i).
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct ExpandState {
    previous: [u8; MAX_DIGEST_LEN],
    __sentinel: ZeroizeOnDropSentinel,
}

impl ExpandState {
    pub(crate) fn new() -> Self {
        Self {
            previous: [0u8; MAX_DIGEST_LEN],
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }
}

impl AssertZeroizeOnDrop for ExpandState {
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }

    fn assert_zeroize_on_drop(self) {
        assert_zeroize_on_drop(self);
    }
}

/// HKDF bound to a digest, a keyed hash and an indicator context.
///
/// Every operation runs inside an [`IndicatorLock`], so the keyed hash's own
/// approvals are suppressed. [`expand`](Self::expand) and
/// [`derive`](Self::derive) report once, after success, as
/// [`ServiceOperation::HkdfExpand`] and [`ServiceOperation::Hkdf`], the
/// latter carrying the salt and info lengths.
///
/// # Example
///
/// ```rust
/// use rampart_hkdf::{Digest, Hkdf, NoServiceIndicator};
///
/// let mut okm = [0u8; 32];
/// Hkdf::new(Digest::Sha256, &NoServiceIndicator)
///     .derive(b"shared secret", b"salt", b"app.session_key.v1", &mut okm)
///     .expect("Failed to derive(..)");
/// ```
pub struct Hkdf<'a, I, K = HmacKeyedHash<'a, I>>
where
    I: ServiceIndicator + ?Sized,
    K: KeyedHash,
{
    digest: Digest,
    mac: K,
    indicator: &'a I,
}

impl<'a, I> Hkdf<'a, I, HmacKeyedHash<'a, I>>
where
    I: ServiceIndicator + ?Sized,
{
    /// HKDF over HMAC-`digest`, reporting to `indicator`.
    pub fn new(digest: Digest, indicator: &'a I) -> Self {
        Self::with_keyed_hash(digest, HmacKeyedHash::new(indicator), indicator)
    }
}

impl<'a, I, K> Hkdf<'a, I, K>
where
    I: ServiceIndicator + ?Sized,
    K: KeyedHash,
{
    /// HKDF over a caller-supplied keyed hash.
    pub fn with_keyed_hash(digest: Digest, mac: K, indicator: &'a I) -> Self {
        Self {
            digest,
            mac,
            indicator,
        }
    }

    /// Selected digest.
    pub fn digest(&self) -> Digest {
        self.digest
    }

    /// The keyed hash in use.
    pub fn keyed_hash(&self) -> &K {
        &self.mac
    }

    /// The keyed hash in use, mutably.
    pub fn keyed_hash_mut(&mut self) -> &mut K {
        &mut self.mac
    }

    /// HKDF-Extract per RFC 5869 Section 2.2: `PRK = HMAC-Hash(salt, secret)`.
    ///
    /// An empty salt behaves as `HashLen` zero bytes (HMAC pads short keys with zeros).
    /// On success `prk.len()` is `HashLen`; on failure `prk` is wiped.
    ///
    /// # Errors
    ///
    /// Returns [`HkdfError::PrimitiveFailure`] if the keyed hash fails.
    pub fn extract(&mut self, secret: &[u8], salt: &[u8], prk: &mut Prk) -> Result<(), HkdfError> {
        let _lock = IndicatorLock::acquire(self.indicator);

        let result = self
            .extract_into(secret, salt, prk)
            .inspect_err(|e| log::debug!("HKDF-Extract-{} failed: {}", self.digest, e))
            .map_err(HkdfError::from);

        if result.is_err() {
            prk.zeroize();
        }

        result
    }

    fn extract_into(
        &mut self,
        secret: &[u8],
        salt: &[u8],
        prk: &mut Prk,
    ) -> Result<(), KeyedHashError> {
        prk.zeroize();

        self.mac.init(self.digest, salt)?;
        self.mac.update(secret)?;
        let len = self.mac.finalize_into(prk.storage_mut())?;

        debug_assert_eq!(len, self.digest.output_len(), "PRK length must equal HashLen");
        prk.set_len(len);

        Ok(())
    }

    /// HKDF-Expand per RFC 5869 Section 2.3.
    ///
    /// Fills all of `okm`. `prk` must be exactly `HashLen` bytes, normally the
    /// output of [`extract`](Self::extract).
    ///
    /// ```text
    /// N = ceil(L / HashLen)
    /// T(0) = empty
    /// T(i) = HMAC-Hash(PRK, T(i-1) || info || i)    for i = 1..=N
    /// OKM  = first L bytes of T(1) || ... || T(N)
    /// ```
    ///
    /// # Errors
    ///
    /// - [`HkdfError::InvalidLength`] if `N > 255` or `L + HashLen` overflows
    /// - [`HkdfError::PrimitiveFailure`] if the keyed hash fails; `okm` must then be discarded
    pub fn expand(&mut self, prk: &[u8], info: &[u8], okm: &mut [u8]) -> Result<(), HkdfError> {
        let digest_len = self.digest.output_len();
        debug_assert_eq!(prk.len(), digest_len, "PRK length must equal HashLen");

        if okm.len().checked_add(digest_len).is_none()
            || okm.len().div_ceil(digest_len) > MAX_EXPAND_BLOCKS
        {
            log::debug!(
                "HKDF-Expand-{}: {} bytes requested, maximum is {}",
                self.digest,
                okm.len(),
                self.digest.max_expand_len()
            );
            return Err(HkdfError::InvalidLength);
        }

        {
            let _lock = IndicatorLock::acquire(self.indicator);
            self.expand_blocks(prk, info, okm)?;
        }

        self.indicator
            .verify_service(ServiceOperation::HkdfExpand(self.digest));

        Ok(())
    }

    fn expand_blocks(&mut self, prk: &[u8], info: &[u8], okm: &mut [u8]) -> Result<(), HkdfError> {
        let digest_len = self.digest.output_len();
        let mut state = ExpandState::new();

        for (i, chunk) in okm.chunks_mut(digest_len).enumerate() {
            // Bounded by MAX_EXPAND_BLOCKS, checked by the caller
            let counter = (i + 1) as u8;
            let previous = &mut state.previous[..digest_len];

            self.expand_block(prk, info, counter, previous)
                .inspect_err(|e| {
                    log::debug!("HKDF-Expand-{} block {} failed: {}", self.digest, counter, e)
                })?;

            chunk.copy_from_slice(&previous[..chunk.len()]);
        }

        Ok(())
    }

    /// `T(counter) = HMAC(prk, T(counter - 1) || info || counter)`, in place over `previous`.
    fn expand_block(
        &mut self,
        prk: &[u8],
        info: &[u8],
        counter: u8,
        previous: &mut [u8],
    ) -> Result<(), KeyedHashError> {
        self.mac.init(self.digest, prk)?;
        if counter != 1 {
            self.mac.update(previous)?;
        }
        self.mac.update(info)?;
        self.mac.update(&[counter])?;
        self.mac.finalize_into(previous)?;

        Ok(())
    }

    /// Full HKDF: Extract-then-Expand in a single suppression scope.
    ///
    /// Reports [`ServiceOperation::Hkdf`] once, after both phases succeed. The
    /// intermediate PRK never leaves this call and is wiped before it returns.
    ///
    /// # Errors
    ///
    /// Propagates the first failing phase's error; `okm` must then be discarded.
    pub fn derive(
        &mut self,
        secret: &[u8],
        salt: &[u8],
        info: &[u8],
        okm: &mut [u8],
    ) -> Result<(), HkdfError> {
        {
            let _lock = IndicatorLock::acquire(self.indicator);
            let mut prk = Prk::new();

            self.extract(secret, salt, &mut prk)?;
            self.expand(prk.as_bytes(), info, okm)?;
        }

        self.indicator.verify_service(ServiceOperation::Hkdf {
            digest: self.digest,
            salt_len: salt.len(),
            info_len: info.len(),
        });

        Ok(())
    }
}

/// HKDF (RFC 5869) over HMAC-`digest`: Extract-then-Expand into `okm`.
///
/// # Errors
///
/// - [`HkdfError::InvalidLength`] if `okm` is longer than `255 * HashLen`
/// - [`HkdfError::PrimitiveFailure`] if the keyed hash fails
///
/// # Example
///
/// ```rust
/// use rampart_hkdf::{Digest, hkdf};
///
/// let mut key = [0u8; 32];
/// hkdf(Digest::Sha256, b"input key material", b"salt", b"my_app.key.v1", &mut key)
///     .expect("Failed to hkdf(..)");
/// ```
pub fn hkdf(
    digest: Digest,
    secret: &[u8],
    salt: &[u8],
    info: &[u8],
    okm: &mut [u8],
) -> Result<(), HkdfError> {
    Hkdf::new(digest, &NoServiceIndicator).derive(secret, salt, info, okm)
}

/// HKDF-Extract over HMAC-`digest` into `prk`.
///
/// # Errors
///
/// Returns [`HkdfError::PrimitiveFailure`] if the keyed hash fails.
pub fn hkdf_extract(
    digest: Digest,
    secret: &[u8],
    salt: &[u8],
    prk: &mut Prk,
) -> Result<(), HkdfError> {
    Hkdf::new(digest, &NoServiceIndicator).extract(secret, salt, prk)
}

/// HKDF-Expand over HMAC-`digest` into `okm`.
///
/// # Errors
///
/// - [`HkdfError::InvalidLength`] if `okm` is longer than `255 * HashLen`
/// - [`HkdfError::PrimitiveFailure`] if the keyed hash fails
pub fn hkdf_expand(digest: Digest, prk: &[u8], info: &[u8], okm: &mut [u8]) -> Result<(), HkdfError> {
    Hkdf::new(digest, &NoServiceIndicator).expand(prk, info, okm)
}
