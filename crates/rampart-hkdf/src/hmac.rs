// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC (RFC 2104) keyed-hash adapter over RustCrypto `hmac` + `sha2`.

use core::fmt;

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use zeroize::Zeroize;

use crate::digest::Digest;
use crate::error::KeyedHashError;
use crate::indicator::ServiceOperation;
use crate::traits::{KeyedHash, ServiceIndicator};

enum HmacState {
    Sha1(Hmac<Sha1>),
    Sha224(Hmac<Sha224>),
    Sha256(Hmac<Sha256>),
    Sha384(Hmac<Sha384>),
    Sha512(Hmac<Sha512>),
    Sha512_224(Hmac<Sha512_224>),
    Sha512_256(Hmac<Sha512_256>),
}

fn keyed<M: Mac + KeyInit>(key: &[u8]) -> Result<M, KeyedHashError> {
    <M as KeyInit>::new_from_slice(key).map_err(|_| KeyedHashError::InvalidKey)
}

macro_rules! with_mac {
    ($state:expr, $mac:ident => $body:expr) => {
        match $state {
            HmacState::Sha1($mac) => $body,
            HmacState::Sha224($mac) => $body,
            HmacState::Sha256($mac) => $body,
            HmacState::Sha384($mac) => $body,
            HmacState::Sha512($mac) => $body,
            HmacState::Sha512_224($mac) => $body,
            HmacState::Sha512_256($mac) => $body,
        }
    };
}

impl HmacState {
    fn new(digest: Digest, key: &[u8]) -> Result<Self, KeyedHashError> {
        let state = match digest {
            Digest::Sha1 => Self::Sha1(keyed(key)?),
            Digest::Sha224 => Self::Sha224(keyed(key)?),
            Digest::Sha256 => Self::Sha256(keyed(key)?),
            Digest::Sha384 => Self::Sha384(keyed(key)?),
            Digest::Sha512 => Self::Sha512(keyed(key)?),
            Digest::Sha512_224 => Self::Sha512_224(keyed(key)?),
            Digest::Sha512_256 => Self::Sha512_256(keyed(key)?),
        };

        Ok(state)
    }

    fn update(&mut self, data: &[u8]) {
        with_mac!(self, mac => mac.update(data))
    }

    /// Consumes the state, writes the tag to `out` and wipes the temporary tag.
    fn finalize_into(self, out: &mut [u8]) -> usize {
        with_mac!(self, mac => {
            let mut tag = mac.finalize().into_bytes();
            let len = tag.len();
            out[..len].copy_from_slice(&tag);
            tag.as_mut_slice().zeroize();
            len
        })
    }
}

/// HMAC over the SHA-2 family, reporting each completed MAC to an indicator.
///
/// Inside HKDF the reports are suppressed by the surrounding
/// [`IndicatorLock`](crate::IndicatorLock); used on its own, every finalized
/// MAC is reported as [`ServiceOperation::Hmac`].
///
/// # Example
///
/// ```rust
/// use rampart_hkdf::{Digest, HmacKeyedHash, KeyedHash, NoServiceIndicator};
///
/// let mut mac = HmacKeyedHash::new(&NoServiceIndicator);
/// let mut tag = [0u8; 64];
///
/// mac.init(Digest::Sha256, b"key").expect("Failed to init(..)");
/// mac.update(b"message").expect("Failed to update(..)");
/// let len = mac.finalize_into(&mut tag).expect("Failed to finalize_into(..)");
///
/// assert_eq!(len, 32);
/// ```
pub struct HmacKeyedHash<'a, I>
where
    I: ServiceIndicator + ?Sized,
{
    indicator: &'a I,
    digest: Digest,
    state: Option<HmacState>,
}

impl<'a, I> HmacKeyedHash<'a, I>
where
    I: ServiceIndicator + ?Sized,
{
    /// Creates an uninitialized adapter reporting to `indicator`.
    pub fn new(indicator: &'a I) -> Self {
        Self {
            indicator,
            digest: Digest::Sha256,
            state: None,
        }
    }
}

impl<I> fmt::Debug for HmacKeyedHash<'_, I>
where
    I: ServiceIndicator + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacKeyedHash")
            .field("digest", &self.digest)
            .field("initialized", &self.state.is_some())
            .finish()
    }
}

impl<I> KeyedHash for HmacKeyedHash<'_, I>
where
    I: ServiceIndicator + ?Sized,
{
    fn init(&mut self, digest: Digest, key: &[u8]) -> Result<(), KeyedHashError> {
        self.state = None;
        self.state = Some(HmacState::new(digest, key)?);
        self.digest = digest;

        Ok(())
    }

    fn update(&mut self, data: &[u8]) -> Result<(), KeyedHashError> {
        let state = self.state.as_mut().ok_or(KeyedHashError::NotInitialized)?;
        state.update(data);

        Ok(())
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, KeyedHashError> {
        if self.state.is_none() {
            return Err(KeyedHashError::NotInitialized);
        }

        if out.len() < self.digest.output_len() {
            return Err(KeyedHashError::OutputTooShort);
        }

        let state = self.state.take().ok_or(KeyedHashError::NotInitialized)?;
        let len = state.finalize_into(out);

        self.indicator
            .verify_service(ServiceOperation::Hmac(self.digest));

        Ok(len)
    }
}
