// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF over HMAC-SHA-1/SHA-2 with scoped wiping of intermediates
//!
//! Implementation per RFC 5869 (HKDF). The keyed hash is consumed through the
//! [`KeyedHash`] trait; [`HmacKeyedHash`] is the shipped adapter over RustCrypto
//! `hmac` + `sha2`. The PRK and every per-block intermediate are zeroized on
//! every exit path.
//!
//! Compliance reporting goes through an explicit [`ServiceIndicator`] handle.
//! Each phase runs inside an [`IndicatorLock`] so the keyed hash's own
//! approvals are suppressed and the HKDF operation reports once for itself.
//!
//! References:
//! - RFC 5869: HMAC-based Extract-and-Expand Key Derivation Function (HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc5869>
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//!
//! ## Example
//!
//! ```rust
//! use rampart_hkdf::{Digest, Prk, hkdf_expand, hkdf_extract};
//!
//! let mut prk = Prk::new();
//! hkdf_extract(Digest::Sha256, b"shared secret", b"salt", &mut prk)
//!     .expect("Failed to hkdf_extract(..)");
//!
//! let mut enc_key = [0u8; 32];
//! let mut mac_key = [0u8; 32];
//! hkdf_expand(Digest::Sha256, prk.as_bytes(), b"enc", &mut enc_key).expect("Failed to hkdf_expand(..)");
//! hkdf_expand(Digest::Sha256, prk.as_bytes(), b"mac", &mut mac_key).expect("Failed to hkdf_expand(..)");
//!
//! assert_ne!(enc_key, mac_key);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod digest;
mod error;
mod hkdf;
mod hmac;
mod indicator;
mod prk;
mod support;
mod traits;

pub use consts::{MAX_DIGEST_LEN, MAX_EXPAND_BLOCKS};
pub use digest::Digest;
pub use error::{HkdfError, KeyedHashError};
pub use hkdf::{Hkdf, hkdf, hkdf_expand, hkdf_extract};
pub use hmac::HmacKeyedHash;
pub use indicator::{IndicatorContext, IndicatorLock, NoServiceIndicator, ServiceOperation};
pub use prk::Prk;
pub use traits::{KeyedHash, ServiceIndicator};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
