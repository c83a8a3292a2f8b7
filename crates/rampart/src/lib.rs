// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Key derivation and hardware entropy that clean up after themselves.</em></p>
//!
//! ---
//!
//! Rampart bundles an RFC 5869 HKDF over HMAC-SHA2 with an `RDRAND` entropy
//! source. Intermediate keys are wiped on every path and FIPS-style service
//! approval is reported through an explicit indicator context.
//!
//! # Crates
//!
//! - [`hkdf`]: HKDF-Extract, HKDF-Expand and the composite, over SHA-1, SHA-224/256/384/512
//!   and SHA-512/224, SHA-512/256
//! - [`rand`]: hardware entropy with stuck-bit detection
//! - [`zero`]: drop sentinels and scoped wipe guards
//!
//! # Quick Start
//!
//! ```rust
//! use rampart::hkdf::{Digest, Hkdf, IndicatorContext};
//! use rampart::rand::{EntropySource, HardwareEntropySource};
//!
//! let mut salt = [0u8; 32];
//! if let Ok(source) = HardwareEntropySource::new() {
//!     source.fill_bytes(&mut salt).expect("Failed to fill_bytes(..)");
//! }
//!
//! let indicator = IndicatorContext::new();
//! let mut key = [0u8; 32];
//!
//! let (result, approved) = indicator.observe(|| {
//!     Hkdf::new(Digest::Sha256, &indicator).derive(b"shared secret", &salt, b"session", &mut key)
//! });
//!
//! result.expect("Failed to derive(..)");
//! assert!(approved);
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
mod tests;

pub use rampart_hkdf as hkdf;
pub use rampart_rand as rand;
pub use rampart_zero as zero;
