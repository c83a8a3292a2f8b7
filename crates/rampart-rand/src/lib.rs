// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_rand
//!
//! Entropy straight from the CPU's hardware random number generator.
//!
//! ## Core Types
//!
//! - [`HardwareEntropySource`]: draws 64-bit words from a [`HardwareRng`],
//!   rejecting stuck-at patterns (all zeros, all ones)
//! - [`Rdrand`]: the x86_64 `RDRAND` instruction, available after CPUID detection
//! - [`RetryPolicy`]: how many times a transient instruction failure is retried
//!
//! ## Traits
//!
//! - [`HardwareRng`]: a single raw draw, `(value, success)`
//! - [`EntropySource`]: fill an arbitrary buffer
//!
//! ## Example
//!
//! ```rust
//! use rampart_rand::{EntropySource, HardwareEntropySource};
//!
//! // Not every CPU has RDRAND
//! if let Ok(source) = HardwareEntropySource::new() {
//!     let mut seed = [0u8; 32];
//!     source.fill_multiple_of_8(&mut seed).expect("Failed to fill_multiple_of_8(..)");
//!
//!     let mut nonce = [0u8; 12];
//!     source.fill_bytes(&mut nonce).expect("Failed to fill_bytes(..)");
//! }
//! ```
//!
//! ## Platform Support
//!
//! - **x86_64**: `RDRAND`, detected with `cpufeatures`
//! - **Other**: detection fails, [`HardwareEntropySource::new`] returns
//!   [`EntropyError::HardwareUnavailable`]

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod hardware;
mod rdrand;
mod support;
mod traits;

pub use error::EntropyError;
pub use hardware::{HardwareEntropySource, RetryPolicy};
pub use rdrand::Rdrand;
pub use traits::{EntropySource, HardwareRng};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
