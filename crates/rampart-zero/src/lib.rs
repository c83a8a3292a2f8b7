// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_zero
//!
//! Scoped wiping of sensitive buffers for the Rampart primitives.
//!
//! Built on top of [`zeroize`], this crate adds the pieces the primitives need
//! to prove their intermediates are wiped on every exit path:
//!
//! - [`ZeroizingMutGuard`]: borrows a buffer and wipes it when the scope ends
//! - [`ZeroizeOnDropSentinel`]: shared flag flipped by `zeroize()`, embedded in
//!   types that must wipe themselves on drop
//! - [`AssertZeroizeOnDrop`]: test hook that drops a value and checks its sentinel
//! - [`ZeroizationProbe`]: runtime check that a value is all-zero
//!
//! ## Example
//!
//! ```rust
//! use rampart_zero::{ZeroizationProbe, ZeroizingMutGuard};
//!
//! let mut block = [0xAAu8; 32];
//!
//! {
//!     let mut guard = ZeroizingMutGuard::from(&mut block);
//!     guard[0] = 0x42;
//! } // wiped here
//!
//! assert!(block.is_zeroized());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod assert;
mod traits;
mod zeroize_on_drop_sentinel;
mod zeroizing_mut_guard;

pub use assert::assert_zeroize_on_drop;
pub use traits::{AssertZeroizeOnDrop, ZeroizationProbe};
pub use zeroize::{Zeroize, ZeroizeOnDrop};
pub use zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;
pub use zeroizing_mut_guard::ZeroizingMutGuard;
