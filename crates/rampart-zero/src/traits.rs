// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;

/// Runtime check that a value holds no sensitive bytes anymore.
///
/// # Example
///
/// ```rust
/// use rampart_zero::{Zeroize, ZeroizationProbe};
///
/// let mut word = 0xDEAD_BEEFu64;
/// assert!(!word.is_zeroized());
///
/// word.zeroize();
/// assert!(word.is_zeroized());
/// ```
pub trait ZeroizationProbe {
    /// Returns `true` if every byte of the value is zero.
    fn is_zeroized(&self) -> bool;
}

/// Types carrying a [`ZeroizeOnDropSentinel`] that can prove they wipe on drop.
pub trait AssertZeroizeOnDrop {
    /// Clones the internal sentinel. The clone shares state with the original.
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel;

    /// Drops `self` and asserts that `zeroize()` ran during the drop.
    ///
    /// # Panics
    ///
    /// Panics if the sentinel was not flipped by the drop.
    fn assert_zeroize_on_drop(self);
}

impl ZeroizationProbe for [u8] {
    fn is_zeroized(&self) -> bool {
        self.iter().all(|b| *b == 0)
    }
}

impl<const N: usize> ZeroizationProbe for [u8; N] {
    fn is_zeroized(&self) -> bool {
        self.as_slice().is_zeroized()
    }
}

impl ZeroizationProbe for u64 {
    fn is_zeroized(&self) -> bool {
        *self == 0
    }
}

impl ZeroizationProbe for usize {
    fn is_zeroized(&self) -> bool {
        *self == 0
    }
}
