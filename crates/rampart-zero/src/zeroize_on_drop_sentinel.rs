// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared flag recording whether a value was zeroized.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use zeroize::Zeroize;

/// Flag embedded in sensitive types to observe their zeroization from outside.
///
/// Clones share the same flag, so a test can keep a clone, drop the owner and
/// then check whether the owner's `zeroize()` ran. The sentinel has no `Drop`
/// of its own: only an explicit `zeroize()` flips it.
///
/// # Example
///
/// ```rust
/// use rampart_zero::{Zeroize, ZeroizeOnDropSentinel};
///
/// let mut sentinel = ZeroizeOnDropSentinel::default();
/// let observer = sentinel.clone();
///
/// assert!(!observer.is_zeroized());
/// sentinel.zeroize();
/// assert!(observer.is_zeroized());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZeroizeOnDropSentinel(Arc<AtomicBool>);

impl ZeroizeOnDropSentinel {
    /// Marks the sentinel as not zeroized.
    pub fn reset(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }

    /// Returns `true` once `zeroize()` was called on any clone.
    pub fn is_zeroized(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl PartialEq for ZeroizeOnDropSentinel {
    fn eq(&self, other: &Self) -> bool {
        self.is_zeroized() == other.is_zeroized()
    }
}

impl Eq for ZeroizeOnDropSentinel {}

impl Zeroize for ZeroizeOnDropSentinel {
    fn zeroize(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}
