// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RAII guard for mutable borrows that wipes the borrowed value on drop.

use core::fmt;
use core::ops::{Deref, DerefMut};
use core::sync::atomic::{Ordering, compiler_fence};

use zeroize::Zeroize;

use super::assert::assert_zeroize_on_drop;
use super::traits::AssertZeroizeOnDrop;
use super::zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;

/// Scoped wipe over a mutable borrow.
///
/// The borrowed value stays usable through `Deref`/`DerefMut` while the guard
/// lives and is zeroized when the guard goes out of scope, including early
/// returns through `?`.
///
/// ```rust
/// use rampart_zero::{ZeroizationProbe, ZeroizingMutGuard};
///
/// fn stage(buf: &mut [u8; 16]) -> Result<(), ()> {
///     let mut guard = ZeroizingMutGuard::from(buf);
///     guard.fill(0x5c);
///     Err(())
/// }
///
/// let mut scratch = [0u8; 16];
/// assert!(stage(&mut scratch).is_err());
/// assert!(scratch.is_zeroized());
/// ```
pub struct ZeroizingMutGuard<'a, T>
where
    T: Zeroize + ?Sized,
{
    inner: &'a mut T,
    __sentinel: ZeroizeOnDropSentinel,
}

impl<'a, T> ZeroizingMutGuard<'a, T>
where
    T: Zeroize + ?Sized,
{
    /// Wraps `inner`; it will be zeroized when the guard drops.
    pub fn from(inner: &'a mut T) -> Self {
        Self {
            inner,
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }
}

impl<T> fmt::Debug for ZeroizingMutGuard<'_, T>
where
    T: Zeroize + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ZeroizingMutGuard]")
    }
}

impl<T> Deref for ZeroizingMutGuard<'_, T>
where
    T: Zeroize + ?Sized,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.inner
    }
}

impl<T> DerefMut for ZeroizingMutGuard<'_, T>
where
    T: Zeroize + ?Sized,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.inner
    }
}

impl<T> Zeroize for ZeroizingMutGuard<'_, T>
where
    T: Zeroize + ?Sized,
{
    fn zeroize(&mut self) {
        self.inner.zeroize();
        compiler_fence(Ordering::SeqCst);
        self.__sentinel.zeroize();
    }
}

impl<T> Drop for ZeroizingMutGuard<'_, T>
where
    T: Zeroize + ?Sized,
{
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<T> AssertZeroizeOnDrop for ZeroizingMutGuard<'_, T>
where
    T: Zeroize + ?Sized,
{
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }

    fn assert_zeroize_on_drop(self) {
        assert_zeroize_on_drop(self);
    }
}
