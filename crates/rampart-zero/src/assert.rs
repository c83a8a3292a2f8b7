// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::traits::AssertZeroizeOnDrop;

/// Asserts that a value zeroizes itself when dropped.
///
/// 1. Clones the value's [`ZeroizeOnDropSentinel`](crate::ZeroizeOnDropSentinel)
/// 2. Resets the clone to "not zeroized"
/// 3. Drops the value
/// 4. Asserts the clone now reads "zeroized"
///
/// # Panics
///
/// Panics if the value's `zeroize()` did not run during drop.
pub fn assert_zeroize_on_drop<T: AssertZeroizeOnDrop>(value: T) {
    let mut sentinel = value.clone_sentinel();

    sentinel.reset();

    assert!(!sentinel.is_zeroized());
    drop(value);
    assert!(sentinel.is_zeroized());
}
