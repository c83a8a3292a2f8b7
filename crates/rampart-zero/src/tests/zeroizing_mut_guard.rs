// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{AssertZeroizeOnDrop, ZeroizationProbe, ZeroizingMutGuard};

#[test]
fn test_guard_zeroizes_on_drop() {
    let mut value = [0x42u8; 48];
    let guard = ZeroizingMutGuard::from(&mut value);
    guard.assert_zeroize_on_drop();

    assert!(value.is_zeroized());
}

#[test]
fn test_guard_zeroizes_unsized_slice() {
    let mut value = [0x42u8; 48];

    {
        let mut guard = ZeroizingMutGuard::from(&mut value[8..24]);
        guard[0] = 0x01;
    }

    assert!(value[8..24].is_zeroized());
    assert_eq!(value[..8], [0x42u8; 8]);
    assert_eq!(value[24..], [0x42u8; 24]);
}

#[test]
fn test_guard_deref_mut() {
    let mut value = 7u64;

    {
        let mut guard = ZeroizingMutGuard::from(&mut value);
        *guard += 1;
        assert_eq!(*guard, 8);
    }

    assert!(value.is_zeroized());
}

#[test]
fn test_guard_zeroizes_on_early_return() {
    fn stage(buf: &mut [u8; 32], fail: bool) -> Result<(), ()> {
        let mut guard = ZeroizingMutGuard::from(buf);
        guard.fill(0xFF);
        if fail {
            return Err(());
        }
        guard.fill(0xEE);
        Ok(())
    }

    let mut buf = [0u8; 32];
    assert!(stage(&mut buf, true).is_err());
    assert!(buf.is_zeroized());

    assert!(stage(&mut buf, false).is_ok());
    assert!(buf.is_zeroized());
}

#[test]
fn test_guard_debug_is_redacted() {
    let mut value = [0x13u8; 4];
    let guard = ZeroizingMutGuard::from(&mut value);
    assert_eq!(format!("{:?}", guard), "[REDACTED ZeroizingMutGuard]");
}
