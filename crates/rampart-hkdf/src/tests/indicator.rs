// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{
    Digest, Hkdf, HmacKeyedHash, IndicatorContext, IndicatorLock, KeyedHash, NoServiceIndicator,
    Prk, ServiceIndicator, ServiceOperation,
};

fn hkdf_op(digest: Digest) -> ServiceOperation {
    ServiceOperation::Hkdf {
        digest,
        salt_len: 0,
        info_len: 0,
    }
}

#[test]
fn test_approved_list() {
    for digest in Digest::ALL {
        assert!(ServiceOperation::Hmac(digest).is_approved(), "{}", digest);
    }

    for digest in [
        Digest::Sha1,
        Digest::Sha224,
        Digest::Sha256,
        Digest::Sha384,
        Digest::Sha512,
    ] {
        assert!(hkdf_op(digest).is_approved());
        assert!(ServiceOperation::HkdfExpand(digest).is_approved());
    }

    for digest in [Digest::Sha512_224, Digest::Sha512_256] {
        assert!(!hkdf_op(digest).is_approved());
        assert!(!ServiceOperation::HkdfExpand(digest).is_approved());
    }
}

#[test]
fn test_operation_display() {
    assert_eq!(hkdf_op(Digest::Sha256).to_string(), "HKDF-SHA-256");
    assert_eq!(
        ServiceOperation::HkdfExpand(Digest::Sha512).to_string(),
        "HKDF-Expand-SHA-512"
    );
    assert_eq!(ServiceOperation::Hmac(Digest::Sha384).digest(), Digest::Sha384);
}

#[test]
fn test_lock_nesting() {
    let indicator = IndicatorContext::new();

    {
        let _outer = IndicatorLock::acquire(&indicator);
        {
            let _inner = IndicatorLock::acquire(&indicator);
            assert_eq!(indicator.lock_depth(), 2);

            assert!(indicator.verify_service(ServiceOperation::Hmac(Digest::Sha256)));
        }
        assert_eq!(indicator.lock_depth(), 1);

        assert!(indicator.verify_service(hkdf_op(Digest::Sha256)));
    }

    assert_eq!(indicator.lock_depth(), 0);
    assert_eq!(indicator.approved_count(), 0);

    assert!(indicator.verify_service(hkdf_op(Digest::Sha256)));
    assert_eq!(indicator.approved_count(), 1);
}

#[test]
fn test_unapproved_not_recorded() {
    let indicator = IndicatorContext::new();

    assert!(!indicator.verify_service(hkdf_op(Digest::Sha512_256)));
    assert_eq!(indicator.approved_count(), 0);
}

#[test]
fn test_no_service_indicator() {
    let _lock = IndicatorLock::acquire(&NoServiceIndicator);

    assert!(NoServiceIndicator.verify_service(hkdf_op(Digest::Sha256)));
    assert!(!NoServiceIndicator.verify_service(hkdf_op(Digest::Sha512_224)));
}

#[test]
fn test_hmac_standalone_is_recorded() {
    let indicator = IndicatorContext::new();
    let mut hmac = HmacKeyedHash::new(&indicator);
    let mut out = [0u8; 32];

    hmac.init(Digest::Sha512_256, b"key").expect("Failed to init(..)");
    hmac.update(b"data").expect("Failed to update(..)");
    hmac.finalize_into(&mut out).expect("Failed to finalize_into(..)");

    assert_eq!(indicator.approved_count(), 1);
}

#[test]
fn test_derive_records_exactly_once() {
    let indicator = IndicatorContext::new();
    let mut hkdf = Hkdf::new(Digest::Sha256, &indicator);
    let mut okm = [0u8; 100];

    let (result, approved) =
        indicator.observe(|| hkdf.derive(b"secret", b"salt", b"info", &mut okm));

    assert!(result.is_ok());
    assert!(approved);
    // Five HMAC computations ran, none of them recorded
    assert_eq!(indicator.approved_count(), 1);
    assert_eq!(indicator.lock_depth(), 0);
}

#[test]
fn test_expand_records_exactly_once() {
    let indicator = IndicatorContext::new();
    let mut hkdf = Hkdf::new(Digest::Sha384, &indicator);
    let mut okm = [0u8; 200];

    hkdf.expand(&[0x11u8; 48], b"info", &mut okm)
        .expect("Failed to expand(..)");

    assert_eq!(indicator.approved_count(), 1);
    assert_eq!(indicator.lock_depth(), 0);
}

#[test]
fn test_extract_records_nothing() {
    let indicator = IndicatorContext::new();
    let mut hkdf = Hkdf::new(Digest::Sha256, &indicator);
    let mut prk = Prk::new();

    let (result, approved) = indicator.observe(|| hkdf.extract(b"secret", b"salt", &mut prk));

    assert!(result.is_ok());
    assert!(!approved);
    assert_eq!(indicator.lock_depth(), 0);
}

#[test]
fn test_unapproved_digest_records_nothing() {
    let indicator = IndicatorContext::new();

    for digest in [Digest::Sha512_224, Digest::Sha512_256] {
        let mut hkdf = Hkdf::new(digest, &indicator);
        let mut okm = [0u8; 64];

        hkdf.derive(b"secret", b"salt", b"info", &mut okm)
            .expect("Failed to derive(..)");
        hkdf.expand(&vec![0x11u8; digest.output_len()], b"info", &mut okm)
            .expect("Failed to expand(..)");
    }

    assert_eq!(indicator.approved_count(), 0);
    assert_eq!(indicator.lock_depth(), 0);
}

#[test]
fn test_invalid_length_records_nothing() {
    let indicator = IndicatorContext::new();
    let mut hkdf = Hkdf::new(Digest::Sha256, &indicator);
    let mut okm = vec![0u8; Digest::Sha256.max_expand_len() + 1];

    assert!(hkdf.derive(b"secret", b"salt", b"info", &mut okm).is_err());
    assert!(hkdf.expand(&[0x11u8; 32], b"info", &mut okm).is_err());

    assert_eq!(indicator.approved_count(), 0);
    assert_eq!(indicator.lock_depth(), 0);
}

#[test]
fn test_caller_lock_suppresses_derive() {
    let indicator = IndicatorContext::new();
    let mut hkdf = Hkdf::new(Digest::Sha256, &indicator);
    let mut okm = [0u8; 32];

    {
        let _lock = IndicatorLock::acquire(&indicator);
        hkdf.derive(b"secret", b"salt", b"info", &mut okm)
            .expect("Failed to derive(..)");
    }

    assert_eq!(indicator.approved_count(), 0);
}

#[test]
fn test_derive_reports_salt_and_info_lengths() {
    let indicator = IndicatorContext::new();
    let mut hkdf = Hkdf::new(Digest::Sha384, &indicator);
    let mut okm = [0u8; 48];

    hkdf.derive(b"secret", &[0x5au8; 17], b"context", &mut okm)
        .expect("Failed to derive(..)");

    assert_eq!(
        indicator.last_reported(),
        Some(ServiceOperation::Hkdf {
            digest: Digest::Sha384,
            salt_len: 17,
            info_len: 7,
        })
    );
}

#[test]
fn test_last_reported_ignores_suppressed_operations() {
    let indicator = IndicatorContext::new();
    let mut hkdf = Hkdf::new(Digest::Sha1, &indicator);
    let mut prk = Prk::new();

    hkdf.extract(b"secret", b"salt", &mut prk)
        .expect("Failed to extract(..)");
    // Inner HMAC ran under the lock
    assert_eq!(indicator.last_reported(), None);

    let mut okm = [0u8; 40];
    hkdf.expand(prk.as_bytes(), b"", &mut okm)
        .expect("Failed to expand(..)");

    assert_eq!(
        indicator.last_reported(),
        Some(ServiceOperation::HkdfExpand(Digest::Sha1))
    );
    assert_eq!(indicator.approved_count(), 1);
}

#[test]
fn test_unapproved_operation_still_reported() {
    let indicator = IndicatorContext::new();
    let mut okm = [0u8; 32];

    Hkdf::new(Digest::Sha512_256, &indicator)
        .derive(b"secret", b"", b"info", &mut okm)
        .expect("Failed to derive(..)");

    assert_eq!(
        indicator.last_reported(),
        Some(ServiceOperation::Hkdf {
            digest: Digest::Sha512_256,
            salt_len: 0,
            info_len: 4,
        })
    );
    assert_eq!(indicator.approved_count(), 0);
}
