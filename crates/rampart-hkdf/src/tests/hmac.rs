// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ::hmac::{Hmac, Mac};
use rampart_test_utils::hex_to_bytes;
use sha2::Sha384;

use crate::{Digest, HmacKeyedHash, KeyedHash, KeyedHashError, MAX_DIGEST_LEN, NoServiceIndicator};

fn mac(digest: Digest, key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut hmac = HmacKeyedHash::new(&NoServiceIndicator);
    hmac.init(digest, key).expect("Failed to init(..)");
    hmac.update(data).expect("Failed to update(..)");

    let mut out = [0u8; MAX_DIGEST_LEN];
    let len = hmac.finalize_into(&mut out).expect("Failed to finalize_into(..)");

    out[..len].to_vec()
}

/// RFC 4231 test case 2
#[test]
fn test_rfc4231_case_2() {
    let expected_sha256 =
        hex_to_bytes("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843");
    let expected_sha512 = hex_to_bytes(
        "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
         9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737",
    );

    let data = b"what do ya want for nothing?";

    assert_eq!(mac(Digest::Sha256, b"Jefe", data), expected_sha256);
    assert_eq!(mac(Digest::Sha512, b"Jefe", data), expected_sha512);
}

#[test]
fn test_incremental_update() {
    let mut hmac = HmacKeyedHash::new(&NoServiceIndicator);
    hmac.init(Digest::Sha256, b"Jefe").expect("Failed to init(..)");
    hmac.update(b"what do ya want ").expect("Failed to update(..)");
    hmac.update(b"").expect("Failed to update(..)");
    hmac.update(b"for nothing?").expect("Failed to update(..)");

    let mut out = [0u8; 32];
    hmac.finalize_into(&mut out).expect("Failed to finalize_into(..)");

    assert_eq!(out.to_vec(), mac(Digest::Sha256, b"Jefe", b"what do ya want for nothing?"));
}

#[test]
fn test_matches_hmac_crate() {
    let key = [0x0cu8; 200];
    let data = b"incremental input";

    let mut reference = <Hmac<Sha384> as Mac>::new_from_slice(&key).expect("Failed to new_from_slice(..)");
    reference.update(data);
    let expected = reference.finalize().into_bytes();

    assert_eq!(mac(Digest::Sha384, &key, data), expected.to_vec());
}

#[test]
fn test_output_len_per_digest() {
    for digest in Digest::ALL {
        assert_eq!(mac(digest, b"key", b"data").len(), digest.output_len(), "{}", digest);
    }
}

#[test]
fn test_update_before_init() {
    let mut hmac = HmacKeyedHash::new(&NoServiceIndicator);
    assert_eq!(hmac.update(b"data"), Err(KeyedHashError::NotInitialized));
}

#[test]
fn test_finalize_before_init() {
    let mut hmac = HmacKeyedHash::new(&NoServiceIndicator);
    let mut out = [0u8; 32];

    assert_eq!(hmac.finalize_into(&mut out), Err(KeyedHashError::NotInitialized));
}

#[test]
fn test_finalize_output_too_short_keeps_state() {
    let mut hmac = HmacKeyedHash::new(&NoServiceIndicator);
    hmac.init(Digest::Sha256, b"key").expect("Failed to init(..)");
    hmac.update(b"data").expect("Failed to update(..)");

    let mut short = [0u8; 31];
    assert_eq!(hmac.finalize_into(&mut short), Err(KeyedHashError::OutputTooShort));
    assert!(short.iter().all(|b| *b == 0));

    let mut out = [0u8; 32];
    assert_eq!(hmac.finalize_into(&mut out), Ok(32));
    assert_eq!(out.to_vec(), mac(Digest::Sha256, b"key", b"data"));
}

#[test]
fn test_finalize_consumes_state() {
    let mut hmac = HmacKeyedHash::new(&NoServiceIndicator);
    hmac.init(Digest::Sha224, b"key").expect("Failed to init(..)");

    let mut out = [0u8; 28];
    hmac.finalize_into(&mut out).expect("Failed to finalize_into(..)");

    assert_eq!(hmac.update(b"more"), Err(KeyedHashError::NotInitialized));
    assert_eq!(hmac.finalize_into(&mut out), Err(KeyedHashError::NotInitialized));
}

#[test]
fn test_init_discards_running_computation() {
    let mut hmac = HmacKeyedHash::new(&NoServiceIndicator);
    hmac.init(Digest::Sha256, b"old key").expect("Failed to init(..)");
    hmac.update(b"discarded").expect("Failed to update(..)");

    hmac.init(Digest::Sha256, b"key").expect("Failed to init(..)");
    hmac.update(b"data").expect("Failed to update(..)");

    let mut out = [0u8; 32];
    hmac.finalize_into(&mut out).expect("Failed to finalize_into(..)");

    assert_eq!(out.to_vec(), mac(Digest::Sha256, b"key", b"data"));
}

#[test]
fn test_debug_does_not_leak_key() {
    let mut hmac = HmacKeyedHash::new(&NoServiceIndicator);
    hmac.init(Digest::Sha256, b"supersecret").expect("Failed to init(..)");

    let debug = format!("{:?}", hmac);

    assert!(!debug.contains("supersecret"));
    assert!(debug.contains("initialized: true"));
}
