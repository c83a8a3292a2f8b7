// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Digest selector for the keyed hash underneath HKDF.

use core::fmt;

use crate::consts::MAX_EXPAND_BLOCKS;

/// Hash function used by the keyed hash (HMAC) underneath HKDF.
///
/// The selector fixes `HashLen`: the PRK length and the Expand block size.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Digest {
    /// SHA-1 (FIPS 180-4), 20-byte output
    Sha1,
    /// SHA-224 (FIPS 180-4), 28-byte output
    Sha224,
    /// SHA-256 (FIPS 180-4), 32-byte output
    Sha256,
    /// SHA-384 (FIPS 180-4), 48-byte output
    Sha384,
    /// SHA-512 (FIPS 180-4), 64-byte output
    Sha512,
    /// SHA-512/224 (FIPS 180-4), 28-byte output
    Sha512_224,
    /// SHA-512/256 (FIPS 180-4), 32-byte output
    Sha512_256,
}

impl Digest {
    /// Every supported digest, in declaration order.
    pub const ALL: [Digest; 7] = [
        Digest::Sha1,
        Digest::Sha224,
        Digest::Sha256,
        Digest::Sha384,
        Digest::Sha512,
        Digest::Sha512_224,
        Digest::Sha512_256,
    ];

    /// Output size in bytes (`HashLen` in RFC 5869).
    pub const fn output_len(self) -> usize {
        match self {
            Digest::Sha1 => 20,
            Digest::Sha224 | Digest::Sha512_224 => 28,
            Digest::Sha256 | Digest::Sha512_256 => 32,
            Digest::Sha384 => 48,
            Digest::Sha512 => 64,
        }
    }

    /// Internal block size in bytes.
    pub const fn block_len(self) -> usize {
        match self {
            Digest::Sha1 | Digest::Sha224 | Digest::Sha256 => 64,
            Digest::Sha384 | Digest::Sha512 | Digest::Sha512_224 | Digest::Sha512_256 => 128,
        }
    }

    /// Largest OKM length HKDF-Expand accepts for this digest (`255 * HashLen`).
    pub const fn max_expand_len(self) -> usize {
        MAX_EXPAND_BLOCKS * self.output_len()
    }

    /// Canonical algorithm name.
    pub const fn name(self) -> &'static str {
        match self {
            Digest::Sha1 => "SHA-1",
            Digest::Sha224 => "SHA-224",
            Digest::Sha256 => "SHA-256",
            Digest::Sha384 => "SHA-384",
            Digest::Sha512 => "SHA-512",
            Digest::Sha512_224 => "SHA-512/224",
            Digest::Sha512_256 => "SHA-512/256",
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
