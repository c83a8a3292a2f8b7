// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Largest digest output among supported digests (SHA-512), in bytes
pub const MAX_DIGEST_LEN: usize = 64;

/// Largest HKDF-Expand block count. The block counter is a single byte (RFC 5869 Section 2.3).
pub const MAX_EXPAND_BLOCKS: usize = 255;
