// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mocking the keyed hash.
//!
//! Provides a recording mock with configurable failure injection.

mod mock_keyed_hash;

pub use mock_keyed_hash::{KeyedHashCall, MockKeyedHash, MockKeyedHashBehaviour};
