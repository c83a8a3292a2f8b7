// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use crate::digest::Digest;
use crate::error::KeyedHashError;
use crate::hmac::HmacKeyedHash;
use crate::indicator::NoServiceIndicator;
use crate::traits::KeyedHash;

/// Configurable behavior for [`MockKeyedHash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockKeyedHashBehaviour {
    /// Normal operation (delegates to real HMAC).
    None,
    /// Fail `init` on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthInit(usize),
    /// Fail `update` on the Nth call (1-indexed).
    FailAtNthUpdate(usize),
    /// Fail `finalize_into` on the Nth call (1-indexed).
    FailAtNthFinalize(usize),
}

/// A call observed by [`MockKeyedHash`], in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyedHashCall {
    /// `init(digest, key)`
    Init {
        /// Digest requested
        digest: Digest,
        /// Key bytes
        key: Vec<u8>,
    },
    /// `update(data)`
    Update(Vec<u8>),
    /// `finalize_into(..)`
    Finalize,
}

/// Mock keyed hash for testing.
///
/// Wraps [`HmacKeyedHash`], records every call and can simulate failures via
/// [`MockKeyedHashBehaviour`]. Failed calls are recorded too.
pub struct MockKeyedHash {
    inner: HmacKeyedHash<'static, NoServiceIndicator>,
    behaviour: MockKeyedHashBehaviour,
    calls: Vec<KeyedHashCall>,
    init_count: usize,
    update_count: usize,
    finalize_count: usize,
}

impl MockKeyedHash {
    /// Creates a new mock with the specified behavior.
    pub fn new(behaviour: MockKeyedHashBehaviour) -> Self {
        Self {
            inner: HmacKeyedHash::new(&NoServiceIndicator),
            behaviour,
            calls: Vec::new(),
            init_count: 0,
            update_count: 0,
            finalize_count: 0,
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockKeyedHashBehaviour) {
        self.behaviour = behaviour;
    }

    /// Every call observed so far.
    pub fn calls(&self) -> &[KeyedHashCall] {
        &self.calls
    }

    /// Number of `init` calls.
    pub fn init_count(&self) -> usize {
        self.init_count
    }

    /// Number of `update` calls.
    pub fn update_count(&self) -> usize {
        self.update_count
    }

    /// Number of `finalize_into` calls.
    pub fn finalize_count(&self) -> usize {
        self.finalize_count
    }

    /// Clears the call log and counters.
    pub fn reset(&mut self) {
        self.calls.clear();
        self.init_count = 0;
        self.update_count = 0;
        self.finalize_count = 0;
    }
}

impl KeyedHash for MockKeyedHash {
    fn init(&mut self, digest: Digest, key: &[u8]) -> Result<(), KeyedHashError> {
        self.init_count += 1;
        self.calls.push(KeyedHashCall::Init {
            digest,
            key: key.to_vec(),
        });

        match self.behaviour {
            MockKeyedHashBehaviour::FailAtNthInit(n) if n == self.init_count => {
                Err(KeyedHashError::InvalidKey)
            }
            _ => self.inner.init(digest, key),
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<(), KeyedHashError> {
        self.update_count += 1;
        self.calls.push(KeyedHashCall::Update(data.to_vec()));

        match self.behaviour {
            MockKeyedHashBehaviour::FailAtNthUpdate(n) if n == self.update_count => {
                Err(KeyedHashError::Internal)
            }
            _ => self.inner.update(data),
        }
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, KeyedHashError> {
        self.finalize_count += 1;
        self.calls.push(KeyedHashCall::Finalize);

        match self.behaviour {
            MockKeyedHashBehaviour::FailAtNthFinalize(n) if n == self.finalize_count => {
                Err(KeyedHashError::Internal)
            }
            _ => self.inner.finalize_into(out),
        }
    }
}
