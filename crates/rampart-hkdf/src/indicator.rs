// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Explicit compliance-indicator context and scoped suppression.
//!
//! Instead of process-wide indicator state, every HKDF call receives an
//! indicator handle. Internal keyed-hash computations run inside an
//! [`IndicatorLock`] so their own approvals are not recorded; the HKDF
//! operation then reports once for the whole call.

use core::cell::Cell;
use core::fmt;

use crate::digest::Digest;
use crate::traits::ServiceIndicator;

/// Operation reported to a [`ServiceIndicator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceOperation {
    /// A single HMAC computation
    Hmac(Digest),
    /// A standalone HKDF-Expand
    HkdfExpand(Digest),
    /// A composite HKDF (Extract then Expand), with the lengths of its
    /// public inputs so an indicator can apply parameter-dependent rules
    Hkdf {
        /// Digest underneath HMAC
        digest: Digest,
        /// Salt length in bytes
        salt_len: usize,
        /// Info length in bytes
        info_len: usize,
    },
}

impl ServiceOperation {
    /// Digest the operation ran over.
    pub const fn digest(&self) -> Digest {
        match self {
            ServiceOperation::Hmac(d)
            | ServiceOperation::HkdfExpand(d)
            | ServiceOperation::Hkdf { digest: d, .. } => *d,
        }
    }

    /// Service name, e.g. `"HKDF"`.
    pub const fn name(&self) -> &'static str {
        match self {
            ServiceOperation::Hmac(_) => "HMAC",
            ServiceOperation::HkdfExpand(_) => "HKDF-Expand",
            ServiceOperation::Hkdf { .. } => "HKDF",
        }
    }

    /// Whether the operation with its digest is on the approved list.
    ///
    /// HMAC is approved over every supported digest. HKDF and HKDF-Expand are
    /// approved over SHA-1, SHA-224, SHA-256, SHA-384 and SHA-512 only; the
    /// salt and info lengths do not affect the decision.
    pub const fn is_approved(&self) -> bool {
        match self {
            ServiceOperation::Hmac(_) => true,
            ServiceOperation::HkdfExpand(d) | ServiceOperation::Hkdf { digest: d, .. } => {
                matches!(
                    d,
                    Digest::Sha1
                        | Digest::Sha224
                        | Digest::Sha256
                        | Digest::Sha384
                        | Digest::Sha512
                )
            }
        }
    }
}

impl fmt::Display for ServiceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name(), self.digest())
    }
}

/// Per-thread indicator state.
///
/// Counts recorded approvals. A caller checks whether a call was approved by
/// comparing [`approved_count`](Self::approved_count) before and after it, or
/// with [`observe`](Self::observe).
///
/// Not `Sync`: use one context per thread.
///
/// # Example
///
/// ```rust
/// use rampart_hkdf::{Digest, Hkdf, IndicatorContext};
///
/// let indicator = IndicatorContext::new();
/// let mut okm = [0u8; 42];
///
/// let (result, approved) = indicator.observe(|| {
///     Hkdf::new(Digest::Sha256, &indicator).derive(b"secret", b"salt", b"info", &mut okm)
/// });
///
/// assert!(result.is_ok());
/// assert!(approved);
/// ```
#[derive(Debug, Default)]
pub struct IndicatorContext {
    lock_depth: Cell<u32>,
    approved: Cell<u64>,
    last_reported: Cell<Option<ServiceOperation>>,
}

impl IndicatorContext {
    /// Creates an unlocked context with no recorded approvals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of approvals recorded so far.
    pub fn approved_count(&self) -> u64 {
        self.approved.get()
    }

    /// Current suppression depth.
    pub fn lock_depth(&self) -> u32 {
        self.lock_depth.get()
    }

    /// Last operation verified outside any suppression scope, approved or not.
    pub fn last_reported(&self) -> Option<ServiceOperation> {
        self.last_reported.get()
    }

    /// Runs `f` and reports whether it recorded at least one approval.
    pub fn observe<T>(&self, f: impl FnOnce() -> T) -> (T, bool) {
        let before = self.approved.get();
        let out = f();
        (out, self.approved.get() != before)
    }
}

impl ServiceIndicator for IndicatorContext {
    fn lock_state(&self) {
        self.lock_depth.set(self.lock_depth.get().saturating_add(1));
    }

    fn unlock_state(&self) {
        let depth = self.lock_depth.get();
        debug_assert!(depth > 0, "indicator unlocked more often than locked");
        self.lock_depth.set(depth.saturating_sub(1));
    }

    fn verify_service(&self, operation: ServiceOperation) -> bool {
        let approved = operation.is_approved();

        if self.lock_depth.get() != 0 {
            return approved;
        }

        self.last_reported.set(Some(operation));
        if approved {
            self.approved.set(self.approved.get().wrapping_add(1));
        }

        approved
    }
}

/// Indicator that records nothing.
///
/// `verify_service` still answers with the operation's approval status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoServiceIndicator;

impl ServiceIndicator for NoServiceIndicator {
    fn lock_state(&self) {}

    fn unlock_state(&self) {}

    fn verify_service(&self, operation: ServiceOperation) -> bool {
        operation.is_approved()
    }
}

/// Suppression scope: locks the indicator on creation and unlocks it on drop.
///
/// Binding the guard (`let _lock = ...`) keeps the scope open until the end of
/// the block, including early returns through `?`.
pub struct IndicatorLock<'a, I>
where
    I: ServiceIndicator + ?Sized,
{
    indicator: &'a I,
}

impl<'a, I> IndicatorLock<'a, I>
where
    I: ServiceIndicator + ?Sized,
{
    /// Locks `indicator` until the returned guard is dropped.
    pub fn acquire(indicator: &'a I) -> Self {
        indicator.lock_state();
        Self { indicator }
    }
}

impl<I> fmt::Debug for IndicatorLock<'_, I>
where
    I: ServiceIndicator + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IndicatorLock")
    }
}

impl<I> Drop for IndicatorLock<'_, I>
where
    I: ServiceIndicator + ?Sized,
{
    fn drop(&mut self) {
        self.indicator.unlock_state();
    }
}
